//! Single-page A4 PDF composition around a fitted bitmap.

use std::path::Path;

use gradalyze_core::defaults::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use gradalyze_core::{Error, Result};
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::fit::FittedRect;

const MM_TO_PT: f64 = 72.0 / 25.4;

/// Write a one-page A4 PDF with `image` placed at the fitted rectangle.
pub fn compose_pdf(image: &RgbImage, fit: &FittedRect, path: &Path) -> Result<()> {
    let mut jpeg = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 90);
    encoder
        .encode(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ColorType::Rgb8,
        )
        .map_err(|e| Error::Dossier(e.to_string()))?;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width() as i64,
            "Height" => image.height() as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg,
    ));

    // PDF user space is bottom-left origin; the fit rectangle is top-left.
    let w_pt = fit.width_mm * MM_TO_PT;
    let h_pt = fit.height_mm * MM_TO_PT;
    let x_pt = fit.x_mm * MM_TO_PT;
    let y_pt = (PAGE_HEIGHT_MM - fit.y_mm - fit.height_mm) * MM_TO_PT;

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    (w_pt as f32).into(),
                    0.into(),
                    0.into(),
                    (h_pt as f32).into(),
                    (x_pt as f32).into(),
                    (y_pt as f32).into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().map_err(|e| Error::Dossier(e.to_string()))?,
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            ((PAGE_WIDTH_MM * MM_TO_PT) as f32).into(),
            ((PAGE_HEIGHT_MM * MM_TO_PT) as f32).into(),
        ],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        },
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).map_err(|e| Error::Dossier(e.to_string()))?;
    Ok(())
}
