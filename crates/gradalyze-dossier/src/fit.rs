//! Page-fit math: place a rasterized results view inside A4 margins.

use gradalyze_core::defaults::{PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM};

/// The fitted, centered placement of a bitmap on the page, in millimeters
/// from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedRect {
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Fit a bitmap inside the printable area, preserving aspect ratio.
///
/// Prefers filling the printable width; if the resulting height would
/// overflow the printable height, scales down to fit height instead. The
/// image is never cropped and the result is centered within the margins.
pub fn fit_to_page(width_px: u32, height_px: u32) -> FittedRect {
    let printable_w = PAGE_WIDTH_MM - 2.0 * PAGE_MARGIN_MM;
    let printable_h = PAGE_HEIGHT_MM - 2.0 * PAGE_MARGIN_MM;
    let aspect = height_px as f64 / width_px.max(1) as f64;

    let mut width_mm = printable_w;
    let mut height_mm = printable_w * aspect;
    if height_mm > printable_h {
        height_mm = printable_h;
        width_mm = printable_h / aspect;
    }

    FittedRect {
        x_mm: (PAGE_WIDTH_MM - width_mm) / 2.0,
        y_mm: (PAGE_HEIGHT_MM - height_mm) / 2.0,
        width_mm,
        height_mm,
    }
}
