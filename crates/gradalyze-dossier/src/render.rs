//! Renders the analysis results view into a print-themed bitmap at the
//! fixed capture width (A4 @ 96 dpi) with 2x oversampling for crispness.

use gradalyze_core::defaults::{CAPTURE_SCALE, CAPTURE_WIDTH_PX};
use gradalyze_core::{AnalysisResults, ArchetypePercents, Error, Result};
use image::RgbImage;
use plotters::prelude::*;

use crate::theme;

/// Maximum forecast entries shown on the dossier page.
const FORECAST_ROWS: usize = 10;

fn dossier_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Dossier(e.to_string())
}

fn axes(percents: &ArchetypePercents) -> [(&'static str, f64); 6] {
    [
        ("Realistic", percents.realistic),
        ("Investigative", percents.investigative),
        ("Artistic", percents.artistic),
        ("Social", percents.social),
        ("Enterprising", percents.enterprising),
        ("Conventional", percents.conventional),
    ]
}

/// Render the results view. Returns an RGB bitmap sized to the capture
/// width with content-driven height.
pub fn render_results(results: &AnalysisResults) -> Result<RgbImage> {
    let s = CAPTURE_SCALE;
    let u = |v: u32| v * s;

    let forecast: Vec<String> = results
        .career_forecast
        .as_ref()
        .map(|f| f.ranked_labels())
        .unwrap_or_default();
    let forecast_rows = forecast.len().clamp(1, FORECAST_ROWS) as u32;

    let width = u(CAPTURE_WIDTH_PX);
    let height = u(40 + 44 + 28 + 24 + 34 + 30 + 6 * 30 + 24 + 34) + forecast_rows * u(26) + u(40);

    let mut buffer = vec![255u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&theme::BACKGROUND).map_err(dossier_err)?;

        let title_style = TextStyle::from(("sans-serif", theme::px(theme::TITLE_PT, s)).into_font())
            .color(&theme::TEXT);
        let heading_style =
            TextStyle::from(("sans-serif", theme::px(theme::HEADING_PT, s)).into_font())
                .color(&theme::TEXT);
        let body_style = TextStyle::from(("sans-serif", theme::px(theme::BODY_PT, s)).into_font())
            .color(&theme::TEXT);
        let caption_style =
            TextStyle::from(("sans-serif", theme::px(theme::CAPTION_PT, s)).into_font())
                .color(&theme::MUTED);

        let margin = u(40) as i32;
        let mut y = u(40) as i32;

        root.draw_text("Academic Dossier", &title_style, (margin, y))
            .map_err(dossier_err)?;
        y += u(44) as i32;
        root.draw_text(
            "Career forecast and archetype profile",
            &caption_style,
            (margin, y),
        )
        .map_err(dossier_err)?;
        y += u(28 + 24) as i32;

        root.draw_text("Archetype Profile", &heading_style, (margin, y))
            .map_err(dossier_err)?;
        y += u(34) as i32;

        let primary = results.primary_archetype.as_deref().unwrap_or("—");
        root.draw_text(&format!("Primary archetype: {primary}"), &body_style, (margin, y))
            .map_err(dossier_err)?;
        y += u(30) as i32;

        let percents = results.archetype_percents.clone().unwrap_or_default();
        let label_w = u(160) as i32;
        let value_w = u(64) as i32;
        let bar_x = margin + label_w;
        let bar_w = width as i32 - margin - value_w - bar_x;
        let bar_h = u(16) as i32;

        for (name, value) in axes(&percents) {
            root.draw_text(name, &body_style, (margin, y)).map_err(dossier_err)?;
            root.draw(&Rectangle::new(
                [(bar_x, y), (bar_x + bar_w, y + bar_h)],
                theme::BAR_TRACK.filled(),
            ))
            .map_err(dossier_err)?;
            let filled = (bar_w as f64 * (value / 100.0).clamp(0.0, 1.0)) as i32;
            root.draw(&Rectangle::new(
                [(bar_x, y), (bar_x + filled, y + bar_h)],
                theme::ACCENT.filled(),
            ))
            .map_err(dossier_err)?;
            root.draw_text(
                &format!("{value:.0}%"),
                &body_style,
                (bar_x + bar_w + u(12) as i32, y),
            )
            .map_err(dossier_err)?;
            y += u(30) as i32;
        }

        y += u(24) as i32;
        root.draw_text("Career Forecast", &heading_style, (margin, y))
            .map_err(dossier_err)?;
        y += u(34) as i32;

        if forecast.is_empty() {
            root.draw_text("No forecast results yet.", &caption_style, (margin, y))
                .map_err(dossier_err)?;
        } else {
            for (rank, label) in forecast.iter().take(FORECAST_ROWS).enumerate() {
                root.draw_text(
                    &format!("{}. {label}", rank + 1),
                    &body_style,
                    (margin, y),
                )
                .map_err(dossier_err)?;
                y += u(26) as i32;
            }
        }

        root.present().map_err(dossier_err)?;
    }

    RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| Error::Internal("rendered buffer size mismatch".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradalyze_core::ForecastResult;

    #[test]
    fn render_width_matches_capture_geometry() {
        let image = render_results(&AnalysisResults::default()).unwrap();
        assert_eq!(image.width(), CAPTURE_WIDTH_PX * CAPTURE_SCALE);
        assert!(image.height() > 0);
    }

    #[test]
    fn render_grows_with_forecast_rows() {
        let short = render_results(&AnalysisResults::default()).unwrap();

        let long = render_results(&AnalysisResults {
            career_forecast: Some(ForecastResult::RankedList(
                (0..10).map(|i| format!("Job {i}")).collect(),
            )),
            primary_archetype: Some("Investigative".to_string()),
            archetype_percents: Some(ArchetypePercents {
                investigative: 80.0,
                ..Default::default()
            }),
        })
        .unwrap();

        assert!(long.height() > short.height());
    }
}
