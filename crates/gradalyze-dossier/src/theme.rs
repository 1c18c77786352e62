//! Print theme for the dossier: white background, dark-on-light text, fixed
//! point sizes per heading level, no gradients or shadows.

use plotters::style::RGBColor;

pub const BACKGROUND: RGBColor = RGBColor(255, 255, 255);
pub const TEXT: RGBColor = RGBColor(17, 24, 39);
pub const MUTED: RGBColor = RGBColor(107, 114, 128);
pub const ACCENT: RGBColor = RGBColor(37, 99, 235);
pub const BAR_TRACK: RGBColor = RGBColor(229, 231, 235);

/// Fixed point sizes per heading level.
pub const TITLE_PT: u32 = 28;
pub const HEADING_PT: u32 = 20;
pub const BODY_PT: u32 = 14;
pub const CAPTION_PT: u32 = 11;

/// Point size to pixel size at 96 dpi, scaled by the capture oversampling
/// factor.
pub fn px(pt: u32, scale: u32) -> u32 {
    pt * 4 / 3 * scale
}
