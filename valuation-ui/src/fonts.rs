//! Registers a system font with Arabic coverage so the form's labels and
//! option sets render with real glyphs.

use std::{fs, path::Path};

use egui::{Context, FontData, FontDefinitions, FontFamily};
use tracing::{debug, warn};

/// Candidate fonts with Arabic glyph coverage, tried in order.
const CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/truetype/kacst/KacstOne.ttf",
    // macOS
    "/System/Library/Fonts/Supplemental/GeezaPro.ttc",
    // Windows
    "C:\\Windows\\Fonts\\tahoma.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Probes for a system font and appends it to egui's fallback chain. The
/// default fonts stay first, so Latin text is unaffected. Missing fonts are
/// not an error; the app still runs, just with placeholder glyphs.
pub fn setup_fonts(ctx: &Context) {
    for candidate in CANDIDATES {
        let path = Path::new(candidate);
        if !path.exists() {
            continue;
        }
        match fs::read(path) {
            Ok(bytes) => {
                apply_font_bytes(ctx, bytes, "arabic_fallback");
                debug!(font = %candidate, "registered Arabic fallback font");
                return;
            }
            Err(e) => warn!(font = %candidate, error = %e, "failed to read font"),
        }
    }
    warn!("no Arabic-capable system font found; labels may render as boxes");
}

fn apply_font_bytes(ctx: &Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), FontData::from_owned(bytes).into());
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(name.to_string());
    }
    ctx.set_fonts(fonts);
}
