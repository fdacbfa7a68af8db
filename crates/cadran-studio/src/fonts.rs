use cadran_clock::FontName;
use cadran_engine::text::FontSystem;

const SANS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

const SERIF: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/noto/NotoSerif-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSerif-Regular.ttf",
];

fn read_first(paths: &[&str]) -> Option<Vec<u8>> {
    paths.iter().find_map(|p| std::fs::read(p).ok())
}

/// Loads stand-ins for the panel's font families from common system paths.
///
/// Arial and Verdana map to a sans face, Times New Roman to a serif face
/// (or the sans face when no serif is installed). Missing fonts are not
/// fatal: the label is skipped and a warning logged at draw time.
pub fn load_system_fonts() -> FontSystem {
    let mut fonts = FontSystem::new();

    match read_first(SANS).map(|bytes| fonts.load_font(FontName::Arial.as_str(), &bytes)) {
        Some(Ok(id)) => fonts.alias(FontName::Verdana.as_str(), id),
        Some(Err(e)) => log::warn!("{e}"),
        None => log::warn!("no sans-serif system font found"),
    }

    if let Some(bytes) = read_first(SERIF) {
        if let Err(e) = fonts.load_font(FontName::TimesNewRoman.as_str(), &bytes) {
            log::warn!("{e}");
        }
    }

    fonts
}
