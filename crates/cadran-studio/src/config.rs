use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use cadran_engine::paint::Color;
use clap::Parser;

/// Highest frame rate the studio accepts.
pub const MAX_FPS: f32 = 1000.0;

/// Command line of the studio binary.
///
/// Trailing `key=value` pairs are clock panel overrides, e.g.
/// `timezone=Asia/Tokyo fontSize=48`.
#[derive(Debug, Parser)]
#[command(name = "cadran-studio")]
#[command(version, about = "Renders the cadran clock to PNG frames", long_about = None)]
pub struct StudioArgs {
    /// Surface size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size, default_value = "600x600")]
    size: (u32, u32),

    /// Frames to render; 0 runs until stopped
    #[arg(long, default_value_t = 1)]
    frames: u64,

    /// Frame rate, in (0, 1000]
    #[arg(long, value_parser = parse_fps, default_value = "1")]
    fps: f32,

    /// Output PNG; multi-frame runs number the files
    #[arg(long, default_value = "clock.png")]
    out: PathBuf,

    /// Color painted by each clear
    #[arg(long, value_parser = parse_color, default_value = "black")]
    background: Color,

    /// Clock overrides as key=value
    #[arg(value_parser = parse_override)]
    overrides: Vec<(String, String)>,
}

/// Studio run configuration.
///
/// Built with the setters below or from [`StudioArgs`]. Keys the studio does
/// not own are kept as clock overrides and validated by the scene when
/// applied.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub width: u32,
    pub height: u32,
    /// Frames to render; 0 runs until the process is stopped.
    pub frames: u64,
    pub fps: f32,
    pub out: PathBuf,
    pub background: Color,
    pub overrides: Vec<(String, String)>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            frames: 1,
            fps: 1.0,
            out: PathBuf::from("clock.png"),
            background: Color::black(),
            overrides: Vec::new(),
        }
    }
}

impl StudioConfig {
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn frames(mut self, n: u64) -> Self {
        self.frames = n;
        self
    }

    pub fn fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    pub fn out(mut self, path: impl Into<PathBuf>) -> Self {
        self.out = path.into();
        self
    }

    pub fn background(mut self, c: Color) -> Self {
        self.background = c;
        self
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Output path for frame `index`.
    ///
    /// A single-frame run writes `out` as given; longer runs number the files
    /// (`clock.png` becomes `clock-0000.png`, `clock-0001.png`, ...).
    pub fn frame_path(&self, index: u64) -> PathBuf {
        if self.frames == 1 {
            return self.out.clone();
        }
        let stem = self.out.file_stem().and_then(|s| s.to_str()).unwrap_or("clock");
        let ext = self.out.extension().and_then(|s| s.to_str()).unwrap_or("png");
        self.out.with_file_name(format!("{stem}-{index:04}.{ext}"))
    }
}

impl From<StudioArgs> for StudioConfig {
    fn from(args: StudioArgs) -> Self {
        let (width, height) = args.size;
        let config = StudioConfig::default()
            .size(width, height)
            .frames(args.frames)
            .fps(args.fps)
            .out(args.out)
            .background(args.background);
        args.overrides
            .into_iter()
            .fold(config, |config, (key, value)| config.set(key, value))
    }
}

fn parse_size(value: &str) -> Result<(u32, u32)> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("size must look like 600x600, got {value:?}"))?;
    let w: u32 = w.trim().parse().with_context(|| format!("size width {w:?}"))?;
    let h: u32 = h.trim().parse().with_context(|| format!("size height {h:?}"))?;
    if w == 0 || h == 0 {
        bail!("size must be positive, got {value:?}");
    }
    Ok((w, h))
}

fn parse_fps(value: &str) -> Result<f32> {
    let fps: f32 = value.trim().parse().with_context(|| format!("fps {value:?}"))?;
    if !(fps > 0.0 && fps <= MAX_FPS) {
        bail!("fps must be in (0, {MAX_FPS}], got {value:?}");
    }
    Ok(fps)
}

fn parse_color(value: &str) -> Result<Color> {
    Ok(Color::parse(value)?)
}

fn parse_override(value: &str) -> Result<(String, String)> {
    let (key, value) = value
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got {value:?}"))?;
    if key.is_empty() {
        bail!("empty key in {key}={value}");
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<StudioConfig, clap::Error> {
        StudioArgs::try_parse_from(std::iter::once("cadran-studio").chain(args.iter().copied()))
            .map(StudioConfig::from)
    }

    #[test]
    fn defaults() {
        let c = parse(&[]).unwrap();
        assert_eq!((c.width, c.height, c.frames, c.fps), (600, 600, 1, 1.0));
        assert_eq!(c.background, Color::black());
        assert_eq!(c.frame_path(0), PathBuf::from("clock.png"));
    }

    #[test]
    fn studio_flags_and_overrides() {
        let c = parse(&[
            "--size",
            "800x450",
            "--frames",
            "3",
            "--out",
            "frames/tokyo.png",
            "timezone=Asia/Tokyo",
            "fontSize=48",
        ])
        .unwrap();
        assert_eq!((c.width, c.height), (800, 450));
        assert_eq!(c.frames, 3);
        assert_eq!(
            c.overrides,
            vec![
                ("timezone".to_string(), "Asia/Tokyo".to_string()),
                ("fontSize".to_string(), "48".to_string()),
            ]
        );
        assert_eq!(c.frame_path(2), PathBuf::from("frames/tokyo-0002.png"));
    }

    #[test]
    fn rejects_malformed_args() {
        assert!(parse(&["timezone"]).is_err());
        assert!(parse(&["--size", "600"]).is_err());
        assert!(parse(&["--size", "0x600"]).is_err());
        assert!(parse(&["--frames", "-1"]).is_err());
        assert!(parse(&["--background", "plaid"]).is_err());
        assert!(parse(&["=Asia/Tokyo"]).is_err());
    }

    // ── frame rate ────────────────────────────────────────────────────────

    #[test]
    fn fps_outside_range_is_rejected() {
        for fps in ["0", "-2", "1e-20", "1001", "NaN", "inf"] {
            assert!(parse(&["--fps", fps]).is_err(), "fps {fps} accepted");
        }
        assert_eq!(parse(&["--fps", "1000"]).unwrap().fps, MAX_FPS);
        assert_eq!(parse(&["--fps", "0.5"]).unwrap().fps, 0.5);
    }

    #[test]
    fn builder_matches_args() {
        let built = StudioConfig::default()
            .size(320, 240)
            .fps(2.0)
            .set("color", "#00ff00");
        let parsed = parse(&["--size", "320x240", "--fps", "2", "color=#00ff00"]).unwrap();
        assert_eq!(
            (built.width, built.height, built.fps),
            (parsed.width, parsed.height, parsed.fps)
        );
        assert_eq!(built.overrides, parsed.overrides);
    }
}
