mod config;
mod fonts;

use anyhow::{Context, Result};
use cadran_clock::ClockScene;
use cadran_engine::logging::{init_logging, LoggingConfig};
use cadran_engine::raster::PixmapSurface;
use cadran_engine::time::FrameClock;
use clap::Parser;

use crate::config::{StudioArgs, StudioConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig { timestamp_millis: true, ..LoggingConfig::default() });

    let config = StudioConfig::from(StudioArgs::parse());
    run(&config)
}

fn run(config: &StudioConfig) -> Result<()> {
    log::info!(
        "cadran studio: {}x{}, {} frame(s) at {} fps -> {}",
        config.width,
        config.height,
        config.frames,
        config.fps,
        config.out.display(),
    );

    let fonts = fonts::load_system_fonts();
    let surface = PixmapSurface::new(config.width, config.height, fonts, config.background)
        .context("creating surface")?;
    let mut scene = ClockScene::new(surface);

    for (key, value) in &config.overrides {
        scene.set(key, value).with_context(|| format!("{key}={value}"))?;
    }

    if let Some(parent) = config.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut clock = FrameClock::with_rate(config.fps);
    loop {
        let ft = clock.wait();
        scene.update();

        let path = config.frame_path(ft.frame_index);
        match scene.surface().write_png(&path) {
            Ok(()) => {
                if let Some(t) = scene.last_drawn() {
                    log::info!(
                        "frame {} {} {} -> {}",
                        ft.frame_index,
                        scene.params().timezone,
                        t,
                        path.display()
                    );
                }
            }
            Err(e) => log::warn!("frame {} not written: {e}", ft.frame_index),
        }

        if config.frames != 0 && ft.frame_index + 1 >= config.frames {
            break;
        }
    }

    Ok(())
}
