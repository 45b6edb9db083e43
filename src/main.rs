//! Emoji Hiragana entry point
//!
//! Headless demo driver: stands in for the platform's per-frame callback and
//! tap gestures, running a short scripted session against the simulation.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use emoji_hiragana::consts::{MAX_SUBSTEPS, SIM_DT};
use emoji_hiragana::speech::LoggingSpeech;
use emoji_hiragana::{App, Settings};

/// Demo screen bounds (portrait phone)
const SCREEN: Vec2 = Vec2::new(400.0, 800.0);
/// How long the scripted session runs, in seconds
const SESSION_SECONDS: f32 = 10.0;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Emoji Hiragana starting, seed {seed}");

    let settings = Settings::load();
    let speech = LoggingSpeech::new(settings.speech.clone());
    let mut app = App::new(seed, &settings, speech);

    log::info!(
        "home screen emoji: {} ({})",
        app.home_item().glyph,
        app.home_item().label
    );

    // First layout event populates the floating emoji
    app.layout(SCREEN);

    let total_frames = (SESSION_SECONDS / SIM_DT) as u32;
    let mut accumulator = 0.0;
    for frame in 0..total_frames {
        // Accumulator kept for parity with a real host whose frame delta
        // varies; the demo feeds a fixed delta
        accumulator += SIM_DT;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            app.frame(SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        // Scripted child: tap the first emoji after two seconds, dismiss the
        // detail view two seconds later, then ask for a fresh batch
        match frame {
            120 => {
                let first = app.sim().entities().first().copied();
                if let Some(e) = first {
                    if let Some(item) = app.tap(e.pos) {
                        log::info!("tapped {} ({})", item.glyph, item.label);
                    }
                }
            }
            240 => app.dismiss(),
            360 => {
                app.refresh();
                log::info!("refreshed to a new batch");
            }
            _ => {}
        }
    }

    for e in app.sim().entities() {
        log::info!(
            "{} {} at ({:.1}, {:.1}) drifting ({:.1}, {:.1})",
            e.item.glyph,
            e.item.label,
            e.pos.x,
            e.pos.y,
            e.vel.x,
            e.vel.y
        );
    }

    settings.save();
}
