//! Headless demo driver
//!
//! Builds a field, revolves it on a synthetic 60 Hz clock, scripts a drag
//! on one body, and logs what happens. Stands in for a real host, which
//! would do the same calls from its render loop and pointer handlers.

use glam::Vec2;
use solar_orbits::{FieldConfig, FieldEvents, OrbitField};

const FRAME_SECS: f32 = 1.0 / 60.0;

struct LoggingHost;

impl FieldEvents for LoggingHost {
    fn on_manipulation_begin(&mut self, id: u32) {
        log::info!("grabbed body {id}");
    }

    fn on_manipulation_move(&mut self, id: u32) {
        log::trace!("dragging body {id}");
    }

    fn on_manipulation_end(&mut self, id: u32) {
        log::info!("released body {id}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = FieldConfig {
        center: Vec2::new(200.0, 200.0),
        seed: 42,
        ..FieldConfig::default()
    };
    let center = config.center;
    let mut field = OrbitField::new(config, LoggingHost)?;

    // One second of frames: bodies place themselves and start revolving.
    for _ in 0..60 {
        field.tick_all(FRAME_SECS);
    }
    for body in field.bodies() {
        log::info!(
            "body {} at {} (phase {:.3}, hue {:.2})",
            body.id,
            body.position(),
            body.phase(),
            body.hue
        );
    }

    // Drag body 3 a quarter turn. The pointer stays close to the center the
    // whole time; only its bearing matters, so the body rides its own ring.
    field.pointer_down(3)?;
    for step in 0..=30 {
        let angle = step as f32 / 30.0 * std::f32::consts::FRAC_PI_2;
        let pointer = center + 10.0 * Vec2::new(angle.cos(), angle.sin());
        field.pointer_move(3, pointer)?;
        field.tick_all(FRAME_SECS); // ticks are ignored for the held body
    }
    log::info!(
        "body 3 held at {} (phase {:.3})",
        field.position(3)?,
        field.body(3)?.phase()
    );
    field.pointer_up(3)?;

    // It resumes from exactly where the drag left it.
    for _ in 0..60 {
        field.tick_all(FRAME_SECS);
    }
    log::info!("body 3 resumed, now at phase {:.3}", field.body(3)?.phase());

    field.destroy();
    Ok(())
}
