//! Folio Motion entry point
//!
//! On the web this installs the page behaviors. Natively it runs the float
//! simulation headless over a sample layout and prints the final badges.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Folio Motion starting...");
    if let Err(e) = folio_motion::platform::start().await {
        log::error!("Page animation disabled: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use folio_motion::Settings;
    use folio_motion::sim::{FieldEvent, FixedLayout, FloatField, step};
    use glam::Vec2;

    /// Frames simulated when no count is given (10 s at 60 Hz)
    const DEFAULT_FRAMES: u64 = 600;

    env_logger::init();

    let frames = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("usage: folio-motion [FRAMES]");
                std::process::exit(2);
            }
        },
        None => DEFAULT_FRAMES,
    };

    // A typical skills row: a dozen pills of varying width
    let widths = [64.0, 88.0, 72.0, 110.0, 56.0, 96.0, 80.0, 70.0, 104.0, 60.0, 92.0, 76.0];
    let layout = FixedLayout::new(
        Vec2::new(720.0, 360.0),
        widths.iter().map(|&w| Vec2::new(w, 32.0)).collect(),
    );

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or(42);
    let mut field = FloatField::spawn(&layout, &settings, seed);

    let (mut bounces, mut collisions) = (0usize, 0usize);
    for _ in 0..frames {
        step(&mut field, &layout);
        for event in &field.events {
            match event {
                FieldEvent::WallBounce { .. } => bounces += 1,
                FieldEvent::Collision { .. } => collisions += 1,
            }
        }
    }

    log::info!(
        "{} frames: {} wall bounces, {} collisions",
        field.frame,
        bounces,
        collisions
    );

    match serde_json::to_string_pretty(&field.badges) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize badges: {}", e),
    }
}
