//! Demo entry point for `desino`: opens a window and runs the placeholder game
//! until the window is closed.
//!

use desino::{game::NoopGame, Engine};
use std::process;

fn main() {
    // `RUST_LOG` selects verbosity; engine diagnostics are visible by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut game = NoopGame;
    let mut engine = Engine::new();
    if engine.init(800, 600, "Test", &mut game).is_err() {
        process::exit(1);
    }
    engine.start();
}
