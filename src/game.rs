//! `game` module defines the lifecycle contract between `desino` and the embedding application.
//!
//! The embedding application implements [`Game`] and hands a mutable reference to
//! [`Engine::init`](crate::Engine::init). The engine then owns the pacing:
//! `init` runs once before the first frame, `update` runs once per frame until the
//! game asks to stop, `destroy` runs once after the frame loop has exited.
//!

use crate::render::Canvas;

/// [`Game`] trait is the capability set an embedding application plugs into the engine.
///
/// All three hooks have placeholder defaults, so an implementor only overrides
/// what it needs. Returning `false` from `init` aborts engine initialization;
/// returning `false` from `update` stops the frame loop.
///
/// # Example
/// ```rust
/// # use desino::{game::Game, render::Canvas};
/// struct Countdown(u32);
/// impl Game for Countdown {
///     fn update(&mut self, _canvas: &mut dyn Canvas) -> bool {
///         self.0 = self.0.saturating_sub(1);
///         self.0 > 0
///     }
/// }
/// ```
///
pub trait Game {
    /// Prepares the game before the first frame.
    ///
    /// Returning `true` reports success; `false` makes engine initialization fail.
    ///
    fn init(&mut self) -> bool {
        true
    }
    /// Advances the game by one frame, drawing onto the given canvas.
    ///
    /// Returning `true` keeps the frame loop running; `false` requests a stop.
    /// The engine clears the canvas before this hook and presents after it,
    /// so the hook itself only draws.
    ///
    fn update(&mut self, canvas: &mut dyn Canvas) -> bool {
        let _ = canvas;
        true
    }
    /// Tears the game down after the frame loop has exited.
    ///
    /// The engine calls this exactly once, after the final `update`.
    ///
    fn destroy(&mut self) {}
}

/// [`NoopGame`] struct is the placeholder game that takes every [`Game`] default:
/// it initializes successfully, keeps running forever and does nothing on teardown.
///
/// Useful as a stand-in while wiring the engine up and as a test double.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopGame;
impl Game for NoopGame {}

#[cfg(test)]
mod tests {
    use super::{Game, NoopGame};
    use crate::render::{Canvas, Texture};

    /// Canvas stub that accepts every operation and records nothing.
    ///
    struct NullCanvas;
    impl Canvas for NullCanvas {
        fn clear(&mut self) {}
        fn present(&mut self) {}
        fn blit_texture(&mut self, _: &Texture<'_>, _: i32, _: i32, _: Option<(u32, u32)>) {}
    }

    #[test]
    fn noop_game_defaults() {
        let mut game = NoopGame;

        assert!(game.init());
        assert!(game.update(&mut NullCanvas));
        game.destroy();

        // defaults are stateless, a second pass reports the same
        assert!(game.init());
        assert!(game.update(&mut NullCanvas));
    }
}
