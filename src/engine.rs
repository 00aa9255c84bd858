//! `engine` hidden submodule implements the [`Engine`] struct that owns the display
//! resources and drives a [`Game`] through its init/update/destroy lifecycle.
//!

use crate::{
    game::Game,
    render::{self, Canvas},
};
use sdl2::{
    event::Event,
    image::{init as image_init, InitFlag as ImageInitFlag, Sdl2ImageContext},
    init as sdl_init,
    render::WindowCanvas as RenderWindowCanvas,
    EventPump, Sdl,
};
use std::{
    fmt,
    io::{Error, ErrorKind},
};

/// [`EngineState`] enum lists the stations of the engine lifecycle.
///
/// The engine only moves forward:
/// `Uninitialized` -> `Initialized` (successful [`Engine::init`]) ->
/// `Running` (inside [`Engine::start`]) -> `Stopped` (frame loop exited).
/// A failed `init` keeps the engine `Uninitialized`.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// No display resources are acquired; `init` has not run or has failed.
    ///
    Uninitialized,
    /// Display resources are acquired and the game reported a successful `init`.
    ///
    Initialized,
    /// The frame loop is executing.
    ///
    Running,
    /// The frame loop has exited and the game has been destroyed.
    ///
    Stopped,
}

/// [`DisplayContext`] struct keeps the acquired SDL subsystems and display
/// resources of an initialized engine alive.
///
/// It is built as the last step of a fully successful [`Engine::init`]; on any
/// earlier failure the partially acquired resources are still locals and unwind
/// with the error return.
///
struct DisplayContext {
    /// Underlying `sdl2` context handler.
    ///
    _sdl: Sdl,
    /// Underlying image subsystem context.
    ///
    _image: Sdl2ImageContext,
    /// Event queue of the window, polled once per frame.
    ///
    events: EventPump,
    /// Canvas bound to the engine window (hardware accelerated, vsynced).
    ///
    canvas: RenderWindowCanvas,
}

/// Logs a failed subsystem acquisition and wraps the collaborator's diagnostic.
///
fn subsystem_error(what: &str, message: impl fmt::Display) -> Error {
    log::error!("{what} failed: {message}");
    Error::new(ErrorKind::Other, message.to_string())
}

/// Drives the game until it (or the platform) asks to stop, then destroys it.
///
/// Each iteration polls for a platform stop request, clears the canvas, calls the
/// game's `update` hook exactly once and presents the frame. The loop exits after
/// the first iteration in which `update` returns `false` or `external_quit`
/// reported a stop; `destroy` runs exactly once, after the final iteration.
///
fn run_to_completion(
    game: &mut dyn Game,
    canvas: &mut dyn Canvas,
    mut external_quit: impl FnMut() -> bool,
) {
    let mut quit = false;
    while !quit {
        quit = external_quit();
        canvas.clear();
        if !game.update(canvas) {
            quit = true;
        }
        canvas.present();
    }
    game.destroy();
}

/// [`Engine`] struct owns the window/renderer pair and drives a [`Game`] through
/// its lifecycle in a blocking loop.
///
/// The engine is an ordinary value constructed with [`Engine::new`] and owned by
/// the embedding application; there is no hidden global instance. The `'game`
/// lifetime spells out the ownership contract: the engine borrows the game, the
/// caller keeps it alive for as long as the engine exists.
///
/// All of `desino` is single threaded and blocking; the engine must stay on the
/// thread that created it (the underlying SDL handles are not sendable).
///
/// # Example
/// ```rust, no_run
/// # use desino::{Engine, EngineState, game::NoopGame};
/// let mut game = NoopGame;
/// let mut engine = Engine::new();
/// engine
///     .init(800, 600, "Test", &mut game)
///     .expect("Display subsystem should be available");
/// assert_eq!(engine.state(), EngineState::Initialized);
/// engine.start();
/// assert_eq!(engine.state(), EngineState::Stopped);
/// ```
///
pub struct Engine<'game> {
    /// Current lifecycle state.
    ///
    state: EngineState,
    /// Display resources, present from a successful `init` onwards.
    ///
    display: Option<DisplayContext>,
    /// The active game, bound by `init`.
    ///
    game: Option<&'game mut dyn Game>,
}
impl<'game> Engine<'game> {
    /// Constructs an engine in the `Uninitialized` state.
    ///
    /// No SDL subsystem is touched until [`Engine::init`].
    ///
    pub fn new() -> Engine<'game> {
        Engine {
            state: EngineState::Uninitialized,
            display: None,
            game: None,
        }
    }

    /// Returns the current lifecycle state.
    ///
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Initializes the display subsystems, creates a `(width, height)` window titled
    /// `title` with a hardware accelerated vsynced renderer, binds `game` as the
    /// active game and runs its `init` hook.
    ///
    /// Acquisition is ordered and transactional: every step logs its diagnostic on
    /// failure and returns the error, releasing everything acquired before it, so a
    /// failed `init` leaves no window or renderer behind and the engine stays
    /// `Uninitialized`. The game's `init` hook returning `false` is a failure like
    /// any other.
    ///
    pub fn init(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        game: &'game mut dyn Game,
    ) -> Result<(), Error> {
        // the game is bound before anything that can fail
        self.game = Some(game);

        let sdl = sdl_init().map_err(|message| subsystem_error("SDL init", message))?;
        let video = sdl
            .video()
            .map_err(|message| subsystem_error("video subsystem init", message))?;
        let image = image_init(ImageInitFlag::PNG | ImageInitFlag::JPG)
            .map_err(|message| subsystem_error("image subsystem init", message))?;
        render::init_ttf()?;
        let window = video
            .window(title, width, height)
            .build()
            .map_err(|err| subsystem_error("window creation", err))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|err| subsystem_error("renderer creation", err))?;
        let events = sdl
            .event_pump()
            .map_err(|message| subsystem_error("event pump creation", message))?;

        let game = self
            .game
            .as_deref_mut()
            .expect("the game is bound at the start of `init`");
        if !game.init() {
            log::error!("game init reported failure");
            return Err(Error::new(ErrorKind::Other, "game init reported failure"));
        }

        self.display = Some(DisplayContext {
            _sdl: sdl,
            _image: image,
            events,
            canvas,
        });
        self.state = EngineState::Initialized;
        Ok(())
    }

    /// Runs the blocking frame loop until the game asks to stop or the window is
    /// closed, then destroys the game and moves the engine to `Stopped`.
    ///
    /// Calling `start` on an engine that is not `Initialized` (never initialized,
    /// failed `init`, or already run) logs an error and returns without rendering.
    ///
    pub fn start(&mut self) {
        if self.state != EngineState::Initialized {
            log::error!("engine is not initialized; call `init` before `start`");
            return;
        }
        self.state = EngineState::Running;

        let display = self
            .display
            .as_mut()
            .expect("display resources exist in the `Initialized` state");
        let game = self
            .game
            .as_deref_mut()
            .expect("a game is bound in the `Initialized` state");
        let DisplayContext { events, canvas, .. } = display;
        run_to_completion(game, canvas, || {
            events
                .poll_iter()
                .any(|event| matches!(event, Event::Quit { .. }))
        });

        self.state = EngineState::Stopped;
    }
}
impl Default for Engine<'_> {
    fn default() -> Self {
        Engine::new()
    }
}
impl fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine").field("state", &self.state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{run_to_completion, Engine, EngineState};
    use crate::{
        game::Game,
        render::{Canvas, Texture},
    };

    /// Canvas fake that counts frame operations.
    ///
    #[derive(Default)]
    struct CountingCanvas {
        clears: usize,
        presents: usize,
    }
    impl Canvas for CountingCanvas {
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn present(&mut self) {
            self.presents += 1;
        }
        fn blit_texture(&mut self, _: &Texture<'_>, _: i32, _: i32, _: Option<(u32, u32)>) {}
    }

    /// Game scripted to keep running for a fixed number of updates, then stop.
    ///
    #[derive(Default)]
    struct ScriptedGame {
        updates_before_stop: usize,
        update_calls: usize,
        destroy_calls: usize,
    }
    impl Game for ScriptedGame {
        fn update(&mut self, _canvas: &mut dyn Canvas) -> bool {
            assert_eq!(
                self.destroy_calls, 0,
                "`destroy` must never run before the final update"
            );
            self.update_calls += 1;
            self.update_calls <= self.updates_before_stop
        }
        fn destroy(&mut self) {
            self.destroy_calls += 1;
        }
    }

    #[test]
    fn loop_runs_until_game_stops() {
        let mut game = ScriptedGame {
            updates_before_stop: 3,
            ..ScriptedGame::default()
        };
        let mut canvas = CountingCanvas::default();

        run_to_completion(&mut game, &mut canvas, || false);

        // 3 continue iterations plus the stopping one
        assert_eq!(game.update_calls, 4);
        assert_eq!(game.destroy_calls, 1);
        assert_eq!(canvas.clears, 4);
        assert_eq!(canvas.presents, 4);
    }

    #[test]
    fn loop_honours_external_quit() {
        let mut game = ScriptedGame {
            updates_before_stop: usize::MAX,
            ..ScriptedGame::default()
        };
        let mut canvas = CountingCanvas::default();

        run_to_completion(&mut game, &mut canvas, || true);

        // the stop request still lets the current frame finish
        assert_eq!(game.update_calls, 1);
        assert_eq!(game.destroy_calls, 1);
        assert_eq!(canvas.presents, 1);
    }

    #[test]
    fn start_requires_initialization() {
        let mut engine = Engine::new();
        assert_eq!(engine.state(), EngineState::Uninitialized);

        engine.start();

        assert_eq!(engine.state(), EngineState::Uninitialized);
    }
}
