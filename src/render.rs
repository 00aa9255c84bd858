//! `render` module supplies the drawing seam and the texture helpers of `desino`.
//!
//! [`Canvas`] trait defines the operations the engine and games perform on the
//! window's frame buffer; it is implemented for the `sdl2` window canvas, and the
//! frame loop only ever talks to the trait.
//!
//! Free functions cover resource loading: [`load_texture`] turns an image file into
//! a [`Texture`] and [`render_text`] rasterizes a message with a truetype font into
//! a [`Texture`]. Textures are owned by their creator's renderer; `desino` does not
//! track or pool them, every call site keeps what it loads.
//!
//! Since this module heavily relies on `sdl2` library, [`Color`], [`Texture`] and
//! [`TextureCreator`] are re-exported `sdl2` structs.
//!

pub use sdl2::{
    pixels::Color,
    render::{Texture, TextureCreator},
};

use sdl2::{
    image::LoadTexture,
    rect::Rect as SdlRect,
    render::WindowCanvas as RenderWindowCanvas,
    ttf::{init as ttf_init, Sdl2TtfContext},
};
use std::{
    io::{Error, ErrorKind},
    path::Path,
    sync::OnceLock,
};

/// [`TTF_CONTEXT`] global static variable handles `sdl2::ttf` context.
///
static TTF_CONTEXT: OnceLock<Sdl2TtfContext> = OnceLock::new();

/// Initializes the truetype font subsystem.
///
/// This function is idempotent; only the first successful call performs work.
/// [`Engine::init`](crate::Engine::init) calls it as part of subsystem bring-up, so
/// manual calls are only needed when rasterizing text without an engine.
///
/// Failure (no font driver available) is logged and propagated to the caller.
///
pub fn init_ttf() -> Result<(), Error> {
    if TTF_CONTEXT.get().is_some() {
        return Ok(());
    }
    let context = ttf_init().map_err(|err| {
        log::error!("failed to initialize the font subsystem: {err}");
        Error::new(ErrorKind::Other, err.to_string())
    })?;
    let _ = TTF_CONTEXT.set(context);
    Ok(())
}

/// Loads a texture from an image file (formats enabled by the image subsystem,
/// e.g. '.png' and '.jpg') onto the renderer behind the given creator.
///
/// On failure the diagnostic is logged and the error is returned; there is no retry.
///
/// # Example
/// ```rust, no_run
/// # use desino::render::{load_texture, Texture, TextureCreator};
/// # use sdl2::video::WindowContext;
/// let creator: TextureCreator<WindowContext> = todo!("obtain the texture creator from the window canvas");
/// let texture: Texture = load_texture(&creator, "image.png")
///     .expect("Filename should be correct");
/// ```
///
pub fn load_texture<'c, T>(
    creator: &'c TextureCreator<T>,
    path: impl AsRef<Path>,
) -> Result<Texture<'c>, Error> {
    creator.load_texture(path.as_ref()).map_err(|message| {
        log::error!(
            "failed to load texture from `{path}`: {message}",
            path = path.as_ref().display()
        );
        Error::new(ErrorKind::InvalidInput, message)
    })
}

/// Rasterizes `message` with the truetype font at `font_file` into a texture owned
/// by the renderer behind the given creator.
///
/// The font is opened at `point_size` and the text is rendered blended (anti-aliased,
/// alpha channel) in the given color onto an intermediate surface, which is then
/// converted into a [`Texture`]. The font handle and the surface are scoped to this
/// call and released on every exit path, successful or not.
///
/// Font-opening, rasterization and conversion failures are logged and returned.
///
/// # Example
/// ```rust, no_run
/// # use desino::render::{render_text, Color, Texture, TextureCreator};
/// # use sdl2::video::WindowContext;
/// # desino::render::init_ttf().expect("Font driver should be available");
/// let creator: TextureCreator<WindowContext> = todo!("obtain the texture creator from the window canvas");
/// let text: Texture = render_text(&creator, "TTF fonts are cool", "sample.ttf", Color::WHITE, 64)
///     .expect("Filename should be correct");
/// ```
///
pub fn render_text<'c, T>(
    creator: &'c TextureCreator<T>,
    message: &str,
    font_file: impl AsRef<Path>,
    color: Color,
    point_size: u16,
) -> Result<Texture<'c>, Error> {
    let ttf = TTF_CONTEXT.get().ok_or_else(|| {
        log::error!("font subsystem is not initialized; call `init_ttf` or `Engine::init` first");
        Error::new(ErrorKind::Other, "font subsystem is not initialized")
    })?;
    let font = ttf
        .load_font(font_file.as_ref(), point_size)
        .map_err(|message| {
            log::error!(
                "failed to open font `{font}` at {point_size}pt: {message}",
                font = font_file.as_ref().display()
            );
            Error::new(ErrorKind::NotFound, message)
        })?;
    let surface = font.render(message).blended(color).map_err(|err| {
        log::error!("failed to rasterize text: {err}");
        Error::new(ErrorKind::InvalidData, err.to_string())
    })?;
    creator.create_texture_from_surface(&surface).map_err(|err| {
        log::error!("failed to convert rasterized text into a texture: {err}");
        Error::new(ErrorKind::InvalidData, err.to_string())
    })
}

/// [`Canvas`] trait defines the frame buffer operations that `desino` performs.
///
/// The frame loop clears the canvas, lets the game draw through this trait and
/// presents the result, so a [`Game`](crate::game::Game) never needs the concrete
/// `sdl2` canvas type. The production implementor is the `sdl2` window canvas.
///
pub trait Canvas {
    /// Clears the whole frame buffer with the current draw color.
    ///
    fn clear(&mut self);
    /// Commits the frame buffer to the screen.
    ///
    /// Drawing never reaches the window until this is called.
    ///
    fn present(&mut self);
    /// Draws a texture with its top left corner at `(x, y)`.
    ///
    /// `size` gives the destination width and height in pixels; `None` keeps the
    /// texture's native dimensions, queried from the renderer.
    ///
    fn blit_texture(&mut self, texture: &Texture<'_>, x: i32, y: i32, size: Option<(u32, u32)>);
}

impl Canvas for RenderWindowCanvas {
    fn clear(&mut self) {
        RenderWindowCanvas::clear(self);
    }
    fn present(&mut self) {
        RenderWindowCanvas::present(self);
    }
    fn blit_texture(&mut self, texture: &Texture<'_>, x: i32, y: i32, size: Option<(u32, u32)>) {
        let (width, height) = size.unwrap_or_else(|| {
            let query = texture.query();
            (query.width, query.height)
        });
        self.copy(texture, None, Some(SdlRect::new(x, y, width, height)))
            .expect("`desino` renderer should be able to perform texture blitting");
    }
}
