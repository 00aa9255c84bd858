//! # Desino
//!
//! **Desino** - minimal 2d game engine scaffold that drives a game lifecycle over SDL2.
//!
//! The embedding application implements the [`game::Game`] trait, constructs an [`Engine`],
//! initializes it with a window size and title and runs the frame loop with [`Engine::start`].
//! Helpers for loading image textures, rasterizing text and resolving the resource
//! directory live in the [`render`] and [`resources`] modules.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate log;

extern crate sdl2;

// engine
mod engine;
pub use crate::engine::*;

// modules
pub mod game;
pub mod render;
pub mod resources;
