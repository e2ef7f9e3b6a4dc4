//! Pointer-taking C entry points for raylib.
//!
//! Each exported `_Name` forwards to raylib's `Name`, dereferencing the
//! composite arguments its callers can only hand over by address. Pointers
//! are read once, never written and never kept past the call. Null or
//! dangling pointers are undefined behavior; nothing here checks them.
//!
//! All calls must come from the thread that owns raylib's context.

#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

#[cfg(not(test))]
use raylib_ffi as rl;
#[cfg(test)]
use crate::recorder as rl;

pub mod rcore;
pub mod rmodels;
pub mod rshapes;
pub mod rtext;

#[cfg(test)]
mod recorder;

pub use raylib_ffi::{Camera2D, Camera3D, CameraProjection, Color, Rectangle, Vector2, Vector3};

/// Install an `env_logger` backend for the shim's `log` output, filtered by
/// `RUST_LOG`. Safe to call more than once; an already installed logger is
/// left in place.
#[unsafe(no_mangle)]
pub extern "C" fn rlshim_init_logging() {
    match env_logger::Builder::from_default_env().try_init() {
        Ok(()) => log::debug!("rlshim {} logging initialized", env!("CARGO_PKG_VERSION")),
        Err(_) => log::debug!("logger already installed"),
    }
}
