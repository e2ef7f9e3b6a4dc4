//! rcore entry points: frame clear and camera mode begin.
//!
//! The matching `EndMode2D`/`EndMode3D` take no arguments and are called on
//! raylib directly.

use crate::rl;
use raylib_ffi::{Camera2D, Camera3D, Color};

/// Set background color (framebuffer clear color).
///
/// # Safety
/// `color` must point to an initialized [`Color`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _ClearBackground(color: *const Color) {
    let color = unsafe { *color };
    log::trace!("ClearBackground {color:?}");
    unsafe { rl::ClearBackground(color) }
}

/// Begin 3D mode with a custom camera.
///
/// # Safety
/// `camera` must point to an initialized [`Camera3D`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _BeginMode3D(camera: *const Camera3D) {
    let camera = unsafe { *camera };
    log::trace!("BeginMode3D {camera:?}");
    unsafe { rl::BeginMode3D(camera) }
}

/// Begin 2D mode with a custom camera.
///
/// # Safety
/// `camera` must point to an initialized [`Camera2D`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _BeginMode2D(camera: *const Camera2D) {
    let camera = unsafe { *camera };
    log::trace!("BeginMode2D {camera:?}");
    unsafe { rl::BeginMode2D(camera) }
}
