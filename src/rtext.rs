//! rtext entry points.

use std::ffi::{c_char, c_int};

use crate::rl;
use raylib_ffi::Color;

/// Draw text using the default font. `text` must be NUL-terminated; it is
/// handed to raylib as-is.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawText(
    text: *const c_char,
    pos_x: c_int,
    pos_y: c_int,
    font_size: c_int,
    color: *const Color,
) {
    unsafe { rl::DrawText(text, pos_x, pos_y, font_size, *color) }
}
