//! rmodels entry points. `_DrawCubeV` takes `size` by value while
//! `_DrawCubeWiresV` takes it by pointer; both signatures are part of the
//! exported ABI.

use crate::rl;
use raylib_ffi::{Color, Vector3};

/// Draw cube.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCube(
    position: *const Vector3,
    width: f32,
    height: f32,
    length: f32,
    color: *const Color,
) {
    unsafe { rl::DrawCube(*position, width, height, length, *color) }
}

/// Draw cube (vector version).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCubeV(position: *const Vector3, size: Vector3, color: *const Color) {
    unsafe { rl::DrawCubeV(*position, size, *color) }
}

/// Draw cube wires.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCubeWires(
    position: *const Vector3,
    width: f32,
    height: f32,
    length: f32,
    color: *const Color,
) {
    unsafe { rl::DrawCubeWires(*position, width, height, length, *color) }
}

/// Draw cube wires (vector version).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCubeWiresV(
    position: *const Vector3,
    size: *const Vector3,
    color: *const Color,
) {
    unsafe { rl::DrawCubeWiresV(*position, *size, *color) }
}
