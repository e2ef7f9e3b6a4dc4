//! rshapes entry points.

use std::ffi::c_int;

use crate::rl;
use raylib_ffi::{Color, Rectangle, Vector2};

// Every filled circle goes through one 36-gon sector sweep.
const CIRCLE_START_ANGLE: f32 = 0.0;
const CIRCLE_END_ANGLE: f32 = 360.0;
const CIRCLE_SEGMENTS: c_int = 36;

#[inline]
unsafe fn fill_circle(center: Vector2, radius: f32, color: Color) {
    unsafe {
        rl::DrawCircleSector(
            center,
            radius,
            CIRCLE_START_ANGLE,
            CIRCLE_END_ANGLE,
            CIRCLE_SEGMENTS,
            color,
        )
    }
}

/// Draw a pixel.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawPixel(pos_x: c_int, pos_y: c_int, color: *const Color) {
    unsafe { rl::DrawPixel(pos_x, pos_y, *color) }
}

/// Draw a pixel (vector version).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawPixelV(position: *const Vector2, color: *const Color) {
    unsafe { rl::DrawPixelV(*position, *color) }
}

/// Draw a line.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawLine(
    start_pos_x: c_int,
    start_pos_y: c_int,
    end_pos_x: c_int,
    end_pos_y: c_int,
    color: *const Color,
) {
    unsafe { rl::DrawLine(start_pos_x, start_pos_y, end_pos_x, end_pos_y, *color) }
}

/// Draw a line (using gl lines).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawLineV(
    start_pos: *const Vector2,
    end_pos: *const Vector2,
    color: *const Color,
) {
    unsafe { rl::DrawLineV(*start_pos, *end_pos, *color) }
}

/// Draw a line (using triangles/quads).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawLineEx(
    start_pos: *const Vector2,
    end_pos: *const Vector2,
    thick: f32,
    color: *const Color,
) {
    unsafe { rl::DrawLineEx(*start_pos, *end_pos, thick, *color) }
}

/// Draw a sequence of lines. `points` is raylib's own array argument and is
/// passed through untouched.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawLineStrip(
    points: *const Vector2,
    point_count: c_int,
    color: *const Color,
) {
    unsafe { rl::DrawLineStrip(points, point_count, *color) }
}

/// Draw a cubic-bezier in-out line segment.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawLineBezier(
    start_pos: *const Vector2,
    end_pos: *const Vector2,
    thick: f32,
    color: *const Color,
) {
    unsafe { rl::DrawLineBezier(*start_pos, *end_pos, thick, *color) }
}

/// Draw a color-filled circle.
///
/// Issued as a full 36-segment sector rather than raylib's `DrawCircle`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCircle(
    center_x: c_int,
    center_y: c_int,
    radius: f32,
    color: *const Color,
) {
    let center = Vector2::new(center_x as f32, center_y as f32);
    unsafe { fill_circle(center, radius, *color) }
}

/// Draw a color-filled circle (vector version). Same sector path as
/// [`_DrawCircle`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCircleV(center: *const Vector2, radius: f32, color: *const Color) {
    unsafe { fill_circle(*center, radius, *color) }
}

/// Draw a piece of a circle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCircleSector(
    center: *const Vector2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    segments: c_int,
    color: *const Color,
) {
    unsafe { rl::DrawCircleSector(*center, radius, start_angle, end_angle, segments, *color) }
}

/// Draw a circle sector outline.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCircleSectorLines(
    center: *const Vector2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    segments: c_int,
    color: *const Color,
) {
    unsafe { rl::DrawCircleSectorLines(*center, radius, start_angle, end_angle, segments, *color) }
}

/// Draw a gradient-filled circle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCircleGradient(
    center_x: c_int,
    center_y: c_int,
    radius: f32,
    inner: *const Color,
    outer: *const Color,
) {
    unsafe { rl::DrawCircleGradient(center_x, center_y, radius, *inner, *outer) }
}

/// Draw circle outline.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCircleLines(
    center_x: c_int,
    center_y: c_int,
    radius: f32,
    color: *const Color,
) {
    unsafe { rl::DrawCircleLines(center_x, center_y, radius, *color) }
}

/// Draw circle outline (vector version).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawCircleLinesV(
    center: *const Vector2,
    radius: f32,
    color: *const Color,
) {
    unsafe { rl::DrawCircleLinesV(*center, radius, *color) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawRectangleV(
    position: *const Vector2,
    size: *const Vector2,
    color: *const Color,
) {
    unsafe { rl::DrawRectangleV(*position, *size, *color) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawRectanglePro(
    rec: *const Rectangle,
    origin: *const Vector2,
    rotation: f32,
    color: *const Color,
) {
    unsafe { rl::DrawRectanglePro(*rec, *origin, rotation, *color) }
}

/// Draw a regular polygon.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawPoly(
    center: *const Vector2,
    sides: c_int,
    radius: f32,
    rotation: f32,
    color: *const Color,
) {
    unsafe { rl::DrawPoly(*center, sides, radius, rotation, *color) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawPolyLines(
    center: *const Vector2,
    sides: c_int,
    radius: f32,
    rotation: f32,
    color: *const Color,
) {
    unsafe { rl::DrawPolyLines(*center, sides, radius, rotation, *color) }
}

/// Polygon outline with line thickness.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _DrawPolyLinesEx(
    center: *const Vector2,
    sides: c_int,
    radius: f32,
    rotation: f32,
    line_thick: f32,
    color: *const Color,
) {
    unsafe { rl::DrawPolyLinesEx(*center, sides, radius, rotation, line_thick, *color) }
}
