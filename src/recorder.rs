//! Test stand-in for `raylib_ffi`: same function names and signatures, but
//! each call is appended to a per-thread log instead of drawing.

#![allow(clippy::too_many_arguments)]

use std::cell::RefCell;
use std::ffi::{CStr, c_char, c_int};

use bytemuck::Pod;
use raylib_ffi::{Camera2D, Camera3D, Color, Rectangle, Vector2, Vector3};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ClearBackground(Color),
    BeginMode2D(Camera2D),
    BeginMode3D(Camera3D),
    DrawPixel(c_int, c_int, Color),
    DrawPixelV(Vector2, Color),
    DrawLine(c_int, c_int, c_int, c_int, Color),
    DrawLineV(Vector2, Vector2, Color),
    DrawLineEx(Vector2, Vector2, f32, Color),
    DrawLineStrip(Vec<Vector2>, Color),
    DrawLineBezier(Vector2, Vector2, f32, Color),
    DrawCircleSector(Vector2, f32, f32, f32, c_int, Color),
    DrawCircleSectorLines(Vector2, f32, f32, f32, c_int, Color),
    DrawCircleGradient(c_int, c_int, f32, Color, Color),
    DrawCircleLines(c_int, c_int, f32, Color),
    DrawCircleLinesV(Vector2, f32, Color),
    DrawRectangleV(Vector2, Vector2, Color),
    DrawRectanglePro(Rectangle, Vector2, f32, Color),
    DrawPoly(Vector2, c_int, f32, f32, Color),
    DrawPolyLines(Vector2, c_int, f32, f32, Color),
    DrawPolyLinesEx(Vector2, c_int, f32, f32, f32, Color),
    DrawCube(Vector3, f32, f32, f32, Color),
    DrawCubeV(Vector3, Vector3, Color),
    DrawCubeWires(Vector3, f32, f32, f32, Color),
    DrawCubeWiresV(Vector3, Vector3, Color),
    DrawText {
        addr: usize,
        text: String,
        pos_x: c_int,
        pos_y: c_int,
        font_size: c_int,
        color: Color,
    },
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
}

fn record(call: Call) {
    CALLS.with_borrow_mut(|calls| calls.push(call));
}

/// Drain everything recorded on this thread so far.
pub fn take() -> Vec<Call> {
    CALLS.with_borrow_mut(std::mem::take)
}

pub fn snapshot<T: Pod>(value: &T) -> Vec<u8> {
    bytemuck::bytes_of(value).to_vec()
}

pub unsafe fn ClearBackground(color: Color) {
    record(Call::ClearBackground(color));
}

pub unsafe fn BeginMode2D(camera: Camera2D) {
    record(Call::BeginMode2D(camera));
}

pub unsafe fn BeginMode3D(camera: Camera3D) {
    record(Call::BeginMode3D(camera));
}

pub unsafe fn DrawPixel(pos_x: c_int, pos_y: c_int, color: Color) {
    record(Call::DrawPixel(pos_x, pos_y, color));
}

pub unsafe fn DrawPixelV(position: Vector2, color: Color) {
    record(Call::DrawPixelV(position, color));
}

pub unsafe fn DrawLine(sx: c_int, sy: c_int, ex: c_int, ey: c_int, color: Color) {
    record(Call::DrawLine(sx, sy, ex, ey, color));
}

pub unsafe fn DrawLineV(start: Vector2, end: Vector2, color: Color) {
    record(Call::DrawLineV(start, end, color));
}

pub unsafe fn DrawLineEx(start: Vector2, end: Vector2, thick: f32, color: Color) {
    record(Call::DrawLineEx(start, end, thick, color));
}

pub unsafe fn DrawLineStrip(points: *const Vector2, count: c_int, color: Color) {
    let points = unsafe { std::slice::from_raw_parts(points, count as usize) };
    record(Call::DrawLineStrip(points.to_vec(), color));
}

pub unsafe fn DrawLineBezier(start: Vector2, end: Vector2, thick: f32, color: Color) {
    record(Call::DrawLineBezier(start, end, thick, color));
}

pub unsafe fn DrawCircleSector(
    center: Vector2,
    radius: f32,
    start: f32,
    end: f32,
    segments: c_int,
    color: Color,
) {
    record(Call::DrawCircleSector(center, radius, start, end, segments, color));
}

pub unsafe fn DrawCircleSectorLines(
    center: Vector2,
    radius: f32,
    start: f32,
    end: f32,
    segments: c_int,
    color: Color,
) {
    record(Call::DrawCircleSectorLines(center, radius, start, end, segments, color));
}

pub unsafe fn DrawCircleGradient(cx: c_int, cy: c_int, radius: f32, inner: Color, outer: Color) {
    record(Call::DrawCircleGradient(cx, cy, radius, inner, outer));
}

pub unsafe fn DrawCircleLines(cx: c_int, cy: c_int, radius: f32, color: Color) {
    record(Call::DrawCircleLines(cx, cy, radius, color));
}

pub unsafe fn DrawCircleLinesV(center: Vector2, radius: f32, color: Color) {
    record(Call::DrawCircleLinesV(center, radius, color));
}

pub unsafe fn DrawRectangleV(position: Vector2, size: Vector2, color: Color) {
    record(Call::DrawRectangleV(position, size, color));
}

pub unsafe fn DrawRectanglePro(rec: Rectangle, origin: Vector2, rotation: f32, color: Color) {
    record(Call::DrawRectanglePro(rec, origin, rotation, color));
}

pub unsafe fn DrawPoly(center: Vector2, sides: c_int, radius: f32, rotation: f32, color: Color) {
    record(Call::DrawPoly(center, sides, radius, rotation, color));
}

pub unsafe fn DrawPolyLines(center: Vector2, sides: c_int, radius: f32, rotation: f32, color: Color) {
    record(Call::DrawPolyLines(center, sides, radius, rotation, color));
}

pub unsafe fn DrawPolyLinesEx(
    center: Vector2,
    sides: c_int,
    radius: f32,
    rotation: f32,
    thick: f32,
    color: Color,
) {
    record(Call::DrawPolyLinesEx(center, sides, radius, rotation, thick, color));
}

pub unsafe fn DrawCube(position: Vector3, width: f32, height: f32, length: f32, color: Color) {
    record(Call::DrawCube(position, width, height, length, color));
}

pub unsafe fn DrawCubeV(position: Vector3, size: Vector3, color: Color) {
    record(Call::DrawCubeV(position, size, color));
}

pub unsafe fn DrawCubeWires(position: Vector3, width: f32, height: f32, length: f32, color: Color) {
    record(Call::DrawCubeWires(position, width, height, length, color));
}

pub unsafe fn DrawCubeWiresV(position: Vector3, size: Vector3, color: Color) {
    record(Call::DrawCubeWiresV(position, size, color));
}

pub unsafe fn DrawText(text: *const c_char, pos_x: c_int, pos_y: c_int, font_size: c_int, color: Color) {
    let owned = unsafe { CStr::from_ptr(text) }.to_string_lossy().into_owned();
    record(Call::DrawText {
        addr: text as usize,
        text: owned,
        pos_x,
        pos_y,
        font_size,
        color,
    });
}
