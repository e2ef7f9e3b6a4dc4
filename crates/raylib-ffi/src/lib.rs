//! Raw bindings to the subset of raylib wrapped by `rlshim`.
//!
//! The value types mirror raylib's C layout exactly; the functions take them
//! by value, which is what the shim exists to hide from callers that can
//! only pass pointers.

#![allow(non_snake_case)]

use bytemuck::{Pod, Zeroable};
use std::ffi::{c_char, c_int};

/// RGBA color, 8 bits per channel.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned rectangle: top-left corner plus size.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Camera2D {
    /// Displacement from target, in screen space
    pub offset: Vector2,
    /// Rotation and zoom origin
    pub target: Vector2,
    /// Degrees
    pub rotation: f32,
    /// 1.0 is no scale
    pub zoom: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Camera3D {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    /// Field of view in degrees for perspective, near plane width for orthographic
    pub fovy: f32,
    /// One of [`CameraProjection`]
    pub projection: c_int,
}

/// Values for [`Camera3D::projection`].
pub struct CameraProjection;

impl CameraProjection {
    pub const PERSPECTIVE: c_int = 0;
    pub const ORTHOGRAPHIC: c_int = 1;
}

unsafe extern "C" {
    // rcore
    pub fn ClearBackground(color: Color);
    pub fn BeginMode2D(camera: Camera2D);
    pub fn BeginMode3D(camera: Camera3D);

    // rshapes
    pub fn DrawPixel(posX: c_int, posY: c_int, color: Color);
    pub fn DrawPixelV(position: Vector2, color: Color);
    pub fn DrawLine(startPosX: c_int, startPosY: c_int, endPosX: c_int, endPosY: c_int, color: Color);
    pub fn DrawLineV(startPos: Vector2, endPos: Vector2, color: Color);
    pub fn DrawLineEx(startPos: Vector2, endPos: Vector2, thick: f32, color: Color);
    pub fn DrawLineStrip(points: *const Vector2, pointCount: c_int, color: Color);
    pub fn DrawLineBezier(startPos: Vector2, endPos: Vector2, thick: f32, color: Color);
    pub fn DrawCircleSector(
        center: Vector2,
        radius: f32,
        startAngle: f32,
        endAngle: f32,
        segments: c_int,
        color: Color,
    );
    pub fn DrawCircleSectorLines(
        center: Vector2,
        radius: f32,
        startAngle: f32,
        endAngle: f32,
        segments: c_int,
        color: Color,
    );
    pub fn DrawCircleGradient(centerX: c_int, centerY: c_int, radius: f32, inner: Color, outer: Color);
    pub fn DrawCircleLines(centerX: c_int, centerY: c_int, radius: f32, color: Color);
    pub fn DrawCircleLinesV(center: Vector2, radius: f32, color: Color);
    pub fn DrawRectangleV(position: Vector2, size: Vector2, color: Color);
    pub fn DrawRectanglePro(rec: Rectangle, origin: Vector2, rotation: f32, color: Color);
    pub fn DrawPoly(center: Vector2, sides: c_int, radius: f32, rotation: f32, color: Color);
    pub fn DrawPolyLines(center: Vector2, sides: c_int, radius: f32, rotation: f32, color: Color);
    pub fn DrawPolyLinesEx(
        center: Vector2,
        sides: c_int,
        radius: f32,
        rotation: f32,
        lineThick: f32,
        color: Color,
    );

    // rmodels
    pub fn DrawCube(position: Vector3, width: f32, height: f32, length: f32, color: Color);
    pub fn DrawCubeV(position: Vector3, size: Vector3, color: Color);
    pub fn DrawCubeWires(position: Vector3, width: f32, height: f32, length: f32, color: Color);
    pub fn DrawCubeWiresV(position: Vector3, size: Vector3, color: Color);

    // rtext
    pub fn DrawText(text: *const c_char, posX: c_int, posY: c_int, fontSize: c_int, color: Color);
}
