// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal color type for the dimming fill.

/// A straight-alpha RGBA color with components in `0.0..=1.0`.
///
/// Only the dimming fill needs a color, so this stays deliberately small
/// rather than pulling in a color crate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component; `0.0` is fully transparent.
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// The default dimming color: black at 50% opacity.
    pub const DIM: Self = Self::BLACK.with_alpha(0.5);

    /// A color from its components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// This color with its alpha replaced.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}
