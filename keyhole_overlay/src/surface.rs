// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The display-surface collaborator.

use kurbo::{Rect, RoundedRect};

use crate::color::Rgba;

/// A rendering surface the overlay draws onto and hosts content in.
///
/// Implemented by the host's presentation layer. The overlay only ever
/// issues the five calls below, always on the caller's thread, always in
/// response to an explicit operation. Clearing means erasing back to
/// transparency (alpha zero), not painting another color on top — the
/// surface must support clear/erase blending for the holes to show through.
///
/// `Content` is the opaque handle for caller-supplied content (including
/// generated labels). The overlay schedules attach/detach; it never owns or
/// destroys the underlying content. Callers must not attach or detach a
/// handle themselves while the overlay manages it, or duplicate-attachment
/// artifacts result.
pub trait Surface {
    /// Opaque foreign-content handle hosted by this surface.
    type Content: Copy + Eq;

    /// Fill `rect` with a translucent color.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Erase `rect` back to transparency.
    fn clear_rect(&mut self, rect: Rect);

    /// Erase a rounded-rect region back to transparency.
    fn clear_rounded_rect(&mut self, shape: RoundedRect);

    /// Attach `content` so that it occupies `frame`.
    fn attach(&mut self, content: Self::Content, frame: Rect);

    /// Detach previously attached `content`.
    fn detach(&mut self, content: Self::Content);
}
