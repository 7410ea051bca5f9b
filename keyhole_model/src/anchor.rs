// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compass-relative anchor positions for labels around a hole.

/// Where a label is placed relative to a hole's rectangle.
///
/// The eight fixed anchors cover every compass direction around a rectangle
/// without a general constraint layout. Side anchors ([`Top`](Self::Top),
/// [`Right`](Self::Right), [`Bottom`](Self::Bottom), [`Left`](Self::Left))
/// center the label along that side; corner anchors push it fully past the
/// corner. See [`place_label`](crate::place_label) for the exact geometry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AnchorPosition {
    /// Centered above the hole.
    Top,
    /// Past the top-right corner.
    TopRightCorner,
    /// Centered to the right of the hole.
    Right,
    /// Past the bottom-right corner.
    BottomRightCorner,
    /// Centered below the hole.
    Bottom,
    /// Past the bottom-left corner.
    BottomLeftCorner,
    /// Centered to the left of the hole.
    Left,
    /// Past the top-left corner.
    TopLeftCorner,
}

impl AnchorPosition {
    /// All anchors in clockwise order starting at [`Top`](Self::Top).
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::TopRightCorner,
        Self::Right,
        Self::BottomRightCorner,
        Self::Bottom,
        Self::BottomLeftCorner,
        Self::Left,
        Self::TopLeftCorner,
    ];
}
