// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label placement: resolve a label rectangle from a hole and an anchor.

use kurbo::{Point, Rect, Size};

use crate::anchor::AnchorPosition;

/// Inputs to label placement around a hole.
///
/// Ephemeral: resolved to a [`Rect`] and then discarded; nothing here is
/// persisted in the registry. The text extent comes from the caller's text
/// measurement service.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LabelSpec {
    /// Rectangle of the hole being annotated.
    pub hole_rect: Rect,
    /// Measured extent of the label text.
    pub text_extent: Size,
    /// Which side or corner of the hole the label sits on.
    pub anchor: AnchorPosition,
    /// Gap between the hole's edge and the label. Non-negative.
    pub margin: f64,
}

impl LabelSpec {
    /// The label rectangle for this spec.
    pub fn resolve(&self) -> Rect {
        place_label(self.hole_rect, self.text_extent, self.anchor, self.margin)
    }
}

/// Compute the rectangle of a label of `text_extent` anchored to
/// `hole_rect`.
///
/// `margin` uniformly inflates the reference box around the hole so the
/// label never touches the hole's edge. With `(cx, cy)` the hole center and
/// `hw`/`hh` the margin-inflated half extents, the label's top-left corner
/// is:
///
/// | Anchor             | x                | y                 |
/// |--------------------|------------------|-------------------|
/// | `Top`              | `cx - w/2`       | `cy - hh - h`     |
/// | `TopRightCorner`   | `cx + hw`        | `cy - hh - h`     |
/// | `Right`            | `cx + hw`        | `cy - h/2`        |
/// | `BottomRightCorner`| `cx + hw`        | `cy + hh`         |
/// | `Bottom`           | `cx - w/2`       | `cy + hh`         |
/// | `BottomLeftCorner` | `cx - hw - w`    | `cy + hh`         |
/// | `Left`             | `cx - hw - w`    | `cy - h/2`        |
/// | `TopLeftCorner`    | `cx - hw - w`    | `cy - hh - h/2`   |
///
/// Pure: identical input yields an identical rectangle.
pub fn place_label(
    hole_rect: Rect,
    text_extent: Size,
    anchor: AnchorPosition,
    margin: f64,
) -> Rect {
    let center = hole_rect.center();
    let (cx, cy) = (center.x, center.y);
    let hw = hole_rect.width() / 2.0 + margin;
    let hh = hole_rect.height() / 2.0 + margin;
    let (w, h) = (text_extent.width, text_extent.height);
    let (x, y) = match anchor {
        AnchorPosition::Top => (cx - w / 2.0, cy - hh - h),
        AnchorPosition::TopRightCorner => (cx + hw, cy - hh - h),
        AnchorPosition::Right => (cx + hw, cy - h / 2.0),
        AnchorPosition::BottomRightCorner => (cx + hw, cy + hh),
        AnchorPosition::Bottom => (cx - w / 2.0, cy + hh),
        AnchorPosition::BottomLeftCorner => (cx - hw - w, cy + hh),
        AnchorPosition::Left => (cx - hw - w, cy - h / 2.0),
        AnchorPosition::TopLeftCorner => (cx - hw - w, cy - hh - h / 2.0),
    };
    Rect::from_origin_size(Point::new(x, y), text_extent)
}
