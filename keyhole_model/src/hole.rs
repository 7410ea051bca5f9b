// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hole records: kind, rectangle, and participation flags.

use bitflags::bitflags;
use kurbo::{Point, Rect};

/// The masking or substitution behavior of a hole.
///
/// `H` is the caller's opaque content handle. The model never interprets it;
/// it is routed to the display surface at attach time and reported back
/// through delegate callbacks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HoleKind<H> {
    /// Axis-aligned rectangular cut, square corners.
    Rect,
    /// Rectangular cut with rounded corners. A radius equal to half the
    /// smaller side degenerates to an ellipse or circle.
    RoundedRect {
        /// Corner radius of the cut, in the overlay's coordinate space.
        corner_radius: f64,
    },
    /// No cut: the region hosts caller-supplied content instead. `None`
    /// means there is nothing to draw or hit-test for this hole.
    Foreign {
        /// Non-owning handle to the hosted content, if any.
        content: Option<H>,
    },
}

bitflags! {
    /// Flags controlling a hole's participation in compositing and hit testing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HoleFlags: u8 {
        /// Hole participates in the mask/content pass.
        const VISIBLE  = 0b0000_0001;
        /// Hole participates in hit testing.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for HoleFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// One masked or substituted region of the overlay.
///
/// A hole's identity is its position in the [`Registry`](crate::Registry);
/// there is no separate id. `rect` is expressed in the overlay's coordinate
/// space and is never normalized or clamped here — intersection with the
/// overlay bounds happens only at compositing time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hole<H> {
    /// Masking or substitution behavior.
    pub kind: HoleKind<H>,
    /// Region covered, in overlay coordinates.
    pub rect: Rect,
    /// Participation flags. Defaults to visible and pickable.
    pub flags: HoleFlags,
}

impl<H> Hole<H> {
    /// A rectangular cut over `rect`.
    pub fn rect(rect: Rect) -> Self {
        Self {
            kind: HoleKind::Rect,
            rect,
            flags: HoleFlags::default(),
        }
    }

    /// A rounded-rect cut over `rect`. A zero radius is the same as
    /// [`Hole::rect`].
    pub fn rounded(rect: Rect, corner_radius: f64) -> Self {
        let kind = if corner_radius == 0.0 {
            HoleKind::Rect
        } else {
            HoleKind::RoundedRect { corner_radius }
        };
        Self {
            kind,
            rect,
            flags: HoleFlags::default(),
        }
    }

    /// A circular cut of `diameter` centered on `center`.
    ///
    /// Circles are not a first-class kind; this is the degenerate rounded
    /// rect whose radius is half its side.
    pub fn circle(center: Point, diameter: f64) -> Self {
        let half = diameter / 2.0;
        let rect = Rect::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        );
        Self::rounded(rect, half)
    }

    /// A foreign-content hole hosting `content` over `rect`.
    pub fn foreign(content: H, rect: Rect) -> Self {
        Self {
            kind: HoleKind::Foreign {
                content: Some(content),
            },
            rect,
            flags: HoleFlags::default(),
        }
    }

    /// The hosted content handle, for foreign holes that have one.
    pub fn content(&self) -> Option<&H> {
        match &self.kind {
            HoleKind::Foreign { content } => content.as_ref(),
            _ => None,
        }
    }

    /// True for cut kinds ([`HoleKind::Rect`] and [`HoleKind::RoundedRect`]).
    pub fn is_mask(&self) -> bool {
        !matches!(self.kind, HoleKind::Foreign { .. })
    }

    /// True when this hole can be the result of a hit test.
    ///
    /// Foreign holes with absent content have nothing to draw or hit-test
    /// and are skipped.
    pub fn hit_testable(&self) -> bool {
        if !self.flags.contains(HoleFlags::PICKABLE) {
            return false;
        }
        !matches!(self.kind, HoleKind::Foreign { content: None })
    }

    /// Whether `point` falls inside this hole's rectangle.
    ///
    /// Plain rectangle containment, also for rounded cuts; hit testing does
    /// not trace corner radii. Degenerate rects contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}
