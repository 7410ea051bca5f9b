// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame composition: the dim/cut/attach draw sequence for one composite.

use alloc::vec::Vec;
use kurbo::{Rect, RoundedRect};

use keyhole_model::{HoleFlags, HoleKind, Registry};

use crate::color::Rgba;
use crate::surface::Surface;

/// One mask-pass operation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MaskOp {
    /// Dimming fill over the overlay bounds. Always the first op.
    Dim {
        /// The full overlay bounds.
        rect: Rect,
        /// The configured dimming color.
        color: Rgba,
    },
    /// Erase a rectangular region back to transparency.
    Clear(Rect),
    /// Erase a rounded-rect region back to transparency.
    ClearRounded(RoundedRect),
}

/// The draw sequence produced by one composite.
///
/// `mask` holds the dim fill followed by one clear per visible cut hole, in
/// registry order. `content` holds the foreign handles to attach with their
/// frames, also in registry order, so later entries sit visually on top.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<H> {
    /// Mask-pass operations, dim fill first.
    pub mask: Vec<MaskOp>,
    /// Content to attach, `(handle, frame)`, in attach order.
    pub content: Vec<(H, Rect)>,
}

impl<H: Copy> Frame<H> {
    /// Issue this frame's surface calls: the mask ops, then the attaches.
    pub fn replay<S: Surface<Content = H>>(&self, surface: &mut S) {
        for op in &self.mask {
            match *op {
                MaskOp::Dim { rect, color } => surface.fill_rect(rect, color),
                MaskOp::Clear(rect) => surface.clear_rect(rect),
                MaskOp::ClearRounded(shape) => surface.clear_rounded_rect(shape),
            }
        }
        for &(content, frame) in &self.content {
            surface.attach(content, frame);
        }
    }
}

/// Build the frame for `registry` over `bounds`, dimmed with `dim`.
///
/// One pass in insertion order. Cut holes erase the intersection of their
/// rect with `bounds`; a hole whose intersection is empty emits nothing, so
/// the surface never receives an out-of-bounds clear. Rounded cuts keep
/// their corner radius over the intersected rect (kurbo clamps radii only
/// to what the rect admits). Foreign holes with absent content are skipped.
///
/// Pure: the same registry state, bounds, and color always yield the same
/// frame.
pub fn compose<H: Copy>(registry: &Registry<H>, bounds: Rect, dim: Rgba) -> Frame<H> {
    let mut frame = Frame {
        mask: Vec::with_capacity(registry.len() + 1),
        content: Vec::new(),
    };
    frame.mask.push(MaskOp::Dim {
        rect: bounds,
        color: dim,
    });
    for hole in registry.iter() {
        if !hole.flags.contains(HoleFlags::VISIBLE) {
            continue;
        }
        match hole.kind {
            HoleKind::Rect => {
                let cut = hole.rect.intersect(bounds);
                if cut.width() > 0.0 && cut.height() > 0.0 {
                    frame.mask.push(MaskOp::Clear(cut));
                }
            }
            HoleKind::RoundedRect { corner_radius } => {
                let cut = hole.rect.intersect(bounds);
                if cut.width() > 0.0 && cut.height() > 0.0 {
                    frame
                        .mask
                        .push(MaskOp::ClearRounded(RoundedRect::from_rect(
                            cut,
                            corner_radius,
                        )));
                }
            }
            HoleKind::Foreign {
                content: Some(content),
            } => {
                // Content frames are not clamped; only the mask is.
                frame.content.push((content, hole.rect));
            }
            HoleKind::Foreign { content: None } => {}
        }
    }
    frame
}
