// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered hole collection backing compositing and hit testing.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::hole::{Hole, HoleKind};

/// Insertion-ordered collection of holes.
///
/// The registry is the single source of truth for both the compositor and
/// the hit resolver. Holes keep insertion order; there is no de-duplication
/// and no re-sorting, so a hole's index is simply its position. Removal is
/// all-or-nothing ([`Registry::remove_all`]), matching the overlay lifecycle
/// of "show once, dismiss entirely".
///
/// Every mutation bumps an epoch counter. Consumers that cache derived state
/// (such as a composed frame) compare epochs to decide whether to rebuild.
#[derive(Clone, Debug)]
pub struct Registry<H> {
    holes: Vec<Hole<H>>,
    epoch: u64,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Registry<H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            holes: Vec::new(),
            epoch: 0,
        }
    }

    /// Append `hole` and return its index.
    ///
    /// The general entry point; the `add_*` helpers below cover the common
    /// kinds. Useful directly for placeholder foreign holes or for holes
    /// with non-default flags.
    pub fn push(&mut self, hole: Hole<H>) -> usize {
        self.holes.push(hole);
        self.epoch = self.epoch.wrapping_add(1);
        self.holes.len() - 1
    }

    /// Append a rectangular cut and return its index.
    pub fn add_rect(&mut self, rect: Rect) -> usize {
        self.push(Hole::rect(rect))
    }

    /// Append a rounded-rect cut and return its index.
    ///
    /// A zero `corner_radius` is equivalent to [`Registry::add_rect`].
    pub fn add_rounded_rect(&mut self, rect: Rect, corner_radius: f64) -> usize {
        self.push(Hole::rounded(rect, corner_radius))
    }

    /// Append a circular cut of `diameter` centered on `center`.
    pub fn add_circle(&mut self, center: Point, diameter: f64) -> usize {
        self.push(Hole::circle(center, diameter))
    }

    /// Append a foreign-content hole and return its index.
    pub fn add_foreign(&mut self, content: H, rect: Rect) -> usize {
        self.push(Hole::foreign(content, rect))
    }

    /// Remove every hole.
    ///
    /// The drained holes are returned so the caller can detach any foreign
    /// content from its display surface.
    pub fn remove_all(&mut self) -> Vec<Hole<H>> {
        self.epoch = self.epoch.wrapping_add(1);
        core::mem::take(&mut self.holes)
    }

    /// Number of holes.
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// True when no holes are registered.
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// The hole at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Hole<H>> {
        self.holes.get(index)
    }

    /// Iterate holes in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Hole<H>> {
        self.holes.iter()
    }

    /// All holes, in insertion order.
    pub fn holes(&self) -> &[Hole<H>] {
        &self.holes
    }

    /// Number of foreign-content holes.
    ///
    /// This is the ordinal the next generated label will occupy among
    /// foreign-content holes, as reported to delegates.
    pub fn foreign_count(&self) -> usize {
        self.holes
            .iter()
            .filter(|h| matches!(h.kind, HoleKind::Foreign { .. }))
            .count()
    }

    /// Mutation counter; bumped by every `push`/`add_*`/`remove_all`.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
