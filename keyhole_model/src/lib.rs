// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyhole Model: the Kurbo-native data model behind spotlight overlays.
//!
//! A spotlight overlay dims its container except for a set of caller-defined
//! regions ("holes"), annotates holes with positioned labels, or substitutes a
//! hole with foreign content. This crate holds the part of that system with
//! real design content and no presentation glue:
//!
//! - [`Hole`]/[`HoleKind`]: a tagged-variant region, cut as a rectangle or a
//!   rounded rectangle, or hosting an opaque foreign-content handle.
//! - [`Registry`]: the ordered collection of holes; single source of truth
//!   for both compositing and hit testing. Indices are insertion positions.
//! - [`place_label`]/[`LabelSpec`]: the 8-way anchor placement algorithm that
//!   positions a measured text extent around a hole.
//! - [`hit_test`]: last-match-wins tap resolution over registry order.
//!
//! Painting, text measurement, and delegate callbacks live in the companion
//! `keyhole_overlay` crate; this crate is pure geometry over [`kurbo`] types.
//!
//! ## Coordinate space
//!
//! Every rectangle is expressed in the overlay's own coordinate space. The
//! model never normalizes or clamps: degenerate geometry (zero or negative
//! extents) flows through and simply masks or hits nothing. Intersection with
//! the overlay bounds happens at compositing time, not here.
//!
//! ## Minimal usage
//!
//! ```
//! use keyhole_model::{Registry, hit_test};
//! use kurbo::{Point, Rect};
//!
//! // Handles are caller-defined; any `Copy + Eq` type works.
//! let mut registry: Registry<u32> = Registry::new();
//! let icon = registry.add_rect(Rect::new(10.0, 10.0, 60.0, 60.0));
//! let badge = registry.add_foreign(7, Rect::new(40.0, 40.0, 90.0, 90.0));
//!
//! // Later holes draw on top, so the later index wins where rects overlap.
//! assert_eq!(hit_test(&registry, Point::new(50.0, 50.0)), Some(badge));
//! assert_eq!(hit_test(&registry, Point::new(15.0, 15.0)), Some(icon));
//! assert_eq!(hit_test(&registry, Point::new(200.0, 200.0)), None);
//! ```
//!
//! ## Label anchoring
//!
//! ```
//! use keyhole_model::{AnchorPosition, place_label};
//! use kurbo::{Rect, Size};
//!
//! // A 40x40 hole at (100, 100), a 10x14 text extent, margin 10.
//! let label = place_label(
//!     Rect::new(100.0, 100.0, 140.0, 140.0),
//!     Size::new(10.0, 14.0),
//!     AnchorPosition::Right,
//!     10.0,
//! );
//! assert_eq!(label, Rect::new(150.0, 113.0, 160.0, 127.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod anchor;
pub mod hit;
pub mod hole;
pub mod placement;
pub mod registry;

pub use anchor::AnchorPosition;
pub use hit::hit_test;
pub use hole::{Hole, HoleFlags, HoleKind};
pub use placement::{LabelSpec, place_label};
pub use registry::Registry;
