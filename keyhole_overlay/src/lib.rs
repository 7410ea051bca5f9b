// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyhole Overlay: the spotlight overlay facade over a display surface.
//!
//! ## Overview
//!
//! This crate turns the pure model from [`keyhole_model`] into a working
//! overlay. [`Overlay`] owns the hole registry, the overlay bounds, and the
//! dimming color; it composes frames, manages attach/detach of foreign
//! content, resolves taps, and notifies an optional delegate. Everything
//! presentation-specific stays behind three collaborator traits:
//!
//! - [`Surface`]: fills, erases, and hosts foreign content. Implemented by
//!   the host's rendering layer.
//! - [`LabelRenderer`]: measures and renders label text into content handles.
//! - [`OverlayDelegate`]: receives hole-selection and label-will-attach
//!   callbacks.
//!
//! ## Frame composition
//!
//! A composite runs three passes over the registry, strictly in insertion
//! order ([`Overlay::composite`]):
//!
//! 1. Detach: previously attached handles are removed from the surface.
//! 2. Mask: the bounds are dimmed, then each cut hole erases the
//!    intersection of its rect with the bounds ([`MaskOp`]).
//! 3. Attach: each foreign hole's content is attached at its rect; later
//!    holes end up visually on top.
//!
//! The mask/attach sequence is first built as an explicit [`Frame`], so
//! callers can inspect or record exactly what reaches the surface. Composing
//! twice without a mutation in between replays an identical frame.
//!
//! ## Minimal usage
//!
//! ```
//! use keyhole_overlay::{Overlay, Rgba, Surface};
//! use kurbo::{Point, Rect, RoundedRect};
//!
//! // A surface that ignores everything; real hosts paint and host views.
//! struct NullSurface;
//! impl Surface for NullSurface {
//!     type Content = u32;
//!     fn fill_rect(&mut self, _rect: Rect, _color: Rgba) {}
//!     fn clear_rect(&mut self, _rect: Rect) {}
//!     fn clear_rounded_rect(&mut self, _shape: RoundedRect) {}
//!     fn attach(&mut self, _content: u32, _frame: Rect) {}
//!     fn detach(&mut self, _content: u32) {}
//! }
//!
//! let mut surface = NullSurface;
//! let mut overlay: Overlay<u32> = Overlay::new(Rect::new(0.0, 0.0, 320.0, 480.0));
//!
//! let hole = overlay.add_rect(Rect::new(10.0, 10.0, 60.0, 60.0));
//! overlay.composite(&mut surface);
//!
//! assert_eq!(overlay.tap(Point::new(20.0, 20.0)), Some(hole));
//! assert_eq!(overlay.tap(Point::new(200.0, 200.0)), None);
//!
//! overlay.remove_all(&mut surface);
//! assert_eq!(overlay.tap(Point::new(20.0, 20.0)), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod color;
pub mod delegate;
pub mod frame;
pub mod label;
pub mod overlay;
pub mod surface;

pub use color::Rgba;
pub use delegate::{NoDelegate, OverlayDelegate};
pub use frame::{Frame, MaskOp, compose};
pub use label::{LabelRenderer, LabelText};
pub use overlay::Overlay;
pub use surface::Surface;
