// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delegate callbacks for selections and label generation.

/// Observer of overlay events.
///
/// Both callbacks run synchronously on the thread of the triggering
/// operation; there is no deferred dispatch. Methods default to no-ops so
/// implementors override only what they need.
pub trait OverlayDelegate<H> {
    /// A tap resolved to the hole at `index`.
    ///
    /// Only invoked for concrete matches; a tap that hits no hole is not
    /// forwarded.
    fn on_hole_selected(&mut self, index: usize) {
        let _ = index;
    }

    /// A generated label is about to be added to the registry.
    ///
    /// `ordinal` is the label's position among foreign-content holes, not
    /// its registry index. The handle is not yet attached to the surface,
    /// so implementors may still adjust the label's presentation.
    fn on_label_will_attach(&mut self, content: &H, ordinal: usize) {
        let _ = (content, ordinal);
    }
}

/// The do-nothing delegate used when none is supplied.
///
/// Default delegate parameter of [`Overlay`](crate::Overlay).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDelegate;

impl<H> OverlayDelegate<H> for NoDelegate {}
