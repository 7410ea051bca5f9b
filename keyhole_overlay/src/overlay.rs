// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful overlay facade.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use keyhole_model::{AnchorPosition, Registry, hit_test, place_label};

use crate::color::Rgba;
use crate::delegate::{NoDelegate, OverlayDelegate};
use crate::frame::{Frame, compose};
use crate::label::{LabelRenderer, LabelText};
use crate::surface::Surface;

/// A spotlight overlay: registry, bounds, dimming color, and the
/// attach/detach bookkeeping for foreign content.
///
/// `H` is the surface's content handle type; `D` an optional delegate
/// (defaulting to [`NoDelegate`]).
///
/// ## Usage
///
/// - Construct with [`Overlay::new`] or [`Overlay::with_delegate`]; the
///   host supplies the bounding rectangle and re-supplies it on resize via
///   [`Overlay::set_bounds`].
/// - Add holes with the `add_*` operations; every mutation invalidates the
///   composed frame ([`Overlay::needs_composite`] turns true).
/// - Call [`Overlay::composite`] with the host's [`Surface`] whenever a
///   redraw is due.
/// - Route taps through [`Overlay::tap`]; dismiss with
///   [`Overlay::remove_all`].
///
/// All operations are total: degenerate geometry is accepted and simply
/// produces nothing visible.
pub struct Overlay<H: Copy + Eq, D: OverlayDelegate<H> = NoDelegate> {
    bounds: Rect,
    dim: Rgba,
    registry: Registry<H>,
    // Handles attached during the last composite, in attach order.
    attached: Vec<H>,
    // Registry epoch of the last composite; `None` when invalidated.
    clean: Option<u64>,
    delegate: D,
}

impl<H: Copy + Eq, D: OverlayDelegate<H>> core::fmt::Debug for Overlay<H, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Overlay")
            .field("bounds", &self.bounds)
            .field("dim", &self.dim)
            .field("holes", &self.registry.len())
            .field("attached", &self.attached.len())
            .finish_non_exhaustive()
    }
}

impl<H: Copy + Eq> Overlay<H> {
    /// Create an overlay over `bounds` with no delegate.
    pub fn new(bounds: Rect) -> Self {
        Self::with_delegate(bounds, NoDelegate)
    }
}

impl<H: Copy + Eq, D: OverlayDelegate<H>> Overlay<H, D> {
    /// Create an overlay over `bounds` that notifies `delegate`.
    pub fn with_delegate(bounds: Rect, delegate: D) -> Self {
        Self {
            bounds,
            dim: Rgba::DIM,
            registry: Registry::new(),
            attached: Vec::new(),
            clean: None,
            delegate,
        }
    }

    /// The overlay's bounding rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Re-supply the bounding rectangle (host resize). Invalidates the
    /// composed frame.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.clean = None;
    }

    /// The dimming color.
    pub fn dim_color(&self) -> Rgba {
        self.dim
    }

    /// Replace the dimming color. Invalidates the composed frame.
    pub fn set_dim_color(&mut self, color: Rgba) {
        self.dim = color;
        self.clean = None;
    }

    /// The hole registry.
    pub fn registry(&self) -> &Registry<H> {
        &self.registry
    }

    /// Mutable access to the registry, for holes the `add_*` operations do
    /// not cover. Mutations picked up through here invalidate via the
    /// registry epoch as usual.
    pub fn registry_mut(&mut self) -> &mut Registry<H> {
        &mut self.registry
    }

    /// The delegate.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Handles attached by the last composite, in attach order.
    pub fn attached(&self) -> &[H] {
        &self.attached
    }

    /// True when registry, bounds, or dim color changed since the last
    /// composite.
    pub fn needs_composite(&self) -> bool {
        self.clean != Some(self.registry.epoch())
    }

    /// Append a rectangular hole. Returns its index.
    pub fn add_rect(&mut self, rect: Rect) -> usize {
        self.registry.add_rect(rect)
    }

    /// Append a rounded-rect hole; radius `0.0` is equivalent to
    /// [`Overlay::add_rect`]. Returns its index.
    pub fn add_rounded_rect(&mut self, rect: Rect, corner_radius: f64) -> usize {
        self.registry.add_rounded_rect(rect, corner_radius)
    }

    /// Append a circular hole of `diameter` centered on `center`.
    pub fn add_circle(&mut self, center: Point, diameter: f64) -> usize {
        self.registry.add_circle(center, diameter)
    }

    /// Append a foreign-content hole bound to `content`. Returns its index.
    pub fn add_foreign(&mut self, content: H, rect: Rect) -> usize {
        self.registry.add_foreign(content, rect)
    }

    /// Append an annotated hole: a cut over `rect` plus a generated label.
    ///
    /// The label's extent comes from `renderer`, its rectangle from the
    /// anchor placement algorithm, and its content handle from
    /// [`LabelRenderer::render`]. The delegate is notified just before the
    /// label joins the registry, with the label's ordinal among
    /// foreign-content holes. Two registry entries result; their indices
    /// are returned as `(mask, label)`.
    pub fn add_annotated_hole<R>(
        &mut self,
        renderer: &mut R,
        rect: Rect,
        corner_radius: f64,
        text: LabelText,
        anchor: AnchorPosition,
        margin: f64,
    ) -> (usize, usize)
    where
        R: LabelRenderer<Content = H>,
    {
        let mask = self.registry.add_rounded_rect(rect, corner_radius);
        let extent = renderer.measure(&text);
        let label_rect = place_label(rect, extent, anchor, margin);
        let content = renderer.render(text);
        let ordinal = self.registry.foreign_count();
        self.delegate.on_label_will_attach(&content, ordinal);
        let label = self.registry.add_foreign(content, label_rect);
        (mask, label)
    }

    /// Recomposite onto `surface`: detach pass, mask pass, attach pass.
    ///
    /// Detaches exactly the handles attached by the previous composite
    /// (none are skipped or doubled), then replays a freshly composed
    /// [`Frame`]. The frame is returned for inspection. Compositing twice
    /// with no intervening mutation performs identical detach/attach sets
    /// and identical mask ops.
    pub fn composite<S>(&mut self, surface: &mut S) -> Frame<H>
    where
        S: Surface<Content = H>,
    {
        for content in self.attached.drain(..) {
            surface.detach(content);
        }
        let frame = compose(&self.registry, self.bounds, self.dim);
        frame.replay(surface);
        self.attached
            .extend(frame.content.iter().map(|(content, _)| *content));
        self.clean = Some(self.registry.epoch());
        frame
    }

    /// Resolve `point` to a hole index without side effects.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        hit_test(&self.registry, point)
    }

    /// Resolve a tap at `point`, notifying the delegate on a match.
    ///
    /// Returns the matched index; `None` (no hole under the point) is not
    /// forwarded to the delegate.
    pub fn tap(&mut self, point: Point) -> Option<usize> {
        let hit = hit_test(&self.registry, point);
        if let Some(index) = hit {
            self.delegate.on_hole_selected(index);
        }
        hit
    }

    /// Remove every hole, detaching all attached foreign content.
    ///
    /// The one removal operation: dismissal is all-or-nothing. Content
    /// handles are released from the overlay's bookkeeping but their
    /// destruction remains the caller's concern.
    pub fn remove_all<S>(&mut self, surface: &mut S)
    where
        S: Surface<Content = H>,
    {
        for content in self.attached.drain(..) {
            surface.detach(content);
        }
        self.registry.remove_all();
        self.clean = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::MaskOp;
    use alloc::vec::Vec;
    use kurbo::{RoundedRect, Size};

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 320.0, 480.0);

    #[derive(Copy, Clone, Debug, PartialEq)]
    enum Call {
        Fill(Rect, Rgba),
        Clear(Rect),
        ClearRounded(RoundedRect),
        Attach(u32, Rect),
        Detach(u32),
    }

    /// Surface double that records every call and tracks attachment.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
        attached: Vec<u32>,
    }

    impl Surface for RecordingSurface {
        type Content = u32;

        fn fill_rect(&mut self, rect: Rect, color: Rgba) {
            self.calls.push(Call::Fill(rect, color));
        }

        fn clear_rect(&mut self, rect: Rect) {
            assert!(
                BOUNDS.union(rect) == BOUNDS,
                "clear outside overlay bounds: {rect:?}"
            );
            self.calls.push(Call::Clear(rect));
        }

        fn clear_rounded_rect(&mut self, shape: RoundedRect) {
            assert!(
                BOUNDS.union(shape.rect()) == BOUNDS,
                "clear outside overlay bounds: {shape:?}"
            );
            self.calls.push(Call::ClearRounded(shape));
        }

        fn attach(&mut self, content: u32, frame: Rect) {
            assert!(!self.attached.contains(&content), "double attach");
            self.attached.push(content);
            self.calls.push(Call::Attach(content, frame));
        }

        fn detach(&mut self, content: u32) {
            let pos = self
                .attached
                .iter()
                .position(|&c| c == content)
                .expect("detach of unattached content");
            self.attached.remove(pos);
            self.calls.push(Call::Detach(content));
        }
    }

    /// Renderer double: fixed-size glyphs, handles counting up from 100.
    struct StubRenderer {
        next: u32,
        extent: Size,
    }

    impl StubRenderer {
        fn new(extent: Size) -> Self {
            Self { next: 100, extent }
        }
    }

    impl LabelRenderer for StubRenderer {
        type Content = u32;

        fn measure(&mut self, _text: &LabelText) -> Size {
            self.extent
        }

        fn render(&mut self, _text: LabelText) -> u32 {
            self.next += 1;
            self.next
        }
    }

    #[derive(Default)]
    struct EventLog {
        selected: Vec<usize>,
        labels: Vec<(u32, usize)>,
    }

    impl OverlayDelegate<u32> for EventLog {
        fn on_hole_selected(&mut self, index: usize) {
            self.selected.push(index);
        }

        fn on_label_will_attach(&mut self, content: &u32, ordinal: usize) {
            self.labels.push((*content, ordinal));
        }
    }

    #[test]
    fn composite_emits_dim_cut_attach_in_order() {
        let mut overlay: Overlay<u32> = Overlay::new(BOUNDS);
        overlay.add_rect(Rect::new(10.0, 10.0, 60.0, 60.0));
        overlay.add_foreign(7, Rect::new(70.0, 70.0, 120.0, 120.0));

        let mut surface = RecordingSurface::default();
        overlay.composite(&mut surface);

        assert_eq!(
            surface.calls,
            alloc::vec![
                Call::Fill(BOUNDS, Rgba::DIM),
                Call::Clear(Rect::new(10.0, 10.0, 60.0, 60.0)),
                Call::Attach(7, Rect::new(70.0, 70.0, 120.0, 120.0)),
            ]
        );
        assert_eq!(overlay.attached(), &[7]);
        assert!(!overlay.needs_composite());
    }

    #[test]
    fn recomposite_without_mutation_is_idempotent() {
        let mut overlay: Overlay<u32> = Overlay::new(BOUNDS);
        overlay.add_rounded_rect(Rect::new(10.0, 10.0, 60.0, 60.0), 4.0);
        overlay.add_foreign(1, Rect::new(0.0, 0.0, 50.0, 20.0));
        overlay.add_foreign(2, Rect::new(0.0, 30.0, 50.0, 50.0));

        let mut surface = RecordingSurface::default();
        let first = overlay.composite(&mut surface);
        surface.calls.clear();
        let second = overlay.composite(&mut surface);

        assert_eq!(first, second);
        // Second run detaches exactly what the first attached, then replays.
        assert_eq!(&surface.calls[..2], &[Call::Detach(1), Call::Detach(2)]);
        assert_eq!(surface.attached, alloc::vec![1, 2]);
    }

    #[test]
    fn later_content_attaches_after_earlier_content() {
        let mut overlay: Overlay<u32> = Overlay::new(BOUNDS);
        let r = Rect::new(0.0, 0.0, 100.0, 20.0);
        overlay.add_foreign(1, r);
        overlay.add_foreign(2, r);

        let mut surface = RecordingSurface::default();
        overlay.composite(&mut surface);
        // Attach order equals insertion order, so 2 sits on top of 1.
        assert_eq!(surface.attached, alloc::vec![1, 2]);
    }

    #[test]
    fn mutation_and_appearance_changes_invalidate() {
        let mut overlay: Overlay<u32> = Overlay::new(BOUNDS);
        overlay.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut surface = RecordingSurface::default();
        overlay.composite(&mut surface);
        assert!(!overlay.needs_composite());

        overlay.add_rect(Rect::new(20.0, 20.0, 30.0, 30.0));
        assert!(overlay.needs_composite());
        overlay.composite(&mut surface);

        overlay.set_dim_color(Rgba::BLACK.with_alpha(0.8));
        assert!(overlay.needs_composite());
        overlay.composite(&mut surface);

        overlay.set_bounds(Rect::new(0.0, 0.0, 640.0, 480.0));
        assert!(overlay.needs_composite());
    }

    #[test]
    fn tap_notifies_delegate_only_on_match() {
        let mut overlay: Overlay<u32, EventLog> =
            Overlay::with_delegate(BOUNDS, EventLog::default());
        let r = Rect::new(0.0, 0.0, 100.0, 20.0);
        overlay.add_rect(r);
        let top = overlay.add_foreign(9, r);

        assert_eq!(overlay.tap(Point::new(50.0, 10.0)), Some(top));
        assert_eq!(overlay.tap(Point::new(200.0, 200.0)), None);
        assert_eq!(overlay.delegate_mut().selected, alloc::vec![top]);
    }

    #[test]
    fn annotated_hole_adds_mask_and_label() {
        let mut overlay: Overlay<u32, EventLog> =
            Overlay::with_delegate(BOUNDS, EventLog::default());
        let mut renderer = StubRenderer::new(Size::new(10.0, 14.0));

        let (mask, label) = overlay.add_annotated_hole(
            &mut renderer,
            Rect::new(100.0, 100.0, 140.0, 140.0),
            0.0,
            LabelText::Plain("X".into()),
            AnchorPosition::Right,
            10.0,
        );
        assert_eq!((mask, label), (0, 1));
        assert_eq!(overlay.registry().len(), 2);

        // Label rect per the worked example: (150, 113) sized 10x14.
        let label_hole = overlay.registry().get(label).unwrap();
        assert_eq!(label_hole.rect, Rect::new(150.0, 113.0, 160.0, 127.0));
        assert_eq!(label_hole.content(), Some(&101));

        // Delegate saw the handle before attach, with the foreign ordinal.
        assert_eq!(overlay.delegate_mut().labels, alloc::vec![(101, 0)]);
    }

    #[test]
    fn label_ordinal_counts_foreign_holes_not_registry_indices() {
        let mut overlay: Overlay<u32, EventLog> =
            Overlay::with_delegate(BOUNDS, EventLog::default());
        let mut renderer = StubRenderer::new(Size::new(10.0, 14.0));

        overlay.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        overlay.add_foreign(50, Rect::new(20.0, 20.0, 30.0, 30.0));
        overlay.add_annotated_hole(
            &mut renderer,
            Rect::new(100.0, 100.0, 140.0, 140.0),
            5.0,
            LabelText::Rich("<b>hi</b>".into()),
            AnchorPosition::Bottom,
            0.0,
        );

        // Registry index of the label is 3, but it is foreign hole #1.
        assert_eq!(overlay.delegate_mut().labels, alloc::vec![(101, 1)]);
    }

    #[test]
    fn remove_all_detaches_everything_and_clears() {
        let mut overlay: Overlay<u32> = Overlay::new(BOUNDS);
        let mut renderer = StubRenderer::new(Size::new(10.0, 14.0));
        overlay.add_rect(Rect::new(10.0, 10.0, 60.0, 60.0));
        overlay.add_annotated_hole(
            &mut renderer,
            Rect::new(100.0, 100.0, 140.0, 140.0),
            0.0,
            LabelText::Plain("X".into()),
            AnchorPosition::Right,
            10.0,
        );
        // 3 holes: 2 masks + 1 label.
        assert_eq!(overlay.registry().len(), 3);

        let mut surface = RecordingSurface::default();
        overlay.composite(&mut surface);
        surface.calls.clear();

        overlay.remove_all(&mut surface);
        // Exactly one detach: the single foreign-content hole present.
        assert_eq!(surface.calls, alloc::vec![Call::Detach(101)]);
        assert!(surface.attached.is_empty());
        assert_eq!(overlay.registry().len(), 0);
        assert!(overlay.attached().is_empty());
        assert!(overlay.needs_composite());

        // Every point now misses.
        for p in [Point::new(20.0, 20.0), Point::new(120.0, 120.0)] {
            assert_eq!(overlay.hit_test(p), None);
        }

        // A composite after dismissal only dims.
        let frame = overlay.composite(&mut surface);
        assert_eq!(frame.mask.len(), 1);
        assert!(frame.content.is_empty());
    }

    #[test]
    fn remove_all_before_any_composite_detaches_nothing() {
        let mut overlay: Overlay<u32> = Overlay::new(BOUNDS);
        overlay.add_foreign(5, Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut surface = RecordingSurface::default();
        overlay.remove_all(&mut surface);
        assert!(surface.calls.is_empty());
        assert!(overlay.registry().is_empty());
    }

    #[test]
    fn frame_masks_stay_inside_shrunken_bounds() {
        let mut overlay: Overlay<u32> = Overlay::new(BOUNDS);
        overlay.add_rect(Rect::new(280.0, 440.0, 400.0, 520.0));
        let mut surface = RecordingSurface::default();
        let frame = overlay.composite(&mut surface);
        assert_eq!(
            frame.mask[1],
            MaskOp::Clear(Rect::new(280.0, 440.0, 320.0, 480.0))
        );
    }
}
