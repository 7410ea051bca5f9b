// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guided tour.
//!
//! The classic spotlight use case: annotate a profile icon, a follow
//! button, and a list row with labels, then walk taps through the delegate
//! until the user dismisses the overlay.
//!
//! Run:
//! - `cargo run -p keyhole_demos --example guided_tour`

use keyhole_model::AnchorPosition;
use keyhole_overlay::{
    LabelRenderer, LabelText, Overlay, OverlayDelegate, Rgba, Surface,
};
use kurbo::{Point, Rect, RoundedRect, Size};

/// Quietly hosts content; only attach/detach are interesting here.
#[derive(Default)]
struct QuietSurface {
    attached: Vec<u32>,
}

impl Surface for QuietSurface {
    type Content = u32;

    fn fill_rect(&mut self, _rect: Rect, _color: Rgba) {}
    fn clear_rect(&mut self, _rect: Rect) {}
    fn clear_rounded_rect(&mut self, _shape: RoundedRect) {}

    fn attach(&mut self, content: u32, frame: Rect) {
        println!("attach label #{content} at {frame:?}");
        self.attached.push(content);
    }

    fn detach(&mut self, content: u32) {
        println!("detach label #{content}");
        self.attached.retain(|&c| c != content);
    }
}

/// Monospace-ish measurement: 7pt per character, 14pt tall.
struct TypewriterRenderer {
    next_handle: u32,
}

impl LabelRenderer for TypewriterRenderer {
    type Content = u32;

    fn measure(&mut self, text: &LabelText) -> Size {
        Size::new(text.as_str().len() as f64 * 7.0, 14.0)
    }

    fn render(&mut self, text: LabelText) -> u32 {
        self.next_handle += 1;
        println!("render {:?} as #{}", text.as_str(), self.next_handle);
        self.next_handle
    }
}

struct TourDelegate;

impl OverlayDelegate<u32> for TourDelegate {
    fn on_hole_selected(&mut self, index: usize) {
        println!("delegate: hole {index} selected");
    }

    fn on_label_will_attach(&mut self, content: &u32, ordinal: usize) {
        println!("delegate: label #{content} about to attach (ordinal {ordinal})");
    }
}

fn main() {
    let mut surface = QuietSurface::default();
    let mut renderer = TypewriterRenderer { next_handle: 0 };
    let mut overlay = Overlay::with_delegate(Rect::new(0.0, 0.0, 375.0, 667.0), TourDelegate);

    overlay.add_annotated_hole(
        &mut renderer,
        Rect::new(16.0, 80.0, 72.0, 136.0),
        28.0,
        LabelText::Plain("user profile".into()),
        AnchorPosition::Right,
        10.0,
    );
    overlay.add_annotated_hole(
        &mut renderer,
        Rect::new(290.0, 90.0, 360.0, 122.0),
        5.0,
        LabelText::Plain("follow action".into()),
        AnchorPosition::Bottom,
        10.0,
    );
    overlay.add_annotated_hole(
        &mut renderer,
        Rect::new(0.0, 160.0, 375.0, 220.0),
        0.0,
        LabelText::Rich("the *first* row".into()),
        AnchorPosition::Top,
        10.0,
    );

    println!("== composite ==");
    overlay.composite(&mut surface);
    println!("attached: {:?}", surface.attached);

    println!("== taps ==");
    for p in [Point::new(40.0, 100.0), Point::new(180.0, 190.0), Point::new(200.0, 600.0)] {
        println!("tap {p:?} -> {:?}", overlay.tap(p));
    }

    println!("== dismiss ==");
    overlay.remove_all(&mut surface);
    println!("attached after dismiss: {:?}", surface.attached);
}
