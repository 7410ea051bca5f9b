// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay basics.
//!
//! Builds an overlay with a few holes, composites it onto a surface that
//! prints every call it receives, and resolves a couple of taps.
//!
//! Run:
//! - `cargo run -p keyhole_demos --example overlay_basics`

use keyhole_overlay::{Overlay, Rgba, Surface};
use kurbo::{Point, Rect, RoundedRect};

/// A surface that prints what the overlay asks of it.
struct PrintSurface;

impl Surface for PrintSurface {
    type Content = u32;

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        println!("fill   {rect:?} with {color:?}");
    }

    fn clear_rect(&mut self, rect: Rect) {
        println!("clear  {rect:?}");
    }

    fn clear_rounded_rect(&mut self, shape: RoundedRect) {
        println!("clear  {shape:?}");
    }

    fn attach(&mut self, content: u32, frame: Rect) {
        println!("attach #{content} at {frame:?}");
    }

    fn detach(&mut self, content: u32) {
        println!("detach #{content}");
    }
}

fn main() {
    let mut surface = PrintSurface;
    let mut overlay: Overlay<u32> = Overlay::new(Rect::new(0.0, 0.0, 320.0, 480.0));

    let icon = overlay.add_rect(Rect::new(10.0, 10.0, 60.0, 60.0));
    let avatar = overlay.add_circle(Point::new(160.0, 120.0), 80.0);
    let banner = overlay.add_foreign(7, Rect::new(60.0, 400.0, 260.0, 450.0));

    println!("== composite ==");
    overlay.composite(&mut surface);

    println!("== taps ==");
    for p in [
        Point::new(20.0, 20.0),
        Point::new(160.0, 120.0),
        Point::new(100.0, 420.0),
        Point::new(300.0, 300.0),
    ] {
        match overlay.tap(p) {
            Some(i) if i == icon => println!("{p:?} -> icon hole"),
            Some(i) if i == avatar => println!("{p:?} -> avatar hole"),
            Some(i) if i == banner => println!("{p:?} -> banner content"),
            Some(i) => println!("{p:?} -> hole {i}"),
            None => println!("{p:?} -> no hole"),
        }
    }

    println!("== dismiss ==");
    overlay.remove_all(&mut surface);
    println!("holes left: {}", overlay.registry().len());
}
