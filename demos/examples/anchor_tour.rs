// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor tour.
//!
//! Resolves a label rectangle at every anchor position around one hole,
//! at two margins, and prints the result.
//!
//! Run:
//! - `cargo run -p keyhole_demos --example anchor_tour`

use keyhole_model::{AnchorPosition, place_label};
use kurbo::{Rect, Size};

fn main() {
    let hole = Rect::new(100.0, 100.0, 140.0, 140.0);
    let extent = Size::new(48.0, 14.0);

    for margin in [0.0, 10.0] {
        println!("== margin {margin} ==");
        for anchor in AnchorPosition::ALL {
            let label = place_label(hole, extent, anchor, margin);
            println!(
                "{anchor:<18?} -> origin ({:>6.1}, {:>6.1})",
                label.x0, label.y0
            );
        }
    }
}
