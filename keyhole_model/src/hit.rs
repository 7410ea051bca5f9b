// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap resolution: map a point to a hole index, last match wins.

use kurbo::Point;

use crate::registry::Registry;

/// Resolve `point` to the index of the topmost hole containing it.
///
/// Scans the registry in insertion order and keeps the last hit-testable
/// hole whose rect contains the point. Later holes draw on top of earlier
/// ones, so last-match-wins keeps visual and interactive z-order consistent.
///
/// Returns `None` when no hole contains the point. An explicit `Option`
/// rather than a sentinel index keeps "no match" distinct from a valid
/// match at index 0.
pub fn hit_test<H>(registry: &Registry<H>, point: Point) -> Option<usize> {
    registry
        .iter()
        .enumerate()
        .fold(None, |best, (index, hole)| {
            if hole.hit_testable() && hole.contains(point) {
                Some(index)
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::{Hole, HoleFlags, HoleKind};
    use kurbo::Rect;

    #[test]
    fn single_rect_hole() {
        // Overlay bounds (0,0,320,480); one 50x50 hole at (10,10).
        let mut registry: Registry<u32> = Registry::new();
        let index = registry.add_rect(Rect::new(10.0, 10.0, 60.0, 60.0));
        assert_eq!(index, 0);
        assert_eq!(hit_test(&registry, Point::new(20.0, 20.0)), Some(0));
        assert_eq!(hit_test(&registry, Point::new(200.0, 200.0)), None);
    }

    #[test]
    fn last_match_wins_over_same_rect() {
        let mut registry: Registry<u32> = Registry::new();
        let r = Rect::new(0.0, 0.0, 100.0, 20.0);
        registry.add_rect(r);
        let top = registry.add_foreign(42, r);
        assert_eq!(hit_test(&registry, Point::new(50.0, 10.0)), Some(top));
    }

    #[test]
    fn overlapping_holes_resolve_to_later_index() {
        let mut registry: Registry<u32> = Registry::new();
        let a = registry.add_rect(Rect::new(0.0, 0.0, 60.0, 60.0));
        let b = registry.add_rounded_rect(Rect::new(40.0, 40.0, 120.0, 120.0), 8.0);
        // Point inside both: the later hole wins.
        assert_eq!(hit_test(&registry, Point::new(50.0, 50.0)), Some(b));
        // Point only inside the earlier hole.
        assert_eq!(hit_test(&registry, Point::new(10.0, 10.0)), Some(a));
    }

    #[test]
    fn rounded_holes_hit_on_the_full_rect() {
        // Corner radii are not traced; the corner point still hits.
        let mut registry: Registry<u32> = Registry::new();
        let index = registry.add_rounded_rect(Rect::new(0.0, 0.0, 40.0, 40.0), 20.0);
        assert_eq!(hit_test(&registry, Point::new(1.0, 1.0)), Some(index));
    }

    #[test]
    fn absent_content_and_unpickable_holes_are_skipped() {
        let mut registry: Registry<u32> = Registry::new();
        let r = Rect::new(0.0, 0.0, 50.0, 50.0);
        let base = registry.add_rect(r);
        registry.push(Hole {
            kind: HoleKind::Foreign { content: None },
            rect: r,
            flags: HoleFlags::default(),
        });
        registry.push(Hole {
            kind: HoleKind::Rect,
            rect: r,
            flags: HoleFlags::VISIBLE,
        });
        // Both later holes cover the point but neither is hit-testable.
        assert_eq!(hit_test(&registry, Point::new(25.0, 25.0)), Some(base));
    }

    #[test]
    fn empty_registry_matches_nothing() {
        let registry: Registry<u32> = Registry::new();
        assert_eq!(hit_test(&registry, Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn cleared_registry_matches_nothing() {
        let mut registry: Registry<u32> = Registry::new();
        registry.add_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        registry.add_foreign(1, Rect::new(0.0, 0.0, 100.0, 100.0));
        registry.remove_all();
        for p in [
            Point::new(0.0, 0.0),
            Point::new(50.0, 50.0),
            Point::new(99.0, 99.0),
        ] {
            assert_eq!(hit_test(&registry, p), None);
        }
    }
}
