// Author: Dustin Pilgrim
// License: MIT

use crate::handle::Handle;
use crate::rect::{Point, Rect};

/// Default grab radius around a corner handle, in displayed pixels.
pub const HANDLE_RADIUS: f64 = 8.0;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Handle(Handle),
    Body,
    Background,
}

fn dist2(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

fn corner_hit(r: &Rect, p: Point, radius: f64) -> Option<Handle> {
    let mut best: Option<(f64, Handle)> = None;
    for h in Handle::ALL {
        let d = dist2(p, h.position(r));
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, h));
        }
    }

    best.filter(|(d, _)| *d <= radius * radius).map(|(_, h)| h)
}

/// Classify a pointer-down against the current selection.
///
/// Corners win over the body. A selection with no visible area never
/// captures the pointer.
pub fn hit_test(selection: Option<&Rect>, p: Point, handle_radius: f64) -> Hit {
    let Some(r) = selection.filter(|r| r.has_area()) else {
        return Hit::Background;
    };

    if let Some(h) = corner_hit(r, p, handle_radius) {
        return Hit::Handle(h);
    }

    if r.contains(p) {
        Hit::Body
    } else {
        Hit::Background
    }
}
