// Author: Dustin Pilgrim
// License: MIT

use crate::handle::Handle;
use crate::rect::Point;

/// What the pointer is currently doing to the selection.
///
/// Each variant carries the anchor it needs, so a stale anchor from a
/// previous gesture can't leak into the next one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,

    /// Rubber-band from `anchor` (the pointer-down point).
    Drawing { anchor: Point },

    /// Pointer offset from the rectangle's top-left at grab time.
    Moving { offset: Point },

    /// The opposite corner is the anchor, read from the rectangle itself.
    Resizing(Handle),
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn handle(&self) -> Option<Handle> {
        match self {
            Interaction::Resizing(h) => Some(*h),
            _ => None,
        }
    }
}
