// Author: Dustin Pilgrim
// License: MIT

use crate::direction::Direction;
use crate::error::{Result, SelectError};
use crate::handle::Handle;
use crate::hit::{HANDLE_RADIUS, Hit, hit_test};
use crate::mode::Interaction;
use crate::rect::{Point, Rect};

/// Owns one selection rectangle and the gesture currently acting on it.
///
/// Create one per bound image; views never share a controller.
/// All points are relative to the image's rendered top-left corner.
#[derive(Debug, Clone)]
pub struct SelectionController {
    rect: Option<Rect>,
    mode: Interaction,
    handle_radius: f64,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            rect: None,
            mode: Interaction::Idle,
            handle_radius: HANDLE_RADIUS,
        }
    }

    pub fn with_handle_radius(mut self, radius: f64) -> Self {
        self.handle_radius = radius.max(0.0);
        self
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn mode(&self) -> Interaction {
        self.mode
    }

    pub fn handle_radius(&self) -> f64 {
        self.handle_radius
    }

    /// Replace the selection outright (e.g. restoring a saved region).
    pub fn set_rect(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }

    /// Route a pointer-down to draw, move or resize depending on what it hit.
    pub fn pointer_down(&mut self, p: Point) -> Hit {
        let hit = hit_test(self.rect.as_ref(), p, self.handle_radius);
        // hit_test only reports Body/Handle when a rect exists, so these
        // begin_* calls can't fail.
        let started = match hit {
            Hit::Handle(h) => self.begin_resize(h, p),
            Hit::Body => self.begin_move(p),
            Hit::Background => {
                self.begin_draw(p);
                Ok(())
            }
        };
        debug_assert!(started.is_ok());
        hit
    }

    /// Start a fresh rectangle at `p`, dropping the old one.
    pub fn begin_draw(&mut self, p: Point) {
        self.rect = Some(Rect::at(p));
        self.mode = Interaction::Drawing { anchor: p };
    }

    pub fn begin_move(&mut self, p: Point) -> Result<()> {
        let r = self.rect.ok_or(SelectError::NoSelection)?;
        self.mode = Interaction::Moving {
            offset: p - r.top_left(),
        };
        Ok(())
    }

    pub fn begin_resize(&mut self, handle: Handle, _p: Point) -> Result<()> {
        if self.rect.is_none() {
            return Err(SelectError::NoSelection);
        }
        self.mode = Interaction::Resizing(handle);
        Ok(())
    }

    /// Like [`begin_resize`](Self::begin_resize) for handle names coming
    /// from outside (`"nw"`, `"ne"`, `"sw"`, `"se"`).
    pub fn begin_resize_named(&mut self, handle: &str, p: Point) -> Result<()> {
        let handle: Handle = handle.parse()?;
        self.begin_resize(handle, p)
    }

    pub fn on_pointer_move(&mut self, p: Point) {
        match self.mode {
            Interaction::Idle => {}

            Interaction::Drawing { anchor } => {
                self.rect = Some(Rect::new(
                    anchor.x.min(p.x),
                    anchor.y.min(p.y),
                    (p.x - anchor.x).abs(),
                    (p.y - anchor.y).abs(),
                ));
            }

            Interaction::Moving { offset } => {
                if let Some(r) = self.rect.as_mut() {
                    r.x = p.x - offset.x;
                    r.y = p.y - offset.y;
                }
            }

            Interaction::Resizing(handle) => {
                if let Some(r) = self.rect.as_mut() {
                    *r = resize(*r, handle, p);
                }
            }
        }
    }

    /// Pointer-up: commit whatever is there and go idle.
    pub fn end(&mut self) {
        self.mode = Interaction::Idle;
    }

    pub fn clear(&mut self) {
        self.rect = None;
        self.mode = Interaction::Idle;
    }

    /// Arrow-key adjustment by one pixel. `resize` (Shift held) grows or
    /// shrinks the size instead of moving. Works regardless of gesture.
    pub fn nudge(&mut self, dir: Direction, resize: bool) -> Result<Rect> {
        let r = self.rect.as_mut().ok_or(SelectError::NoSelection)?;
        let (dx, dy) = dir.delta();

        if resize {
            r.w += dx;
            r.h += dy;
        } else {
            r.x += dx;
            r.y += dy;
        }

        r.w = r.w.max(1.0);
        r.h = r.h.max(1.0);
        Ok(*r)
    }
}

/// Move the dragged corner to `p` while the opposite corner stays fixed.
///
/// A guarded edge (left for `nw`/`sw`, top for `nw`/`ne`) refuses to cross
/// the fixed corner and simply holds for that tick. The other edges follow
/// the pointer freely; whatever goes negative is floored to zero at the end.
fn resize(r: Rect, handle: Handle, p: Point) -> Rect {
    let (mut x, mut y, mut w, mut h) = (r.x, r.y, r.w, r.h);

    let (guard_left, guard_top) = match handle {
        Handle::Nw => (true, true),
        Handle::Ne => (false, true),
        Handle::Sw => (true, false),
        Handle::Se => (false, false),
    };

    if guard_left {
        (x, w) = guarded_edge(x, w, p.x);
    } else {
        w = p.x - x;
    }

    if guard_top {
        (y, h) = guarded_edge(y, h, p.y);
    } else {
        h = p.y - y;
    }

    Rect::new(x, y, w.max(0.0), h.max(0.0))
}

fn guarded_edge(start: f64, extent: f64, at: f64) -> (f64, f64) {
    let candidate = (start + extent) - at;
    if candidate > 0.0 {
        (at, candidate)
    } else {
        (start, extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed(x: f64, y: f64, w: f64, h: f64) -> SelectionController {
        let mut c = SelectionController::new();
        c.set_rect(Some(Rect::new(x, y, w, h)));
        c
    }

    #[test]
    fn draw_starts_empty() {
        let mut c = SelectionController::new();
        c.begin_draw(Point::new(5.0, 6.0));
        assert_eq!(c.rect(), Some(Rect::new(5.0, 6.0, 0.0, 0.0)));
        assert_eq!(
            c.mode(),
            Interaction::Drawing {
                anchor: Point::new(5.0, 6.0)
            }
        );
    }

    #[test]
    fn draw_normalizes_up_and_left() {
        let mut c = SelectionController::new();
        c.begin_draw(Point::new(100.0, 100.0));
        c.on_pointer_move(Point::new(40.0, 70.0));
        assert_eq!(c.rect(), Some(Rect::new(40.0, 70.0, 60.0, 30.0)));
    }

    #[test]
    fn draw_replaces_previous_selection() {
        let mut c = committed(0.0, 0.0, 50.0, 50.0);
        c.begin_draw(Point::new(200.0, 200.0));
        assert_eq!(c.rect(), Some(Rect::new(200.0, 200.0, 0.0, 0.0)));
    }

    #[test]
    fn end_keeps_rect_and_goes_idle() {
        let mut c = SelectionController::new();
        c.begin_draw(Point::new(0.0, 0.0));
        c.on_pointer_move(Point::new(10.0, 10.0));
        c.end();
        assert!(c.mode().is_idle());
        assert_eq!(c.rect(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));

        c.on_pointer_move(Point::new(90.0, 90.0));
        assert_eq!(c.rect(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn move_keeps_grab_offset() {
        let mut c = committed(10.0, 10.0, 30.0, 20.0);
        c.begin_move(Point::new(15.0, 12.0)).unwrap();
        c.on_pointer_move(Point::new(-5.0, 2.0));
        assert_eq!(c.rect(), Some(Rect::new(-10.0, 0.0, 30.0, 20.0)));
    }

    #[test]
    fn move_without_selection_fails() {
        let mut c = SelectionController::new();
        assert_eq!(c.begin_move(Point::new(1.0, 1.0)), Err(SelectError::NoSelection));
        assert!(c.mode().is_idle());
    }

    #[test]
    fn nw_holds_edge_instead_of_crossing() {
        let mut c = committed(10.0, 10.0, 20.0, 20.0);
        c.begin_resize(Handle::Nw, Point::new(10.0, 10.0)).unwrap();

        c.on_pointer_move(Point::new(5.0, 15.0));
        assert_eq!(c.rect(), Some(Rect::new(5.0, 15.0, 25.0, 15.0)));

        // past the fixed bottom-right corner on x: left edge holds
        c.on_pointer_move(Point::new(40.0, 20.0));
        assert_eq!(c.rect(), Some(Rect::new(5.0, 20.0, 25.0, 10.0)));
    }

    #[test]
    fn ne_free_width_floors_at_zero() {
        let mut c = committed(10.0, 10.0, 20.0, 20.0);
        c.begin_resize(Handle::Ne, Point::new(30.0, 10.0)).unwrap();

        c.on_pointer_move(Point::new(50.0, 0.0));
        assert_eq!(c.rect(), Some(Rect::new(10.0, 0.0, 40.0, 30.0)));

        c.on_pointer_move(Point::new(0.0, 50.0));
        assert_eq!(c.rect(), Some(Rect::new(10.0, 0.0, 0.0, 30.0)));
    }

    #[test]
    fn sw_free_height_floors_at_zero() {
        let mut c = committed(10.0, 10.0, 20.0, 20.0);
        c.begin_resize(Handle::Sw, Point::new(10.0, 30.0)).unwrap();

        c.on_pointer_move(Point::new(0.0, 5.0));
        assert_eq!(c.rect(), Some(Rect::new(0.0, 10.0, 30.0, 0.0)));
    }

    #[test]
    fn se_past_origin_is_zero_sized() {
        let mut c = committed(10.0, 10.0, 20.0, 20.0);
        c.begin_resize(Handle::Se, Point::new(30.0, 30.0)).unwrap();
        c.on_pointer_move(Point::new(5.0, 5.0));
        c.end();
        assert_eq!(c.rect(), Some(Rect::new(10.0, 10.0, 0.0, 0.0)));
    }

    #[test]
    fn named_resize_rejects_unknown_handle() {
        let mut c = committed(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            c.begin_resize_named("middle", Point::new(0.0, 0.0)),
            Err(SelectError::InvalidHandle("middle".into()))
        );
        assert!(c.mode().is_idle());

        c.begin_resize_named("se", Point::new(10.0, 10.0)).unwrap();
        assert_eq!(c.mode(), Interaction::Resizing(Handle::Se));
    }

    #[test]
    fn nudge_moves_and_resizes() {
        let mut c = committed(10.0, 10.0, 5.0, 5.0);
        assert_eq!(c.nudge(Direction::Right, false), Ok(Rect::new(11.0, 10.0, 5.0, 5.0)));
        assert_eq!(c.nudge(Direction::Up, false), Ok(Rect::new(11.0, 9.0, 5.0, 5.0)));
        assert_eq!(c.nudge(Direction::Down, true), Ok(Rect::new(11.0, 9.0, 5.0, 6.0)));
        assert_eq!(c.nudge(Direction::Left, true), Ok(Rect::new(11.0, 9.0, 4.0, 6.0)));
    }

    #[test]
    fn nudge_keeps_size_at_least_one() {
        let mut c = committed(0.0, 0.0, 1.0, 1.0);
        for _ in 0..5 {
            c.nudge(Direction::Left, true).unwrap();
            c.nudge(Direction::Up, true).unwrap();
        }
        assert_eq!(c.rect(), Some(Rect::new(0.0, 0.0, 1.0, 1.0)));

        // a collapsed rect becomes visible again on any nudge
        let mut c = committed(0.0, 0.0, 0.0, 0.0);
        c.nudge(Direction::Right, false).unwrap();
        assert_eq!(c.rect(), Some(Rect::new(1.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn nudge_without_selection_fails() {
        let mut c = SelectionController::new();
        assert_eq!(c.nudge(Direction::Left, false), Err(SelectError::NoSelection));
    }

    #[test]
    fn nudge_during_gesture_does_not_end_it() {
        let mut c = committed(0.0, 0.0, 10.0, 10.0);
        c.begin_move(Point::new(5.0, 5.0)).unwrap();
        c.nudge(Direction::Right, false).unwrap();
        assert!(matches!(c.mode(), Interaction::Moving { .. }));
    }

    #[test]
    fn pointer_down_dispatches_by_hit() {
        let mut c = committed(100.0, 100.0, 100.0, 100.0);

        assert_eq!(c.pointer_down(Point::new(199.0, 201.0)), Hit::Handle(Handle::Se));
        assert_eq!(c.mode().handle(), Some(Handle::Se));
        c.end();

        assert_eq!(c.pointer_down(Point::new(150.0, 150.0)), Hit::Body);
        assert!(matches!(c.mode(), Interaction::Moving { .. }));
        c.end();

        assert_eq!(c.pointer_down(Point::new(10.0, 10.0)), Hit::Background);
        assert_eq!(c.rect(), Some(Rect::new(10.0, 10.0, 0.0, 0.0)));
    }

    #[test]
    fn clear_drops_rect_and_gesture() {
        let mut c = committed(0.0, 0.0, 10.0, 10.0);
        c.begin_move(Point::new(1.0, 1.0)).unwrap();
        c.clear();
        assert_eq!(c.rect(), None);
        assert!(c.mode().is_idle());
    }
}
