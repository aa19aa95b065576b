// Author: Dustin Pilgrim
// License: MIT

use crate::calibration::Calibration;
use crate::error::Result;
use crate::frame::ImageFrame;
use crate::rect::{NativeRect, Rect, round_half_up};

/// Map a displayed-space selection onto the image's native pixels.
///
/// `frame` must be read fresh at action time; the viewport may have been
/// resized since the selection was drawn.
///
/// Clamping covers `x`, `y` (>= 0) and `w` (>= 1). `h` is passed through
/// as computed, which matches what the capture backend has always received.
pub fn map_to_native(rect: &Rect, frame: &ImageFrame, cal: &Calibration) -> Result<NativeRect> {
    let scale = frame.scale()?;

    let x = scaled(rect.x, scale);
    let y = scaled(rect.y, scale).saturating_add(cal.offset_y);
    let w = scaled(rect.w, scale).saturating_add(cal.offset_w);
    let h = scaled(rect.h, scale).saturating_add(cal.offset_h);

    Ok(NativeRect {
        x: x.max(0),
        y: y.max(0),
        w: w.max(1),
        h,
    })
}

fn scaled(v: f64, scale: f64) -> i32 {
    round_half_up(v * scale) as i32
}
