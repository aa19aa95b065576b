// Author: Dustin Pilgrim
// License: MIT

//! Request bodies handed to the capture service. Sending them is the
//! caller's job; everything here is synchronous.

use serde::{Deserialize, Serialize};

use crate::calibration::Calibration;
use crate::error::{Result, SelectError};
use crate::frame::ImageFrame;
use crate::mapper::map_to_native;
use crate::rect::{NativePoint, NativeRect, Rect};

/// Body for capture-with-region. Without a region the service grabs the
/// full frame, so the `x, y, w, h` keys are left out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapRequest {
    pub filename: String,

    #[serde(flatten)]
    pub region: Option<NativeRect>,
}

/// Body for crop-with-region; a region is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropRequest {
    pub filename: String,

    #[serde(flatten)]
    pub region: NativeRect,
}

/// Device resolution as reported by the device-size endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swipe {
    pub start: NativePoint,
    pub end: NativePoint,
}

impl DeviceSize {
    /// Default swipe: from the centre up by a quarter of the height.
    /// `None` until the device reports a real size.
    pub fn default_swipe(&self) -> Option<Swipe> {
        if self.width <= 0 || self.height <= 0 {
            return None;
        }

        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let cx = (w / 2.0).floor() as i32;

        Some(Swipe {
            start: NativePoint {
                x: cx,
                y: (h / 2.0).floor() as i32,
            },
            end: NativePoint {
                x: cx,
                y: (h / 2.0 - h / 4.0).floor() as i32,
            },
        })
    }
}

/// Build a snapshot body. Any selection without area means full frame.
pub fn snap_request(
    filename: impl Into<String>,
    selection: Option<&Rect>,
    frame: &ImageFrame,
    cal: &Calibration,
) -> Result<SnapRequest> {
    let region = match selection.filter(|r| r.has_area()) {
        Some(r) => Some(map_to_native(r, frame, cal)?),
        None => None,
    };

    Ok(SnapRequest {
        filename: filename.into(),
        region,
    })
}

/// Build a crop body. Fails with [`SelectError::NoSelection`] when there is
/// nothing (or nothing with area) to crop to.
pub fn crop_request(
    filename: impl Into<String>,
    selection: Option<&Rect>,
    frame: &ImageFrame,
    cal: &Calibration,
) -> Result<CropRequest> {
    let r = selection
        .filter(|r| r.has_area())
        .ok_or(SelectError::NoSelection)?;

    Ok(CropRequest {
        filename: filename.into(),
        region: map_to_native(r, frame, cal)?,
    })
}
