// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// Fixed correction added after scaling, in native pixels.
///
/// Compensates for the rendered stream frame not lining up with the
/// device's capture frame. Tuned per device/encoder, so always overridable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calibration {
    pub offset_y: i32,
    pub offset_w: i32,
    pub offset_h: i32,
}

impl Calibration {
    /// Offsets measured against the reference device stream.
    pub const OBSERVED: Calibration = Calibration {
        offset_y: -2,
        offset_w: 5,
        offset_h: 10,
    };

    pub const NONE: Calibration = Calibration {
        offset_y: 0,
        offset_w: 0,
        offset_h: 0,
    };
}

impl Default for Calibration {
    fn default() -> Self {
        Self::OBSERVED
    }
}
