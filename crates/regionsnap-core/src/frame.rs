// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectError};

/// Displayed vs natural size of the bound image, read at action time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageFrame {
    pub displayed_width: f64,
    pub displayed_height: f64,
    pub native_width: f64,
    pub native_height: f64,
}

impl ImageFrame {
    pub const fn new(
        displayed_width: f64,
        displayed_height: f64,
        native_width: f64,
        native_height: f64,
    ) -> Self {
        Self {
            displayed_width,
            displayed_height,
            native_width,
            native_height,
        }
    }

    /// Loaded means natural size is known and the element has a width.
    pub fn is_ready(&self) -> bool {
        positive(self.native_width)
            && positive(self.native_height)
            && positive(self.displayed_width)
    }

    /// Displayed-to-native scale. Aspect ratio is preserved, so one factor
    /// (from the widths) covers both axes.
    pub fn scale(&self) -> Result<f64> {
        if !self.is_ready() {
            return Err(SelectError::FrameNotReady);
        }
        Ok(self.native_width / self.displayed_width)
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
