// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

#[cfg(feature = "clap")]
use clap::ValueEnum;

use crate::calibration::Calibration;

/// Image view that owns its own selection.
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Live device stream; snapshots go through the stream calibration.
    Live,

    /// Stored capture; crops are plain scaling.
    Gallery,
}

impl View {
    pub fn calibration(self, live: Calibration) -> Calibration {
        match self {
            View::Live => live,
            View::Gallery => Calibration::NONE,
        }
    }
}
