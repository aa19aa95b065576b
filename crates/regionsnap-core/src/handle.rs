// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "clap")]
use clap::ValueEnum;

use crate::error::SelectError;
use crate::rect::{Point, Rect};

/// Corner handle of a committed selection.
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Handle {
    pub const ALL: [Handle; 4] = [Handle::Nw, Handle::Ne, Handle::Sw, Handle::Se];

    pub fn as_str(self) -> &'static str {
        match self {
            Handle::Nw => "nw",
            Handle::Ne => "ne",
            Handle::Sw => "sw",
            Handle::Se => "se",
        }
    }

    /// Where this handle sits on `r`.
    pub fn position(self, r: &Rect) -> Point {
        match self {
            Handle::Nw => Point::new(r.x, r.y),
            Handle::Ne => Point::new(r.right(), r.y),
            Handle::Sw => Point::new(r.x, r.bottom()),
            Handle::Se => Point::new(r.right(), r.bottom()),
        }
    }

    /// The corner that stays put while this handle is dragged.
    pub fn opposite(self) -> Handle {
        match self {
            Handle::Nw => Handle::Se,
            Handle::Ne => Handle::Sw,
            Handle::Sw => Handle::Ne,
            Handle::Se => Handle::Nw,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handle {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nw" => Ok(Handle::Nw),
            "ne" => Ok(Handle::Ne),
            "sw" => Ok(Handle::Sw),
            "se" => Ok(Handle::Se),
            _ => Err(SelectError::InvalidHandle(s.to_string())),
        }
    }
}
