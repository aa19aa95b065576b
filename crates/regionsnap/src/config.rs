// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use rune_cfg::RuneConfig;

use regionsnap_core::Calibration;
use regionsnap_core::hit::HANDLE_RADIUS;

use crate::cli::CalibrationArgs;

#[derive(Debug, Clone)]
pub struct RegionsnapConfig {
    /// Live-stream correction; the gallery never uses it.
    pub calibration: Calibration,
    pub handle_radius: f64,
}

impl Default for RegionsnapConfig {
    fn default() -> Self {
        Self {
            calibration: Calibration::OBSERVED,
            handle_radius: HANDLE_RADIUS,
        }
    }
}

impl RegionsnapConfig {
    /// Command-line offsets win over the file.
    pub fn apply_overrides(&mut self, args: &CalibrationArgs) {
        if let Some(v) = args.offset_y {
            self.calibration.offset_y = v;
        }
        if let Some(v) = args.offset_w {
            self.calibration.offset_w = v;
        }
        if let Some(v) = args.offset_h {
            self.calibration.offset_h = v;
        }
    }
}

pub fn load(path: &Path) -> Result<RegionsnapConfig, String> {
    if !path.exists() {
        return Ok(RegionsnapConfig::default());
    }

    let rc = RuneConfig::from_file(path).map_err(|e| format!("failed to read config: {e}"))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<RegionsnapConfig, String> {
    let mut cfg = RegionsnapConfig::default();

    if !rc.has("regionsnap") {
        return Ok(cfg);
    }

    if let Some(v) = get_offset(rc, "regionsnap.calibration.offset_y")? {
        cfg.calibration.offset_y = v;
    }
    if let Some(v) = get_offset(rc, "regionsnap.calibration.offset_w")? {
        cfg.calibration.offset_w = v;
    }
    if let Some(v) = get_offset(rc, "regionsnap.calibration.offset_h")? {
        cfg.calibration.offset_h = v;
    }

    let key = "regionsnap.handle_radius";
    if let Some(v) = get_value(rc, key)? {
        cfg.handle_radius = parse_radius(&v).map_err(|e| format!("config error at {key}: {e}"))?;
    }

    Ok(cfg)
}

/// A numeric setting as written in the file.
///
/// RUNE numbers can't carry a sign, so negative values have to be quoted
/// (`offset_y "-2"`). Both spellings end up here.
#[derive(Debug, Clone, PartialEq)]
enum RawValue {
    Number(f64),
    Text(String),
}

fn get_value(rc: &RuneConfig, key: &str) -> Result<Option<RawValue>, String> {
    // quoted first, then bare number
    if let Ok(v) = rc.get_optional::<String>(key) {
        return Ok(v.map(RawValue::Text));
    }

    rc.get_optional::<f64>(key)
        .map(|v| v.map(RawValue::Number))
        .map_err(|e| format!("config error at {key}: {e}"))
}

fn get_offset(rc: &RuneConfig, key: &str) -> Result<Option<i32>, String> {
    let Some(v) = get_value(rc, key)? else {
        return Ok(None);
    };

    parse_offset(&v)
        .map(Some)
        .map_err(|e| format!("config error at {key}: {e}"))
}

fn parse_offset(v: &RawValue) -> Result<i32, String> {
    match v {
        RawValue::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("expected a whole number of pixels, got \"{s}\"")),
        RawValue::Number(n) => {
            if !n.is_finite() || n.fract() != 0.0 {
                return Err(format!("expected a whole number of pixels, got {n}"));
            }
            if *n < f64::from(i32::MIN) || *n > f64::from(i32::MAX) {
                return Err(format!("offset {n} out of range"));
            }
            Ok(*n as i32)
        }
    }
}

fn parse_radius(v: &RawValue) -> Result<f64, String> {
    let r = match v {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("expected a number, got \"{s}\""))?,
    };

    if r.is_finite() && r >= 0.0 {
        Ok(r)
    } else {
        Err(format!("expected a non-negative radius, got {r}"))
    }
}
