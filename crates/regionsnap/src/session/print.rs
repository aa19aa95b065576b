// Author: Dustin Pilgrim
// License: MIT

use serde_json::Value;

use super::view::Outgoing;

/// One JSON object per line on stdout, ready to POST.
pub fn print_outgoing(out: &Outgoing) -> Result<(), String> {
    let value = match out {
        Outgoing::Snap(req) => serde_json::to_value(req),
        Outgoing::Crop(req) => serde_json::to_value(req),
    }
    .map_err(|e| format!("encode request: {e}"))?;

    print_json(&value)
}

pub fn print_json(value: &Value) -> Result<(), String> {
    let line = serde_json::to_string(value).map_err(|e| format!("encode json: {e}"))?;
    println!("{line}");
    Ok(())
}
