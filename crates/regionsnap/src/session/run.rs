// Author: Dustin Pilgrim
// License: MIT

use std::io::Read;
use std::path::Path;

use eventline::{debug, error, info};

use regionsnap_core::{ImageFrame, Rect, View, map_to_native};

use crate::cli::{Args, Cmd};
use crate::config::{self, RegionsnapConfig};
use crate::paths;

use super::print;
use super::script::parse_script;
use super::view::ViewSession;

pub fn run(args: Args) -> Result<(), String> {
    info!("starting regionsnap");
    debug!("parsed args: {:?}", args.cmd);

    let cfg_path = args.config.clone().unwrap_or_else(paths::default_config_path);
    let mut cfg = config::load(&cfg_path).map_err(|e| {
        error!("{e}");
        format!("{}: {e}", cfg_path.display())
    })?;
    cfg.apply_overrides(&args.calibration);
    debug!("config: {:?}", cfg);

    match args.cmd {
        Cmd::Map {
            displayed_width,
            displayed_height,
            native_width,
            native_height,
            rect,
            view,
        } => {
            let frame =
                ImageFrame::new(displayed_width, displayed_height, native_width, native_height);
            map_one(&cfg, view, &rect, &frame)
        }

        Cmd::Replay {
            script,
            view,
            filename,
        } => replay(&cfg, view, &script, filename),
    }
}

fn map_one(
    cfg: &RegionsnapConfig,
    view: View,
    rect: &Rect,
    frame: &ImageFrame,
) -> Result<(), String> {
    let cal = view.calibration(cfg.calibration);
    let native = map_to_native(rect, frame, &cal).map_err(|e| format!("map failed: {e}"))?;
    info!("mapped {:?} -> {:?}", rect, native);

    let value = serde_json::to_value(native).map_err(|e| format!("encode json: {e}"))?;
    print::print_json(&value)
}

fn replay(
    cfg: &RegionsnapConfig,
    view: View,
    script: &Path,
    filename: String,
) -> Result<(), String> {
    let src = read_script(script)?;
    let steps = parse_script(&src).map_err(|e| format!("{}: {e}", script.display()))?;
    info!("replaying {} events on {:?} view", steps.len(), view);

    let mut session = ViewSession::new(view, filename, cfg.calibration, cfg.handle_radius);
    for step in &steps {
        if let Some(out) = session.apply(step) {
            print::print_outgoing(&out)?;
        }
    }

    debug!("final selection: {:?}", session.controller().rect());
    Ok(())
}

fn read_script(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("read stdin: {e}"))?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).map_err(|e| format!("read {}: {e}", path.display()))
}
