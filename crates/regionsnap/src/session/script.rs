// Author: Dustin Pilgrim
// License: MIT

//! Gesture scripts: one pointer/keyboard event per line.
//!
//! ```text
//! frame 540 960 1080 1920   # displayed w h, native w h
//! down 100 120              # pointer-down, routed by hit test
//! move 180 200
//! up
//! key right shift
//! snap
//! ```

use regionsnap_core::{Direction, Point};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Frame {
        displayed_width: f64,
        displayed_height: f64,
        native_width: f64,
        native_height: f64,
    },
    Down(Point),
    Draw(Point),
    Grab(Point),
    /// Handle name stays raw; it's validated when the gesture starts.
    Resize(String, Point),
    Move(Point),
    Up,
    Key { dir: Direction, shift: bool },
    Clear,
    Snap,
    Crop,
}

pub fn parse_script(src: &str) -> Result<Vec<Step>, String> {
    let mut steps = Vec::new();

    for (idx, raw) in src.lines().enumerate() {
        let line = match raw.split_once('#') {
            Some((code, _)) => code,
            None => raw,
        }
        .trim();

        if line.is_empty() {
            continue;
        }

        let step = parse_line(line).map_err(|e| format!("line {}: {e}", idx + 1))?;
        steps.push(step);
    }

    Ok(steps)
}

fn parse_line(line: &str) -> Result<Step, String> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Err("empty line".into());
    };
    let rest: Vec<&str> = words.collect();

    let step = match cmd.to_ascii_lowercase().as_str() {
        "frame" => {
            let [dw, dh, nw, nh] = numbers::<4>(&rest)?;
            Step::Frame {
                displayed_width: dw,
                displayed_height: dh,
                native_width: nw,
                native_height: nh,
            }
        }
        "down" => Step::Down(point(&rest)?),
        "draw" => Step::Draw(point(&rest)?),
        "grab" => Step::Grab(point(&rest)?),
        "resize" => {
            let Some((handle, coords)) = rest.split_first() else {
                return Err("resize needs a handle and x y".into());
            };
            Step::Resize(handle.to_string(), point(coords)?)
        }
        "move" => Step::Move(point(&rest)?),
        "up" => bare(Step::Up, &rest)?,
        "key" => key(&rest)?,
        "clear" => bare(Step::Clear, &rest)?,
        "snap" => bare(Step::Snap, &rest)?,
        "crop" => bare(Step::Crop, &rest)?,
        other => return Err(format!("unknown event \"{other}\"")),
    };

    Ok(step)
}

fn bare(step: Step, rest: &[&str]) -> Result<Step, String> {
    if rest.is_empty() {
        Ok(step)
    } else {
        Err(format!("unexpected arguments: {}", rest.join(" ")))
    }
}

fn point(rest: &[&str]) -> Result<Point, String> {
    let [x, y] = numbers::<2>(rest)?;
    Ok(Point::new(x, y))
}

fn numbers<const N: usize>(rest: &[&str]) -> Result<[f64; N], String> {
    if rest.len() != N {
        return Err(format!("expected {N} numbers, got {}", rest.len()));
    }

    let mut out = [0.0; N];
    for (slot, word) in out.iter_mut().zip(rest) {
        *slot = word
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid number \"{word}\""))?;
    }
    Ok(out)
}

fn key(rest: &[&str]) -> Result<Step, String> {
    let (dir, shift) = match rest {
        [dir] => (*dir, false),
        [dir, m] if m.eq_ignore_ascii_case("shift") => (*dir, true),
        _ => return Err("expected: key left|right|up|down [shift]".into()),
    };

    let dir = match dir.to_ascii_lowercase().as_str() {
        "left" => Direction::Left,
        "right" => Direction::Right,
        "up" => Direction::Up,
        "down" => Direction::Down,
        other => return Err(format!("unknown arrow key \"{other}\"")),
    };

    Ok(Step::Key { dir, shift })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_gesture() {
        let src = "\
            # live view\n\
            frame 500 250 1000 500\n\
            down 10 10\n\
            move 60.5 40   # drag\n\
            up\n\
            key left shift\n\
            resize ne 70 0\n\
            snap\n";

        let steps = parse_script(src).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Frame {
                    displayed_width: 500.0,
                    displayed_height: 250.0,
                    native_width: 1000.0,
                    native_height: 500.0,
                },
                Step::Down(Point::new(10.0, 10.0)),
                Step::Move(Point::new(60.5, 40.0)),
                Step::Up,
                Step::Key {
                    dir: Direction::Left,
                    shift: true
                },
                Step::Resize("ne".into(), Point::new(70.0, 0.0)),
                Step::Snap,
            ]
        );
    }

    #[test]
    fn unknown_handle_name_parses_through() {
        let steps = parse_script("resize top 1 2").unwrap();
        assert_eq!(steps, vec![Step::Resize("top".into(), Point::new(1.0, 2.0))]);
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = parse_script("up\n\nmove 1\n").unwrap_err();
        assert!(err.starts_with("line 3:"), "{err}");

        let err = parse_script("key sideways").unwrap_err();
        assert!(err.contains("sideways"), "{err}");

        let err = parse_script("snap now").unwrap_err();
        assert!(err.contains("unexpected arguments"), "{err}");

        let err = parse_script("jump 1 2").unwrap_err();
        assert!(err.contains("unknown event"), "{err}");
    }
}
