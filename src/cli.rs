//! Interactive sample REPL
//!
//! Feeds hand-typed pointer samples into one or more joystick instances:
//! `down X Y`, `move X Y`, `up`, `cancel`, `state`, `exit`.

use anyhow::Result;
use rustyline::DefaultEditor;
use tracing::warn;

use crate::tracker::{DragPhase, JoystickTracker, PointerSample};

enum Command {
    Sample(PointerSample),
    State,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "state" => Some(Command::State),
        "up" => Some(Command::Sample(PointerSample::new(DragPhase::Up, 0.0, 0.0))),
        "cancel" => Some(Command::Sample(PointerSample::new(
            DragPhase::Cancel,
            0.0,
            0.0,
        ))),
        word @ ("down" | "move") => {
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            let phase = if word == "down" {
                DragPhase::Down
            } else {
                DragPhase::Move
            };
            Some(Command::Sample(PointerSample::new(phase, x, y)))
        }
        _ => None,
    }
}

fn print_state(name: &str, tracker: &JoystickTracker) {
    let out = tracker.monitor().output();
    println!(
        "{}: thumb=({:.2}, {:.2}) emit=({:.2}, {:.2}) polar=({:.1}°, {:.2})",
        name,
        out.displayed.x,
        out.displayed.y,
        out.emitted.x,
        out.emitted.y,
        out.polar.degrees,
        out.polar.distance
    );
}

/// Run the REPL over a set of named joystick instances. Every sample is fed
/// to all of them so differing configurations can be compared side by side.
pub fn run_repl(joysticks: &mut [(String, JoystickTracker)]) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline("joystick> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line == "exit" || line == "quit" {
                    break;
                }
                if line.is_empty() {
                    continue;
                }
                match parse_command(line) {
                    Some(Command::Sample(sample)) => {
                        for (_, tracker) in joysticks.iter_mut() {
                            tracker.handle(sample);
                        }
                    }
                    Some(Command::State) => {
                        for (name, tracker) in joysticks.iter() {
                            print_state(name, tracker);
                        }
                    }
                    None => warn!("Unrecognized command: {}", line),
                }
            }
            Err(_) => break,
        }
    }

    Ok(())
}
