//! Interactive prompt that applies moves to a cube as they are typed.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use cube3_core::{CubeError, CubeState, Move, parse_moves};
use itertools::Itertools;

use crate::prefs::KeyAction;
use crate::render::Renderer;

const HELP_TEXT: &str = "\
Enter a sequence of moves such as `R U R' U'`, or a single bound key.
Faces are U D L R F B. Suffix ' turns counterclockwise and 2 turns twice.
Commands: reset, keys, help, quit";

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Nothing,
    Moves(Vec<Move>),
    Reset,
    Keys,
    Help,
    Quit,
}

/// Parses a line of input. A line consisting of exactly one bound key runs
/// that key's action, even if the key is whitespace.
pub(crate) fn parse_line(
    line: &str,
    keymap: &HashMap<char, KeyAction>,
) -> Result<Command, CubeError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut chars = line.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        match keymap.get(&c) {
            Some(KeyAction::Move(m)) => return Ok(Command::Moves(vec![*m])),
            Some(KeyAction::Reset) => return Ok(Command::Reset),
            None => (),
        }
    }

    Ok(match line.trim() {
        "" => Command::Nothing,
        "quit" | "exit" => Command::Quit,
        "help" => Command::Help,
        "keys" => Command::Keys,
        "reset" => Command::Reset,
        other => Command::Moves(parse_moves(other)?),
    })
}

/// Returns one line per bound key, sorted by key.
pub(crate) fn keymap_legend(keymap: &HashMap<char, KeyAction>) -> String {
    keymap
        .iter()
        .sorted_by_key(|&(&key, _)| key)
        .map(|(key, action)| {
            let action = match action {
                KeyAction::Move(m) => m.to_string(),
                KeyAction::Reset => "reset".to_owned(),
            };
            format!("{key:?} => {action}")
        })
        .join("\n")
}

/// Runs the prompt until `quit` or end of input, returning the number of
/// moves applied.
pub(crate) fn run(
    cube: &mut CubeState,
    keymap: &HashMap<char, KeyAction>,
    renderer: &Renderer,
    input: impl BufRead,
    mut output: impl Write,
) -> eyre::Result<usize> {
    let mut moves_applied = 0;

    writeln!(output, "{}", renderer.net(cube))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line, keymap) {
            Ok(Command::Nothing) => (),
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{HELP_TEXT}")?,
            Ok(Command::Keys) => writeln!(output, "{}", keymap_legend(keymap))?,
            Ok(Command::Reset) => {
                cube.reset();
                writeln!(output, "{}", renderer.net(cube))?;
            }
            Ok(Command::Moves(moves)) => {
                for &m in &moves {
                    cube.apply(m);
                }
                moves_applied += moves.len();
                writeln!(output, "{}", renderer.net(cube))?;
                writeln!(output, "{}", renderer.status(cube))?;
            }
            Err(e) => {
                log::warn!("rejected input {line:?}: {e}");
                writeln!(output, "error: {e}")?;
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(moves_applied)
}
