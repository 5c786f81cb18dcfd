//! Console front end
//!
//! Parses lines typed at the terminal into game messages. The binary owns the
//! stdin thread; this module only knows the command grammar.
//!
//! ```text
//! e2 e4 | e2e4        move
//! undo | redo         queue a history request
//! pause               pause / resume the clock
//! forfeit | new       end the game / start over
//! timer 300 | off     choose a time control
//! preset 1            toggle the second preset
//! moves | clock       print the move list / clocks
//! help | quit
//! ```

use crate::game::events::{GameCommand, MoveAttempt};

/// One parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Move(MoveAttempt),
    Game(GameCommand),
    ShowMoves,
    ShowClock,
    Help,
    Quit,
}

/// Text printed by `help`
pub const HELP: &str = "\
commands:
  e2 e4 | e2e4      move a piece
  undo | redo       take back / replay a move
  pause             pause or resume the clock
  forfeit           resign as the side to move
  new               start a new game
  timer <secs|off>  choose a time control
  preset <n>        toggle time control preset n
  moves | clock     show the move list / clocks
  quit";

/// Parse a console line
///
/// Returns `Ok(None)` for blank lines. Squares are not validated here; a
/// malformed square reaches the move applier and is rejected there.
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let command = match words.as_slice() {
        [] => return Ok(None),
        ["undo"] => ConsoleCommand::Game(GameCommand::Undo),
        ["redo"] => ConsoleCommand::Game(GameCommand::Redo),
        ["pause"] => ConsoleCommand::Game(GameCommand::TogglePause),
        ["forfeit"] => ConsoleCommand::Game(GameCommand::Forfeit),
        ["new"] => ConsoleCommand::Game(GameCommand::NewGame),
        ["timer", "off"] => ConsoleCommand::Game(GameCommand::SelectTimer(None)),
        ["timer", secs] => {
            let secs: u32 = secs
                .parse()
                .map_err(|_| format!("invalid timer value: {secs}"))?;
            ConsoleCommand::Game(GameCommand::SelectTimer((secs > 0).then_some(secs)))
        }
        ["preset", n] => {
            let n: usize = n.parse().map_err(|_| format!("invalid preset: {n}"))?;
            ConsoleCommand::Game(GameCommand::TogglePreset(n.saturating_sub(1)))
        }
        ["moves"] => ConsoleCommand::ShowMoves,
        ["clock"] => ConsoleCommand::ShowClock,
        ["help"] => ConsoleCommand::Help,
        ["quit"] | ["exit"] => ConsoleCommand::Quit,
        [from, to] => ConsoleCommand::Move(MoveAttempt::new(*from, *to)),
        [joined] if joined.len() == 4 && joined.is_ascii() => {
            let (from, to) = joined.split_at(2);
            ConsoleCommand::Move(MoveAttempt::new(from, to))
        }
        _ => return Err(format!("unknown command: {}", line.trim())),
    };
    Ok(Some(command))
}
