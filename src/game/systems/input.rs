//! Game command handling
//!
//! Turns [`GameCommand`] messages into state changes. Undo and redo are only
//! queued here; the move applier performs them later in the frame.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use tracing::{debug, info};

use super::movement::MoveApplier;
use crate::game::events::GameCommand;
use crate::game::resources::*;
use crate::game::rules::BoardPieces;

/// System applying game commands in arrival order
pub fn handle_game_commands(
    mut commands: MessageReader<GameCommand>,
    mut session: ResMut<GameSession>,
    mut board: ResMut<BoardPieces>,
    mut applier: ResMut<MoveApplier>,
    mut game_over: ResMut<GameOverState>,
    mut selection: ResMut<TimerSelection>,
) {
    for command in commands.read() {
        match *command {
            GameCommand::Undo => session.request_undo(),
            GameCommand::Redo => session.request_redo(),
            GameCommand::TogglePause => {
                if game_over.is_game_over() {
                    debug!("[TIMER] Pause ignored: {}", game_over.message());
                    continue;
                }
                session.clock_mut().toggle_running();
                info!(
                    "[TIMER] Clock {}",
                    if session.clock().is_running() {
                        "running"
                    } else {
                        "paused"
                    }
                );
            }
            GameCommand::Forfeit => {
                if game_over.is_game_over() {
                    debug!("[GAME] Forfeit ignored: {}", game_over.message());
                    continue;
                }
                let loser = session.clock().side_to_move();
                *game_over = GameOverState::Forfeit { loser };
                session.clock_mut().freeze();
                info!("[GAME] {} forfeits. {}", loser, game_over.message());
            }
            GameCommand::NewGame => {
                session.new_game();
                board.reset();
                applier.reset();
                *game_over = GameOverState::Playing;
                info!(
                    "[GAME] New game ({})",
                    describe_time_control(session.clock().selected_seconds())
                );
            }
            GameCommand::SelectTimer(seconds) => {
                selection.select_seconds(seconds);
                select_time_control(&mut session, &game_over, seconds);
            }
            GameCommand::TogglePreset(index) => {
                let seconds = selection.toggle(index);
                select_time_control(&mut session, &game_over, seconds);
            }
        }
    }
}

/// Switch time control without handing the move to the wrong side
///
/// A finished game keeps its clock frozen until the next new game.
fn select_time_control(session: &mut GameSession, game_over: &GameOverState, seconds: Option<u32>) {
    let white_to_move = session.clock().is_white_turn();
    session.clock_mut().select_seconds(seconds);
    session.clock_mut().change_turn(Some(white_to_move));
    if game_over.is_game_over() {
        session.clock_mut().freeze();
    }
    info!("[TIMER] Time control: {}", describe_time_control(seconds));
}

fn describe_time_control(seconds: Option<u32>) -> String {
    match seconds {
        Some(s) => TimerSelection::label(s),
        None => "untimed".to_string(),
    }
}
