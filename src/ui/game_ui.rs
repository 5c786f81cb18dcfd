//! Derived game views
//!
//! Text renderings of the move list and the clocks, kept as resources so any
//! front end can read them. Both are rebuilt only in frames where the
//! [`GameSession`] changed, and only written when the text actually differs,
//! so `resource_changed::<MoveListView>` fires exactly when the move list a
//! player would see is different.

use bevy::prelude::*;

use crate::game::components::PieceColor;
use crate::game::resources::{format_clock, GameOverState, GameSession, MoveLedger, TurnClock};

/// Numbered move list, one line per full move
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveListView {
    lines: Vec<String>,
}

impl MoveListView {
    pub fn from_ledger(ledger: &MoveLedger) -> Self {
        let lines = ledger
            .pairs()
            .iter()
            .enumerate()
            .map(|(i, pair)| {
                let mut line = format!("{}.", i + 1);
                for half in [&pair.white, &pair.black].into_iter().flatten() {
                    line.push(' ');
                    line.push_str(half);
                }
                line
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Formatted clocks and turn indicator
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    pub white: String,
    pub black: String,
    pub side_to_move: PieceColor,
    pub running: bool,
    pub timed: bool,
}

impl Default for ClockView {
    fn default() -> Self {
        Self::from_clock(&TurnClock::default())
    }
}

impl ClockView {
    pub fn from_clock(clock: &TurnClock) -> Self {
        Self {
            white: format_clock(clock.white_seconds()),
            black: format_clock(clock.black_seconds()),
            side_to_move: clock.side_to_move(),
            running: clock.is_running(),
            timed: clock.is_timed(),
        }
    }

    /// One-line status, e.g. `White 04:55 | Black 05:00 | White to move`
    pub fn status_line(&self) -> String {
        let mut status = format!(
            "White {} | Black {} | {} to move",
            self.white, self.black, self.side_to_move
        );
        if !self.timed {
            status.push_str(" | untimed");
        } else if !self.running {
            status.push_str(" | paused");
        }
        status
    }
}

/// System rebuilding the move list
pub fn refresh_move_list_view(session: Res<GameSession>, mut view: ResMut<MoveListView>) {
    view.set_if_neq(MoveListView::from_ledger(session.ledger()));
}

/// System rebuilding the clock view
pub fn refresh_clock_view(session: Res<GameSession>, mut view: ResMut<ClockView>) {
    view.set_if_neq(ClockView::from_clock(session.clock()));
}

/// Final result line, if the game has ended
pub fn result_line(game_over: &GameOverState) -> Option<&'static str> {
    game_over.is_game_over().then(|| game_over.message())
}
