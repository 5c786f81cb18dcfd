//! Movement execution system
//!
//! [`MoveApplier`] is the only writer of the board. It asks the referee,
//! moves the piece, records the move in the session and hands the turn over.
//! Undo and redo requests queued on the session are drained here as well, so
//! board and history can never disagree about which moves are on the board.
//!
//! # Move Flow
//!
//! ```text
//! MoveAttempt ─► parse squares ─► source occupied? ─► from != to?
//!             ─► referee.set_move_count(n) ─► referee.is_valid_move(..)
//!             ─► board.relocate ─► history.record ─► ledger.add_move
//!             ─► clock.change_turn ─► n += 1
//! ```
//!
//! Any rejection leaves board, session and `n` untouched.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use tracing::{debug, info, warn};

use crate::game::components::MoveRecord;
use crate::game::error::{GameError, GameResult};
use crate::game::events::MoveAttempt;
use crate::game::resources::{GameOverState, GameSession, HistoryRequest};
use crate::game::rules::{BoardPieces, Referee, RefereeHandle};
use crate::game::types::Square;

/// Applies accepted moves and queued undo/redo requests to the board
#[derive(Resource, Debug, Default)]
pub struct MoveApplier {
    in_flight: bool,
    applied_moves: u32,
}

impl MoveApplier {
    /// Moves currently on the board, as reported to the referee
    pub fn applied_moves(&self) -> u32 {
        self.applied_moves
    }

    /// Whether a move is being applied right now
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Forget the move count (new game)
    pub fn reset(&mut self) {
        self.in_flight = false;
        self.applied_moves = 0;
    }

    /// Validate and apply a single move
    ///
    /// # Errors
    ///
    /// - [`GameError::MoveInProgress`] while another move is being applied
    /// - [`GameError::EmptySquare`] if nothing stands on `from`
    /// - [`GameError::SameSquare`] if `from == to`
    /// - [`GameError::InvalidMove`] if the referee refuses
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        session: &mut GameSession,
        board: &mut BoardPieces,
        referee: &mut dyn Referee,
    ) -> GameResult<MoveRecord> {
        if self.in_flight {
            return Err(GameError::MoveInProgress { from, to });
        }

        self.in_flight = true;
        let result = self.apply(from, to, session, board, referee);
        self.in_flight = false;
        result
    }

    fn apply(
        &mut self,
        from: Square,
        to: Square,
        session: &mut GameSession,
        board: &mut BoardPieces,
        referee: &mut dyn Referee,
    ) -> GameResult<MoveRecord> {
        let piece = board
            .piece_at(from)
            .cloned()
            .ok_or(GameError::EmptySquare { square: from })?;

        if from == to {
            return Err(GameError::SameSquare { square: from });
        }

        let destination = board.piece_at(to).cloned();

        referee.set_move_count(self.applied_moves);
        if !referee.is_valid_move(
            board.grid(),
            from.coords(),
            to.coords(),
            &piece,
            destination.as_ref(),
        ) {
            return Err(GameError::InvalidMove { from, to });
        }

        let captured = board.relocate(from, to);
        let record = MoveRecord::new(from, to, piece, captured);

        session.add_move_details(record.clone());
        session.add_move(record.notation.clone());
        session.clock_mut().change_turn(None);
        self.applied_moves += 1;

        Ok(record)
    }

    /// Drain the session's undo/redo queue in request order
    ///
    /// Returns how many requests changed the board. Requests with nothing to
    /// undo or redo are consumed without effect.
    pub fn process_requests(&mut self, session: &mut GameSession, board: &mut BoardPieces) -> usize {
        let mut applied = 0;
        while let Some(request) = session.next_request() {
            let changed = match request {
                HistoryRequest::Undo => self.undo(session, board),
                HistoryRequest::Redo => self.redo(session, board),
            };
            if changed {
                applied += 1;
            }
        }
        applied
    }

    fn undo(&mut self, session: &mut GameSession, board: &mut BoardPieces) -> bool {
        let Some(record) = session.undo_last() else {
            debug!("[HISTORY] Undo requested with nothing to undo");
            return false;
        };

        board.remove(record.to);
        board.place(record.from, record.piece.clone());
        if let Some(captured) = record.captured.clone() {
            board.place(record.to, captured);
        }

        session.clock_mut().change_turn(None);
        self.applied_moves = self.applied_moves.saturating_sub(1);

        info!(
            "[HISTORY] Undid {} ({} -> {}), {} moves on the board",
            record.notation, record.from, record.to, self.applied_moves
        );
        true
    }

    fn redo(&mut self, session: &mut GameSession, board: &mut BoardPieces) -> bool {
        let Some(record) = session.redo_last() else {
            debug!("[HISTORY] Redo requested with nothing to redo");
            return false;
        };

        board.remove(record.from);
        board.place(record.to, record.piece.clone());

        session.clock_mut().change_turn(None);
        self.applied_moves += 1;

        info!(
            "[HISTORY] Redid {} ({} -> {}), {} moves on the board",
            record.notation, record.from, record.to, self.applied_moves
        );
        true
    }
}

/// System applying move attempts in arrival order
pub fn handle_move_attempts(
    mut attempts: MessageReader<MoveAttempt>,
    mut applier: ResMut<MoveApplier>,
    mut session: ResMut<GameSession>,
    mut board: ResMut<BoardPieces>,
    mut referee: ResMut<RefereeHandle>,
    game_over: Res<GameOverState>,
) {
    for attempt in attempts.read() {
        if game_over.is_game_over() {
            let error = GameError::GameOver {
                reason: game_over.message().to_string(),
            };
            warn!("[MOVE] {} -> {} rejected: {}", attempt.from, attempt.to, error);
            continue;
        }

        let result = attempt.squares().and_then(|(from, to)| {
            applier.try_move(from, to, &mut session, &mut board, referee.0.as_mut())
        });

        match result {
            Ok(record) => info!(
                "[MOVE] {} {} -> {} ({}), move #{}",
                record.piece,
                record.from,
                record.to,
                record.notation,
                session.current_move()
            ),
            Err(error) => warn!("[MOVE] {} -> {} rejected: {}", attempt.from, attempt.to, error),
        }
    }
}

/// System draining queued undo/redo requests
///
/// Requests made after the game ended are discarded.
pub fn apply_history_requests(
    mut applier: ResMut<MoveApplier>,
    mut session: ResMut<GameSession>,
    mut board: ResMut<BoardPieces>,
    game_over: Res<GameOverState>,
) {
    if session.pending_requests() == 0 {
        return;
    }

    if game_over.is_game_over() {
        while let Some(request) = session.next_request() {
            debug!("[HISTORY] {:?} ignored: {}", request, game_over.message());
        }
        return;
    }

    applier.process_requests(&mut session, &mut board);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::{PieceColor, PieceId, PieceType};
    use crate::game::rules::{MovementReferee, PermissiveReferee};

    fn sq(id: &str) -> Square {
        Square::from_algebraic(id).unwrap()
    }

    struct Fixture {
        applier: MoveApplier,
        session: GameSession,
        board: BoardPieces,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                applier: MoveApplier::default(),
                session: GameSession::default(),
                board: BoardPieces::starting_position(),
            }
        }

        fn play(&mut self, from: &str, to: &str, referee: &mut dyn Referee) -> GameResult<MoveRecord> {
            self.applier
                .try_move(sq(from), sq(to), &mut self.session, &mut self.board, referee)
        }

        fn process(&mut self) -> usize {
            self.applier.process_requests(&mut self.session, &mut self.board)
        }
    }

    /// Refuses everything, remembering the last move count it was given
    #[derive(Default)]
    struct RefusingReferee {
        last_count: Option<u32>,
    }

    impl Referee for RefusingReferee {
        fn set_move_count(&mut self, count: u32) {
            self.last_count = Some(count);
        }

        fn is_valid_move(
            &self,
            _grid: &crate::game::rules::BoardGrid,
            _from: (u8, u8),
            _to: (u8, u8),
            _piece: &PieceId,
            _destination: Option<&PieceId>,
        ) -> bool {
            false
        }
    }

    #[test]
    fn test_accepted_move_updates_everything() {
        //! Scenario: e2-e4 from the starting position
        let mut fx = Fixture::new();
        let record = fx.play("e2", "e4", &mut MovementReferee::default()).unwrap();

        assert_eq!(record.notation, "e4");
        assert_eq!(record.captured, None);
        assert!(fx.board.is_empty(sq("e2")));
        assert_eq!(fx.board.piece_at(sq("e4")).map(PieceId::as_str), Some("pawn_white"));
        assert_eq!(fx.session.current_move(), 1);
        assert_eq!(fx.session.ledger().pairs()[0].white.as_deref(), Some("e4"));
        assert!(!fx.session.clock().is_white_turn());
        assert_eq!(fx.applier.applied_moves(), 1);
        assert!(!fx.applier.is_in_flight());
    }

    #[test]
    fn test_knight_move_notation() {
        let mut fx = Fixture::new();
        let record = fx.play("g1", "f3", &mut MovementReferee::default()).unwrap();
        assert_eq!(record.notation, "Nf3");
    }

    #[test]
    fn test_empty_source_rejected() {
        let mut fx = Fixture::new();
        let before = fx.board.clone();

        let result = fx.play("e4", "e5", &mut PermissiveReferee);

        assert_eq!(result, Err(GameError::EmptySquare { square: sq("e4") }));
        assert_eq!(fx.board, before);
        assert_eq!(fx.session.current_move(), 0);
    }

    #[test]
    fn test_same_square_rejected() {
        let mut fx = Fixture::new();
        let result = fx.play("e2", "e2", &mut PermissiveReferee);

        assert_eq!(result, Err(GameError::SameSquare { square: sq("e2") }));
        assert_eq!(fx.applier.applied_moves(), 0);
    }

    #[test]
    fn test_refused_move_leaves_state_unchanged() {
        //! Scenario: the referee refuses, nothing changes
        let mut fx = Fixture::new();
        let mut referee = RefusingReferee::default();
        let board_before = fx.board.clone();

        let result = fx.play("e2", "e4", &mut referee);

        assert_eq!(
            result,
            Err(GameError::InvalidMove {
                from: sq("e2"),
                to: sq("e4")
            })
        );
        assert_eq!(referee.last_count, Some(0));
        assert_eq!(fx.board, board_before);
        assert!(fx.session.ledger().is_empty());
        assert!(fx.session.history().is_empty());
        assert!(fx.session.clock().is_white_turn());
        assert!(!fx.applier.is_in_flight());
    }

    #[test]
    fn test_move_in_flight_rejected() {
        let mut fx = Fixture::new();
        fx.applier.in_flight = true;

        let result = fx.play("e2", "e4", &mut PermissiveReferee);

        assert_eq!(
            result,
            Err(GameError::MoveInProgress {
                from: sq("e2"),
                to: sq("e4")
            })
        );
        assert!(fx.board.is_empty(sq("e4")));
    }

    #[test]
    fn test_referee_sees_move_count() {
        //! The movement referee enforces turn order from the applied count
        let mut fx = Fixture::new();
        let mut referee = MovementReferee::default();

        fx.play("e2", "e4", &mut referee).unwrap();
        assert!(matches!(
            fx.play("d2", "d4", &mut referee),
            Err(GameError::InvalidMove { .. })
        ));
        fx.play("e7", "e5", &mut referee).unwrap();
        fx.play("d2", "d4", &mut referee).unwrap();

        assert_eq!(fx.applier.applied_moves(), 3);
        assert_eq!(fx.session.current_move(), 3);
    }

    #[test]
    fn test_capture_recorded_and_restored_on_undo() {
        let mut fx = Fixture::new();
        fx.board = BoardPieces::from_pieces([
            (sq("d1"), PieceId::new(PieceType::Queen, PieceColor::White)),
            (sq("d7"), PieceId::new(PieceType::Pawn, PieceColor::Black)),
        ]);
        let before = fx.board.clone();

        let record = fx.play("d1", "d7", &mut PermissiveReferee).unwrap();
        assert_eq!(record.notation, "Qd7");
        assert_eq!(record.captured.as_ref().map(PieceId::as_str), Some("pawn_black"));
        assert_eq!(fx.board.len(), 1);

        fx.session.request_undo();
        assert_eq!(fx.process(), 1);

        assert_eq!(fx.board, before);
        assert!(fx.session.clock().is_white_turn());
        assert_eq!(fx.applier.applied_moves(), 0);
    }

    #[test]
    fn test_two_undos_then_new_move() {
        //! Scenario: e4 e5 Nf3, undo twice, then d4
        let mut fx = Fixture::new();
        let mut referee = MovementReferee::default();
        fx.play("e2", "e4", &mut referee).unwrap();
        fx.play("e7", "e5", &mut referee).unwrap();
        fx.play("g1", "f3", &mut referee).unwrap();

        fx.session.request_undo();
        fx.session.request_undo();
        assert_eq!(fx.process(), 2);

        assert_eq!(fx.session.current_move(), 1);
        assert_eq!(fx.session.history().redo_len(), 2);
        assert!(fx.board.is_empty(sq("f3")));
        assert!(fx.board.is_empty(sq("e5")));
        assert!(fx.board.piece_at(sq("g1")).is_some());
        assert!(fx.board.piece_at(sq("e7")).is_some());
        assert!(!fx.session.clock().is_white_turn());

        fx.play("d7", "d5", &mut referee).unwrap();
        assert!(!fx.session.can_redo());
        assert_eq!(fx.session.current_move(), 2);
    }

    #[test]
    fn test_undo_then_redo_is_identity() {
        let mut fx = Fixture::new();
        let mut referee = MovementReferee::default();
        fx.play("e2", "e4", &mut referee).unwrap();
        fx.play("b8", "c6", &mut referee).unwrap();

        let board = fx.board.clone();
        let ledger = fx.session.ledger().clone();
        let white_turn = fx.session.clock().is_white_turn();

        fx.session.request_undo();
        fx.session.request_redo();
        assert_eq!(fx.process(), 2);

        assert_eq!(fx.board, board);
        assert_eq!(fx.session.ledger(), &ledger);
        assert_eq!(fx.session.current_move(), 2);
        assert_eq!(fx.session.clock().is_white_turn(), white_turn);
        assert_eq!(fx.applier.applied_moves(), 2);
        assert_eq!(fx.session.ledger().pairs()[0].black.as_deref(), Some("Nc6"));
    }

    #[test]
    fn test_requests_with_empty_history_are_consumed() {
        let mut fx = Fixture::new();
        fx.session.request_undo();
        fx.session.request_redo();

        assert_eq!(fx.process(), 0);
        assert_eq!(fx.session.pending_requests(), 0);
        assert_eq!(fx.board, BoardPieces::starting_position());
        assert!(fx.session.clock().is_white_turn());
    }

    #[test]
    fn test_reset_clears_count() {
        let mut fx = Fixture::new();
        fx.play("e2", "e4", &mut PermissiveReferee).unwrap();
        fx.applier.reset();
        assert_eq!(fx.applier.applied_moves(), 0);
    }
}
