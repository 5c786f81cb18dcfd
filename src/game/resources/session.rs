//! Game session - the single shared handle on game state
//!
//! Bundles the [`MoveLedger`], the [`MoveHistory`] and the [`TurnClock`]
//! behind one resource, plus the queue of pending undo/redo requests.
//!
//! # Requests vs. application
//!
//! Asking for an undo and performing it are separate steps. Input handlers
//! call [`GameSession::request_undo`] / [`GameSession::request_redo`], which
//! only enqueue. The move applier, which knows how to put pieces back on the
//! board, drains the queue with [`GameSession::next_request`] and applies
//! each request once, in the order they were made. Two undo requests before
//! the applier runs mean exactly two moves taken back.
//!
//! # Ownership
//!
//! Clock fields are written only through the clock; move history only through
//! the history/ledger pair; the board is not here at all.

use std::collections::VecDeque;

use bevy::prelude::*;

use super::{MoveHistory, MoveLedger, TurnClock};
use crate::game::components::MoveRecord;

/// A pending history request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRequest {
    Undo,
    Redo,
}

/// Game session facade
#[derive(Resource, Debug, Default, Clone)]
pub struct GameSession {
    ledger: MoveLedger,
    history: MoveHistory,
    clock: TurnClock,
    requests: VecDeque<HistoryRequest>,
    undo_requests: u64,
    redo_requests: u64,
}

impl GameSession {
    /// Fresh session with the given time control
    pub fn new(selected_seconds: Option<u32>) -> Self {
        Self {
            clock: TurnClock::with_selection(selected_seconds),
            ..Default::default()
        }
    }

    /// Record notation in the move list
    pub fn add_move(&mut self, notation: impl Into<String>) {
        self.ledger.add_move(notation);
    }

    /// Record a reversible move; clears the redo stack
    pub fn add_move_details(&mut self, record: MoveRecord) {
        self.history.record(record);
    }

    /// Ask for the last move to be taken back
    pub fn request_undo(&mut self) {
        self.undo_requests += 1;
        self.requests.push_back(HistoryRequest::Undo);
    }

    /// Ask for the last taken-back move to be replayed
    pub fn request_redo(&mut self) {
        self.redo_requests += 1;
        self.requests.push_back(HistoryRequest::Redo);
    }

    /// Oldest unprocessed request, consumed on return
    pub fn next_request(&mut self) -> Option<HistoryRequest> {
        self.requests.pop_front()
    }

    pub fn pending_requests(&self) -> usize {
        self.requests.len()
    }

    /// Total undo requests ever made
    pub fn undo_requests(&self) -> u64 {
        self.undo_requests
    }

    /// Total redo requests ever made
    pub fn redo_requests(&self) -> u64 {
        self.redo_requests
    }

    /// Take back the last move in both the history and the move list
    pub fn undo_last(&mut self) -> Option<MoveRecord> {
        let record = self.history.undo_last()?;
        self.ledger.undo();
        Some(record)
    }

    /// Replay the last taken-back move, reusing its stored notation
    pub fn redo_last(&mut self) -> Option<MoveRecord> {
        let record = self.history.redo_last()?;
        self.ledger.redo(record.notation.clone());
        Some(record)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn current_move(&self) -> u32 {
        self.ledger.current_move()
    }

    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut TurnClock {
        &mut self.clock
    }

    /// Start over with the current time control
    pub fn new_game(&mut self) {
        self.ledger.clear();
        self.history.clear();
        self.requests.clear();
        let selected = self.clock.selected_seconds();
        self.clock.select_seconds(selected);
    }
}
