//! Agent: the tour-building ant.
//!
//! An agent lives for exactly one generation. It is born at the colony's
//! start point, extends its tour one hop at a time, and stops for good the
//! first time no unvisited neighbor is reachable. The colony then reads the
//! finished tour and discards the agent.

use crate::tour::Tour;
use crate::types::{AgentId, PointId};

pub trait Agent {
    /// The agent's unique identity.
    fn id(&self) -> AgentId;

    /// Take one construction step.
    ///
    /// Returns the point moved to, or `None` when no move is available.
    /// Once `None` has been returned, every later call returns `None`
    /// without side effects.
    fn step(&mut self) -> Option<PointId>;

    /// Whether the agent has stopped moving.
    fn is_done(&self) -> bool;

    /// The tour built so far.
    fn tour(&self) -> &Tour;

    /// Step until no move is available. Returns the number of moves made.
    fn run_to_completion(&mut self) -> usize {
        let mut moves = 0;
        while self.step().is_some() {
            moves += 1;
        }
        moves
    }
}
