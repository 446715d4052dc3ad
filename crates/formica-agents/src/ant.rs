//! Ant: builds one tour per generation.
//!
//! An ant borrows the trail graph and the colony's assessment for its whole
//! (short) life. Because it only holds shared references, the graph cannot
//! be mutated while any ant of the current generation is still alive.

use crate::selector::{MoveSelector, SelectionPolicy};
use formica_core::agent::Agent;
use formica_core::assessment::Assessment;
use formica_core::topology::TrailGraph;
use formica_core::tour::Tour;
use formica_core::types::{AgentId, PointId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

pub struct Ant<'g, G: TrailGraph + ?Sized> {
    id: AgentId,
    graph: &'g G,
    assessment: &'g dyn Assessment,
    policy: SelectionPolicy,
    tour: Tour,
    rng: ChaCha8Rng,
    done: bool,
}

impl<'g, G: TrailGraph + ?Sized> Ant<'g, G> {
    /// Create an ant at `start` with its own random stream.
    pub fn new(
        graph: &'g G,
        start: PointId,
        assessment: &'g dyn Assessment,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            id: AgentId::new(),
            graph,
            assessment,
            policy: SelectionPolicy::default(),
            tour: Tour::new(start),
            rng,
            done: false,
        }
    }

    /// Create an ant with a deterministic ID and random stream (for testing).
    pub fn with_seed(
        graph: &'g G,
        start: PointId,
        assessment: &'g dyn Assessment,
        seed: u64,
    ) -> Self {
        Self::new(graph, start, assessment, ChaCha8Rng::seed_from_u64(seed))
            .with_id(AgentId::from_seed(seed))
    }

    pub fn with_id(mut self, id: AgentId) -> Self {
        self.id = id;
        self
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Give up the graph borrow and keep only the finished tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }
}

impl<'g, G: TrailGraph + ?Sized> Agent for Ant<'g, G> {
    fn id(&self) -> AgentId {
        self.id
    }

    fn step(&mut self) -> Option<PointId> {
        if self.done {
            return None;
        }

        let candidates = MoveSelector::new(self.graph, &self.tour, self.assessment).candidates();
        let Some(choice) = self.policy.choose(&candidates, &mut self.rng).copied() else {
            self.done = true;
            trace!(ant = ?self.id, hops = self.tour.hops(), "no move available");
            return None;
        };

        self.tour.move_to(choice.point, choice.edge);
        trace!(ant = ?self.id, to = choice.point.0, p = choice.probability, "moved");
        Some(choice.point)
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn tour(&self) -> &Tour {
        &self.tour
    }
}
