// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The seam between the rules engine and whatever chooses moves. A match
//! driver holds a position, asks this crate for the legal moves, hands
//! them to an [`Agent`], and applies the answer. Retries for misbehaving
//! agents, per-turn timeouts, and end-of-game bookkeeping all live with
//! the driver, not here.
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use crate::moves::Move;
use crate::position::Position;

/// Something that picks one move from a non-empty set of legal moves.
pub trait Agent {
    /// Selects a move to play in `pos`. `legal_moves` is never empty; the
    /// caller checks for checkmate and stalemate before asking.
    fn select_move(&mut self, pos: &Position, legal_moves: &[Move]) -> Move;
}

/// An agent that plays a uniformly random legal move.
pub struct RandomAgent {
    rng: ThreadRng,
}

impl RandomAgent {
    pub fn new() -> RandomAgent {
        RandomAgent {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        RandomAgent::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, _pos: &Position, legal_moves: &[Move]) -> Move {
        let mov = *legal_moves
            .choose(&mut self.rng)
            .expect("select_move called with no legal moves");
        debug!("random agent picked {}", mov);
        mov
    }
}
