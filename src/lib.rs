// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A chess rules engine. Given a board position, this crate enumerates the
//! legal moves, applies a chosen move to produce a successor position, and
//! detects check, checkmate, and stalemate. It deliberately does not search,
//! evaluate, or keep clocks; move selection belongs to callers, behind the
//! [`Agent`] trait.
//!
//! Positions are plain values. Every operation that needs to ask "what if"
//! (king safety, castle transit checks) works on an owned copy, so no caller
//! ever observes a position mutating under it.
#![allow(dead_code)]

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod agent;
pub mod attacks;
mod bitboard;
mod move_generator;
mod moves;
mod perft;
mod position;
mod types;
mod validator;

pub use crate::agent::{Agent, RandomAgent};
pub use crate::bitboard::{Bitboard, BitboardIterator};
pub use crate::move_generator::{MoveGenerator, MoveVec};
pub use crate::moves::Move;
pub use crate::perft::perft;
pub use crate::position::{FenParseError, Position};
pub use crate::types::{Color, File, Piece, PieceKind, Rank, Square};
pub use crate::validator::is_legal;
