// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Legal move enumeration. The generator walks every piece of the side to
//! move and proposes candidate (from, to, promotion) triples: pawn pushes,
//! captures, en-passant captures and promotions, knight leaps, sliding
//! rays cut at the first blocker, king steps, and the two castle triples.
//! Each candidate then passes two gates:
//!
//!   1. the validator's shape-and-occupancy predicate, and
//!   2. the king-safety probe: apply the move to a copy and reject it if
//!      the mover's own king is attacked afterwards.
//!
//! Gate 2 applies to every candidate, not just king moves; it is what
//! keeps pinned pieces pinned and rejects moves that uncover a check.
//! Generation order is an implementation detail; callers must not rely
//! on it.
use arrayvec::ArrayVec;

use crate::attacks;
use crate::bitboard::Bitboard;
use crate::moves::Move;
use crate::position::{pawn_advance_direction, Position};
use crate::types::{Color, PieceKind, Rank, Square, PROMOTABLE_KINDS};
use crate::validator::is_legal;

/// The moves of one position, without heap allocation. No chess position
/// has more than 256 legal moves.
pub type MoveVec = ArrayVec<[Move; 256]>;

/// Generator for the legal move set of a position, and for the two
/// game-over predicates derived from it.
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> MoveGenerator {
        MoveGenerator
    }

    /// Every legal move for the side to move. Empty exactly when the
    /// position is checkmate or stalemate.
    pub fn legal_moves(&self, pos: &Position) -> MoveVec {
        let mut candidates = MoveVec::new();
        self.pawn_moves(pos, &mut candidates);
        self.knight_moves(pos, &mut candidates);
        self.sliding_moves(pos, &mut candidates, pos.bishops(pos.side_to_move()), |sq, occ| {
            attacks::bishop_attacks(sq, occ)
        });
        self.sliding_moves(pos, &mut candidates, pos.rooks(pos.side_to_move()), |sq, occ| {
            attacks::rook_attacks(sq, occ)
        });
        self.sliding_moves(pos, &mut candidates, pos.queens(pos.side_to_move()), |sq, occ| {
            attacks::queen_attacks(sq, occ)
        });
        self.king_moves(pos, &mut candidates);

        let side = pos.side_to_move();
        let mut moves = MoveVec::new();
        for &mov in candidates.iter() {
            if !is_legal(pos, mov) {
                continue;
            }

            if pos.apply(mov).is_check(side) {
                continue;
            }

            moves.push(mov);
        }

        moves
    }

    /// Whether the side to move is checkmated: in check with no legal
    /// reply.
    pub fn is_checkmate(&self, pos: &Position) -> bool {
        pos.is_in_check() && self.legal_moves(pos).is_empty()
    }

    /// Whether the side to move is stalemated: not in check, but with no
    /// legal move either.
    pub fn is_stalemate(&self, pos: &Position) -> bool {
        !pos.is_in_check() && self.legal_moves(pos).is_empty()
    }

    fn pawn_moves(&self, pos: &Position, out: &mut MoveVec) {
        let color = pos.side_to_move();
        let occupancy = pos.occupancy();
        let enemies = pos.pieces(color.toggle());
        let (home_rank, promo_rank) = match color {
            Color::White => (Rank::Two, Rank::Eight),
            Color::Black => (Rank::Seven, Rank::One),
        };
        let advance = pawn_advance_direction(color);

        for pawn in pos.pawns(color) {
            // A pawn on the back rank would have promoted already.
            if pawn.rank() == promo_rank {
                continue;
            }

            let target = pawn.towards(advance);
            if !occupancy.test(target) {
                push_pawn_move(out, pawn, target, promo_rank);

                if pawn.rank() == home_rank {
                    let two_ahead = target.towards(advance);
                    if !occupancy.test(two_ahead) {
                        out.push(Move::new(pawn, two_ahead));
                    }
                }
            }

            for attack in attacks::pawn_attacks(pawn, color) {
                if enemies.test(attack) {
                    push_pawn_move(out, pawn, attack, promo_rank);
                } else if Some(attack) == pos.en_passant_target(color) {
                    out.push(Move::new(pawn, attack));
                }
            }
        }
    }

    fn knight_moves(&self, pos: &Position, out: &mut MoveVec) {
        let color = pos.side_to_move();
        let friendly = pos.pieces(color);
        for knight in pos.knights(color) {
            for target in attacks::knight_attacks(knight) {
                if !friendly.test(target) {
                    out.push(Move::new(knight, target));
                }
            }
        }
    }

    fn sliding_moves<F>(&self, pos: &Position, out: &mut MoveVec, pieces: Bitboard, attack_fn: F)
    where
        F: Fn(Square, Bitboard) -> Bitboard,
    {
        let color = pos.side_to_move();
        let friendly = pos.pieces(color);
        let occupancy = pos.occupancy();
        for piece in pieces {
            // Rays terminate at the first occupied square; a friendly
            // blocker is excluded, an enemy blocker is a capture.
            for target in attack_fn(piece, occupancy) {
                if !friendly.test(target) {
                    out.push(Move::new(piece, target));
                }
            }
        }
    }

    fn king_moves(&self, pos: &Position, out: &mut MoveVec) {
        let color = pos.side_to_move();
        let friendly = pos.pieces(color);
        let king = match pos.kings(color).first() {
            Some(king) => king,
            None => return,
        };

        for target in attacks::king_attacks(king) {
            if !friendly.test(target) {
                out.push(Move::new(king, target));
            }
        }

        // The two castle triples; the validator holds the actual gates.
        let (home, kingside, queenside) = match color {
            Color::White => (Square::E1, Square::G1, Square::C1),
            Color::Black => (Square::E8, Square::G8, Square::C8),
        };

        if king == home {
            out.push(Move::new(king, kingside));
            out.push(Move::new(king, queenside));
        }
    }
}

fn push_pawn_move(out: &mut MoveVec, from: Square, to: Square, promo_rank: Rank) {
    if to.rank() == promo_rank {
        for &kind in &PROMOTABLE_KINDS {
            out.push(Move::promoting(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}
