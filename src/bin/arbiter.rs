// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::process;
use std::time::Instant;

use arbiter::{perft, Move, MoveGenerator, Position};
use clap::{App, Arg, ArgMatches, SubCommand};

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .subcommand(
            SubCommand::with_name("show")
                .about("Print a board position and its status")
                .arg(
                    Arg::with_name("FEN")
                        .help("FEN string for a board position")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            SubCommand::with_name("moves")
                .about("List the legal moves of a board position")
                .arg(
                    Arg::with_name("FEN")
                        .help("FEN string for a board position")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            SubCommand::with_name("apply")
                .about("Apply a move to a board position")
                .arg(
                    Arg::with_name("FEN")
                        .help("FEN string for a board position")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("MOVE")
                        .help("Move in coordinate notation, e.g. e2e4 or e7e8q")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            SubCommand::with_name("perft")
                .about("Count move-tree leaves of a board position")
                .arg(
                    Arg::with_name("FEN")
                        .help("FEN string for a board position")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("depth")
                        .help("Depth of move tree to search")
                        .value_name("DEPTH")
                        .short("-d")
                        .long("--depth")
                        .takes_value(true),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        ("show", Some(matches)) => run_show(matches),
        ("moves", Some(matches)) => run_moves(matches),
        ("apply", Some(matches)) => run_apply(matches),
        ("perft", Some(matches)) => run_perft(matches),
        _ => {
            eprintln!("{}", matches.usage());
            process::exit(2);
        }
    }
}

fn position_arg(matches: &ArgMatches) -> Position {
    let fen = matches.value_of("FEN").unwrap();
    match Position::from_fen(fen) {
        Ok(pos) => pos,
        Err(err) => {
            eprintln!("invalid fen: {}", err);
            process::exit(1);
        }
    }
}

fn print_status(pos: &Position) {
    let gen = MoveGenerator::new();
    if gen.is_checkmate(pos) {
        println!("{} is checkmated", pos.side_to_move());
    } else if gen.is_stalemate(pos) {
        println!("{} is stalemated", pos.side_to_move());
    } else if pos.is_in_check() {
        println!("{} to move, in check", pos.side_to_move());
    } else {
        println!("{} to move", pos.side_to_move());
    }
}

fn run_show(matches: &ArgMatches) {
    let pos = position_arg(matches);
    println!("{}", pos);
    print_status(&pos);
}

fn run_moves(matches: &ArgMatches) {
    let pos = position_arg(matches);
    let moves = MoveGenerator::new().legal_moves(&pos);
    info!("{} legal moves", moves.len());
    for mov in moves {
        println!("{}", mov);
    }
}

fn run_apply(matches: &ArgMatches) {
    let pos = position_arg(matches);
    let move_str = matches.value_of("MOVE").unwrap();
    let mov = match Move::from_uci(move_str) {
        Some(mov) => mov,
        None => {
            eprintln!("unparseable move: {}", move_str);
            process::exit(1);
        }
    };

    // legal_moves is the single source of truth; apply is only defined for
    // members of it.
    if !MoveGenerator::new().legal_moves(&pos).contains(&mov) {
        eprintln!("illegal move: {}", move_str);
        process::exit(1);
    }

    let next = pos.apply(mov);
    println!("{}", next);
    println!("{}", next.as_fen());
    print_status(&next);
}

fn run_perft(matches: &ArgMatches) {
    let pos = position_arg(matches);
    let depth = value_t!(matches, "depth", u32).unwrap_or(4);

    println!("{}", pos);
    for i in 1..=depth {
        let start = Instant::now();
        let results = perft(&pos, i);
        let elapsed = start.elapsed();
        let ms = elapsed.as_secs() * 1000 + u64::from(elapsed.subsec_millis());
        println!("perft({}) = {} ({} ms)", i, results, ms);
    }
}
