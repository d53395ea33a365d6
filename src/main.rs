use anyhow::Result;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Write};

use tictactoe_ai::*;

mod display;

fn main() -> Result<()> {
    let mut game = Solver::new(Board::new());

    let stdin = stdin();

    println!("Welcome to Tic-Tac-Toe\n");
    display::draw(&game).expect("Failed to draw board!");

    // game loop
    while !game.has_ended() {
        print!("Enter square: ");
        stdout().flush().expect("Failed to flush to stdout!");

        let mut input_str = String::new();
        stdin.read_line(&mut input_str)?;

        let square = match input_str.trim().parse::<Move>() {
            Err(err) => {
                println!("{}", err);
                continue;
            }
            Ok(square) => square,
        };

        if let Err(err) = game.play_checked(square) {
            println!("{}", err);
            // try the move again
            continue;
        }

        if !game.has_ended() {
            let (score, reply) = game.solve();

            match score.cmp(&DRAW) {
                Ordering::Greater => println!("Nought can force a win."),
                Ordering::Less => println!("Cross can force a win."),
                Ordering::Equal => println!("Nought can at best force a draw."),
            }
            println!("Computer played: {}", reply);
        }

        display::draw(&game).expect("Failed to draw board!");
    }

    match game.winner() {
        None => println!("Draw!"),
        Some(Player::Cross) => println!("Cross won!"),
        Some(Player::Nought) => println!("Nought won!"),
    }
    Ok(())
}
