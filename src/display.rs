use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use tictactoe_ai::{Board, Move, Player, SIZE};

/// Draws the board with column letters across the top and row numbers
/// down the left side
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let mut header = String::from("   ");
    for column in 0..SIZE {
        header.push(' ');
        header.push((b'a' + column as u8) as char);
        header.push_str("  ");
    }
    let frame = format!("  +{}", "---+".repeat(SIZE));

    stdout.queue(PrintStyledContent(style(header + "\n")))?;
    stdout.queue(PrintStyledContent(style(frame.clone() + "\n")))?;
    for row in 0..SIZE {
        stdout.queue(PrintStyledContent(style(format!("{} |", row + 1))))?;
        for column in 0..SIZE {
            match board.get(Move::new(column, row)) {
                Some(Player::Cross) => stdout.queue(PrintStyledContent(
                    style(" X ").attribute(Attribute::Bold).with(Color::Red),
                ))?,
                Some(Player::Nought) => stdout.queue(PrintStyledContent(
                    style(" O ").attribute(Attribute::Bold).with(Color::Yellow),
                ))?,
                None => stdout.queue(PrintStyledContent(style("   ")))?,
            };
            stdout.queue(PrintStyledContent(style("|")))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
        stdout.queue(PrintStyledContent(style(frame.clone() + "\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
