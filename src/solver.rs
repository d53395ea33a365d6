//! An agent to solve the game of tic-tac-toe

use rand::{prelude::IndexedRandom, Rng};

use anyhow::Result;

use crate::{
    board::{Board, Move},
    SIZE,
};

/// The score of a position won by the player to move
pub const WIN: i32 = 1;
/// The score of a drawn position
pub const DRAW: i32 = 0;
/// The score of a position lost by the player to move
pub const LOSS: i32 = -1;

/// An agent to solve tic-tac-toe positions
///
/// # Notes
/// This agent searches the full game tree with alpha-beta pruning to find
/// the mathematically best move(s) in any position, thus 'solving' the game
///
/// # Position Scoring
/// A position is scored from the perspective of the player about to move:
/// 1 if the mover can force a win, -1 if the opponent wins against any
/// defence and 0 if best play from both sides leads to a draw
#[derive(Clone)]
pub struct Solver {
    board: Board,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` from a board
    pub fn new(board: Board) -> Self {
        Self {
            board,
            node_count: 0,
        }
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position (see [Position Scoring])
    ///
    /// [Position Scoring]: #position-scoring
    pub fn negamax(&mut self, mut alpha: i32, beta: i32) -> i32 {
        self.node_count += 1;

        // the previous move decided the game, so the player to move has lost
        if self.board.winner().is_some() {
            return LOSS;
        }
        // a full board with no winner is a draw
        if self.board.num_moves() == SIZE * SIZE {
            return DRAW;
        }

        // search the next level of the tree
        for row in 0..SIZE {
            for column in 0..SIZE {
                let square = Move::new(column, row);
                if !self.board.is_empty(square) {
                    continue;
                }

                let mut next = self.clone();
                next.node_count = 0;

                next.board.play(square);
                // the search window is flipped for the other player
                let score = -next.negamax(-beta, -alpha);
                self.node_count += next.node_count;
                // if a child node's score is better than beta, we can prune the tree
                // here because a perfect opponent will not pick this branch
                if score >= beta {
                    return beta;
                }
                if score > alpha {
                    alpha = score;
                }
            }
        }

        alpha
    }

    /// Calculates the score and best move of the current position, then plays
    /// the chosen move on the internal board
    ///
    /// Ties between equally good moves are broken uniformly at random.
    /// Panics if the game is already over
    pub fn solve(&mut self) -> (i32, Move) {
        self.solve_with_rng(&mut rand::rng())
    }

    /// As [solve] but with an explicit random source for tie-breaking, so
    /// tests can seed it deterministically
    ///
    /// [solve]: #method.solve
    pub fn solve_with_rng<R: Rng>(&mut self, rng: &mut R) -> (i32, Move) {
        assert!(!self.board.has_ended(), "solve called on a finished game");
        self.node_count += 1;

        let mut best_moves = Vec::new();
        let mut best_score = LOSS;

        for row in 0..SIZE {
            for column in 0..SIZE {
                let square = Move::new(column, row);
                if !self.board.is_empty(square) {
                    continue;
                }

                let mut next = self.clone();
                next.node_count = 0;

                next.board.play(square);
                // every candidate gets the full window so that tied moves score identically
                let score = -next.negamax(LOSS, WIN);
                self.node_count += next.node_count;

                if score > best_score {
                    // everything collected so far is worse than this move
                    best_moves.clear();
                    best_score = score;
                }
                if score == best_score {
                    best_moves.push(square);
                }
            }
        }

        // an unfinished board always has at least one empty square
        let best_move = *best_moves.choose(rng).unwrap();
        self.board.play(best_move);

        (best_score, best_move)
    }

    /// Checks and plays a move on the internal board
    pub fn play_checked(&mut self, square: Move) -> Result<()> {
        self.board.play_checked(square)
    }
}

impl std::ops::Deref for Solver {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}
