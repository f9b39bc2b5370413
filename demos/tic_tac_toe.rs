//! Tic-Tac-Toe demo for the MCTS algorithm
//!
//! Human plays X against an AI playing O, driven by a `DeepMctsPlayer`
//! over a `UniformEvaluator` — the "uninformed MCTS player" control
//! baseline, since this crate does not ship a trained network.

use std::fmt;
use std::io::{self, Write};

use puct_mcts::{Action, DeepMctsPlayer, Game, StateHash, UniformEvaluator};

fn main() {
    env_logger::init();

    println!("MCTS Tic-Tac-Toe Demo");
    println!("======================");
    println!();

    let mut game = TicTacToe::new();
    let mut ai = DeepMctsPlayer::new(UniformEvaluator::default(), 10_000, 0.0);
    let mut rng = rand::thread_rng();

    while !game.is_terminal() {
        println!("{}", game);

        if game.current_player == Mark::X {
            println!("Your move (enter row column, e.g. '1 2'): ");
            io::stdout().flush().unwrap();

            let mut input = String::new();
            io::stdin().read_line(&mut input).unwrap();

            let coords: Vec<usize> = input
                .trim()
                .split_whitespace()
                .filter_map(|s| s.parse::<usize>().ok())
                .collect();

            if coords.len() != 2 || coords[0] > 2 || coords[1] > 2 {
                println!("Invalid move! Enter row and column (0-2).");
                continue;
            }

            let index = coords[0] * 3 + coords[1];
            let action = Square(index);

            if !game.legal_actions().contains(&action) {
                println!("Illegal move! Try again.");
                continue;
            }

            game = game.take_action(&action);
        } else {
            println!("AI is thinking...");

            match ai.choose_action(&game, &mut rng) {
                Ok(action) => {
                    println!(
                        "AI chooses: {} (row {}, col {})",
                        action.0,
                        action.0 / 3,
                        action.0 % 3
                    );
                    game = game.take_action(&action);
                }
                Err(e) => {
                    println!("Error: {e}");
                    break;
                }
            }
        }
    }

    println!("{}", game);

    match game.winner() {
        Some(Mark::X) => println!("Player X wins!"),
        Some(Mark::O) => println!("Player O wins!"),
        None => println!("The game is a draw!"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    X,
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Square(usize);

impl Action for Square {
    fn id(&self) -> usize {
        self.0
    }
}

#[derive(Clone)]
struct TicTacToe {
    board: [Option<Mark>; 9],
    current_player: Mark,
    moves_played: usize,
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

impl TicTacToe {
    fn new() -> Self {
        TicTacToe {
            board: [None; 9],
            current_player: Mark::X,
            moves_played: 0,
        }
    }

    fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = *line;
            if self.board[a].is_some() && self.board[a] == self.board[b] && self.board[b] == self.board[c] {
                self.board[a]
            } else {
                None
            }
        })
    }
}

impl Game for TicTacToe {
    type Action = Square;

    fn initial_state() -> Self {
        TicTacToe::new()
    }

    fn action_space_size() -> usize {
        9
    }

    fn legal_actions(&self) -> Vec<Square> {
        if self.is_terminal() {
            vec![]
        } else {
            (0..9).filter(|&i| self.board[i].is_none()).map(Square).collect()
        }
    }

    fn take_action(&self, action: &Square) -> Self {
        let mut next = self.clone();
        next.board[action.0] = Some(self.current_player);
        next.moves_played += 1;
        next.current_player = match self.current_player {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        };
        next
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.moves_played == 9
    }

    fn terminal_value(&self) -> Vec<f64> {
        match self.winner() {
            Some(Mark::X) => vec![1.0, -1.0],
            Some(Mark::O) => vec![-1.0, 1.0],
            None => vec![0.0, 0.0],
        }
    }

    fn current_player(&self) -> usize {
        match self.current_player {
            Mark::X => 0,
            Mark::O => 1,
        }
    }

    fn num_players(&self) -> usize {
        2
    }

    fn hash(&self) -> StateHash {
        self.board.iter().enumerate().fold(0u64, |acc, (i, cell)| {
            let code: u64 = match cell {
                None => 0,
                Some(Mark::X) => 1,
                Some(Mark::O) => 2,
            };
            acc | (code << (i * 2))
        })
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for row in 0..3 {
            write!(f, "{row} ")?;
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.board[index] {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => ".",
                };
                write!(f, "{symbol} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "\nPlayer {:?}'s turn", self.current_player)?;
        Ok(())
    }
}
