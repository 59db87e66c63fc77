//! Console front end: prompting, grid rendering and the interactive loop.
//!
//! Generic over the reader/writer pair, so whole games can be driven from
//! tests with scripted input as well as from a terminal.

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::board::{Board, CellState};
use crate::common::{BoardError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::game::{Game, Phase, PlayerId};
use crate::ship::ShipType;

/// Blank lines printed when the board is handed to the other player.
const HAND_OVER_GAP: usize = 10;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout().lock(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Drive a full game from placement to the congratulation line.
    /// Returns the winner's name. Exhausted input aborts the game with an
    /// error; it is never a rule of play.
    pub fn run(&mut self, game: &mut Game, rng: &mut SmallRng) -> anyhow::Result<String> {
        loop {
            match game.phase() {
                Phase::Placing(player) => self.placement_round(game, player, rng)?,
                Phase::Firing(player) => self.firing_round(game, player)?,
                Phase::Over { .. } => {
                    let winner = game.winner().unwrap_or_default().to_string();
                    self.say(&format!(
                        "{winner} sank the last ship. {winner} won. Congratulations!"
                    ))?;
                    return Ok(winner);
                }
            }
        }
    }

    /// Draw `board` in the classic layout: a numbered header row and
    /// letter-labelled rows of `~` / `O` / `M` / `X` marks.
    pub fn render_board(&mut self, board: &Board, reveal: bool) -> io::Result<()> {
        write!(self.output, " ")?;
        for col in 1..=BOARD_SIZE {
            write!(self.output, " {col}")?;
        }
        writeln!(self.output)?;
        for row in 0..BOARD_SIZE {
            write!(self.output, "{}", (b'A' + row as u8) as char)?;
            for col in 0..BOARD_SIZE {
                let mark = match board.view(Coord::new(row, col), reveal) {
                    CellState::Empty => '~',
                    CellState::Occupied => 'O',
                    CellState::Missed => 'M',
                    CellState::Hit => 'X',
                };
                write!(self.output, " {mark}")?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn placement_round(
        &mut self,
        game: &mut Game,
        player: PlayerId,
        rng: &mut SmallRng,
    ) -> anyhow::Result<()> {
        self.say(&format!(
            "{}, place your ships on the game field",
            game.name(player)
        ))?;
        self.say("(press Enter on an empty line to place a ship at random)\n")?;
        self.render_board(game.board(player), true)?;
        while let Phase::Placing(current) = game.phase() {
            if current != player {
                break;
            }
            // phase is Placing, so the next catalog entry exists
            let Some(kind) = game.ship_to_place() else {
                break;
            };
            self.say(&format!(
                "\nEnter the coordinates of the {} ({} cells):\n",
                kind.name(),
                kind.length()
            ))?;
            loop {
                let line = self.read_line()?;
                let placed = if line.is_empty() {
                    game.place_ship_randomly(rng)
                } else {
                    game.place_ship(&line)
                };
                match placed {
                    Ok(_) => {
                        self.say("")?;
                        self.render_board(game.board(player), true)?;
                        break;
                    }
                    Err(err) => {
                        self.say(&placement_message(err, kind))?;
                        self.say("Try again:\n")?;
                    }
                }
            }
        }
        self.hand_over()?;
        Ok(())
    }

    fn firing_round(&mut self, game: &mut Game, player: PlayerId) -> anyhow::Result<()> {
        self.render_board(game.board(player.opponent()), false)?;
        self.say("---------------------")?;
        self.render_board(game.board(player), true)?;
        self.say(&format!("\n{}, it's your turn:\n", game.name(player)))?;
        loop {
            let line = self.read_line()?;
            match game.fire(&line) {
                Ok(result) => {
                    match result {
                        ShotResult::Miss => self.say("\nYou missed!")?,
                        ShotResult::Hit => self.say("\nYou hit a ship!")?,
                        ShotResult::Sunk(_) => self.say("\nYou sank a ship!")?,
                        // the congratulation is printed once the Over
                        // phase is observed
                        ShotResult::FleetSunk(_) => {}
                    }
                    if !result.is_victory() {
                        self.hand_over()?;
                    }
                    return Ok(());
                }
                Err(_) => {
                    self.say("\nError: you entered the wrong coordinates! Try again:\n")?;
                }
            }
        }
    }

    /// Ask for the board to be passed to the other player and push the
    /// previous player's view off the screen.
    fn hand_over(&mut self) -> anyhow::Result<()> {
        self.say("Press Enter and pass the move to another player")?;
        self.read_line()?;
        for _ in 0..HAND_OVER_GAP {
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Read one line, trimmed. `Err` means the input source is exhausted.
    fn read_line(&mut self) -> anyhow::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        anyhow::ensure!(n > 0, "input closed before the game finished");
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

/// The user-facing line for a rejected placement attempt.
fn placement_message(err: BoardError, kind: ShipType) -> String {
    match err {
        BoardError::InvalidFormat => {
            r#"Error: coordinates must be between A1 and J10 and in the format "A1 A5"."#.to_string()
        }
        BoardError::NotStraight => {
            "Error: the ship can only be placed vertically or horizontally.".to_string()
        }
        BoardError::WrongLength => format!("Error: wrong length of the {}!", kind.name()),
        BoardError::Overlap => "Error: the ship can't be on or near another ship!".to_string(),
        _ => format!("Error: {err}."),
    }
}
