use std::io::Cursor;

use broadside::{Board, Console, Coord, Game, Phase, PlayerId, SHIPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const LAYOUT: [&str; 5] = ["A1 A5", "C1 C4", "E1 E3", "G1 G3", "I1 I2"];

const SHIP_CELLS: [&str; 17] = [
    "A1", "A2", "A3", "A4", "A5", "C1", "C2", "C3", "C4", "E1", "E2", "E3", "G1", "G2", "G3",
    "I1", "I2",
];

fn at(token: &str) -> Coord {
    Coord::parse(token).unwrap()
}

#[test]
fn renders_header_rows_and_marks() {
    let mut board = Board::new();
    board.place_ship(SHIPS[0], at("A1"), at("A5")).unwrap();
    board.fire(at("A1"));
    board.fire(at("J10"));

    let mut out: Vec<u8> = Vec::new();
    let mut console = Console::new(Cursor::new(""), &mut out);
    console.render_board(&board, true).unwrap();
    console.render_board(&board, false).unwrap();
    drop(console);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // revealed grid
    assert_eq!(lines[0], "  1 2 3 4 5 6 7 8 9 10");
    assert_eq!(lines[1], "A X O O O O ~ ~ ~ ~ ~");
    assert_eq!(lines[10], "J ~ ~ ~ ~ ~ ~ ~ ~ ~ M");

    // hidden grid keeps hits and misses but masks unhit ship squares
    assert_eq!(lines[11], "  1 2 3 4 5 6 7 8 9 10");
    assert_eq!(lines[12], "A X ~ ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(lines[21], "J ~ ~ ~ ~ ~ ~ ~ ~ ~ M");
}

#[test]
fn scripted_game_runs_to_congratulation() {
    let mut script = String::new();
    // both players place the same layout, each followed by the hand-over
    for _ in 0..2 {
        for line in LAYOUT {
            script.push_str(line);
            script.push('\n');
        }
        script.push('\n');
    }
    // player one shells the whole fleet; player two keeps missing at J10
    for (i, cell) in SHIP_CELLS.iter().enumerate() {
        script.push_str(cell);
        script.push('\n');
        if i < SHIP_CELLS.len() - 1 {
            script.push('\n'); // hand-over after the shot
            script.push_str("J10\n");
            script.push('\n');
        }
    }

    let mut out: Vec<u8> = Vec::new();
    let mut game = Game::new("Player 1", "Player 2");
    let mut rng = SmallRng::seed_from_u64(1);
    let winner = Console::new(Cursor::new(script), &mut out)
        .run(&mut game, &mut rng)
        .unwrap();

    assert_eq!(winner, "Player 1");
    assert_eq!(game.phase(), Phase::Over { winner: PlayerId::One });

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Player 1, place your ships on the game field"));
    assert!(text.contains("Enter the coordinates of the Carrier (5 cells):"));
    assert!(text.contains("You missed!"));
    assert!(text.contains("You hit a ship!"));
    assert!(text.contains("You sank a ship!"));
    assert!(text.contains("Press Enter and pass the move to another player"));
    assert!(text.contains("Player 1 sank the last ship. Player 1 won. Congratulations!"));
}

#[test]
fn invalid_shot_reprompts_and_eof_aborts() {
    // twelve empty lines: two random placement rounds with hand-overs
    let mut script = "\n".repeat(12);
    script.push_str("Z99\n");

    let mut out: Vec<u8> = Vec::new();
    let mut game = Game::new("P1", "P2");
    let mut rng = SmallRng::seed_from_u64(3);
    let err = Console::new(Cursor::new(script), &mut out)
        .run(&mut game, &mut rng)
        .unwrap_err();

    assert!(err.to_string().contains("input closed"));
    // the bad token was rejected without burning the turn
    assert_eq!(game.phase(), Phase::Firing(PlayerId::One));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Error: you entered the wrong coordinates! Try again:"));
}

#[test]
fn placement_errors_use_specific_messages() {
    let mut script = String::new();
    script.push_str("A1 E5\n"); // not straight
    script.push_str("A1 A4\n"); // wrong length
    script.push_str("A1 A5\n"); // carrier placed
    script.push_str("B1 B4\n"); // touches the carrier
    // input then dries up mid-placement

    let mut out: Vec<u8> = Vec::new();
    let mut game = Game::new("P1", "P2");
    let mut rng = SmallRng::seed_from_u64(5);
    let err = Console::new(Cursor::new(script), &mut out)
        .run(&mut game, &mut rng)
        .unwrap_err();

    assert!(err.to_string().contains("input closed"));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Error: the ship can only be placed vertically or horizontally."));
    assert!(text.contains("Error: wrong length of the Carrier!"));
    assert!(text.contains("Error: the ship can't be on or near another ship!"));
    assert!(text.contains("Try again:"));
}
