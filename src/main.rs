use std::io::{self, BufRead, Write};

use arbiter_chess::game_state::game_state::GameState;
use arbiter_chess::utils::render_game_state::render_game_state;

fn main() {
    let mut game = GameState::new_game();

    println!("{}", render_game_state(game.get_board()));
    println!("Enter moves in coordinate notation (e.g. e2e4), or 'quit'.");

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush().ok();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let move_text = input.trim();
        if move_text.is_empty() {
            continue;
        }
        if move_text == "quit" {
            break;
        }

        let accepted = game.submit_move(move_text);
        if accepted.is_empty() {
            println!("Rejected: {move_text}");
            continue;
        }

        println!("Played: {accepted}");
        println!("{}", render_game_state(game.get_board()));

        match game.get_result() {
            "w" => {
                println!("Checkmate! White wins.");
                break;
            }
            "b" => {
                println!("Checkmate! Black wins.");
                break;
            }
            "d" => {
                println!("Stalemate! The game is a draw.");
                break;
            }
            _ => {}
        }
    }

    println!("Moves played: {}", game.get_move_history().join(" "));
}
