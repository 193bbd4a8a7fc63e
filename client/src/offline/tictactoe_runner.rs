use std::error::Error;
use std::time::Duration;

use common::games::tictactoe::{TicTacToeSession, calculate_move};
use common::{log, log_debug};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::TerminalCommand;
use crate::game_ui::{HELP, render_board, score_line, status_line};

pub async fn run_tictactoe_game(session: &mut TicTacToeSession) -> Result<(), Box<dyn Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    show(session);

    loop {
        if session.is_computer_turn() {
            play_bot_turn(session).await?;
            show(session);
            continue;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match TerminalCommand::parse(&line) {
            Ok(TerminalCommand::Place(index)) => match session.play_human_move(index) {
                Ok(_) => show(session),
                Err(e) => println!("{}", e),
            },
            Ok(TerminalCommand::Restart) => {
                session.restart();
                show(session);
            }
            Ok(TerminalCommand::Scores) => println!("{}", score_line(session.scores())),
            Ok(TerminalCommand::Help) => println!("{}", HELP),
            Ok(TerminalCommand::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    log!("Leaving with {}", score_line(session.scores()));
    Ok(())
}

/// Waits out the configured pause, then searches on a blocking worker so the
/// runtime stays free while the engine works.
async fn play_bot_turn(session: &mut TicTacToeSession) -> Result<(), Box<dyn Error>> {
    let delay = Duration::from_millis(session.settings().computer_delay_ms);
    tokio::time::sleep(delay).await;

    let difficulty = session.settings().difficulty;
    let input = session.bot_input();
    let mut rng = session.next_bot_rng();

    let index = tokio::task::spawn_blocking(move || calculate_move(difficulty, input, &mut rng))
        .await??;

    log_debug!("Computer took cell {}", index + 1);
    session.apply_computer_move(index)?;
    Ok(())
}

fn show(session: &TicTacToeSession) {
    println!();
    println!("{}", render_board(session.state()));
    println!("{}", status_line(session));
    if session.status().is_over() {
        println!("{}", score_line(session.scores()));
        println!("Type r to play again or q to quit");
    }
}
