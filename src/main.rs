use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use tracing::{debug, info};

use std::io::{stdin, stdout, Write};

use connect4_tutor::{board::*, game::*, search::Engine, tutor::*};

mod config;
use config::Config;

mod terminal;

enum Command {
    Play(usize),
    Hint(String),
    Reset,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "q" | "quit" => return Some(Command::Quit),
        "r" | "reset" => return Some(Command::Reset),
        _ => {}
    }
    if let Some(question) = input.strip_prefix("hint") {
        return Some(Command::Hint(question.trim().to_string()));
    }
    input.parse::<usize>().ok().map(Command::Play)
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level);
    debug!(?config, "configuration loaded");

    let human = if config.computer_first {
        Player::Two
    } else {
        Player::One
    };
    let computer = human.opponent();
    let mut engine = Engine::new().with_depth(config.depth).with_computer(computer);
    let tutor = Tutor::new(KnowledgeBase::load(&config.knowledge_base));
    let mut game = Game::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("Enter a column (1-7) to drop a tile, 'hint <question>' to ask the tutor,");
    println!("'r' to start over or 'q' to quit.\n");

    // game loop
    loop {
        terminal::display(game.board()).expect("Failed to draw board!");

        match game.state {
            GameState::Playing => {
                if game.to_move() == computer {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message("Computer is thinking...");
                    spinner.enable_steady_tick(100);

                    let column = game.computer_move(&mut engine)?;

                    spinner.finish_and_clear();
                    println!("Computer plays column {}", column + 1);
                    continue;
                }

                print!("Move input > ");
                stdout().flush().expect("Failed to flush to stdout!");
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    break;
                }

                match parse_command(&input_str) {
                    Some(Command::Play(column)) => {
                        if let Err(err) = game.play_checked(column) {
                            println!("{}", err);
                        }
                    }
                    Some(Command::Hint(question)) => {
                        if config.prompt {
                            println!("{}", tutor.prompt(game.board(), &question));
                        }
                        println!("Tutor: {}\n", tutor.offline_reply(&question));
                    }
                    Some(Command::Reset) => game.reset(),
                    Some(Command::Quit) => break,
                    None => println!("Unknown input: {}", input_str.trim()),
                }
            }

            // end states
            state => {
                match state {
                    GameState::Draw => println!("Draw!"),
                    _ if state == GameState::win_for(human) => println!("You win!"),
                    _ => println!("The computer wins!"),
                }
                info!(moves = %game.moves, nodes = engine.node_count, "game over");

                print!("Play again? y/n: ");
                stdout().flush().expect("Failed to flush to stdout!");
                let mut buffer = String::new();
                stdin.read_line(&mut buffer)?;
                match buffer.to_lowercase().chars().next() {
                    Some('y') => game.reset(),
                    _ => break,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert!(matches!(parse_command("4\n"), Some(Command::Play(4))));
        assert!(matches!(parse_command(" Q "), Some(Command::Quit)));
        assert!(matches!(parse_command("r"), Some(Command::Reset)));
        match parse_command("hint how do I block?") {
            Some(Command::Hint(question)) => assert_eq!(question, "how do I block?"),
            _ => panic!("expected a hint"),
        }
        assert!(parse_command("seven").is_none());
    }
}
