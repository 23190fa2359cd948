use std::process::ExitCode;

use clap::Parser;
use gemini_api::GeminiClient;
use gemini_proxy::cli::{Cli, Command};
use gemini_proxy::progress::ConsoleProgress;
use gemini_proxy::repl;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let client = match GeminiClient::new(cli.to_config()) {
        Ok(client) => client.with_observer(Box::new(ConsoleProgress)),
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };
    let mut client = client;

    match cli.command {
        Some(Command::Chat { msg }) => match client.ask(&msg) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("Error: {error}");
                ExitCode::FAILURE
            }
        },
        None => match repl::run(&mut client) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("Error: {error}");
                ExitCode::FAILURE
            }
        },
    }
}
