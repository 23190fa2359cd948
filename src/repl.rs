use std::io::{self, BufRead, Write};

use gemini_api::GeminiClient;

use crate::commands::{parse_slash_command, SlashCommand};

/// Run the interactive loop until `/quit` or end of input.
pub fn run(client: &mut GeminiClient) -> io::Result<()> {
    print_banner();

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    let mut input = String::new();

    loop {
        print!("You: ");
        io::stdout().flush()?;

        input.clear();
        if lines.read_line(&mut input)? == 0 {
            println!();
            println!("Goodbye!");
            return Ok(());
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        match parse_slash_command(line) {
            Some(SlashCommand::Quit) => {
                println!("Goodbye!");
                return Ok(());
            }
            Some(SlashCommand::Clear) => {
                client.clear_conversation();
                println!("Cleared\n");
            }
            Some(SlashCommand::Help) => print_help(),
            Some(SlashCommand::Unknown(command)) => {
                println!("Unknown command: {command} (try /help)\n");
            }
            None => match client.ask(line) {
                Ok(text) => println!("Gemini: {text}\n"),
                Err(error) => println!("Error: {error}\n"),
            },
        }
    }
}

fn print_banner() {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("Gemini Proxy - Interactive Mode");
    println!("{rule}");
    print_help();
}

fn print_help() {
    println!("Commands:");
    println!("  /help  - Show commands");
    println!("  /clear - Clear conversation");
    println!("  /quit  - Exit");
    println!();
}
