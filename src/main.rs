use std::error::Error;
use std::fs;
use std::io::Read;

use clap::Parser;
use log::debug;

use typeahead::{build_index, complete, parse, render_plain};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Complete { file, limit, json } => run_complete(file.as_deref(), limit, json),
        Commands::Inspect { file, limit } => run_inspect(file.as_deref(), limit),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Read the raw record from a file, or stdin to EOF when no file was given.
fn read_input(file: Option<&str>) -> Result<String, Box<dyn Error>> {
    match file {
        Some(path) => {
            debug!("reading input record from {}", path);
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn run_complete(file: Option<&str>, limit: usize, json: bool) -> Result<(), Box<dyn Error>> {
    let raw = read_input(file)?;
    let input = parse(&raw)?;
    let results = complete(&input.vocabulary, &input.prefixes, limit);

    if json {
        println!("{}", serde_json::to_string(&results)?);
    } else {
        print!("{}", render_plain(&results));
    }
    Ok(())
}

fn run_inspect(file: Option<&str>, limit: usize) -> Result<(), Box<dyn Error>> {
    let raw = read_input(file)?;
    let input = parse(&raw)?;
    let index = build_index(&input.vocabulary, limit);

    let max_word_length = input
        .vocabulary
        .iter()
        .map(|word| word.chars().count())
        .max()
        .unwrap_or(0);
    let top_ranked = input
        .vocabulary
        .iter()
        .take(5)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    println!("{}", display::heading("vocabulary"));
    display::kv("words", input.vocabulary.len());
    display::kv("max word length", max_word_length);
    display::kv("top ranked", top_ranked);
    println!();
    println!("{}", display::heading("index"));
    display::kv("prefix keys", index.entries.len());
    display::kv("limit", index.limit);
    println!();
    println!("{}", display::heading("queries"));
    display::kv("prefixes", input.prefixes.len());

    Ok(())
}
