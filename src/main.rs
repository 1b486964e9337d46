use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "braille")]
#[command(about = "A command line tool to translate between English and Braille")]
#[command(author, version, long_about = None)] // Read from `Cargo.toml`
struct Cli {
    /// Text or braille cells to translate, joined by single spaces. Read from standard input
    /// if missing
    input: Vec<String>,
}

fn prompt() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter Braille or English: ")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let input = if args.input.is_empty() {
        prompt()?
    } else {
        args.input.join(" ")
    };
    println!("{}", braille::translate(&input));
    Ok(())
}
