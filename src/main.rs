use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser as _;
use log::{info, trace, LevelFilter};
use tez::{display_error, lexer::lexer::Lexer, parser::parser::Parser};

#[derive(Debug, clap::Parser)]
#[command(about = "Front end for the tez language: tokenize and parse a source file")]
struct App {
    /// Source file to parse
    file: PathBuf,
    /// Print the token stream
    #[arg(long)]
    tokens: bool,
    /// Print the syntax tree
    #[arg(long)]
    ast: bool,
    #[arg(long = "log-level", env = "RUST_LOG")]
    log: Option<LevelFilter>,
}

fn main() -> ExitCode {
    let app = App::parse();
    env_logger::Builder::new()
        .filter_level(app.log.unwrap_or(LevelFilter::Warn))
        .format_timestamp(None)
        .init();
    trace!("starting tez with args {app:?}");

    let start = Instant::now();

    let mut lexer = match Lexer::from_file(&app.file) {
        Ok(lexer) => lexer,
        Err(error) => {
            eprintln!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };
    let tokens = lexer.tokenize();
    info!("Tokenized in {:?}", start.elapsed());

    if app.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let mut parser = Parser::new(&tokens);
    let file = parser.parse();
    info!("Parsed in {:?}", parse_start.elapsed());

    if app.ast {
        print!("{}", file);
    }

    for error in lexer.errors().iter().chain(parser.errors()) {
        display_error(error, lexer.source());
    }
    info!("Total time: {:?}", start.elapsed());

    if lexer.errors_reported() || parser.errors_reported() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
