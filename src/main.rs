use std::{
    fs,
    io::{self, Read},
    process,
    time::Instant,
};

use clap::{Arg, ArgAction, Command};
use log::{info, LevelFilter, Log, Metadata, Record};
use moncow::{
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse, render_error,
};

/// Writes log records to stderr. Installed only with `--verbose`.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let matches = Command::new("moncow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parses moncow source text and prints its syntax tree")
        .arg(
            Arg::new("path")
                .help("Path to the source file; reads stdin when omitted")
                .index(1),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .short('t')
                .help("Print the token stream instead of the syntax tree")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("verbose") && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    let path = matches.get_one::<String>("path");
    let file_name = path.map(String::as_str).unwrap_or("<stdin>");

    let source = match read_source(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_name, error);
            process::exit(2);
        }
    };

    if matches.get_flag("tokens") {
        for token in tokenize(&source) {
            if token.is_one_of_many(&[
                TokenKind::Identifier,
                TokenKind::Integer,
                TokenKind::Float,
                TokenKind::Illegal,
            ]) {
                println!("{} ({})", token.kind, token.literal);
            } else {
                println!("{}", token.kind);
            }
        }
        return;
    }

    let start = Instant::now();
    let (program, errors) = parse(&source);
    info!("Parsed in {:?}", start.elapsed());

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{}", render_error(error, &source, file_name));
        }
        process::exit(1);
    }

    for stmt in &program.statements {
        println!("{}", stmt);
    }
}

fn read_source(path: Option<&String>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
