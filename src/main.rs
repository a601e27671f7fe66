use std::{
    env,
    fs::read_to_string,
    io,
    path::PathBuf,
    process,
    time::Instant,
};

use clap::Parser;
use monkey::{
    display_error,
    lexer::lexer::Lexer,
    parser::parser::parse,
    repl::{self, Mode},
};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "monkey")]
#[command(about = "Tokenize and parse Monkey source")]
struct Args {
    /// Source file to parse. Starts the interactive shell when omitted
    file: Option<PathBuf>,

    /// Print parsed programs instead of tokens in the interactive shell
    #[arg(long)]
    ast: bool,
}

/// Use `RUST_LOG` to override the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();

    match args.file {
        Some(path) => parse_file(path),
        None => run_shell(if args.ast { Mode::Ast } else { Mode::Tokens }),
    }
}

fn run_shell(mode: Mode) {
    let user = env::var("USER").unwrap_or_else(|_| String::from("there"));
    println!("Hello {}! This is the Monkey programming language!", user);
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(err) = repl::start(stdin.lock(), &mut stdout, mode) {
        error!("shell terminated: {}", err);
        process::exit(1);
    }
}

fn parse_file(path: PathBuf) {
    let file_name = path.to_string_lossy().to_string();

    let source = match read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read {}: {}", file_name, err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let (program, diagnostics) = parse(Lexer::new(source.as_str()));
    debug!(elapsed = ?start.elapsed(), "parsed {}", file_name);

    if !diagnostics.is_empty() {
        for error in &diagnostics {
            eprint!("{}", display_error(error, &source, &file_name));
        }
        process::exit(1);
    }

    println!("{}", program);
}
