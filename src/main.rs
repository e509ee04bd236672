use std::{fs, process::ExitCode};

use clap::Parser;
use log::debug;

/// parseva evaluates arithmetic expressions such as `sqrt(2 + 2) * 3!`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a path and evaluate every non-blank line of that
    /// file.
    #[arg(short, long)]
    file: bool,

    /// Print the parsed syntax tree, fully parenthesized, instead of the
    /// value.
    #[arg(short, long)]
    ast: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let expressions: Vec<String> = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script.lines()
                                .map(str::trim)
                                .filter(|l| !l.is_empty())
                                .map(str::to_string)
                                .collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![args.contents]
    };

    let mut status = ExitCode::SUCCESS;
    for line in &expressions {
        debug!("evaluating {line:?}");
        let output = if args.ast {
            parseva::parse(line).map(|expr| expr.to_string())
        } else {
            parseva::evaluate(line).map(|value| value.to_string())
        };

        match output {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                status = ExitCode::FAILURE;
            },
        }
    }

    status
}
