//! Line-oriented interactive shell.
//!
//! Each input line gets a fresh [`Lexer`]. In token mode every token is
//! printed in its field-labelled form; in AST mode the line is parsed and
//! either the program or its diagnostics are printed.

use std::io::{self, BufRead, Write};

use tracing::trace;

use crate::{lexer::lexer::Lexer, parser::parser::parse};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Tokens,
    Ast,
}

/// Runs the read-print loop until `input` reaches end of stream.
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W, mode: Mode) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        trace!(length = line.len(), ?mode, "read line");

        match mode {
            Mode::Tokens => {
                for token in Lexer::new(line) {
                    writeln!(output, "{}", token)?;
                }
            }
            Mode::Ast => {
                let (program, diagnostics) = parse(Lexer::new(line));

                if diagnostics.is_empty() {
                    writeln!(output, "{}", program)?;
                } else {
                    writeln!(output, "parser errors:")?;
                    for message in diagnostics.messages() {
                        writeln!(output, "\t{}", message)?;
                    }
                }
            }
        }
    }
}
