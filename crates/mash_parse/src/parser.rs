use std::mem;

use mash_ast::{Pipeline, Redirect, RedirectMode, Stage};

use crate::token::Token;

/// Parses a line of input into a [`Pipeline`].
///
/// Tokens are the whitespace-delimited words of the line. The operators `|`,
/// `<`, `>`, `>>` and `&` are recognized only when they appear as words of
/// their own; every other word becomes an argument or a redirection target.
/// No quoting, escaping or globbing is performed.
///
/// Parsing cannot fail: a redirection operator without an operand is dropped
/// and an empty stage is never produced.
pub fn parse(line: &str) -> Pipeline {
    let mut pipeline = Pipeline::default();
    let mut stage = Stage::default();

    // Pending redirections belong to the scan, not to a single stage. An
    // operator directly before a pipe binds a file name in the next stage.
    let mut expect_input = false;
    let mut expect_output: Option<RedirectMode> = None;

    for word in line.split_whitespace() {
        match Token::from(word) {
            Token::Pipe => {
                // A pipe without a left-hand side is dropped.
                if !stage.arguments.is_empty() {
                    pipeline.stages.push(mem::take(&mut stage));
                }
            }
            Token::FileRead => expect_input = true,
            Token::FileWrite => expect_output = Some(RedirectMode::Truncate),
            Token::FileAppend => expect_output = Some(RedirectMode::Append),
            Token::Amp => stage.background = true,
            Token::Literal(word) => {
                if expect_input {
                    stage.input = Some(word.into());
                    expect_input = false;
                } else if let Some(mode) = expect_output.take() {
                    stage.output = Some(Redirect {
                        path: word.into(),
                        mode,
                    });
                } else {
                    stage.arg(word);
                }
            }
        }
    }

    if !stage.arguments.is_empty() {
        pipeline.stages.push(stage);
    }

    pipeline
}
