//! Command-line dispatch.
//!
//! Turns one line of user input into a tool name plus [`ToolArgs`]. The
//! grammar is deliberately small: whitespace-separated words, single or
//! double quotes to group words, `-x`/`--flag` words become flags.

use crate::tools::ToolArgs;

/// Split a command line into tokens, honoring single and double quotes.
///
/// An unterminated quote runs to the end of the line.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                in_token = true;
                for inner in chars.by_ref() {
                    if inner == c {
                        break;
                    }
                    current.push(inner);
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
}

/// Parse a command line into a tool name and its arguments.
///
/// Returns `None` for an empty (or all-whitespace) line. Combined short
/// flags split per character (`-la` sets `l` and `a`); a lone `-` or `--`
/// stays positional.
pub fn parse(line: &str) -> Option<(String, ToolArgs)> {
    let mut tokens = tokenize(line).into_iter();
    let name = tokens.next()?;

    let mut args = ToolArgs::new();
    for token in tokens {
        if token == "-" || token == "--" {
            args.positional.push(token);
        } else if let Some(rest) = token.strip_prefix("--") {
            args.flags.insert(rest.to_string());
        } else if let Some(rest) = token.strip_prefix('-') {
            for c in rest.chars() {
                args.flags.insert(c.to_string());
            }
        } else {
            args.positional.push(token);
        }
    }

    Some((name, args))
}
