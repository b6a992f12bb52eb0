//! Play-trigger argument parsing.
//!
//! Listing cards carry an inline `onclick` attribute shaped like a function
//! call, e.g. `play('/media/sounds/x.mp3', 'x', 'en')`. Only literal
//! arguments are accepted: single- or double-quoted strings and plain
//! numbers. The grammar is deliberately strict; anything else means the
//! card has no playable audio.

use std::iter::Peekable;
use std::str::Chars;

/// One positional argument recovered from a play-trigger attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayArg {
    Str(String),
    Num(f64),
}

impl PlayArg {
    /// The argument as a path string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlayArg::Str(s) => Some(s),
            PlayArg::Num(_) => None,
        }
    }
}

/// Parse the argument list out of a call-shaped attribute string.
///
/// Takes the substring strictly between the first `(` and the last `)` and
/// parses it as comma-separated literals. Returns `None` when the parens are
/// missing or the content is not a plain literal list; `Some(vec![])` for an
/// empty argument list. A trailing comma is accepted.
pub fn parse_play_args(onclick: &str) -> Option<Vec<PlayArg>> {
    let start = onclick.find('(')?;
    let end = onclick.rfind(')')?;
    if end <= start {
        return None;
    }
    parse_arg_list(&onclick[start + 1..end])
}

fn parse_arg_list(input: &str) -> Option<Vec<PlayArg>> {
    let mut args = Vec::new();
    let mut chars = input.chars().peekable();

    skip_whitespace(&mut chars);
    while let Some(&next) = chars.peek() {
        let arg = if next == '\'' || next == '"' {
            chars.next();
            PlayArg::Str(parse_quoted(&mut chars, next)?)
        } else {
            PlayArg::Num(parse_number(&mut chars)?)
        };
        args.push(arg);

        skip_whitespace(&mut chars);
        match chars.next() {
            None => break,
            Some(',') => skip_whitespace(&mut chars),
            Some(_) => return None,
        }
    }

    Some(args)
}

fn skip_whitespace(chars: &mut Peekable<Chars>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

/// Consume a quoted string body; the opening quote is already consumed.
/// `None` when the closing quote is never reached.
fn parse_quoted(chars: &mut Peekable<Chars>, quote: char) -> Option<String> {
    let mut text = String::new();
    loop {
        match chars.next()? {
            c if c == quote => return Some(text),
            '\\' => {
                let escaped = chars.next()?;
                text.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '0' => '\0',
                    other => other,
                });
            }
            c => text.push(c),
        }
    }
}

fn parse_number(chars: &mut Peekable<Chars>) -> Option<f64> {
    let mut text = String::new();
    if chars.peek().is_some_and(|&c| c == '+' || c == '-') {
        text.push(chars.next()?);
    }
    while chars.peek().is_some_and(|c| c.is_ascii_digit() || *c == '.') {
        text.push(chars.next()?);
    }
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_string_args() {
        let args = parse_play_args("play('/media/sounds/vine-boom.mp3', 'vine-boom')").unwrap();
        assert_eq!(
            args,
            vec![
                PlayArg::Str("/media/sounds/vine-boom.mp3".to_string()),
                PlayArg::Str("vine-boom".to_string()),
            ]
        );
    }

    #[test]
    fn test_double_quotes_and_numbers() {
        let args = parse_play_args(r#"play("/a.mp3", 1, -2.5)"#).unwrap();
        assert_eq!(
            args,
            vec![
                PlayArg::Str("/a.mp3".to_string()),
                PlayArg::Num(1.0),
                PlayArg::Num(-2.5),
            ]
        );
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let args = parse_play_args(r"play('it\'s a sound.mp3')").unwrap();
        assert_eq!(args, vec![PlayArg::Str("it's a sound.mp3".to_string())]);
    }

    #[test]
    fn test_escape_sequences() {
        let args = parse_play_args(r"play('a\tb\nc\\d')").unwrap();
        assert_eq!(args, vec![PlayArg::Str("a\tb\nc\\d".to_string())]);
    }

    #[test]
    fn test_trailing_comma() {
        let args = parse_play_args("play('/a.mp3',)").unwrap();
        assert_eq!(args, vec![PlayArg::Str("/a.mp3".to_string())]);
    }

    #[test]
    fn test_empty_argument_list() {
        assert_eq!(parse_play_args("play()"), Some(vec![]));
    }

    #[test]
    fn test_missing_parens() {
        assert_eq!(parse_play_args("play"), None);
        assert_eq!(parse_play_args("play('/a.mp3'"), None);
        assert_eq!(parse_play_args(")play('/a.mp3'"), None);
    }

    #[test]
    fn test_non_literal_argument() {
        assert_eq!(parse_play_args("play(someVar)"), None);
        assert_eq!(parse_play_args("play('/a.mp3', fn())"), None);
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(parse_play_args("play('/a.mp3)"), None);
    }

    #[test]
    fn test_missing_comma_between_args() {
        assert_eq!(parse_play_args("play('a' 'b')"), None);
    }

    #[test]
    fn test_statement_after_call() {
        // Last `)` belongs to the second call; the slice in between is not a
        // literal list.
        assert_eq!(parse_play_args("play('/a.mp3'); track()"), None);
    }
}
