//! GML reader.
//!
//! Only the subset of GML produced by call graph generators is supported: nested key-value
//! lists with integer, real and string values.

use crate::error::Kind;
use failure::Error;
use regex::{Captures, Regex};
use std::{char, iter::Peekable, str::CharIndices};

/// Value of a GML key.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Real value.
    Real(f64),
    /// String value, with character references already resolved.
    Str(String),
    /// Nested list of key-value pairs.
    List(Vec<(String, Value)>),
}

impl Value {
    /// Gets the value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Gets the value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Value::Str(ref s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Gets the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[(String, Value)]> {
        match *self {
            Value::List(ref l) => Some(l.as_slice()),
            _ => None,
        }
    }
}

/// Finds the first value for the given key in a list.
pub fn get<'l>(list: &'l [(String, Value)], key: &str) -> Option<&'l Value> {
    list.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Maximum nesting of lists. Call graphs use two or three levels.
pub const MAX_DEPTH: usize = 64;

/// Parses a GML document into its top-level key-value pairs.
pub fn parse(source: &str) -> Result<Vec<(String, Value)>, Error> {
    let mut lexer = Lexer::new(source);
    let list = parse_list(&mut lexer, 0)?;
    Ok(list)
}

fn parse_list(lexer: &mut Lexer<'_>, depth: usize) -> Result<Vec<(String, Value)>, Error> {
    if depth > MAX_DEPTH {
        return Err(lexer.error("lists nested too deeply"));
    }

    let nested = depth > 0;
    let mut list = Vec::new();
    loop {
        let key = match lexer.next_token()? {
            Some(Token::Key(key)) => key,
            Some(Token::Close) if nested => return Ok(list),
            None if !nested => return Ok(list),
            None => return Err(lexer.error("unclosed list")),
            Some(token) => {
                return Err(lexer.error(format!("expected a key, found {}", token)));
            }
        };

        let value = match lexer.next_token()? {
            Some(Token::Int(i)) => Value::Int(i),
            Some(Token::Real(r)) => Value::Real(r),
            Some(Token::Str(s)) => Value::Str(s),
            Some(Token::Open) => Value::List(parse_list(lexer, depth + 1)?),
            Some(token) => {
                return Err(lexer.error(format!(
                    "expected a value for `{}`, found {}",
                    key, token
                )));
            }
            None => return Err(lexer.error(format!("missing value for `{}`", key))),
        };

        list.push((key, value));
    }
}

#[derive(Debug, PartialEq)]
enum Token {
    Key(String),
    Int(i64),
    Real(f64),
    Str(String),
    Open,
    Close,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Token::Key(ref k) => write!(f, "key `{}`", k),
            Token::Int(i) => write!(f, "integer `{}`", i),
            Token::Real(r) => write!(f, "real `{}`", r),
            Token::Str(_) => write!(f, "a string"),
            Token::Open => write!(f, "`[`"),
            Token::Close => write!(f, "`]`"),
        }
    }
}

struct Lexer<'s> {
    source: &'s str,
    chars: Peekable<CharIndices<'s>>,
    line: usize,
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
        }
    }

    fn error<S: Into<String>>(&self, message: S) -> Error {
        Kind::Gml {
            line: self.line,
            message: message.into(),
        }
        .into()
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            match c {
                '\n' => self.line += 1,
                '#' => {
                    while let Some(&(_, c)) = self.chars.peek() {
                        if c == '\n' {
                            break;
                        }
                        let _ = self.chars.next();
                    }
                    continue;
                }
                c if c.is_whitespace() => {}
                _ => return,
            }
            let _ = self.chars.next();
        }
    }

    /// Consumes characters while `accept` holds and returns the consumed slice.
    fn take_while<F: Fn(char) -> bool>(&mut self, start: usize, accept: F) -> &'s str {
        let mut end = start;
        while let Some(&(i, c)) = self.chars.peek() {
            if !accept(c) {
                break;
            }
            end = i + c.len_utf8();
            let _ = self.chars.next();
        }
        &self.source[start..end]
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        self.skip_whitespace();

        let (start, c) = match self.chars.peek() {
            Some(&next) => next,
            None => return Ok(None),
        };

        let token = match c {
            '[' => {
                let _ = self.chars.next();
                Token::Open
            }
            ']' => {
                let _ = self.chars.next();
                Token::Close
            }
            '"' => {
                let _ = self.chars.next();
                let begin = start + 1;
                let text = self.take_while(begin, |c| c != '"');
                if self.chars.next().is_none() {
                    return Err(self.error("unterminated string"));
                }
                self.line += text.matches('\n').count();
                Token::Str(unescape(text))
            }
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                let text = self.take_while(start, |c| {
                    c.is_ascii_digit() || c == '-' || c == '+' || c == '.' || c == 'e' || c == 'E'
                });
                if text.contains(|c: char| c == '.' || c == 'e' || c == 'E') {
                    match text.parse() {
                        Ok(r) => Token::Real(r),
                        Err(_) => return Err(self.error(format!("invalid real `{}`", text))),
                    }
                } else {
                    match text.parse() {
                        Ok(i) => Token::Int(i),
                        Err(_) => return Err(self.error(format!("invalid integer `{}`", text))),
                    }
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let text = self.take_while(start, |c| c.is_ascii_alphanumeric() || c == '_');
                Token::Key(text.to_owned())
            }
            c => return Err(self.error(format!("unexpected character `{}`", c))),
        };

        Ok(Some(token))
    }
}

/// Resolves the HTML character references used to escape GML strings.
fn unescape(text: &str) -> String {
    lazy_static! {
        static ref REFERENCE: Regex =
            Regex::new(r"&(?:#([0-9]+)|#[xX]([0-9a-fA-F]+)|(quot|amp|lt|gt|apos));").unwrap();
    }

    if !text.contains('&') {
        return text.to_owned();
    }

    REFERENCE
        .replace_all(text, |caps: &Captures<'_>| {
            let code = if let Some(dec) = caps.get(1) {
                dec.as_str().parse::<u32>().ok()
            } else if let Some(hex) = caps.get(2) {
                u32::from_str_radix(hex.as_str(), 16).ok()
            } else {
                None
            };

            match (code.and_then(char::from_u32), caps.get(3).map(|n| n.as_str())) {
                (Some(c), _) => c.to_string(),
                (None, Some("quot")) => "\"".to_owned(),
                (None, Some("amp")) => "&".to_owned(),
                (None, Some("lt")) => "<".to_owned(),
                (None, Some("gt")) => ">".to_owned(),
                (None, Some("apos")) => "'".to_owned(),
                _ => caps[0].to_owned(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::{get, parse, unescape, Value, MAX_DEPTH};

    #[test]
    fn it_parse_nested_lists() {
        let source = "# generated\ngraph [\n  directed 1\n  weight -2.5e1\n  node [\n    id 0\n    \
                      label \"Lcom/x/Foo;->bar()V\"\n  ]\n]\n";
        let document = parse(source).unwrap();

        assert_eq!(document.len(), 1);
        let graph = get(&document, "graph").and_then(Value::as_list).unwrap();
        assert_eq!(get(graph, "directed"), Some(&Value::Int(1)));
        assert_eq!(get(graph, "weight"), Some(&Value::Real(-25.0)));

        let node = get(graph, "node").and_then(Value::as_list).unwrap();
        assert_eq!(get(node, "id").and_then(Value::as_int), Some(0));
        assert_eq!(
            get(node, "label").and_then(Value::as_str),
            Some("Lcom/x/Foo;->bar()V")
        );
    }

    #[test]
    fn it_parse_errors() {
        assert!(parse("graph [ directed 1").is_err());
        assert!(parse("graph [ label \"open ]").is_err());
        assert!(parse("graph ]").is_err());
        assert!(parse("graph [ id ]").is_err());
        assert!(parse("graph [ id 99999999999999999999 ]").is_err());
        assert!(parse("graph [ 1 2 ]").is_err());
        assert!(parse("graph [ @ ]").is_err());
    }

    #[test]
    fn it_parse_depth_limit() {
        let nested = |levels: usize| {
            format!(
                "graph [ directed 1 {}{} ]",
                "x [ ".repeat(levels),
                "] ".repeat(levels)
            )
        };

        assert!(parse(&nested(MAX_DEPTH - 1)).is_ok());
        let error = parse(&nested(MAX_DEPTH)).unwrap_err();
        assert!(error.to_string().contains("nested too deeply"));
        assert!(parse(&format!("graph [ directed 1 {} ]", "x [ ".repeat(100_000))).is_err());
    }

    #[test]
    fn it_parse_error_line() {
        let error = parse("graph [\n  directed 1\n  node [ id ; ]\n]").unwrap_err();
        assert!(error.to_string().contains("line 3"));
    }

    #[test]
    fn it_unescape() {
        assert_eq!(unescape("plain"), "plain");
        assert_eq!(unescape("&quot;a&quot; &amp; &lt;b&gt;"), "\"a\" & <b>");
        assert_eq!(unescape("&#91;I&#x5D;"), "[I]");
        assert_eq!(unescape("&unknown;"), "&unknown;");
    }
}
