//! Per-descriptor dependency extraction rules.
//!
//! Each rule runs over a file's whole text. Rules are case-sensitive and
//! never fail: text that does not match simply contributes nothing.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::descriptor::BuildDescriptor;

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_CMAKE_FIND_PACKAGE, r"find_package\((\w+)");
lazy_regex!(RE_MESON_DEPENDENCY, r#"dependency\(['"](\w+)"#);
lazy_regex!(RE_AUTOCONF_CHECK_LIB, r"AC_CHECK_LIB\(\[?(\w+)");
lazy_regex!(RE_MAKE_LINK_FLAG, r"-l(\w+)");
lazy_regex!(RE_INSTALL_REQUIRES, r"install_requires\s*=\s*\[");
lazy_regex!(RE_REQUIREMENT_NAME, r"^[\w.\-]+");

/// Extract the dependency names `descriptor`'s rule finds in `content`.
pub fn extract(descriptor: BuildDescriptor, content: &str) -> BTreeSet<String> {
    match descriptor {
        BuildDescriptor::CMake => first_captures(&RE_CMAKE_FIND_PACKAGE, content),
        BuildDescriptor::Meson => first_captures(&RE_MESON_DEPENDENCY, content),
        BuildDescriptor::Autoconf => first_captures(&RE_AUTOCONF_CHECK_LIB, content),
        BuildDescriptor::Make => first_captures(&RE_MAKE_LINK_FLAG, content),
        BuildDescriptor::Setuptools => install_requires(content),
    }
}

fn first_captures(re: &Regex, content: &str) -> BTreeSet<String> {
    re.captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Names listed in every `install_requires = [...]` literal.
///
/// The literal is isolated first, then each quoted string inside it
/// contributes the distribution name it starts with, so `"requests>=2.0"`
/// and `"requests[security]"` both yield `requests`.
fn install_requires(content: &str) -> BTreeSet<String> {
    RE_INSTALL_REQUIRES
        .find_iter(content)
        .filter_map(|opener| list_literal(&content[opener.end()..]))
        .flat_map(|body| {
            Lexer::new(body).filter_map(|token| match token {
                Token::Str(s) => requirement_name(s),
                Token::Open | Token::Close(_) => None,
            })
        })
        .collect()
}

/// Body of a list literal whose opening `[` has already been consumed.
///
/// Nested brackets are balanced; brackets inside strings and comments are
/// ignored. Returns `None` when the literal is never closed.
fn list_literal(rest: &str) -> Option<&str> {
    let mut depth = 1usize;
    for token in Lexer::new(rest) {
        match token {
            Token::Open => depth += 1,
            Token::Close(offset) => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..offset]);
                }
            }
            Token::Str(_) => {}
        }
    }
    None
}

fn requirement_name(quoted: &str) -> Option<String> {
    RE_REQUIREMENT_NAME
        .find(quoted.trim_start())
        .map(|m| m.as_str().to_string())
}

/// The parts of Python source that matter for list literals.
#[derive(Debug, PartialEq)]
enum Token<'a> {
    Open,
    /// Byte offset of the `]`.
    Close(usize),
    /// String contents without the quotes.
    Str(&'a str),
}

/// Minimal Python lexer: brackets, quoted strings and `#` comments.
///
/// All delimiters are ASCII, so byte offsets always land on char boundaries.
struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() {
            let start = self.pos;
            let byte = bytes[start];
            self.pos += 1;
            match byte {
                b'#' => match self.src[self.pos..].find('\n') {
                    Some(n) => self.pos += n + 1,
                    None => self.pos = bytes.len(),
                },
                b'[' => return Some(Token::Open),
                b']' => return Some(Token::Close(start)),
                b'"' | b'\'' => {
                    let mut escaped = false;
                    let mut i = self.pos;
                    while i < bytes.len() {
                        let c = bytes[i];
                        if escaped {
                            escaped = false;
                        } else if c == b'\\' {
                            escaped = true;
                        } else if c == byte {
                            self.pos = i + 1;
                            return Some(Token::Str(&self.src[start + 1..i]));
                        }
                        i += 1;
                    }
                    // Unterminated string: nothing after it can be trusted.
                    self.pos = bytes.len();
                    return None;
                }
                _ => {}
            }
        }
        None
    }
}
