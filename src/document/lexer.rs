//! Line-oriented tokenizer for translation modules.
//!
//! Classifies every line after the opening `{` as blank, comment, entry or
//! raw text, and stops at the first top-level line starting with `}`.

use super::error::ParseError;
use super::literal::{
    Quote,
    StringLiteral,
};
use super::{
    Entry,
    Item,
};
use crate::syntax;

/// Pieces of a tokenized translation module.
#[derive(Debug)]
pub(super) struct Tokens {
    /// Text up to and including the line opening the object literal
    pub(super) head: String,
    /// Lines between the opening and the closing line
    pub(super) items: Vec<Item>,
    /// Closing line and everything after it
    pub(super) tail: Option<String>,
}

/// Tokenizes a translation module.
pub(super) fn tokenize(text: &str) -> Result<Tokens, ParseError> {
    let body_start = find_body_start(text).ok_or(ParseError::MissingObject)?;
    let head = text.get(..body_start).unwrap_or_default().to_string();

    let mut lexer = Lexer { text, pos: body_start };
    let mut items = Vec::new();

    let tail = loop {
        if lexer.at_end() {
            break None;
        }

        let trimmed = lexer.current_line().trim();
        if trimmed.is_empty() {
            items.push(Item::Blank(lexer.take_line()));
        } else if trimmed.starts_with('}') {
            break Some(lexer.take_rest());
        } else if trimmed.starts_with("//") {
            items.push(Item::Comment(lexer.take_line()));
        } else if trimmed.starts_with("/*") {
            items.push(Item::Comment(lexer.take_block_comment()?));
        } else if let Some(entry) = lexer.try_entry()? {
            items.push(Item::Entry(entry));
        } else {
            items.push(Item::Raw(lexer.take_raw()));
        }
    };

    Ok(Tokens { head, items, tail })
}

/// Returns the key declared at the start of `text`, if any.
///
/// Used to recognize keys whose values are not plain string literals.
pub(super) fn leading_key(text: &str) -> Option<String> {
    let mut cursor = Cursor { text, pos: 0 };
    cursor.eat_while(is_inline_space);
    scan_key(&mut cursor).ok().flatten()
}

/// Byte offset just after the line that opens the exported object literal.
///
/// The object is located with tree-sitter. Only when the grammar finds no
/// object at all (heavily truncated text) the first line ending with `{` is
/// taken instead.
fn find_body_start(text: &str) -> Option<usize> {
    match syntax::object_start(text) {
        Some(start) => opening_line_end(text, start),
        None => first_opening_line_end(text),
    }
}

/// End of the line holding the `{` at `start`.
///
/// Nothing but a comment may follow the brace on that line.
fn opening_line_end(text: &str, start: usize) -> Option<usize> {
    let rest = text.get(start..)?;
    let line_len = rest.find('\n').map_or(rest.len(), |newline| newline + 1);
    let line = rest.get(..line_len)?;
    (strip_line_comment(line).trim() == "{").then_some(start + line_len)
}

/// 最初に `{` で終わる行の直後の位置
fn first_opening_line_end(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        offset += line.len();
        if strip_line_comment(line).trim_end().ends_with('{') {
            return Some(offset);
        }
    }
    None
}

/// Removes a trailing `//` comment that is not inside a string.
pub(super) fn strip_line_comment(line: &str) -> &str {
    let mut string: Option<char> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match string {
            Some(_) if c == '\\' => {
                chars.next();
            }
            Some(delimiter) if c == delimiter => string = None,
            Some(_) => {}
            None if matches!(c, '\'' | '"' | '`') => string = Some(c),
            None if c == '/' && chars.peek().is_some_and(|(_, next)| *next == '/') => {
                return line.get(..index).unwrap_or_default();
            }
            None => {}
        }
    }

    line
}

const fn is_inline_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

const fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Returns true if `key` can be written without quotes.
#[must_use]
pub fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_continue)
}

/// Result of scanning a string literal.
enum Scan {
    Closed,
    Unterminated,
    /// Template literal with a `${...}` substitution
    Template,
}

/// Scans a string literal starting at the opening quote.
fn scan_literal(cursor: &mut Cursor<'_>) -> Scan {
    let Some(quote) = cursor.bump().and_then(Quote::from_char) else {
        return Scan::Unterminated;
    };
    let delimiter = quote.as_char();

    loop {
        match cursor.bump() {
            None => return Scan::Unterminated,
            Some('\\') => {
                if cursor.bump() == Some('\r') && cursor.peek() == Some('\n') {
                    cursor.bump();
                }
            }
            Some(c) if c == delimiter => return Scan::Closed,
            Some('\n') if quote != Quote::Backtick => return Scan::Unterminated,
            Some('$') if quote == Quote::Backtick && cursor.peek() == Some('{') => {
                return Scan::Template;
            }
            Some(_) => {}
        }
    }
}

/// Scans `key:` at the cursor.
///
/// Returns `Ok(None)` when the text is not a key, and `Err(offset)` when a
/// quoted key starting at `offset` is never closed.
fn scan_key(cursor: &mut Cursor<'_>) -> Result<Option<String>, usize> {
    let key = match cursor.peek() {
        Some('\'' | '"') => {
            let start = cursor.pos;
            match scan_literal(cursor) {
                Scan::Closed => {}
                Scan::Unterminated => return Err(start),
                Scan::Template => return Ok(None),
            }
            let Some(literal) = StringLiteral::parse(cursor.since(start)) else {
                return Ok(None);
            };
            literal.value().to_string()
        }
        Some(c) if is_identifier_start(c) => cursor.eat_while(is_identifier_continue).to_string(),
        _ => return Ok(None),
    };

    cursor.eat_while(is_inline_space);
    if cursor.bump() != Some(':') {
        return Ok(None);
    }
    Ok(Some(key))
}

/// Character cursor over a string slice.
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    /// Whole text
    text: &'a str,
    /// Current byte offset
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.text.get(self.pos..)?.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
        self.since(start)
    }

    /// Consumes a `\n` or `\r\n` line break.
    fn eat_line_break(&mut self) {
        if self.peek() == Some('\r') {
            self.bump();
        }
        if self.peek() == Some('\n') {
            self.bump();
        }
    }

    /// Consumes everything up to and including the next `\n`.
    fn eat_rest_of_line(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
        self.since(start)
    }

    fn since(&self, start: usize) -> &'a str {
        self.text.get(start..self.pos).unwrap_or_default()
    }
}

/// Tokenizer state.
#[derive(Debug)]
struct Lexer<'a> {
    /// Whole module text
    text: &'a str,
    /// Byte offset of the current line start
    pos: usize,
}

impl<'a> Lexer<'a> {
    const fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn rest(&self) -> &'a str {
        self.text.get(self.pos..).unwrap_or_default()
    }

    fn current_line(&self) -> &'a str {
        self.rest().split_inclusive('\n').next().unwrap_or_default()
    }

    fn take_line(&mut self) -> String {
        let line = self.current_line();
        self.pos += line.len();
        line.to_string()
    }

    fn take_rest(&mut self) -> String {
        let rest = self.rest();
        self.pos = self.text.len();
        rest.to_string()
    }

    /// 1-based line number of a byte offset.
    fn line_number(&self, offset: usize) -> usize {
        self.text.get(..offset).unwrap_or_default().matches('\n').count() + 1
    }

    /// Takes a `/* ... */` comment through the end of its closing line.
    fn take_block_comment(&mut self) -> Result<String, ParseError> {
        let rest = self.rest();
        let line = self.line_number(self.pos);

        let body_start = rest.find("/*").map_or(0, |open| open + 2);
        let close = rest
            .get(body_start..)
            .and_then(|body| body.find("*/"))
            .ok_or(ParseError::UnterminatedComment { line })?;
        let close_end = body_start + close + 2;
        let end = rest
            .get(close_end..)
            .and_then(|after| after.find('\n'))
            .map_or(rest.len(), |newline| close_end + newline + 1);

        self.pos += end;
        Ok(rest.get(..end).unwrap_or_default().to_string())
    }

    /// Tries to read a `key: 'value',` entry at the current line.
    ///
    /// The value may sit on the line after the key. Nothing is consumed when
    /// the line is not an entry.
    fn try_entry(&mut self) -> Result<Option<Entry>, ParseError> {
        let start = self.pos;
        let mut cursor = Cursor { text: self.text, pos: start };
        cursor.eat_while(is_inline_space);

        let key = match scan_key(&mut cursor) {
            Ok(Some(key)) => key,
            Ok(None) => return Ok(None),
            Err(offset) => {
                return Err(ParseError::UnterminatedString { line: self.line_number(offset) });
            }
        };

        cursor.eat_while(is_inline_space);
        if matches!(cursor.peek(), Some('\r' | '\n')) {
            cursor.eat_line_break();
            cursor.eat_while(is_inline_space);
        }
        let prefix = cursor.since(start).to_string();

        if !cursor.peek().is_some_and(|c| Quote::from_char(c).is_some()) {
            return Ok(None);
        }
        let literal_start = cursor.pos;
        match scan_literal(&mut cursor) {
            Scan::Closed => {}
            Scan::Unterminated => {
                return Err(ParseError::UnterminatedString {
                    line: self.line_number(literal_start),
                });
            }
            Scan::Template => return Ok(None),
        }
        let Some(literal) = StringLiteral::parse(cursor.since(literal_start)) else {
            return Ok(None);
        };

        let suffix_start = cursor.pos;
        cursor.eat_while(is_inline_space);
        if cursor.peek() == Some(',') {
            cursor.bump();
        }
        let rest = cursor.eat_rest_of_line().trim();
        if !rest.is_empty() && !rest.starts_with("//") {
            return Ok(None);
        }
        let suffix = cursor.since(suffix_start).to_string();

        self.pos = cursor.pos;
        Ok(Some(Entry::from_parts(key, prefix, literal, suffix)))
    }

    /// Takes a line the grammar does not model, plus continuation lines
    /// until its brackets balance.
    fn take_raw(&mut self) -> String {
        let start = self.pos;
        let mut cursor = Cursor { text: self.text, pos: start };
        let mut depth: isize = 0;
        let mut string: Option<char> = None;

        while let Some(c) = cursor.bump() {
            if let Some(delimiter) = string {
                match c {
                    '\\' => {
                        cursor.bump();
                    }
                    '\n' if delimiter != '`' => {
                        string = None;
                        if depth <= 0 {
                            break;
                        }
                    }
                    c if c == delimiter => string = None,
                    _ => {}
                }
                continue;
            }

            match c {
                '\'' | '"' | '`' => string = Some(c),
                '/' if cursor.peek() == Some('/') => {
                    cursor.eat_while(|c| c != '\n');
                }
                '{' | '[' | '(' => depth += 1,
                '}' | ']' | ')' => depth -= 1,
                '\n' if depth <= 0 => break,
                _ => {}
            }
        }

        self.pos = cursor.pos;
        cursor.since(start).to_string()
    }
}
