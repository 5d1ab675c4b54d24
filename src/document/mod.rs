//! Lossless model of a translation module.
//!
//! A translation module is an exported object literal of `key: 'value',`
//! lines:
//!
//! ```text
//! export const fr = {
//!   welcome: 'Bienvenue',
//!
//!   // Premium Benefits
//!   premium_benefit_ads: 'Expérience sans publicité',
//! };
//! ```
//!
//! [`Document::parse`] splits such a file into items and [`Document::format`]
//! writes them back. Items that are not edited are reproduced byte for byte.

pub mod error;
mod lexer;
pub mod literal;

use std::fmt;

pub use error::ParseError;
pub use lexer::is_identifier;
use literal::{
    Quote,
    StringLiteral,
};

/// Closing line emitted when a document has none.
pub const TERMINATOR: &str = "};";

/// A `key: 'value',` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    /// Indent, key, colon and the whitespace before the literal
    prefix: String,
    literal: StringLiteral,
    /// Separator, trailing comment and line break
    suffix: String,
}

impl Entry {
    pub(crate) const fn from_parts(
        key: String,
        prefix: String,
        literal: StringLiteral,
        suffix: String,
    ) -> Self {
        Self { key, prefix, literal, suffix }
    }

    /// Creates a new single-line entry with a trailing separator.
    #[must_use]
    pub fn new(indent: &str, key: &str, value: &str, newline: &str) -> Self {
        let key_source = if is_identifier(key) {
            key.to_string()
        } else {
            StringLiteral::new(key, Quote::Single).raw().to_string()
        };
        Self {
            key: key.to_string(),
            prefix: format!("{indent}{key_source}: "),
            literal: StringLiteral::new(value, Quote::Single),
            suffix: format!(",{newline}"),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.literal.value()
    }

    #[must_use]
    pub const fn literal(&self) -> &StringLiteral {
        &self.literal
    }

    /// Leading whitespace of the entry's first line.
    #[must_use]
    pub fn indent(&self) -> &str {
        let width = self.prefix.len() - self.prefix.trim_start_matches([' ', '\t']).len();
        self.prefix.get(..width).unwrap_or_default()
    }

    /// Returns true if the entry is followed by `,`.
    #[must_use]
    pub fn has_separator(&self) -> bool {
        self.suffix.trim_start_matches([' ', '\t']).starts_with(',')
    }

    /// Replaces the value, keeping the quote style unless the new value
    /// contains it.
    ///
    /// Returns false if the value is already `value`.
    pub fn set_value(&mut self, value: &str) -> bool {
        if self.literal.value() == value {
            return false;
        }
        self.literal = StringLiteral::new(value, self.literal.quote());
        true
    }

    pub(crate) fn ensure_separator(&mut self) {
        if !self.has_separator() {
            self.suffix.insert(0, ',');
        }
    }

    pub(crate) fn strip_separator(&mut self) {
        let width = self.suffix.len() - self.suffix.trim_start_matches([' ', '\t']).len();
        if self.suffix.get(width..).is_some_and(|rest| rest.starts_with(',')) {
            self.suffix.remove(width);
        }
    }

    fn write_to(&self, out: &mut String) {
        out.push_str(&self.prefix);
        out.push_str(self.literal.raw());
        out.push_str(&self.suffix);
    }
}

/// One logical line (or group of lines) inside the object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Blank(String),
    /// `//` line or `/* */` block
    Comment(String),
    Entry(Entry),
    /// Anything else: nested objects, non-string values, spreads
    Raw(String),
}

impl Item {
    /// Returns true if this is the marker comment line.
    #[must_use]
    pub fn is_marker(&self, marker: &str) -> bool {
        matches!(self, Self::Comment(text) if text.trim() == marker.trim())
    }

    /// Key declared by this item, including keys of raw items.
    #[must_use]
    pub fn declared_key(&self) -> Option<String> {
        match self {
            Self::Entry(entry) => Some(entry.key.clone()),
            Self::Raw(text) => lexer::leading_key(text),
            Self::Blank(_) | Self::Comment(_) => None,
        }
    }

    /// Returns true for entries and raw items, which take a separator.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Entry(_) | Self::Raw(_))
    }

    fn ensure_separator(&mut self) {
        match self {
            Self::Entry(entry) => entry.ensure_separator(),
            Self::Raw(text) => {
                let code_end = raw_code_end(text);
                let ends_open = text
                    .get(..code_end)
                    .is_some_and(|code| code.ends_with([',', '{', '[', '(']));
                if !ends_open {
                    text.insert(code_end, ',');
                }
            }
            Self::Blank(_) | Self::Comment(_) => {}
        }
    }

    fn strip_separator(&mut self) {
        match self {
            Self::Entry(entry) => entry.strip_separator(),
            Self::Raw(text) => {
                let code_end = raw_code_end(text);
                if let Some(comma) = code_end.checked_sub(1)
                    && text.get(comma..code_end) == Some(",")
                {
                    text.remove(comma);
                }
            }
            Self::Blank(_) | Self::Comment(_) => {}
        }
    }

    fn ensure_newline(&mut self, newline: &str) {
        let text = match self {
            Self::Entry(entry) => &mut entry.suffix,
            Self::Blank(text) | Self::Comment(text) | Self::Raw(text) => text,
        };
        if !text.ends_with('\n') {
            text.push_str(newline);
        }
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Entry(entry) => entry.write_to(out),
            Self::Blank(text) | Self::Comment(text) | Self::Raw(text) => out.push_str(text),
        }
    }
}

/// Byte offset just after the code of a raw item's last line.
///
/// A trailing `//` comment is not code.
fn raw_code_end(text: &str) -> usize {
    let line_start = text.trim_end().rfind('\n').map_or(0, |newline| newline + 1);
    let last_line = text.get(line_start..).unwrap_or_default();
    line_start + lexer::strip_line_comment(last_line).trim_end().len()
}

/// A parsed translation module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    head: String,
    items: Vec<Item>,
    /// `None` when the text ends before the closing line
    tail: Option<String>,
    newline: &'static str,
}

impl Document {
    /// Parses a translation module.
    ///
    /// # Examples
    /// ```
    /// use i18n_block_patcher::document::Document;
    ///
    /// let text = "export const fr = {\n  welcome: 'Bienvenue',\n};\n";
    /// let document = Document::parse(text).unwrap();
    ///
    /// assert_eq!(document.entry("welcome").map(|e| e.value()), Some("Bienvenue"));
    /// assert_eq!(document.format(), text);
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let tokens = lexer::tokenize(text)?;
        let newline = if tokens.head.ends_with("\r\n") { "\r\n" } else { "\n" };
        Ok(Self { head: tokens.head, items: tokens.items, tail: tokens.tail, newline })
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) const fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }

    /// Line break used by the document (`\n` or `\r\n`).
    #[must_use]
    pub const fn newline(&self) -> &'static str {
        self.newline
    }

    /// Returns true if the document has its closing line.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.tail.is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.items.iter().filter_map(|item| match item {
            Item::Entry(entry) => Some(entry),
            _ => None,
        })
    }

    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries().find(|entry| entry.key == key)
    }

    /// Index of the first item declaring `key`.
    #[must_use]
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.declared_key().as_deref() == Some(key))
    }

    /// Indices of all marker comment lines.
    #[must_use]
    pub fn marker_positions(&self, marker: &str) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_marker(marker))
            .map(|(index, _)| index)
            .collect()
    }

    #[must_use]
    pub fn has_marker(&self, marker: &str) -> bool {
        self.items.iter().any(|item| item.is_marker(marker))
    }

    /// Index of the last entry or raw item.
    #[must_use]
    pub fn last_value_index(&self) -> Option<usize> {
        self.items.iter().rposition(Item::is_value)
    }

    pub(crate) fn ensure_separator_at(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.ensure_separator();
        }
    }

    pub(crate) fn trim_trailing_blanks(&mut self) {
        while matches!(self.items.last(), Some(Item::Blank(_))) {
            self.items.pop();
        }
    }

    /// Inserts `item` before `index`.
    ///
    /// The preceding item is given a line break, and when `item` is a value
    /// the nearest preceding value is given a separator.
    pub(crate) fn insert_item(&mut self, index: usize, item: Item) {
        let newline = self.newline;
        let index = index.min(self.items.len());
        if item.is_value()
            && let Some(previous) =
                self.items.get(..index).and_then(|items| items.iter().rposition(Item::is_value))
        {
            self.ensure_separator_at(previous);
        }
        if let Some(previous) = index.checked_sub(1).and_then(|i| self.items.get_mut(i)) {
            previous.ensure_newline(newline);
        }
        self.items.insert(index, item);
    }

    /// Restores a missing closing line.
    pub(crate) fn terminate(&mut self) {
        if self.tail.is_none() {
            if let Some(last) = self.items.last_mut() {
                last.ensure_newline(self.newline);
            }
            self.tail = Some(format!("{TERMINATOR}{}", self.newline));
        }
    }

    /// Normalizes the end of the object after its last items were cut off.
    ///
    /// Trailing blank lines are dropped, the separator after the last value
    /// becomes the terminator, and a missing closing line is restored.
    pub(crate) fn close(&mut self) {
        let newline = self.newline;
        self.trim_trailing_blanks();
        if let Some(last) = self.items.last_mut() {
            if last.is_value() {
                last.strip_separator();
            }
            last.ensure_newline(newline);
        }
        self.terminate();
    }

    /// Writes the document back to text.
    #[must_use]
    pub fn format(&self) -> String {
        let mut out = self.head.clone();
        for item in &self.items {
            item.write_to(&mut out);
        }
        if let Some(tail) = &self.tail {
            out.push_str(tail);
        } else {
            if !out.ends_with('\n') {
                out.push_str(self.newline);
            }
            out.push_str(TERMINATOR);
            out.push_str(self.newline);
        }
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
