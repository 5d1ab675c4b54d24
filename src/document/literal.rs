//! String literal decoding and encoding for translation values.

/// Quote character delimiting a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Single,
    Double,
    Backtick,
}

impl Quote {
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::Single),
            '"' => Some(Self::Double),
            '`' => Some(Self::Backtick),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
            Self::Backtick => '`',
        }
    }

    /// The quote to switch to when a value contains this one.
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::Single => Self::Double,
            Self::Double | Self::Backtick => Self::Single,
        }
    }
}

/// A string literal as written in a translation module.
///
/// Keeps the exact source text next to the decoded value so that untouched
/// literals are reproduced byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    quote: Quote,
    raw: String,
    value: String,
}

impl StringLiteral {
    /// Encodes `value` as a new literal, preferring the `preferred` quote.
    ///
    /// # Examples
    /// ```
    /// use i18n_block_patcher::document::literal::{Quote, StringLiteral};
    ///
    /// let literal = StringLiteral::new("l'Italie", Quote::Single);
    /// assert_eq!(literal.raw(), "\"l'Italie\"");
    /// ```
    #[must_use]
    pub fn new(value: &str, preferred: Quote) -> Self {
        let quote = choose_quote(value, preferred);
        Self { quote, raw: encode(value, quote), value: value.to_string() }
    }

    /// Parses a literal from its source text, quotes included.
    ///
    /// Returns `None` if `raw` is not delimited by matching quotes.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let first = raw.chars().next()?;
        let quote = Quote::from_char(first)?;
        let body = raw.strip_prefix(first)?.strip_suffix(first)?;
        Some(Self { quote, raw: raw.to_string(), value: decode(body) })
    }

    #[must_use]
    pub const fn quote(&self) -> Quote {
        self.quote
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Picks a quote for `value` that avoids escaping where possible.
///
/// Keeps `preferred` unless the value contains it; switches to the alternate
/// quote when the value does not contain that one, and falls back to
/// escaping otherwise.
#[must_use]
pub fn choose_quote(value: &str, preferred: Quote) -> Quote {
    if !value.contains(preferred.as_char()) || preferred == Quote::Backtick {
        return preferred;
    }
    let alternate = preferred.alternate();
    if value.contains(alternate.as_char()) { preferred } else { alternate }
}

/// Encodes `value` into literal source text delimited by `quote`.
fn encode(value: &str, quote: Quote) -> String {
    let delimiter = quote.as_char();
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);

    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' if quote == Quote::Backtick && chars.peek() == Some(&'{') => out.push_str("\\$"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }

    out.push(delimiter);
    out
}

/// Decodes the body of a literal (the text between the quotes).
///
/// Unknown escapes decode to the escaped character, as JavaScript does.
#[must_use]
pub fn decode(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            // Line continuation
            Some('\n') => {}
            Some('\r') => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            Some('u') => decode_unicode_escape(&mut chars, &mut out),
            Some(other) => out.push(other),
        }
    }

    out
}

/// Decodes the part of a `\u` escape following the `u`.
///
/// Malformed escapes are kept verbatim.
fn decode_unicode_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    let mut digits = String::new();
    let braced = chars.peek() == Some(&'{');
    if braced {
        chars.next();
        while let Some(&c) = chars.peek() {
            chars.next();
            if c == '}' {
                break;
            }
            digits.push(c);
        }
    } else {
        while digits.len() < 4 {
            match chars.peek() {
                Some(c) if c.is_ascii_hexdigit() => {
                    digits.push(*c);
                    chars.next();
                }
                _ => break,
            }
        }
    }

    let decoded = (braced || digits.len() == 4)
        .then(|| u32::from_str_radix(&digits, 16).ok())
        .flatten()
        .and_then(char::from_u32);

    match decoded {
        Some(c) => out.push(c),
        None if braced => {
            out.push_str("\\u{");
            out.push_str(&digits);
            out.push('}');
        }
        None => {
            out.push_str("\\u");
            out.push_str(&digits);
        }
    }
}
