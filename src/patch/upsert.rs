//! Update-or-insert of single keys.

use crate::config::BlockSettings;
use crate::document::{
    Document,
    Entry,
    Item,
    ParseError,
};

/// Result of upserting one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The existing value was replaced
    Updated,
    /// The key was absent and a new entry was added
    Inserted,
    /// The key already had the value
    Unchanged,
    /// The key exists but its value is not a plain string literal
    Skipped,
}

/// Sets `key` to `value`.
///
/// An existing entry keeps its layout and only its literal is rewritten. An
/// absent key is inserted after the last entry of the block opened by
/// `block.marker`, or at the end of the object when there is no block.
pub fn upsert_entry(
    document: &mut Document,
    block: &BlockSettings,
    key: &str,
    value: &str,
) -> UpsertOutcome {
    if let Some(index) = document.position_of(key) {
        return match document.items_mut().get_mut(index) {
            Some(Item::Entry(entry)) => {
                if entry.set_value(value) {
                    UpsertOutcome::Updated
                } else {
                    UpsertOutcome::Unchanged
                }
            }
            _ => {
                tracing::warn!(key, "Value is not a string literal, leaving it untouched");
                UpsertOutcome::Skipped
            }
        };
    }

    let (index, indent) = insertion_point(document, block);
    let entry = Entry::new(&indent, key, value, document.newline());
    document.insert_item(index, Item::Entry(entry));
    UpsertOutcome::Inserted
}

/// 新しいキーの挿入位置とインデントを決める
fn insertion_point(document: &Document, block: &BlockSettings) -> (usize, String) {
    let items = document.items();
    let marker = document.marker_positions(&block.marker).first().copied();

    let anchor = match marker {
        Some(start) => {
            let block_items = items.iter().enumerate().skip(start + 1);
            let mut last_entry = None;
            for (index, item) in block_items {
                match item {
                    Item::Entry(_) => last_entry = Some(index),
                    Item::Blank(_) => {}
                    Item::Comment(_) | Item::Raw(_) => break,
                }
            }
            Some(last_entry.unwrap_or(start))
        }
        None => document.last_value_index(),
    };

    let Some(anchor) = anchor else {
        return (items.len(), block.indent.clone());
    };
    let indent = match items.get(anchor) {
        Some(Item::Entry(entry)) => entry.indent().to_string(),
        Some(Item::Comment(text) | Item::Raw(text)) => leading_whitespace(text).to_string(),
        _ => block.indent.clone(),
    };
    (anchor + 1, indent)
}

/// 行頭の空白
fn leading_whitespace(text: &str) -> &str {
    let width = text.len() - text.trim_start_matches([' ', '\t']).len();
    text.get(..width).unwrap_or_default()
}

/// Text form of [`upsert_entry`].
///
/// # Errors
/// Returns [`ParseError`] if `text` is not a translation module.
pub fn upsert_text(
    text: &str,
    block: &BlockSettings,
    key: &str,
    value: &str,
) -> Result<(String, UpsertOutcome), ParseError> {
    let mut document = Document::parse(text)?;
    let outcome = upsert_entry(&mut document, block, key, value);
    Ok((document.format(), outcome))
}
