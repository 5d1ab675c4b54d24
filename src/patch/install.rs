//! Installation of the marked block.

use crate::config::BlockSettings;
use crate::document::{
    Document,
    Entry,
    Item,
    ParseError,
};

/// Appends the block with its default values to the end of the object.
///
/// Does nothing if the marker is already present. Returns true if the
/// block was installed.
pub fn install_block(document: &mut Document, block: &BlockSettings) -> bool {
    let marker = block.marker.trim();
    if document.has_marker(marker) {
        return false;
    }

    let newline = document.newline();
    document.trim_trailing_blanks();

    let mut index = document.items().len();
    if index > 0 {
        document.insert_item(index, Item::Blank(newline.to_string()));
        index += 1;
    }
    document.insert_item(index, Item::Comment(format!("{}{marker}{newline}", block.indent)));

    for entry in &block.entries {
        index += 1;
        let item = Item::Entry(Entry::new(&block.indent, &entry.key, &entry.value, newline));
        document.insert_item(index, item);
    }

    document.terminate();
    tracing::debug!(marker, entries = block.entries.len(), "Installed block");
    true
}

/// Text form of [`install_block`].
///
/// # Errors
/// Returns [`ParseError`] if `text` is not a translation module.
pub fn install_text(text: &str, block: &BlockSettings) -> Result<(String, bool), ParseError> {
    let mut document = Document::parse(text)?;
    let installed = install_block(&mut document, block);
    Ok((document.format(), installed))
}
