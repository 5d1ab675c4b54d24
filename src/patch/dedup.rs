//! Removal of repeated blocks and repeated keys.

use std::collections::HashSet;
use std::mem;

use crate::document::{
    Document,
    Item,
    ParseError,
};

/// Keeps the first block marked by `marker` and drops everything from the
/// second marker line up to the closing line.
///
/// The end of the object is normalized afterwards: trailing blank lines
/// are trimmed, the separator after the last kept value is removed and a
/// missing closing line is restored. Returns the number of removed blocks.
pub fn dedupe_blocks(document: &mut Document, marker: &str) -> usize {
    let positions = document.marker_positions(marker);
    let Some(&second) = positions.get(1) else {
        if !document.is_terminated() {
            document.close();
        }
        return 0;
    };

    document.items_mut().truncate(second);
    document.close();
    positions.len() - 1
}

/// Removes later occurrences of keys declared more than once.
///
/// The first occurrence wins. A section comment whose values were all
/// removed goes with them, together with the blank lines before it; the
/// `marker` comment always stays. Returns the removed keys in document
/// order.
pub fn prune_duplicate_keys(document: &mut Document, marker: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut removed = Vec::new();

    let items = mem::take(document.items_mut());
    let mut keep: Vec<bool> = items
        .iter()
        .map(|item| match item.declared_key() {
            Some(key) if seen.contains(&key) => {
                removed.push(key);
                false
            }
            Some(key) => {
                seen.insert(key);
                true
            }
            None => true,
        })
        .collect();
    if !removed.is_empty() {
        drop_emptied_headers(&items, &mut keep, marker);
    }

    document
        .items_mut()
        .extend(items.into_iter().zip(keep).filter_map(|(item, keep)| keep.then_some(item)));
    if !removed.is_empty() {
        document.trim_trailing_blanks();
    }
    removed
}

/// 値がすべて削除されたセクションの見出しコメントと直前の空行を削除対象にする
fn drop_emptied_headers(items: &[Item], keep: &mut [bool], marker: &str) {
    let mut section_end = items.len();
    for (header, item) in items.iter().enumerate().rev() {
        if !matches!(item, Item::Comment(_)) {
            continue;
        }
        let section_start = header + 1;
        let section_items = items.get(section_start..section_end).unwrap_or_default();
        let section_keep = keep.get(section_start..section_end).unwrap_or_default();
        section_end = header;
        if item.is_marker(marker) {
            continue;
        }

        let mut values = section_items
            .iter()
            .zip(section_keep)
            .filter(|(item, _)| item.is_value())
            .map(|(_, keep)| *keep)
            .peekable();
        let emptied = values.peek().is_some() && values.all(|keep| !keep);
        if !emptied {
            continue;
        }

        let blanks_before = items
            .get(..header)
            .unwrap_or_default()
            .iter()
            .rev()
            .take_while(|item| matches!(item, Item::Blank(_)))
            .count();
        if let Some(dropped) = keep.get_mut(header - blanks_before..=header) {
            dropped.fill(false);
        }
    }
}

/// Text form of [`dedupe_blocks`].
///
/// # Errors
/// Returns [`ParseError`] if `text` is not a translation module.
///
/// # Examples
/// ```
/// use i18n_block_patcher::patch::dedup::dedupe_text;
///
/// let text = "export const fr = {\n  // Premium Benefits\n  a: 'x',\n  // Premium Benefits\n  a: 'x',\n";
/// let (deduped, removed) = dedupe_text(text, "// Premium Benefits").unwrap();
///
/// assert_eq!(removed, 1);
/// assert_eq!(deduped, "export const fr = {\n  // Premium Benefits\n  a: 'x'\n};\n");
/// ```
pub fn dedupe_text(text: &str, marker: &str) -> Result<(String, usize), ParseError> {
    let mut document = Document::parse(text)?;
    let removed = dedupe_blocks(&mut document, marker);
    Ok((document.format(), removed))
}
