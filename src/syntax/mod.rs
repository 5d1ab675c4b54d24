//! Tree-sitter based checks for translation modules.
//!
//! Patched text is validated here before it is written, and the `check`
//! command reads translations back through a real grammar instead of the
//! line tokenizer used for editing.

pub mod error;
mod language;

pub use error::SyntaxError;
pub use language::ScriptLanguage;
use tree_sitter::{
    Node,
    Parser,
    Tree,
};

use crate::document::literal::StringLiteral;
use crate::types::SourceRange;

/// A string-valued pair of the exported object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub key: String,
    pub value: String,
    pub key_range: SourceRange,
    pub value_range: SourceRange,
}

/// ソースコードを構文木に変換
fn parse(text: &str, language: ScriptLanguage) -> Result<Tree, SyntaxError> {
    let mut parser = Parser::new();
    parser.set_language(&language.tree_sitter_language())?;
    parser.parse(text, None).ok_or(SyntaxError::ParseFailed)
}

/// 最初に見つかった ERROR / MISSING ノードを返す
fn first_invalid_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    node.children(&mut cursor).find_map(first_invalid_node)
}

/// Checks that `text` parses without errors.
///
/// # Errors
/// Returns [`SyntaxError::Invalid`] with the position of the first error
/// node.
pub fn validate(text: &str, language: ScriptLanguage) -> Result<(), SyntaxError> {
    let tree = parse(text, language)?;
    let root = tree.root_node();
    if !root.has_error() {
        return Ok(());
    }

    let node = first_invalid_node(root).unwrap_or(root);
    let kind = if node.is_missing() {
        format!("missing '{}'", node.kind())
    } else {
        "unexpected input".to_string()
    };
    Err(SyntaxError::Invalid { position: node.start_position().into(), kind })
}

/// 最初のオブジェクトリテラルを探す
fn find_object(node: Node<'_>) -> Option<Node<'_>> {
    if node.kind() == "object" {
        return Some(node);
    }
    let mut cursor = node.walk();
    node.named_children(&mut cursor).find_map(find_object)
}

/// Byte offset of the `{` opening the exported object literal.
///
/// Objects of top-level `export` statements are preferred over any other
/// object, so imports and type literals declared before the export are
/// never picked. Returns `None` when the text holds no object literal.
#[must_use]
pub fn object_start(text: &str) -> Option<usize> {
    let tree = parse(text, ScriptLanguage::TypeScript).ok()?;
    exported_object(tree.root_node()).map(|node| node.start_byte())
}

/// `export` 文のオブジェクトを優先して探す
fn exported_object(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    let exported = root
        .named_children(&mut cursor)
        .filter(|node| node.kind() == "export_statement")
        .find_map(find_object);
    exported.or_else(|| find_object(root))
}

/// `${...}` を含むテンプレートかどうか
fn has_substitution(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).any(|child| child.kind() == "template_substitution")
}

/// `pair` ノードからキーと文字列値を取り出す
fn extract_pair(pair: Node<'_>, source: &[u8]) -> Option<ExtractedEntry> {
    let key_node = pair.child_by_field_name("key")?;
    let value_node = pair.child_by_field_name("value")?;

    let Ok(key_text) = key_node.utf8_text(source) else {
        tracing::warn!("Failed to get key text from node");
        return None;
    };
    let key = match key_node.kind() {
        "property_identifier" | "number" => key_text.to_string(),
        "string" => StringLiteral::parse(key_text)?.value().to_string(),
        _ => return None,
    };

    let value = match value_node.kind() {
        "string" => value_node.utf8_text(source).ok(),
        "template_string" if !has_substitution(value_node) => value_node.utf8_text(source).ok(),
        _ => None,
    }
    .and_then(StringLiteral::parse)?
    .value()
    .to_string();

    Some(ExtractedEntry {
        key,
        value,
        key_range: SourceRange::from_node(&key_node),
        value_range: SourceRange::from_node(&value_node),
    })
}

/// Extracts the string-valued pairs of the exported object literal.
///
/// Pairs whose value is not a plain string (nested objects, numbers,
/// templates with substitutions) are left out.
pub fn extract_entries(
    text: &str,
    language: ScriptLanguage,
) -> Result<Vec<ExtractedEntry>, SyntaxError> {
    let tree = parse(text, language)?;
    let source = text.as_bytes();
    let object = exported_object(tree.root_node()).ok_or(SyntaxError::MissingObject)?;

    let mut cursor = object.walk();
    let entries = object
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "pair")
        .filter_map(|pair| extract_pair(pair, source))
        .collect();
    Ok(entries)
}
