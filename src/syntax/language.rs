//! Script languages translation modules are written in.

use std::path::Path;

/// Supported script languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptLanguage {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl ScriptLanguage {
    /// Infers the script language from a file extension (without the dot).
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "tsx" => Some(Self::Tsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "jsx" => Some(Self::Jsx),
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            _ => None,
        }
    }

    /// Infers the script language from a file path.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).and_then(Self::from_extension)
    }

    #[must_use]
    pub fn tree_sitter_language(&self) -> tree_sitter::Language {
        match self {
            Self::JavaScript | Self::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::tsx("fr.tsx", Some(ScriptLanguage::Tsx))]
    #[case::ts("fr.ts", Some(ScriptLanguage::TypeScript))]
    #[case::mts("fr.mts", Some(ScriptLanguage::TypeScript))]
    #[case::jsx("fr.jsx", Some(ScriptLanguage::Jsx))]
    #[case::js("fr.js", Some(ScriptLanguage::JavaScript))]
    #[case::cjs("fr.cjs", Some(ScriptLanguage::JavaScript))]
    #[case::multiple_dots("translations/fr.generated.ts", Some(ScriptLanguage::TypeScript))]
    #[case::json("fr.json", None)]
    #[case::no_ext("fr", None)]
    fn test_from_path(#[case] path: &str, #[case] expected: Option<ScriptLanguage>) {
        let lang = ScriptLanguage::from_path(Path::new(path));
        assert_eq!(lang, expected);
    }
}
