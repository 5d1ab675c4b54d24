//! Translation file discovery

use ignore::WalkBuilder;

use crate::config::FileMatcher;
use crate::indexer::types::{
    IndexerError,
    TranslationFile,
};
use crate::locale::language_from_path;

/// 翻訳ディレクトリ内の翻訳ファイルを検索
///
/// サブディレクトリは走査しない。結果は言語コード順。
///
/// # Errors
/// - 翻訳ディレクトリが存在しない
pub fn find_translation_files(matcher: &FileMatcher) -> Result<Vec<TranslationFile>, IndexerError> {
    let translations_dir = matcher.translations_dir();
    if !translations_dir.is_dir() {
        return Err(IndexerError::DirectoryNotFound(translations_dir.to_path_buf()));
    }
    tracing::debug!(translations_dir = %translations_dir.display(), "Searching translation files");

    let mut found_files = Vec::new();
    // ignore クレートでファイルを走査
    for result in WalkBuilder::new(translations_dir)
        .max_depth(Some(1))
        .hidden(false)
        .git_ignore(false)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        // ファイルのみを対象
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if !matcher.is_translation_file(path) {
            continue;
        }

        let Some(language) = language_from_path(path) else {
            tracing::debug!(path = %path.display(), "Skipping file without a language code name");
            continue;
        };

        found_files.push(TranslationFile { language, path: path.to_path_buf() });
    }

    found_files.sort_by(|a, b| a.language.cmp(&b.language));
    Ok(found_files)
}
