//! Per-file pipeline and batch runs over the translations directory.

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::fs;
use std::io::ErrorKind;
use std::path::{
    Path,
    PathBuf,
};

use super::dedup::{
    dedupe_blocks,
    prune_duplicate_keys,
};
use super::error::PatchError;
use super::install::install_block;
use super::upsert::{
    UpsertOutcome,
    upsert_entry,
};
use crate::config::{
    BlockSettings,
    FileMatcher,
    PatchSettings,
};
use crate::document::Document;
use crate::locale::is_language_code;
use crate::indexer::{
    IndexerError,
    TranslationFile,
    find_translation_files,
};
use crate::syntax::{
    ScriptLanguage,
    extract_entries,
    validate,
};

/// Localized values of one language: key → value.
pub type LanguageTable = BTreeMap<String, String>;

/// What the pipeline did to one file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Changes {
    /// Duplicate blocks cut from the end of the object
    pub removed_blocks: usize,
    /// Keys removed because they were declared earlier
    pub removed_keys: Vec<String>,
    pub installed: bool,
    pub updated: Vec<String>,
    pub inserted: Vec<String>,
    pub unchanged: Vec<String>,
    /// Keys whose value is not a string literal
    pub skipped: Vec<String>,
    /// Block keys still holding the base-language value after patching
    pub untranslated: Vec<String>,
}

impl Changes {
    /// キーを結果ごとのリストに追加
    fn record(&mut self, key: &str, outcome: UpsertOutcome) {
        let list = match outcome {
            UpsertOutcome::Updated => &mut self.updated,
            UpsertOutcome::Inserted => &mut self.inserted,
            UpsertOutcome::Unchanged => &mut self.unchanged,
            UpsertOutcome::Skipped => &mut self.skipped,
        };
        list.push(key.to_string());
    }
}

/// Patched text together with what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPatch {
    pub text: String,
    pub changes: Changes,
}

#[derive(Debug)]
pub enum FileOutcome {
    Written,
    /// Dry run: the file would have been written
    WouldWrite,
    Unchanged,
    NotFound,
    Failed(PatchError),
}

#[derive(Debug)]
pub struct FileReport {
    pub language: String,
    pub path: PathBuf,
    pub outcome: FileOutcome,
    pub changes: Changes,
}

impl FileReport {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed(_))
    }

    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Written | FileOutcome::WouldWrite)
    }

    /// 結果をログに出力
    fn log(&self) {
        let language = self.language.as_str();
        let path = self.path.display();
        match &self.outcome {
            FileOutcome::Written => tracing::info!(
                language,
                %path,
                removed_blocks = self.changes.removed_blocks,
                installed = self.changes.installed,
                updated = self.changes.updated.len(),
                inserted = self.changes.inserted.len(),
                "Updated"
            ),
            FileOutcome::WouldWrite => tracing::info!(
                language,
                %path,
                removed_blocks = self.changes.removed_blocks,
                installed = self.changes.installed,
                updated = self.changes.updated.len(),
                inserted = self.changes.inserted.len(),
                "Would update"
            ),
            FileOutcome::Unchanged => tracing::info!(language, %path, "Already up to date"),
            FileOutcome::NotFound => tracing::warn!(language, %path, "File not found, skipping"),
            FileOutcome::Failed(error) => tracing::error!(language, %path, %error, "Failed"),
        }
        if !self.changes.removed_keys.is_empty() {
            tracing::info!(language, keys = ?self.changes.removed_keys, "Removed duplicate keys");
        }
        if !self.changes.skipped.is_empty() {
            tracing::warn!(language, keys = ?self.changes.skipped, "Skipped non-string values");
        }
    }
}

/// Reports of a batch run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.files.iter().any(FileReport::is_failure)
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.files.iter().any(FileReport::is_changed)
    }

    /// Logs the totals of the run.
    pub fn log_summary(&self) {
        let count = |predicate: fn(&FileOutcome) -> bool| {
            self.files.iter().filter(|file| predicate(&file.outcome)).count()
        };
        tracing::info!(
            files = self.files.len(),
            changed = count(|o| matches!(o, FileOutcome::Written | FileOutcome::WouldWrite)),
            unchanged = count(|o| matches!(o, FileOutcome::Unchanged)),
            not_found = count(|o| matches!(o, FileOutcome::NotFound)),
            failed = count(|o| matches!(o, FileOutcome::Failed(_))),
            "Done"
        );
    }
}

/// Applies the block pipeline to translation files.
#[derive(Debug, Clone)]
pub struct Patcher {
    settings: PatchSettings,
    dry_run: bool,
}

impl Patcher {
    #[must_use]
    pub const fn new(settings: PatchSettings) -> Self {
        Self { settings, dry_run: false }
    }

    /// When set, files are never written.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &PatchSettings {
        &self.settings
    }

    /// Runs the full pipeline over `text` without touching the filesystem.
    ///
    /// Keys of `table` are upserted in block order first, then the keys the
    /// block does not define in sorted order.
    ///
    /// # Errors
    /// - [`PatchError::Parse`] if `text` is not a translation module
    /// - [`PatchError::Syntax`] if the patched text does not parse
    pub fn patch_text(
        &self,
        text: &str,
        table: &LanguageTable,
        language: ScriptLanguage,
    ) -> Result<TextPatch, PatchError> {
        let block = &self.settings.block;
        let mut document = Document::parse(text)?;
        let mut changes = Changes {
            removed_blocks: dedupe_blocks(&mut document, &block.marker),
            removed_keys: prune_duplicate_keys(&mut document, &block.marker),
            installed: install_block(&mut document, block),
            ..Changes::default()
        };

        for (key, value) in ordered_updates(block, table) {
            let outcome = upsert_entry(&mut document, block, key, value);
            changes.record(key, outcome);
        }

        let text = document.format();
        validate(&text, language)?;
        changes.untranslated = untranslated_keys(&text, language, block)?;

        Ok(TextPatch { text, changes })
    }

    /// Patches the file of `language` with `table`.
    pub fn patch_file(&self, language: &str, table: &LanguageTable) -> FileReport {
        self.patch_file_with(language, table, self.dry_run)
    }

    /// ファイル単位のパイプライン本体
    fn patch_file_with(&self, language: &str, table: &LanguageTable, dry_run: bool) -> FileReport {
        let path = self.settings.translation_path(language);
        let (outcome, changes) = match self.try_patch_file(&path, table, dry_run) {
            Ok(result) => result,
            Err(error) => (FileOutcome::Failed(error), Changes::default()),
        };

        let report = FileReport { language: language.to_string(), path, outcome, changes };
        report.log();
        report
    }

    /// 読み込み、パッチ、検証、書き込み
    fn try_patch_file(
        &self,
        path: &Path,
        table: &LanguageTable,
        dry_run: bool,
    ) -> Result<(FileOutcome, Changes), PatchError> {
        let Some(original) = read_text(path)? else {
            return Ok((FileOutcome::NotFound, Changes::default()));
        };
        let script = script_language(path)?;
        let patched = self.patch_text(&original, table, script)?;
        let outcome = write_if_changed(path, &original, &patched.text, dry_run)?;
        Ok((outcome, patched.changes))
    }

    /// Patches every language with a translation table, or only the
    /// languages in `only` when it is not empty.
    ///
    /// The base language and names that are not language codes are never
    /// patched. A language without a table only gets the block installed with
    /// its default values.
    pub fn patch_all(&self, only: &[String]) -> BatchReport {
        self.patch_all_with(only, self.dry_run)
    }

    /// `patch_all` の本体
    fn patch_all_with(&self, only: &[String], dry_run: bool) -> BatchReport {
        let empty = LanguageTable::new();
        let languages: Vec<&String> = if only.is_empty() {
            self.settings.translations.keys().collect()
        } else {
            only.iter().collect()
        };

        let mut report = BatchReport::default();
        for language in languages {
            if language == &self.settings.base_language {
                tracing::warn!(language = %language, "Base language is never patched, skipping");
                continue;
            }
            if !is_language_code(language) {
                tracing::warn!(language = %language, "Unknown language code, skipping");
                continue;
            }
            let table = self.settings.translations.get(language).unwrap_or_else(|| {
                tracing::warn!(
                    language = %language,
                    "No translations configured, installing defaults only"
                );
                &empty
            });
            report.files.push(self.patch_file_with(language, table, dry_run));
        }
        report
    }

    /// Removes duplicate blocks from one file, leaving everything else as is.
    pub fn dedupe_file(&self, file: &TranslationFile) -> FileReport {
        let (outcome, changes) = match self.try_dedupe_file(&file.path) {
            Ok(result) => result,
            Err(error) => (FileOutcome::Failed(error), Changes::default()),
        };

        let report = FileReport {
            language: file.language.clone(),
            path: file.path.clone(),
            outcome,
            changes,
        };
        report.log();
        report
    }

    /// 重複ブロックの削除だけを行う
    fn try_dedupe_file(&self, path: &Path) -> Result<(FileOutcome, Changes), PatchError> {
        let Some(original) = read_text(path)? else {
            return Ok((FileOutcome::NotFound, Changes::default()));
        };
        let script = script_language(path)?;
        let mut document = Document::parse(&original)?;
        let changes = Changes {
            removed_blocks: dedupe_blocks(&mut document, &self.settings.block.marker),
            ..Changes::default()
        };

        let text = document.format();
        validate(&text, script)?;
        let outcome = write_if_changed(path, &original, &text, self.dry_run)?;
        Ok((outcome, changes))
    }

    /// Removes duplicate blocks from every translation file in the
    /// translations directory, except the base language file.
    ///
    /// # Errors
    /// - Invalid exclude patterns
    /// - Missing translations directory
    pub fn dedupe_all(&self) -> Result<BatchReport, IndexerError> {
        let matcher = FileMatcher::new(&self.settings)?;
        let files = find_translation_files(&matcher)?;
        tracing::info!(count = files.len(), "Found translation files");

        Ok(BatchReport { files: files.iter().map(|file| self.dedupe_file(file)).collect() })
    }

    /// Dry run of [`Self::patch_all`] that also reports block keys still
    /// holding the base-language value.
    pub fn check(&self) -> BatchReport {
        let report = self.patch_all_with(&[], true);
        for file in &report.files {
            if !file.changes.untranslated.is_empty() {
                tracing::warn!(
                    language = %file.language,
                    keys = ?file.changes.untranslated,
                    "Block keys are not translated"
                );
            }
        }
        report
    }
}

/// ブロック順、続いてブロック外のキーをソート順で返す
fn ordered_updates<'a>(
    block: &'a BlockSettings,
    table: &'a LanguageTable,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    let block_keys = block
        .keys()
        .filter_map(|key| table.get_key_value(key))
        .map(|(key, value)| (key.as_str(), value.as_str()));
    let extra_keys = table
        .iter()
        .filter(|(key, _)| !block.contains_key(key))
        .map(|(key, value)| (key.as_str(), value.as_str()));
    block_keys.chain(extra_keys)
}

/// 既定値のまま残っているブロックのキー
fn untranslated_keys(
    text: &str,
    language: ScriptLanguage,
    block: &BlockSettings,
) -> Result<Vec<String>, PatchError> {
    let entries = extract_entries(text, language)?;
    let values: HashMap<&str, &str> =
        entries.iter().map(|entry| (entry.key.as_str(), entry.value.as_str())).collect();

    Ok(block
        .entries
        .iter()
        .filter(|entry| values.get(entry.key.as_str()) == Some(&entry.value.as_str()))
        .map(|entry| entry.key.clone())
        .collect())
}

/// ファイルを読み込む。存在しない場合は `None`
fn read_text(path: &Path) -> Result<Option<String>, PatchError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(PatchError::Read { path: path.to_path_buf(), source }),
    };
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|source| PatchError::Decode { path: path.to_path_buf(), source })
}

/// 拡張子からスクリプト言語を決める
fn script_language(path: &Path) -> Result<ScriptLanguage, PatchError> {
    ScriptLanguage::from_path(path)
        .ok_or_else(|| PatchError::UnsupportedExtension { path: path.to_path_buf() })
}

/// 内容が変わった場合のみ書き込む
fn write_if_changed(
    path: &Path,
    original: &str,
    patched: &str,
    dry_run: bool,
) -> Result<FileOutcome, PatchError> {
    if original == patched {
        return Ok(FileOutcome::Unchanged);
    }
    if dry_run {
        return Ok(FileOutcome::WouldWrite);
    }
    fs::write(path, patched)
        .map_err(|source| PatchError::Write { path: path.to_path_buf(), source })?;
    Ok(FileOutcome::Written)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::{
        MARKER,
        french_table,
        settings_in,
    };

    const FRENCH: &str = "\
export const fr = {
  welcome: 'Bienvenue',
  last_key: 'x',
};
";

    fn patcher() -> Patcher {
        Patcher::new(settings_in(Path::new("/unused")))
    }

    #[googletest::test]
    fn test_patch_text_installs_and_localizes() {
        let table = french_table();

        let patch = patcher().patch_text(FRENCH, &table, ScriptLanguage::TypeScript).unwrap();

        expect_that!(patch.changes.installed, eq(true));
        expect_that!(patch.text.matches(MARKER).count(), eq(1));
        expect_that!(patch.text, ends_with("};\n"));

        let entries = extract_entries(&patch.text, ScriptLanguage::TypeScript).unwrap();
        for (key, value) in &table {
            let found = entries.iter().find(|entry| &entry.key == key);
            expect_that!(found.map(|entry| entry.value.as_str()), some(eq(value.as_str())));
        }
    }

    #[googletest::test]
    fn test_patch_text_orders_block_keys_then_extra_keys() {
        let patch = patcher().patch_text(FRENCH, &french_table(), ScriptLanguage::TypeScript).unwrap();

        expect_that!(patch.changes.updated, elements_are![eq("premium_benefit_countries"), eq("premium_benefit_ads")]);
        expect_that!(patch.changes.inserted, elements_are![eq("premium_benefit_filters")]);
        expect_that!(
            patch.text,
            contains_substring(
                "  premium_benefit_support: 'Priority customer support',\n  premium_benefit_filters: 'Filtres avancés',\n};\n"
            )
        );
    }

    #[googletest::test]
    fn test_patch_text_reports_untranslated_block_keys() {
        let patch = patcher().patch_text(FRENCH, &french_table(), ScriptLanguage::TypeScript).unwrap();

        expect_that!(patch.changes.untranslated, elements_are![eq("premium_benefit_support")]);
    }

    #[googletest::test]
    fn test_patch_text_collapses_duplicate_blocks_first() {
        let text = "\
export const fr = {
  welcome: 'Bienvenue',

  // Premium Benefits
  premium_benefit_countries: 'Unlock ALL 195+ countries including Italy, France, Japan & more!',
  premium_benefit_ads: 'Ad-free experience',

  // Premium Benefits
  premium_benefit_countries: 'Unlock ALL 195+ countries including Italy, France, Japan & more!',
  premium_benefit_ads: 'Ad-free experience',
};
";

        let patch = patcher().patch_text(text, &french_table(), ScriptLanguage::TypeScript).unwrap();

        expect_that!(patch.changes.removed_blocks, eq(1));
        expect_that!(patch.changes.installed, eq(false));
        expect_that!(patch.text.matches(MARKER).count(), eq(1));
        expect_that!(patch.text.matches("premium_benefit_ads").count(), eq(1));
        expect_that!(patch.text, contains_substring("premium_benefit_ads: 'Expérience sans publicité',"));
    }

    #[googletest::test]
    fn test_patch_text_is_idempotent() {
        let patcher = patcher();
        let table = french_table();

        let once = patcher.patch_text(FRENCH, &table, ScriptLanguage::TypeScript).unwrap();
        let twice = patcher.patch_text(&once.text, &table, ScriptLanguage::TypeScript).unwrap();

        assert_eq!(twice.text, once.text);
        expect_that!(twice.changes.updated, is_empty());
        expect_that!(twice.changes.inserted, is_empty());
    }

    #[googletest::test]
    fn test_patch_text_after_commented_non_string_value() {
        let text = "export const fr = {\n  welcome: 'Bienvenue',\n  count: 3 // items\n};\n";

        let patch = patcher().patch_text(text, &french_table(), ScriptLanguage::TypeScript).unwrap();

        expect_that!(patch.changes.installed, eq(true));
        expect_that!(patch.text, contains_substring("  count: 3, // items\n\n  // Premium Benefits\n"));
    }

    #[rstest]
    #[case::multiline_import("import type {\n  Translations,\n} from './types';\n\n")]
    #[case::type_literal("type T = {\n  welcome: string;\n};\n\n")]
    #[googletest::test]
    fn test_patch_text_leaves_preamble_alone(#[case] preamble: &str) {
        let text = format!("{preamble}export const fr: Translations = {{\n  welcome: 'Bienvenue',\n}};\n");

        let patch = patcher().patch_text(&text, &french_table(), ScriptLanguage::TypeScript).unwrap();

        assert_that!(patch.text, starts_with(preamble));
        expect_that!(patch.changes.installed, eq(true));
        let entries = extract_entries(&patch.text, ScriptLanguage::TypeScript).unwrap();
        expect_that!(
            entries.iter().find(|entry| entry.key == "premium_benefit_ads").map(|entry| entry.value.as_str()),
            some(eq("Expérience sans publicité"))
        );
    }

    #[googletest::test]
    fn test_patch_text_rejects_invalid_result() {
        let text = "export const fr = {\n  a: 'x',\n  b: 1 +,\n};\n";

        let result = patcher().patch_text(text, &french_table(), ScriptLanguage::TypeScript);

        assert!(matches!(result, Err(PatchError::Syntax(_))));
    }

    #[googletest::test]
    fn test_patch_file_writes_changes() {
        let temp_dir = TempDir::new().unwrap();
        let patcher = Patcher::new(settings_in(temp_dir.path()));
        let path = patcher.settings().translation_path("fr");
        fs::write(&path, FRENCH).unwrap();

        let report = patcher.patch_file("fr", &french_table());

        assert!(matches!(report.outcome, FileOutcome::Written));
        let written = fs::read_to_string(&path).unwrap();
        expect_that!(written, contains_substring(MARKER));
        expect_that!(written, contains_substring("Filtres avancés"));
    }

    #[rstest]
    fn test_patch_file_dry_run_leaves_file() {
        let temp_dir = TempDir::new().unwrap();
        let patcher = Patcher::new(settings_in(temp_dir.path())).dry_run(true);
        let path = patcher.settings().translation_path("fr");
        fs::write(&path, FRENCH).unwrap();

        let report = patcher.patch_file("fr", &french_table());

        assert!(matches!(report.outcome, FileOutcome::WouldWrite));
        assert_eq!(fs::read_to_string(&path).unwrap(), FRENCH);
    }

    #[rstest]
    fn test_patch_file_never_writes_invalid_text() {
        let temp_dir = TempDir::new().unwrap();
        let patcher = Patcher::new(settings_in(temp_dir.path()));
        let path = patcher.settings().translation_path("fr");
        let broken = "export const fr = {\n  a: 'x',\n  b: 1 +,\n};\n";
        fs::write(&path, broken).unwrap();

        let report = patcher.patch_file("fr", &french_table());

        assert!(matches!(report.outcome, FileOutcome::Failed(PatchError::Syntax(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), broken);
    }

    #[rstest]
    fn test_patch_file_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let patcher = Patcher::new(settings_in(temp_dir.path()));
        fs::write(patcher.settings().translation_path("fr"), [0xff, 0xfe, 0x00]).unwrap();

        let report = patcher.patch_file("fr", &french_table());

        assert!(matches!(report.outcome, FileOutcome::Failed(PatchError::Decode { .. })));
    }

    #[rstest]
    fn test_patch_all_continues_after_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let patcher = Patcher::new(settings_in(temp_dir.path()));
        fs::write(patcher.settings().translation_path("fr"), FRENCH).unwrap();

        let report = patcher.patch_all(&[]);

        let outcomes: Vec<(&str, bool)> = report
            .files
            .iter()
            .map(|file| (file.language.as_str(), matches!(file.outcome, FileOutcome::NotFound)))
            .collect();
        assert_eq!(outcomes, vec![("de", true), ("fr", false)]);
        assert!(!report.has_failures());
        assert!(report.has_changes());
    }

    #[rstest]
    fn test_patch_all_skips_base_language() {
        let temp_dir = TempDir::new().unwrap();
        let patcher = Patcher::new(settings_in(temp_dir.path()));
        let english = "export const en = {\n  welcome: 'Welcome',\n};\n";
        fs::write(patcher.settings().translation_path("en"), english).unwrap();
        fs::write(patcher.settings().translation_path("it"), FRENCH).unwrap();

        let report = patcher.patch_all(&["en".to_string(), "it".to_string()]);

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].language, "it");
        assert!(report.files[0].changes.installed);
        assert_eq!(fs::read_to_string(patcher.settings().translation_path("en")).unwrap(), english);
    }

    #[rstest]
    #[case::parent_dir("../outside")]
    #[case::nested_path("nested/fr")]
    #[case::unknown("xx")]
    fn test_patch_all_skips_unknown_language_codes(#[case] language: &str) {
        let temp_dir = TempDir::new().unwrap();
        let translations_dir = temp_dir.path().join("translations");
        fs::create_dir(&translations_dir).unwrap();
        let outside = temp_dir.path().join("outside.ts");
        fs::write(&outside, FRENCH).unwrap();
        let patcher = Patcher::new(settings_in(&translations_dir));

        let report = patcher.patch_all(&[language.to_string()]);

        assert!(report.files.is_empty());
        assert_eq!(fs::read_to_string(&outside).unwrap(), FRENCH);
    }

    #[rstest]
    fn test_dedupe_all() {
        let temp_dir = TempDir::new().unwrap();
        let patcher = Patcher::new(settings_in(temp_dir.path()));
        let duplicated = "export const de = {\n  // Premium Benefits\n  a: 'x',\n  // Premium Benefits\n  a: 'x',\n};\n";
        fs::write(patcher.settings().translation_path("de"), duplicated).unwrap();
        fs::write(patcher.settings().translation_path("fr"), FRENCH).unwrap();
        fs::write(patcher.settings().translation_path("en"), duplicated).unwrap();

        let report = patcher.dedupe_all().unwrap();

        assert_eq!(report.files.len(), 2);
        assert!(matches!(report.files[0].outcome, FileOutcome::Written));
        assert_eq!(report.files[0].changes.removed_blocks, 1);
        assert!(matches!(report.files[1].outcome, FileOutcome::Unchanged));
        assert_eq!(
            fs::read_to_string(patcher.settings().translation_path("de")).unwrap(),
            "export const de = {\n  // Premium Benefits\n  a: 'x'\n};\n"
        );
        assert_eq!(fs::read_to_string(patcher.settings().translation_path("en")).unwrap(), duplicated);
    }

    #[rstest]
    fn test_check_never_writes() {
        let temp_dir = TempDir::new().unwrap();
        let patcher = Patcher::new(settings_in(temp_dir.path()));
        let path = patcher.settings().translation_path("fr");
        fs::write(&path, FRENCH).unwrap();

        let report = patcher.check();

        assert!(report.has_changes());
        assert_eq!(fs::read_to_string(&path).unwrap(), FRENCH);
    }
}
