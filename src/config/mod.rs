//! Settings of a patch run and the file patterns derived from them.

mod loader;
mod matcher;
mod types;

use std::path::Path;

pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    BlockEntry,
    BlockSettings,
    ConfigError,
    ImageSettings,
    PatchSettings,
    ValidationError,
};

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".i18n-patch.json";

/// 設定を読み込み、検証する
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load(config_path: &Path) -> Result<PatchSettings, ConfigError> {
    let settings = loader::load_from_path(config_path)?;

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!("Settings loaded successfully: {:?}", settings);

    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn load_rejects_invalid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&config_path, r#"{"block": {"entries": []}}"#).unwrap();

        let result = load(&config_path);

        let Err(ConfigError::ValidationErrors(errors)) = result else {
            panic!("expected validation errors, got {result:?}");
        };
        assert_that!(errors, contains(field!(ValidationError.field_path, eq("block.entries"))));
    }

    #[rstest]
    fn load_valid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &config_path,
            r#"{
                "block": { "entries": [{ "key": "premium_benefit_ads", "value": "Ad-free experience" }] },
                "translations": { "de": { "premium_benefit_ads": "Werbefreie Erfahrung" } }
            }"#,
        )
        .unwrap();

        let settings = load(&config_path).unwrap();

        assert_eq!(
            settings.translation_path("de"),
            temp_dir.path().join("constants/translations/de.ts")
        );
    }
}
