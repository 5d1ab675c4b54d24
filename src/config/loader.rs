//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    PatchSettings,
};

/// 設定ファイルを読み込む
///
/// 相対パスは設定ファイルのあるディレクトリを基準に解決する
///
/// # Arguments
/// * `config_path` - 設定ファイルのパス
///
/// # Errors
/// - 設定ファイルが存在しない
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_from_path(config_path: &Path) -> Result<PatchSettings, ConfigError> {
    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Err(ConfigError::NotFound(config_path.to_path_buf()));
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let mut settings: PatchSettings = serde_json::from_str(&content)?;

    let base = config_path.parent().unwrap_or_else(|| Path::new(""));
    settings.resolve_paths(base);

    Ok(settings)
}
