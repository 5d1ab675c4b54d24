//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::{
    BlockEntry,
    BlockSettings,
    PatchSettings,
};
use crate::patch::runner::LanguageTable;

/// テスト用のマーカー
pub(crate) const MARKER: &str = "// Premium Benefits";

/// テスト用のブロック定義（英語の既定値）
pub(crate) fn block_settings() -> BlockSettings {
    BlockSettings {
        marker: MARKER.to_string(),
        indent: "  ".to_string(),
        entries: vec![
            BlockEntry::new(
                "premium_benefit_countries",
                "Unlock ALL 195+ countries including Italy, France, Japan & more!",
            ),
            BlockEntry::new("premium_benefit_ads", "Ad-free experience"),
            BlockEntry::new("premium_benefit_support", "Priority customer support"),
        ],
    }
}

/// テスト用のフランス語テーブル
///
/// `premium_benefit_support` は未翻訳、`premium_benefit_filters` はブロック外のキー
pub(crate) fn french_table() -> LanguageTable {
    BTreeMap::from([
        (
            "premium_benefit_countries".to_string(),
            "Débloquez TOUS les 195+ pays, y compris l'Italie, la France, le Japon et plus !"
                .to_string(),
        ),
        ("premium_benefit_ads".to_string(), "Expérience sans publicité".to_string()),
        ("premium_benefit_filters".to_string(), "Filtres avancés".to_string()),
    ])
}

/// `translations_dir` を指定したテスト用の設定を作成する
///
/// # Arguments
/// * `translations_dir` - 翻訳ファイルのディレクトリ
pub(crate) fn settings_in(translations_dir: &Path) -> PatchSettings {
    PatchSettings {
        translations_dir: translations_dir.to_path_buf(),
        block: block_settings(),
        translations: BTreeMap::from([
            ("fr".to_string(), french_table()),
            (
                "de".to_string(),
                BTreeMap::from([(
                    "premium_benefit_ads".to_string(),
                    "Werbefreie Erfahrung".to_string(),
                )]),
            ),
        ]),
        ..PatchSettings::default()
    }
}
