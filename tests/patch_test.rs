//! 設定ファイルから翻訳ディレクトリ全体へのパッチ適用テスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::indexing_slicing)]

use std::fs;
use std::path::Path;

use i18n_block_patcher::Patcher;
use i18n_block_patcher::config::{
    self,
    ConfigError,
};
use i18n_block_patcher::patch::FileOutcome;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const CONFIG: &str = r#"{
  "translationsDir": "translations",
  "block": {
    "marker": "// Premium Benefits",
    "entries": [
      { "key": "premium_benefit_ads", "value": "Ad-free experience" },
      { "key": "premium_benefit_support", "value": "Priority customer support" }
    ]
  },
  "translations": {
    "ar": {
      "premium_benefit_ads": "تجربة خالية من الإعلانات",
      "premium_benefit_support": "دعم عملاء ذو أولوية"
    },
    "it": {
      "premium_benefit_ads": "Esperienza senza pubblicità"
    }
  }
}"#;

/// 三重に追記されたブロックを持つアラビア語ファイル
const ARABIC: &str = "\
export const ar = {
  welcome: 'مرحبا',

  // Premium Benefits
  premium_benefit_ads: 'Ad-free experience',

  // Premium Benefits
  premium_benefit_ads: 'Ad-free experience',
  premium_benefit_support: 'Priority customer support',

  // Premium Benefits
  premium_benefit_ads: 'Ad-free experience',
};

export default ar;
";

const ITALIAN: &str = "export const it = {\n  welcome: 'Benvenuto',\n};\n";

fn setup_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let translations = dir.path().join("translations");
    fs::create_dir(&translations).unwrap();
    fs::write(dir.path().join(config::DEFAULT_CONFIG_FILE), CONFIG).unwrap();
    fs::write(translations.join("ar.ts"), ARABIC).unwrap();
    fs::write(translations.join("it.ts"), ITALIAN).unwrap();
    fs::write(translations.join("en.ts"), "export const en = {\n  welcome: 'Welcome',\n};\n")
        .unwrap();
    dir
}

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join("translations").join(file)).unwrap()
}

#[test]
fn test_patch_all_from_config() {
    let dir = setup_workspace();
    let settings = config::load(&dir.path().join(config::DEFAULT_CONFIG_FILE)).unwrap();

    let report = Patcher::new(settings).patch_all(&[]);

    assert!(!report.has_failures());
    assert_eq!(
        read(dir.path(), "ar.ts"),
        "\
export const ar = {
  welcome: 'مرحبا',

  // Premium Benefits
  premium_benefit_ads: 'تجربة خالية من الإعلانات',
  premium_benefit_support: 'دعم عملاء ذو أولوية',
};

export default ar;
"
    );
    assert_eq!(
        read(dir.path(), "it.ts"),
        "\
export const it = {
  welcome: 'Benvenuto',

  // Premium Benefits
  premium_benefit_ads: 'Esperienza senza pubblicità',
  premium_benefit_support: 'Priority customer support',
};
"
    );
}

#[test]
fn test_patch_all_twice_changes_nothing() {
    let dir = setup_workspace();
    let settings = config::load(&dir.path().join(config::DEFAULT_CONFIG_FILE)).unwrap();
    let patcher = Patcher::new(settings);
    let _ = patcher.patch_all(&[]);
    let first = (read(dir.path(), "ar.ts"), read(dir.path(), "it.ts"));

    let report = patcher.patch_all(&[]);

    assert!(!report.has_changes());
    assert_eq!((read(dir.path(), "ar.ts"), read(dir.path(), "it.ts")), first);
}

#[test]
fn test_check_reports_pending_and_untranslated() {
    let dir = setup_workspace();
    let settings = config::load(&dir.path().join(config::DEFAULT_CONFIG_FILE)).unwrap();

    let report = Patcher::new(settings).check();

    assert!(report.has_changes());
    assert_eq!(read(dir.path(), "ar.ts"), ARABIC);
    let italian = report.files.iter().find(|file| file.language == "it").unwrap();
    assert!(matches!(italian.outcome, FileOutcome::WouldWrite));
    assert_eq!(italian.changes.untranslated, vec!["premium_benefit_support".to_string()]);
}

#[test]
fn test_dedupe_all_leaves_values_alone() {
    let dir = setup_workspace();
    let settings = config::load(&dir.path().join(config::DEFAULT_CONFIG_FILE)).unwrap();

    let report = Patcher::new(settings).dedupe_all().unwrap();

    assert!(!report.has_failures());
    let deduped = read(dir.path(), "ar.ts");
    assert_eq!(deduped.matches("// Premium Benefits").count(), 1);
    assert!(deduped.contains("premium_benefit_ads: 'Ad-free experience'"));
    assert!(deduped.ends_with("export default ar;\n"));
    assert_eq!(read(dir.path(), "it.ts"), ITALIAN);
}

#[test]
fn test_load_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(config::DEFAULT_CONFIG_FILE);
    fs::write(&path, r#"{ "block": { "marker": "Premium", "entries": [] } }"#).unwrap();

    let result = config::load(&path);

    assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
}

#[test]
fn test_demo_config_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("i18n-patch.json");

    let settings = config::load(&path).unwrap();

    assert_eq!(settings.block.entries.len(), 10);
    assert_eq!(settings.translations.len(), 14);
    assert!(settings.translations.values().all(|table| table.len() == 11));
}
