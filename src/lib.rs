//! i18n-block-patcher
//!
//! 言語ごとの翻訳モジュール（`export const fr = { ... };`）にマーカー付きのブロックを
//! 導入・重複除去・更新するツール。画像アセットの形式チェックも行う。

pub mod assets;
pub mod config;
pub mod document;
pub mod indexer;
pub mod locale;
pub mod patch;
pub mod syntax;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::PatchSettings;
pub use patch::Patcher;
