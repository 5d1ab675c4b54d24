//! Language code helpers

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Language codes accepted as translation file names
///
/// ISO 639-1 codes plus the regional variants mobile stores ship.
static LANGUAGE_CODES: LazyLock<HashSet<String>> = LazyLock::new(|| {
    [
        "af", "am", "ar", "ar-AE", "ar-EG", "ar-SA", "az", "be", "bg", "bn", "bs", "ca", "cs",
        "cy", "da", "de", "de-AT", "de-CH", "de-DE", "el", "en", "en-AU", "en-CA", "en-GB",
        "en-IN", "en-US", "es", "es-419", "es-ES", "es-MX", "et", "eu", "fa", "fi", "fil", "fr",
        "fr-CA", "fr-FR", "ga", "gl", "gu", "he", "hi", "hr", "hu", "hy", "id", "is", "it", "ja",
        "ka", "kk", "km", "kn", "ko", "lo", "lt", "lv", "mk", "ml", "mn", "mr", "ms", "my", "nb",
        "ne", "nl", "nn", "no", "pa", "pl", "pt", "pt-BR", "pt-PT", "ro", "ru", "si", "sk", "sl",
        "sq", "sr", "sv", "sw", "ta", "te", "th", "tl", "tr", "uk", "ur", "uz", "vi", "zh",
        "zh-CN", "zh-HK", "zh-Hans", "zh-Hant", "zh-TW", "zu",
    ]
    .iter()
    .map(|code| normalize_language_code(code))
    .collect()
});

/// Normalize language code (lowercase and replace - with _)
#[must_use]
pub fn normalize_language_code(code: &str) -> String {
    code.to_lowercase().replace('-', "_")
}

/// Returns true if `code` is a known language code, in any case and with
/// either `-` or `_` as the region separator.
#[must_use]
pub fn is_language_code(code: &str) -> bool {
    LANGUAGE_CODES.contains(&normalize_language_code(code))
}

/// Detect language from a translation file name
///
/// # Examples
/// - `constants/translations/fr.ts` → `Some("fr")`
/// - `constants/translations/pt-BR.ts` → `Some("pt-BR")`
/// - `constants/translations/index.ts` → `None`
#[must_use]
pub fn language_from_path(file_path: &Path) -> Option<String> {
    let stem = file_path.file_stem()?.to_str()?;
    is_language_code(stem).then(|| stem.to_string())
}
