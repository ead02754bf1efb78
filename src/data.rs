//! Tables compiled into the binary.
//!
//! Each locale lives in `data/<locale>.json` (CLDR 21 and 25 snapshots). The JSON is
//! embedded verbatim and only parsed when a registry is built from it.

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – registers every embedded locale from a single list
/// ---------------------------------------------------------------------------
macro_rules! define_locales {
    ($($id:literal),* $(,)?) => {
        /// Locale id -> raw JSON document.
        pub static BUILTIN_TABLES: Map<&'static str, &'static str> = phf_map! {
            $(
                $id => include_str!(concat!("../data/", $id, ".json")),
            )*
        };

        static BUILTIN_IDS: &[&str] = &[$($id),*];
    };
}

// Keep this list in byte order; `builtin_locale_ids` hands it out as-is.
define_locales! {
    "am", "ar", "az", "be", "bg", "bn", "brx", "el", "fa", "ga", "gd", "gsw",
    "gu", "he", "hi", "hr", "is", "it", "ja", "ka", "kln", "kn", "ko", "ks",
    "ksh", "ky", "lt", "lv", "mk", "ml", "mn", "mr", "ne", "or", "pa", "root",
    "ru", "sk", "sl", "sr", "sr_Latn", "ta", "te", "th", "to", "ug", "uk", "uz",
    "uz_Cyrl", "vi", "yo", "yo_BJ", "zu",
}

/// Ids of all embedded locales, sorted.
#[inline]
pub fn builtin_locale_ids() -> &'static [&'static str] {
    BUILTIN_IDS
}

/// Raw JSON for an embedded locale.
#[inline]
pub fn builtin_source(locale_id: &str) -> Option<&'static str> {
    BUILTIN_TABLES.get(locale_id).copied()
}
