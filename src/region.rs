//! Region code helpers.
//!
//! Region codes are either ISO 3166-1 alpha-2 codes (`"DE"`, `"XK"`) or
//! UN M.49 three-digit area codes (`"001"`, `"419"`). Nothing here consults a
//! registry of assigned codes: the data tables are frozen CLDR snapshots and
//! may legitimately contain retired or private-use codes.

/// Code used by every table for "unknown or invalid region".
pub const UNKNOWN_REGION: &str = "ZZ";

/// Retired codes still present in older CLDR snapshots.
const DEPRECATED: &[&str] = &["AN", "CS", "DD", "FX", "NT", "QU", "SU", "YD"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Two ASCII uppercase letters.
    Alpha2,
    /// Three ASCII digits (UN M.49).
    Numeric,
}

/// Classify a code by shape. Returns `None` for anything that is neither
/// two uppercase ASCII letters nor three ASCII digits.
///
/// ```
/// use region_names::region::{RegionKind, region_kind};
/// assert_eq!(region_kind("DE"), Some(RegionKind::Alpha2));
/// assert_eq!(region_kind("419"), Some(RegionKind::Numeric));
/// assert_eq!(region_kind("de"), None);
/// ```
#[inline]
pub fn region_kind(code: &str) -> Option<RegionKind> {
    let bytes = code.as_bytes();
    match bytes.len() {
        2 if bytes.iter().all(u8::is_ascii_uppercase) => Some(RegionKind::Alpha2),
        3 if bytes.iter().all(u8::is_ascii_digit) => Some(RegionKind::Numeric),
        _ => None,
    }
}

#[inline]
pub fn is_valid_region_code(code: &str) -> bool {
    region_kind(code).is_some()
}

/// Whether `code` was retired from ISO 3166-1 but still shows up in the data
/// (Netherlands Antilles, Serbia and Montenegro, ...).
#[inline]
pub fn is_deprecated_region_code(code: &str) -> bool {
    DEPRECATED.contains(&code)
}
