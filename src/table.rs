//! Per-locale region name table.
//!
//! A [`LocaleNameTable`] is the deserialized form of one `data/<locale>.json`
//! document. It only knows about its own entries; parent fallback is the
//! resolver's job.

use std::{
    collections::{BTreeMap, HashSet, btree_map::Entry},
    fmt, fs,
    path::Path,
};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, MapAccess, Visitor},
};

use crate::{error::RegistryError, locale::canonicalize_locale_id, region::is_valid_region_code};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleNameTable {
    #[serde(rename = "locale")]
    locale_id: String,
    #[serde(rename = "parent", default, skip_serializing_if = "Option::is_none")]
    parent_locale_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    sorted_region_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    likely_region_codes: Vec<String>,
    #[serde(rename = "names", default, deserialize_with = "unique_entries")]
    entries: BTreeMap<String, String>,
}

impl LocaleNameTable {
    pub fn new(locale_id: impl Into<String>) -> Self {
        Self {
            locale_id: locale_id.into(),
            parent_locale_id: None,
            sorted_region_codes: Vec::new(),
            likely_region_codes: Vec::new(),
            entries: BTreeMap::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_locale_id = Some(parent.into());
        self
    }

    pub fn with_sorted_region_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sorted_region_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_likely_region_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.likely_region_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Add or replace a single entry.
    pub fn with_entry(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.entries.insert(code.into(), name.into());
        self
    }

    /// Same table with its own and its parent's id in `_` form.
    pub(crate) fn into_canonical_ids(mut self) -> Self {
        self.locale_id = canonicalize_locale_id(&self.locale_id).into_owned();
        self.parent_locale_id = self
            .parent_locale_id
            .as_deref()
            .map(|parent| canonicalize_locale_id(parent).into_owned());
        self
    }

    /// Parse one JSON document. Duplicate keys inside `names` are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_slice(json: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(json)
    }

    /// Read and parse a table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&bytes).map_err(|source| RegistryError::Json {
            origin: path.display().to_string(),
            source,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[inline]
    pub fn locale_id(&self) -> &str {
        &self.locale_id
    }

    #[inline]
    pub fn parent_locale_id(&self) -> Option<&str> {
        self.parent_locale_id.as_deref()
    }

    #[inline]
    pub fn sorted_region_codes(&self) -> &[String] {
        &self.sorted_region_codes
    }

    #[inline]
    pub fn likely_region_codes(&self) -> &[String] {
        &self.likely_region_codes
    }

    #[inline]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Problems worth a warning but not worth refusing the table over.
    pub fn quality_issues(&self) -> Vec<QualityIssue> {
        let mut issues = Vec::new();
        check_code_list(
            &self.sorted_region_codes,
            &mut issues,
            QualityIssue::InvalidSortCode,
            QualityIssue::DuplicateSortCode,
        );
        check_code_list(
            &self.likely_region_codes,
            &mut issues,
            QualityIssue::InvalidLikelyCode,
            QualityIssue::DuplicateLikelyCode,
        );
        issues.extend(
            self.entries
                .keys()
                .filter(|code| !is_valid_region_code(code))
                .map(|code| QualityIssue::InvalidEntryCode(code.clone())),
        );
        issues
    }
}

fn check_code_list(
    codes: &[String],
    issues: &mut Vec<QualityIssue>,
    invalid: impl Fn(String) -> QualityIssue,
    duplicate: impl Fn(String) -> QualityIssue,
) {
    let mut seen = HashSet::with_capacity(codes.len());
    for code in codes {
        if !is_valid_region_code(code) {
            issues.push(invalid(code.clone()));
        }
        if !seen.insert(code.as_str()) {
            issues.push(duplicate(code.clone()));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityIssue {
    InvalidSortCode(String),
    DuplicateSortCode(String),
    InvalidLikelyCode(String),
    DuplicateLikelyCode(String),
    InvalidEntryCode(String),
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSortCode(code) => write!(f, "malformed region code `{code}` in sort order"),
            Self::DuplicateSortCode(code) => write!(f, "region code `{code}` listed twice in sort order"),
            Self::InvalidLikelyCode(code) => write!(f, "malformed region code `{code}` in likely regions"),
            Self::DuplicateLikelyCode(code) => write!(f, "region code `{code}` listed twice in likely regions"),
            Self::InvalidEntryCode(code) => write!(f, "malformed region code `{code}` in names"),
        }
    }
}

fn unique_entries<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = BTreeMap<String, String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of region codes to display names")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = BTreeMap::new();
            while let Some((code, name)) = map.next_entry::<String, String>()? {
                match entries.entry(code) {
                    Entry::Occupied(e) => {
                        return Err(de::Error::custom(format_args!(
                            "duplicate region code `{}`",
                            e.key()
                        )));
                    }
                    Entry::Vacant(e) => {
                        e.insert(name);
                    }
                }
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}
