//! Region name lookup with locale fallback.
//!
//! Every lookup walks the validated parent chain of the requested locale,
//! child first, and stops at the first table that has an answer. Misses never
//! fail: an unknown locale behaves like the root locale and an unknown region
//! resolves to the chain's `"ZZ"` name.

use std::{collections::BTreeMap, path::Path, sync::Arc};

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::{
    error::{RegistryError, ResolveError},
    locale::canonicalize_locale_id,
    region::UNKNOWN_REGION,
    registry::{RegistryBuilder, TableRegistry},
    table::LocaleNameTable,
};

type MergedNames = Arc<BTreeMap<String, String>>;

#[derive(Debug)]
pub struct RegionNameResolver {
    registry: TableRegistry,
    strict: bool,
    merged: DashMap<String, MergedNames>,
}

impl RegionNameResolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Lenient resolver over an already validated registry.
    pub fn new(registry: TableRegistry) -> Self {
        Self {
            registry,
            strict: false,
            merged: DashMap::new(),
        }
    }

    #[inline]
    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Display name of `region_code` in `locale_id`.
    ///
    /// The nearest table in the chain that defines the code wins. If none
    /// does, the result is the chain's name for the unknown region `"ZZ"`.
    pub fn name(&self, locale_id: &str, region_code: &str) -> &str {
        self.try_name(locale_id, region_code)
            .unwrap_or_else(|| self.unknown_region_name(locale_id))
    }

    /// Like [`Self::name`] but `None` when no table in the chain has the code.
    pub fn try_name(&self, locale_id: &str, region_code: &str) -> Option<&str> {
        self.registry
            .chain(locale_id)
            .find_map(|table| table.get(region_code))
    }

    /// The locale's own wording for "unknown or invalid region".
    pub fn unknown_region_name(&self, locale_id: &str) -> &str {
        self.registry
            .chain(locale_id)
            .find_map(|table| table.get(UNKNOWN_REGION))
            // unreachable: the registry refuses a root without `ZZ`
            .unwrap_or(UNKNOWN_REGION)
    }

    /// Id of the table that supplies `name(locale_id, region_code)`, or `None`
    /// when the sentinel would be used.
    pub fn resolving_locale(&self, locale_id: &str, region_code: &str) -> Option<&str> {
        self.registry
            .chain(locale_id)
            .find(|table| table.contains(region_code))
            .map(LocaleNameTable::locale_id)
    }

    /// Region codes in the locale's display order, from the nearest table in
    /// the chain that defines one.
    pub fn sorted_region_codes(&self, locale_id: &str) -> &[String] {
        self.registry
            .chain(locale_id)
            .map(LocaleNameTable::sorted_region_codes)
            .find(|codes| !codes.is_empty())
            .unwrap_or_default()
    }

    /// "Most likely" regions for the locale. Empty for most locales.
    pub fn likely_region_codes(&self, locale_id: &str) -> &[String] {
        self.registry
            .chain(locale_id)
            .map(LocaleNameTable::likely_region_codes)
            .find(|codes| !codes.is_empty())
            .unwrap_or_default()
    }

    /// `(code, name)` pairs in display order, ready for a region picker.
    pub fn sorted_names(&self, locale_id: &str) -> Vec<(&str, &str)> {
        self.sorted_region_codes(locale_id)
            .iter()
            .map(|code| (code.as_str(), self.name(locale_id, code)))
            .collect()
    }

    /// All names visible from `locale_id`: parent entries first, each child
    /// overlaying its own. Built on first request and shared afterwards.
    pub fn merged_names(&self, locale_id: &str) -> MergedNames {
        let key = self.resolved_locale_id(locale_id);
        if let Some(found) = self.merged.get(key) {
            return Arc::clone(found.value());
        }
        let entry = self
            .merged
            .entry(key.to_owned())
            .or_insert_with(|| Arc::new(self.build_merged(key)));
        Arc::clone(entry.value())
    }

    /// A parentless table equivalent to `locale_id` with its chain applied.
    /// Handy for exporting a self-contained document per locale.
    pub fn flatten(&self, locale_id: &str) -> LocaleNameTable {
        let id = self.resolved_locale_id(locale_id);
        self.merged_names(id).iter().fold(
            LocaleNameTable::new(id)
                .with_sorted_region_codes(self.sorted_region_codes(id).iter().cloned())
                .with_likely_region_codes(self.likely_region_codes(id).iter().cloned()),
            |table, (code, name)| table.with_entry(code.as_str(), name.as_str()),
        )
    }

    /// Id of the table lookups for `locale_id` start at.
    pub fn resolved_locale_id(&self, locale_id: &str) -> &str {
        self.registry
            .get(locale_id)
            .unwrap_or_else(|| self.registry.root())
            .locale_id()
    }

    pub fn chain_ids(&self, locale_id: &str) -> Vec<&str> {
        self.registry
            .chain(locale_id)
            .map(LocaleNameTable::locale_id)
            .collect()
    }

    #[inline]
    pub fn has_locale(&self, locale_id: &str) -> bool {
        self.registry.contains(locale_id)
    }

    #[inline]
    pub fn locale_ids(&self) -> Vec<&str> {
        self.registry.locale_ids()
    }

    pub fn checked_name(&self, locale_id: &str, region_code: &str) -> Result<&str, ResolveError> {
        self.check_locale(locale_id)?;
        Ok(self.name(locale_id, region_code))
    }

    pub fn checked_sorted_region_codes(&self, locale_id: &str) -> Result<&[String], ResolveError> {
        self.check_locale(locale_id)?;
        Ok(self.sorted_region_codes(locale_id))
    }

    pub fn checked_likely_region_codes(&self, locale_id: &str) -> Result<&[String], ResolveError> {
        self.check_locale(locale_id)?;
        Ok(self.likely_region_codes(locale_id))
    }

    fn check_locale(&self, locale_id: &str) -> Result<(), ResolveError> {
        if self.strict && !self.has_locale(locale_id) {
            return Err(ResolveError::UnknownLocale(
                canonicalize_locale_id(locale_id).into_owned(),
            ));
        }
        Ok(())
    }

    fn build_merged(&self, locale_id: &str) -> BTreeMap<String, String> {
        let tables: Vec<&LocaleNameTable> = self.registry.chain(locale_id).collect();
        let mut merged = BTreeMap::new();
        for table in tables.into_iter().rev() {
            merged.extend(
                table
                    .iter()
                    .map(|(code, name)| (code.to_owned(), name.to_owned())),
            );
        }
        debug!(locale = locale_id, entries = merged.len(), "merged name view built");
        merged
    }
}

/// Configuration for a [`RegionNameResolver`].
#[derive(Debug, Clone, Default)]
pub struct ResolverBuilder {
    registry: RegistryBuilder,
    strict: bool,
}

impl ResolverBuilder {
    /// Locale every chain must end at. Defaults to `"root"`.
    pub fn root_locale(mut self, root: impl Into<String>) -> Self {
        self.registry = self.registry.root_locale(root);
        self
    }

    /// Include the embedded CLDR tables. On by default.
    pub fn with_builtin(mut self, builtin: bool) -> Self {
        self.registry = self.registry.with_builtin(builtin);
        self
    }

    /// Load every `*.json` table in `dir`. These replace embedded tables with
    /// the same locale id.
    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.registry = self.registry.add_dir(dir);
        self
    }

    pub fn table(mut self, table: LocaleNameTable) -> Self {
        self.registry = self.registry.add_table(table);
        self
    }

    /// Make the `checked_*` lookups reject locales without a table.
    pub fn strict_locales(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn validate_quality(mut self, validate: bool) -> Self {
        self.registry = self.registry.report_quality(validate);
        self
    }

    pub fn build(self) -> Result<RegionNameResolver, RegistryError> {
        let mut resolver = RegionNameResolver::new(self.registry.build()?);
        resolver.strict = self.strict;
        Ok(resolver)
    }
}

static BUILTIN: OnceCell<RegionNameResolver> = OnceCell::new();

/// Process-wide resolver over the embedded tables, built on first use.
pub fn builtin() -> Result<&'static RegionNameResolver, RegistryError> {
    BUILTIN.get_or_try_init(|| RegionNameResolver::builder().build())
}
