//! Loading and structural validation of locale tables.
//!
//! A [`TableRegistry`] is only ever handed out after every parent chain has
//! been checked to be acyclic and to end at the root table, so lookups walking
//! a chain can never fail or loop.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::{
    data::{builtin_locale_ids, builtin_source},
    error::RegistryError,
    locale::{ROOT_LOCALE, canonicalize_locale_id},
    region::UNKNOWN_REGION,
    table::LocaleNameTable,
};

/// Child-first indices into `TableRegistry::tables`.
type ChainIndices = SmallVec<[usize; 4]>;

#[derive(Debug)]
pub struct TableRegistry {
    root: usize,
    tables: Vec<LocaleNameTable>,
    index: HashMap<String, usize>,
    chains: Vec<ChainIndices>,
}

impl TableRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry over the tables compiled into the crate.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::builder().build()
    }

    /// Registry over every `*.json` table in `dir`, without the embedded data.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, RegistryError> {
        Self::builder().with_builtin(false).add_dir(dir).build()
    }

    pub fn from_tables<I>(tables: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = LocaleNameTable>,
    {
        tables
            .into_iter()
            .fold(Self::builder().with_builtin(false), RegistryBuilder::add_table)
            .build()
    }

    #[inline]
    pub fn root(&self) -> &LocaleNameTable {
        &self.tables[self.root]
    }

    #[inline]
    pub fn root_id(&self) -> &str {
        self.root().locale_id()
    }

    /// Table registered under exactly `locale_id` (after separator
    /// normalisation), without any fallback.
    pub fn get(&self, locale_id: &str) -> Option<&LocaleNameTable> {
        self.position(locale_id).map(|i| &self.tables[i])
    }

    #[inline]
    pub fn contains(&self, locale_id: &str) -> bool {
        self.position(locale_id).is_some()
    }

    /// Tables consulted for `locale_id`, child first and root last. Unknown
    /// ids get the root chain.
    pub fn chain(&self, locale_id: &str) -> impl Iterator<Item = &LocaleNameTable> + '_ {
        let at = self.position(locale_id).unwrap_or(self.root);
        self.chains[at].iter().map(move |&i| &self.tables[i])
    }

    /// Sorted ids of every registered locale.
    pub fn locale_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.tables.iter().map(LocaleNameTable::locale_id).collect();
        ids.sort_unstable();
        ids
    }

    pub fn tables(&self) -> impl Iterator<Item = &LocaleNameTable> {
        self.tables.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn position(&self, locale_id: &str) -> Option<usize> {
        self.index.get(canonicalize_locale_id(locale_id).as_ref()).copied()
    }
}

/// Collects tables from the embedded data, directories and explicit values,
/// then validates them into a [`TableRegistry`].
///
/// Tables from directories or added explicitly replace an embedded table with
/// the same id. Two non-embedded tables with the same id are an error. Ids and
/// parent ids may use `-` or `_` and are stored in `_` form.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    root: String,
    builtin: bool,
    report_quality: bool,
    dirs: Vec<PathBuf>,
    tables: Vec<LocaleNameTable>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            root: ROOT_LOCALE.to_owned(),
            builtin: true,
            report_quality: true,
            dirs: Vec::new(),
            tables: Vec::new(),
        }
    }
}

impl RegistryBuilder {
    pub fn root_locale(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_builtin(mut self, builtin: bool) -> Self {
        self.builtin = builtin;
        self
    }

    /// Log [`crate::table::QualityIssue`]s while building.
    pub fn report_quality(mut self, report: bool) -> Self {
        self.report_quality = report;
        self
    }

    pub fn add_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dirs.push(dir.as_ref().to_path_buf());
        self
    }

    pub fn add_table(mut self, table: LocaleNameTable) -> Self {
        self.tables.push(table);
        self
    }

    pub fn build(self) -> Result<TableRegistry, RegistryError> {
        let mut collected: HashMap<String, LocaleNameTable> = HashMap::new();

        if self.builtin {
            for &id in builtin_locale_ids() {
                let Some(json) = builtin_source(id) else {
                    continue;
                };
                let table = LocaleNameTable::from_json_str(json).map_err(|source| {
                    RegistryError::Json {
                        origin: format!("builtin:{id}"),
                        source,
                    }
                })?;
                collected.insert(table.locale_id().to_owned(), table);
            }
        }

        let mut explicit: HashSet<String> = HashSet::new();
        let mut extra = Vec::new();
        for dir in &self.dirs {
            extra.extend(read_dir_tables(dir)?);
        }
        extra.extend(self.tables);

        for table in extra {
            let table = table.into_canonical_ids();
            let id = table.locale_id().to_owned();
            if !explicit.insert(id.clone()) {
                return Err(RegistryError::DuplicateLocale(id));
            }
            if collected.insert(id.clone(), table).is_some() {
                debug!(locale = %id, "embedded table replaced");
            }
        }

        let registry = validate(self.root, collected)?;

        if self.report_quality {
            for table in registry.tables() {
                for issue in table.quality_issues() {
                    warn!(locale = table.locale_id(), "{issue}");
                }
            }
        }

        info!(
            locales = registry.len(),
            root = registry.root_id(),
            "region name tables loaded"
        );
        Ok(registry)
    }
}

fn read_dir_tables(dir: &Path) -> Result<Vec<LocaleNameTable>, RegistryError> {
    let io_err = |source: std::io::Error| RegistryError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut tables = Vec::with_capacity(paths.len());
    for path in paths {
        let table = LocaleNameTable::from_path(&path)?;
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if canonicalize_locale_id(stem) != canonicalize_locale_id(table.locale_id()) {
            return Err(RegistryError::LocaleMismatch {
                path,
                declared: table.locale_id().to_owned(),
            });
        }
        debug!(locale = table.locale_id(), path = %path.display(), entries = table.len(), "table read");
        tables.push(table);
    }
    Ok(tables)
}

fn validate(
    root_id: String,
    collected: HashMap<String, LocaleNameTable>,
) -> Result<TableRegistry, RegistryError> {
    let mut tables: Vec<LocaleNameTable> = collected.into_values().collect();
    tables.sort_unstable_by(|a, b| a.locale_id().cmp(b.locale_id()));

    let index: HashMap<String, usize> = tables
        .iter()
        .enumerate()
        .map(|(i, t)| (t.locale_id().to_owned(), i))
        .collect();

    let root = *index
        .get(&root_id)
        .ok_or_else(|| RegistryError::MissingRoot(root_id.clone()))?;
    if let Some(parent) = tables[root].parent_locale_id() {
        return Err(RegistryError::RootHasParent {
            root: root_id,
            parent: parent.to_owned(),
        });
    }
    if !tables[root].contains(UNKNOWN_REGION) {
        return Err(RegistryError::RootMissingUnknownRegion(root_id));
    }

    let mut chains = Vec::with_capacity(tables.len());
    for (i, table) in tables.iter().enumerate() {
        let mut chain: ChainIndices = SmallVec::new();
        chain.push(i);
        let mut current = table;
        while let Some(parent) = current.parent_locale_id() {
            let Some(&p) = index.get(parent) else {
                return Err(RegistryError::MissingParent {
                    locale: current.locale_id().to_owned(),
                    parent: parent.to_owned(),
                });
            };
            if let Some(start) = chain.iter().position(|&c| c == p) {
                let mut cycle: Vec<String> = chain[start..]
                    .iter()
                    .map(|&c| tables[c].locale_id().to_owned())
                    .collect();
                cycle.push(parent.to_owned());
                return Err(RegistryError::ParentCycle { chain: cycle });
            }
            chain.push(p);
            current = &tables[p];
        }
        if chain.last() != Some(&root) {
            return Err(RegistryError::OrphanChain {
                locale: table.locale_id().to_owned(),
                terminal: current.locale_id().to_owned(),
            });
        }
        debug!(
            locale = table.locale_id(),
            depth = chain.len(),
            entries = table.len(),
            "table registered"
        );
        chains.push(chain);
    }

    Ok(TableRegistry {
        root,
        tables,
        index,
        chains,
    })
}
