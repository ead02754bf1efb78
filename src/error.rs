use std::{io, path::PathBuf};

use thiserror::Error;

/// Structural problems found while loading tables. All of them are fatal:
/// a resolver is never built from data that fails these checks.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read locale table `{}`: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed locale table `{origin}`: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("file `{}` declares locale `{}`", .path.display(), .declared)]
    LocaleMismatch { path: PathBuf, declared: String },

    #[error("locale `{0}` is defined more than once")]
    DuplicateLocale(String),

    #[error("no table for root locale `{0}`")]
    MissingRoot(String),

    #[error("root locale `{root}` must not declare a parent (found `{parent}`)")]
    RootHasParent { root: String, parent: String },

    #[error("root locale `{0}` has no name for the unknown region `ZZ`")]
    RootMissingUnknownRegion(String),

    #[error("locale `{locale}` inherits from `{parent}`, which does not exist")]
    MissingParent { locale: String, parent: String },

    #[error("cyclic parent chain: {}", .chain.join(" -> "))]
    ParentCycle { chain: Vec<String> },

    #[error("parent chain of `{locale}` ends at `{terminal}` instead of the root")]
    OrphanChain { locale: String, terminal: String },
}

/// Only produced by the `checked_*` lookups of a strict resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
