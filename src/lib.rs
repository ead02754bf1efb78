//! Localized region and country display names with CLDR locale fallback.
//!
//! ```
//! let names = region_names::builtin().unwrap();
//! assert_eq!(names.name("it", "DE"), "Germania");
//! assert_eq!(names.name("it", "FR"), "France"); // from the root table
//! assert_eq!(names.name("sr-Latn", "AF"), "Avganistan");
//! ```

pub mod data;
pub mod error;
pub mod locale;
pub mod region;
pub mod registry;
pub mod resolver;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, RegistryError, ResolveError, Result};
pub use locale::ROOT_LOCALE;
pub use region::UNKNOWN_REGION;
pub use registry::{RegistryBuilder, TableRegistry};
pub use resolver::{RegionNameResolver, ResolverBuilder, builtin};
pub use table::LocaleNameTable;
