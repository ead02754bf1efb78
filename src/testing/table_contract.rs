use std::collections::HashSet;

use crate::{
    LocaleNameTable, RegionNameResolver, UNKNOWN_REGION, region::is_valid_region_code,
};

/// Assert that a resolver satisfies the lookup contracts over **every** locale
/// it knows.
///
/// 1. `own_entries_win` → a table's own entry is returned as-is
/// 2. `missing_entries_match_parent` → a miss answers exactly like the parent
/// 3. `unknown_region_is_named` → `"ZZ"` resolves to a non-empty string
/// 4. `lookups_are_idempotent` → same question, same answer
/// 5. `own_orderings_are_well_formed` → valid-looking codes, no repeats
/// 6. `unknown_locale_matches_root` → unregistered ids read the root table
#[macro_export]
macro_rules! assert_resolver_contract {
    ($resolver:expr) => {{
        let resolver = &$resolver;
        $crate::testing::table_contract::own_entries_win(resolver);
        $crate::testing::table_contract::missing_entries_match_parent(resolver);
        $crate::testing::table_contract::unknown_region_is_named(resolver);
        $crate::testing::table_contract::lookups_are_idempotent(resolver);
        $crate::testing::table_contract::own_orderings_are_well_formed(resolver);
        $crate::testing::table_contract::unknown_locale_matches_root(resolver);
    }};
}

/// Codes worth probing for a table: its own, its parent's and a few that no
/// table defines.
fn probe_codes<'a>(r: &'a RegionNameResolver, table: &'a LocaleNameTable) -> Vec<&'a str> {
    let mut codes: Vec<&str> = table.iter().map(|(code, _)| code).collect();
    if let Some(parent) = table.parent_locale_id().and_then(|p| r.registry().get(p)) {
        codes.extend(parent.iter().map(|(code, _)| code));
    }
    codes.extend(["QZ", "999", "", "de"]);
    codes
}

pub fn own_entries_win(r: &RegionNameResolver) {
    for table in r.registry().tables() {
        for (code, name) in table.iter() {
            assert_eq!(
                r.name(table.locale_id(), code),
                name,
                "{}: own entry for {code} was not used",
                table.locale_id()
            );
        }
    }
}

pub fn missing_entries_match_parent(r: &RegionNameResolver) {
    for table in r.registry().tables() {
        let Some(parent) = table.parent_locale_id() else {
            continue;
        };
        for code in probe_codes(r, table) {
            if table.contains(code) {
                continue;
            }
            if code != UNKNOWN_REGION && r.try_name(parent, code).is_none() {
                // Both fall back to their own sentinel; only the lookup miss must agree.
                assert_eq!(r.try_name(table.locale_id(), code), None);
                continue;
            }
            assert_eq!(
                r.name(table.locale_id(), code),
                r.name(parent, code),
                "{}: {code} should fall through to {parent}",
                table.locale_id()
            );
        }
    }
}

pub fn unknown_region_is_named(r: &RegionNameResolver) {
    for id in r.locale_ids() {
        assert!(!r.name(id, UNKNOWN_REGION).is_empty(), "{id}: empty ZZ name");
        assert_eq!(r.name(id, UNKNOWN_REGION), r.unknown_region_name(id));
    }
}

pub fn lookups_are_idempotent(r: &RegionNameResolver) {
    for table in r.registry().tables() {
        let id = table.locale_id();
        for code in probe_codes(r, table) {
            assert_eq!(r.name(id, code), r.name(id, code));
        }
        assert_eq!(r.sorted_region_codes(id), r.sorted_region_codes(id));
        assert_eq!(r.likely_region_codes(id), r.likely_region_codes(id));
    }
}

pub fn own_orderings_are_well_formed(r: &RegionNameResolver) {
    for table in r.registry().tables() {
        let mut seen = HashSet::new();
        for code in table.sorted_region_codes() {
            assert!(is_valid_region_code(code), "{}: bad code {code:?}", table.locale_id());
            assert!(seen.insert(code), "{}: {code} listed twice", table.locale_id());
        }
        if !table.sorted_region_codes().is_empty() {
            assert_eq!(r.sorted_region_codes(table.locale_id()), table.sorted_region_codes());
        }
    }
}

pub fn unknown_locale_matches_root(r: &RegionNameResolver) {
    let root = r.registry().root();
    for (code, name) in root.iter() {
        assert_eq!(r.name("zz_Unregistered", code), name);
    }
    assert_eq!(
        r.sorted_region_codes("zz_Unregistered"),
        root.sorted_region_codes()
    );
}
