#[cfg(test)]
mod unit_tests {

    use crate::{LocaleNameTable, RegionNameResolver, ResolveError, UNKNOWN_REGION, builtin};

    #[test]
    fn italian_override_and_root_fallback() {
        let names = builtin().unwrap();
        assert_eq!(names.name("it", "DE"), "Germania");
        assert_eq!(names.name("it", "FR"), "France");
        assert_eq!(names.resolving_locale("it", "FR"), Some("root"));
    }

    #[test]
    fn serbian_latin_overrides_cyrillic() {
        let names = builtin().unwrap();
        assert_eq!(names.name("sr_Latn", "AF"), "Avganistan");
        assert_eq!(names.name("sr", "AF"), "Авганистан");
        assert_eq!(names.name("sr_Latn", "CS"), "Srbija i Crna Gora");
        assert_eq!(names.name("sr", "CS"), "Србија и Црна Гора");
    }

    #[test]
    fn benin_yoruba_falls_through_to_yoruba() {
        let names = builtin().unwrap();
        assert_eq!(names.resolving_locale("yo_BJ", "CS"), Some("yo"));
        assert_eq!(names.name("yo_BJ", "CS"), names.name("yo", "CS"));
        assert_ne!(names.name("yo_BJ", "NG"), names.name("yo", "NG"));
        assert_eq!(names.likely_region_codes("yo_BJ"), ["NG"]);
    }

    #[test]
    fn locales_without_zz_use_root_sentinel() {
        let names = builtin().unwrap();
        assert_eq!(names.name("kln", UNKNOWN_REGION), "Unknown Region");
        assert_eq!(names.name("kln", "not-a-code"), "Unknown Region");
        assert_eq!(names.name("bg", "QZ"), "Непозната или несъществуваща област");
    }

    #[test]
    fn numeric_area_codes() {
        let names = builtin().unwrap();
        assert_eq!(names.name("bg", "001"), "Земята");
        assert_eq!(names.name("root", "419"), "Latin America and the Caribbean");
    }

    #[test]
    fn hyphenated_locale_ids() {
        let names = builtin().unwrap();
        assert_eq!(names.name("sr-Latn", "RS"), "Srbija");
        assert_eq!(names.name("uz-Cyrl", "UZ"), "Ўзбекистон");
        assert_eq!(names.chain_ids("uz-Cyrl"), ["uz_Cyrl", "uz", "root"]);
    }

    #[test]
    fn likely_region_codes() {
        let names = builtin().unwrap();
        assert_eq!(names.likely_region_codes("sr_Latn"), ["RS"]);
        assert_eq!(names.likely_region_codes("ru"), ["RU", "UA", "KZ", "UZ"]);
        assert!(names.likely_region_codes("sr").is_empty());
        assert!(names.likely_region_codes("uz").is_empty());
    }

    #[test]
    fn sorted_region_codes() {
        let names = builtin().unwrap();
        assert_eq!(names.sorted_region_codes("sr_Latn")[..3], ["AX", "AL", "DZ"]);
        // `it` ships no ordering of its own
        assert_eq!(names.sorted_region_codes("it"), names.sorted_region_codes("root"));
        assert_eq!(names.sorted_region_codes("root")[0], "AF");
    }

    #[test]
    fn unknown_locale_is_root() {
        let names = builtin().unwrap();
        assert_eq!(names.name("tlh", "DE"), "Germany");
        assert_eq!(names.resolved_locale_id("tlh"), "root");
        assert!(!names.has_locale("tlh"));
    }

    #[test]
    fn strict_resolver_reports_unknown_locale() {
        let names = RegionNameResolver::builder().strict_locales(true).build().unwrap();
        assert!(names.is_strict());
        assert_eq!(
            names.checked_sorted_region_codes("tlh"),
            Err(ResolveError::UnknownLocale("tlh".into()))
        );
        assert_eq!(names.checked_name("it", "DE"), Ok("Germania"));
    }

    #[test]
    fn builtin_is_shared() {
        let a = builtin().unwrap();
        let b = builtin().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn extra_table_on_top_of_builtin() {
        let names = RegionNameResolver::builder()
            .table(
                LocaleNameTable::new("sr_Latn_ME")
                    .with_parent("sr_Latn")
                    .with_likely_region_codes(["ME"])
                    .with_entry("ME", "Crna Gora"),
            )
            .build()
            .unwrap();
        assert_eq!(names.chain_ids("sr_Latn_ME"), ["sr_Latn_ME", "sr_Latn", "sr", "root"]);
        assert_eq!(names.name("sr_Latn_ME", "AF"), "Avganistan");
        assert_eq!(names.likely_region_codes("sr_Latn_ME"), ["ME"]);
    }
}
