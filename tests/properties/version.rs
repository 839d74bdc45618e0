//! Property tests for version parsing and ordering.

use proptest::prelude::*;

use appfile::Version;

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-z]{1,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(raw in "(?s).{0,64}") {
        let _ = Version::parse(&raw);
    }

    /// PROPERTY: a canonical three-component string round-trips exactly.
    #[test]
    fn property_display_round_trips(
        major in 0u64..1000,
        minor in 0u64..1000,
        patch in 0u64..1000,
        prerelease in proptest::collection::vec(identifier(), 0..3),
        build in proptest::option::of(identifier()),
    ) {
        let mut raw = format!("{major}.{minor}.{patch}");
        if !prerelease.is_empty() {
            raw.push('-');
            raw.push_str(&prerelease.join("."));
        }
        if let Some(build) = &build {
            raw.push('+');
            raw.push_str(build);
        }

        let version = Version::parse(&raw).expect("constructed string is valid");
        prop_assert_eq!(version.to_string(), raw.clone());

        let reparsed = Version::parse(&raw).expect("round-tripped string is valid");
        prop_assert_eq!(reparsed, version);
    }

    /// PROPERTY: comparison is antisymmetric.
    #[test]
    fn property_ordering_is_antisymmetric(
        a in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}(-[0-9a-z]{1,4}(\\.[0-9a-z]{1,4}){0,2})?",
        b in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}(-[0-9a-z]{1,4}(\\.[0-9a-z]{1,4}){0,2})?",
    ) {
        let a = Version::parse(&a).expect("generated version is valid");
        let b = Version::parse(&b).expect("generated version is valid");

        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    /// PROPERTY: a pre-release always sorts below its release.
    #[test]
    fn property_prerelease_sorts_below_release(
        major in 0u64..1000,
        minor in 0u64..1000,
        patch in 0u64..1000,
        prerelease in proptest::collection::vec(identifier(), 1..3),
    ) {
        let release = Version::new(major, minor, patch);
        let raw = format!("{major}.{minor}.{patch}-{}", prerelease.join("."));
        let pre = Version::parse(&raw).expect("constructed string is valid");

        prop_assert!(pre < release);
    }
}
