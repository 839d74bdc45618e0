//! Property tests for merge semantics.

use proptest::prelude::*;

use appfile::{Application, File, Foundation, Infrastructure};

fn name() -> impl Strategy<Value = String> {
    // Short printable identifiers; generation keyed by a set so sibling
    // names stay unique, which valid files require.
    proptest::string::string_regex("[a-z][a-z0-9-]{0,7}").unwrap()
}

fn application() -> impl Strategy<Value = Application> {
    (name(), name(), any::<bool>()).prop_map(|(app_name, kind, detect)| {
        Application::new(app_name)
            .with_kind(kind)
            .with_detect(detect)
    })
}

fn file() -> impl Strategy<Value = File> {
    (
        name(),
        proptest::option::of(application()),
        proptest::collection::btree_set(name(), 0..4),
        proptest::collection::btree_set(name(), 0..3),
    )
        .prop_map(|(id, application, infra_names, foundation_names)| {
            let mut file = File::new(id);
            if let Some(app) = application {
                file = file.with_application(app);
            }
            for (index, infra_name) in infra_names.into_iter().enumerate() {
                let mut infra = Infrastructure::new(infra_name);
                // Give the first entry the foundations so both shapes occur.
                if index == 0 {
                    for foundation_name in &foundation_names {
                        infra = infra.with_foundation(Foundation::new(foundation_name.clone()));
                    }
                }
                file = file.with_infrastructure(infra);
            }
            file
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging equal inputs yields equal outputs.
    #[test]
    fn property_merge_is_deterministic(base in file(), over in file()) {
        let mut first = base.clone();
        let mut second = base.clone();
        first.merge(over.clone()).expect("generated files are valid");
        second.merge(over).expect("generated files are valid");

        prop_assert_eq!(first, second);
    }

    /// PROPERTY: an all-empty override is a no-op.
    #[test]
    fn property_empty_override_changes_nothing(base in file()) {
        let mut merged = base.clone();
        merged.merge(File::default()).expect("generated files are valid");

        prop_assert_eq!(merged, base);
    }

    /// PROPERTY: a non-empty override id always wins; an empty one never erases.
    #[test]
    fn property_scalar_override_rule(base in file(), over in file()) {
        let mut kept = base.clone();
        let mut blank_id = over.clone();
        blank_id.id = String::new();
        kept.merge(blank_id).expect("generated files are valid");
        prop_assert_eq!(&kept.id, &base.id);

        let mut replaced = base.clone();
        replaced.merge(over.clone()).expect("generated files are valid");
        prop_assert_eq!(&replaced.id, &over.id);
    }

    /// PROPERTY: merged infrastructure is the keyed union, base order first,
    /// new override entries appended in their own order.
    #[test]
    fn property_infrastructure_union_preserves_order(base in file(), over in file()) {
        let base_names: Vec<String> =
            base.infrastructure.iter().map(|i| i.name.clone()).collect();
        let mut expected = base_names.clone();
        for infra in &over.infrastructure {
            if !base_names.contains(&infra.name) {
                expected.push(infra.name.clone());
            }
        }

        let mut merged = base;
        merged.merge(over).expect("generated files are valid");
        let merged_names: Vec<String> =
            merged.infrastructure.iter().map(|i| i.name.clone()).collect();

        prop_assert_eq!(merged_names, expected);
    }

    /// PROPERTY: merging never drops an application present on either side.
    #[test]
    fn property_application_survives_merge(base in file(), over in file()) {
        let had_application =
            base.application.is_some() || over.application.is_some();

        let mut merged = base;
        merged.merge(over).expect("generated files are valid");

        prop_assert_eq!(merged.application.is_some(), had_application);
    }
}
