use proptest::prelude::*;
use proptest::test_runner::Config;
use sechub_model::{derive_id, sort_newest_first, version::parse_version, Resource};

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn newest_first_sort_is_descending_for_parseable_versions(
        triples in prop::collection::vec((0u64..20, 0u64..20, 0u64..20), 1..12)
    ) {
        let mut versions: Vec<String> = triples
            .iter()
            .map(|(a, b, c)| format!("{a}.{b}.{c}"))
            .collect();
        sort_newest_first(&mut versions, |v| v.as_str());
        for pair in versions.windows(2) {
            let left = parse_version(&pair[0]).expect("left parses");
            let right = parse_version(&pair[1]).expect("right parses");
            prop_assert!(left >= right);
        }
    }

    #[test]
    fn unparseable_versions_keep_input_order_at_the_tail(
        good in prop::collection::vec((0u64..9, 0u64..9), 0..6),
        bad in prop::collection::vec("[a-z]{3,8}", 0..6)
    ) {
        let mut versions: Vec<String> = Vec::new();
        for (i, (major, minor)) in good.iter().enumerate() {
            versions.push(format!("{major}.{minor}.0"));
            if let Some(word) = bad.get(i) {
                versions.push(format!("x-{word}"));
            }
        }
        for word in bad.iter().skip(good.len()) {
            versions.push(format!("x-{word}"));
        }
        let expected_tail: Vec<String> = versions
            .iter()
            .filter(|v| v.starts_with("x-"))
            .cloned()
            .collect();
        sort_newest_first(&mut versions, |v| v.as_str());
        let tail = versions.split_off(versions.len() - expected_tail.len());
        prop_assert_eq!(tail, expected_tail);
    }

    #[test]
    fn derived_id_is_lowercase_name(name in "[A-Za-z0-9 ._-]{1,32}") {
        let resource: Resource = serde_yaml::from_str(&format!("name: '{name}'\nid: IGNORED\n"))
            .expect("parse descriptor");
        prop_assert_eq!(resource.id(), name.to_lowercase());
        prop_assert_eq!(derive_id(&name), name.to_lowercase());
    }
}
