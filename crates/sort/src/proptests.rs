use super::*;

use proptest::prelude::*;
use std::collections::HashMap;

fn arb_records(max_key: u32) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0..=max_key, any::<u64>()), 0..512)
        .prop_map(|pairs| pairs.into_iter().map(Record::from).collect())
}

fn counting_sorted(input: &[Record]) -> Vector<Record> {
    let mut data = input.iter().copied().collect::<Vector<_>>();
    counting_sort(&mut data);
    data
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn output_is_ordered_by_key(input in arb_records(4096)) {
        let out = counting_sorted(&input);
        prop_assert_eq!(out.len(), input.len());
        prop_assert!(is_sorted_by_key(&out));
    }

    #[test]
    fn output_is_a_permutation(input in arb_records(64)) {
        let out = counting_sorted(&input);

        let mut counts: HashMap<Record, isize> = HashMap::new();
        for r in &input {
            *counts.entry(*r).or_default() += 1;
        }
        for r in &out {
            *counts.entry(*r).or_default() -= 1;
        }
        prop_assert!(counts.values().all(|&c| c == 0), "multiset mismatch");
    }

    #[test]
    fn equal_keys_keep_input_order(keys in prop::collection::vec(0..8_u32, 0..512)) {
        // Payload is the input position, so stability means ascending payloads per key.
        let input = keys
            .iter()
            .enumerate()
            .map(|(i, &k)| Record::new(k, i as u64))
            .collect::<Vec<_>>();
        let out = counting_sorted(&input);

        for w in out.windows(2) {
            if w[0].key == w[1].key {
                prop_assert!(w[0].payload < w[1].payload, "unstable at {:?}", w);
            }
        }
    }

    #[test]
    fn agrees_with_std_stable_sort(input in arb_records(u32::MAX >> 12)) {
        let out = counting_sorted(&input);
        let mut expected = input.iter().copied().collect::<Vector<_>>();
        sort_records(SortAlgorithm::StdStableSort, &mut expected);
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn sorting_twice_changes_nothing(input in arb_records(1000)) {
        let once = counting_sorted(&input);
        let twice = counting_sorted(&once);
        prop_assert_eq!(once, twice);
    }
}
