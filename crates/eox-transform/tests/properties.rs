//! Algebraic properties of the batch and serial-filter primitives.

use proptest::prelude::*;

use eox_model::{MAX_SERIAL_LEN, filter_serials, is_valid_serial};
use eox_transform::{chunk_count, chunks};

proptest! {
    #[test]
    fn chunks_concatenate_back_to_the_input(
        items in proptest::collection::vec(any::<u32>(), 0..200),
        size in 1usize..50,
    ) {
        let rebuilt: Vec<u32> = chunks(&items, size).flatten().copied().collect();
        prop_assert_eq!(&rebuilt, &items);
    }

    #[test]
    fn chunk_count_matches_the_iterator(
        items in proptest::collection::vec(any::<u32>(), 0..200),
        size in 1usize..50,
    ) {
        prop_assert_eq!(chunks(&items, size).count(), chunk_count(items.len(), size));
        prop_assert!(chunks(&items, size).all(|chunk| !chunk.is_empty() && chunk.len() <= size));
    }

    #[test]
    fn filtered_serials_satisfy_the_rules(
        entries in proptest::collection::vec(".{0,50}", 0..50),
    ) {
        let kept = filter_serials(&entries);
        for serial in &kept {
            prop_assert!(is_valid_serial(serial));
            prop_assert!(serial.len() <= MAX_SERIAL_LEN);
            prop_assert!(serial.chars().all(|ch| ch.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn filtering_preserves_order(
        entries in proptest::collection::vec("[A-Za-z0-9 _-]{0,45}", 0..50),
    ) {
        let kept = filter_serials(&entries);
        // `kept` must be a subsequence of `entries`.
        let mut cursor = 0usize;
        for item in &kept {
            let mut found = false;
            while cursor < entries.len() {
                let candidate = &entries[cursor];
                cursor += 1;
                if candidate == item {
                    found = true;
                    break;
                }
            }
            prop_assert!(found, "kept entry {:?} out of order", item);
        }
    }
}

#[test]
fn all_invalid_input_filters_to_nothing() {
    let entries = vec![
        "has space".to_string(),
        "trailing-dash".to_string(),
        String::new(),
    ];
    assert!(filter_serials(&entries).is_empty());
}
