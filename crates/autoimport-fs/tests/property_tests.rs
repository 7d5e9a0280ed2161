use std::cmp::Ordering;

use autoimport_fs::{NormalizedPath, compare_segments, normalize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_is_idempotent(s in "\\PC*") {
        let once = normalize(&s);
        let twice = normalize(&once);
        prop_assert_eq!(&once, &twice);

        prop_assert!(!once.contains('\\'));
        prop_assert!(once == "/" || !once.ends_with('/'));
    }

    #[test]
    fn test_normalized_path_roundtrips_through_native(s in "[a-zA-Z0-9_./\\\\-]{0,40}") {
        let path = NormalizedPath::new(&s);
        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_segment_order_is_antisymmetric(a in "[a-cA-C/]{0,8}", b in "[a-cA-C/]{0,8}") {
        let forward = compare_segments(&a, &b);
        let backward = compare_segments(&b, &a);
        prop_assert_eq!(forward, backward.reverse());
        prop_assert_eq!(forward == Ordering::Equal, a == b);
    }
}
