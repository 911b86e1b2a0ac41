// crates/shared-kernel/tests/descriptor_identity.rs
use std::{
    collections::HashSet,
    hash::{BuildHasher, RandomState},
};

use fileentry_shared_kernel::FileEntryDescriptor;
use proptest::prelude::*;

fn hash_of(state: &RandomState, entry: &FileEntryDescriptor) -> u64 {
    state.hash_one(entry)
}

#[test]
fn metadata_does_not_affect_equality() {
    let a = FileEntryDescriptor::new("a.txt", "out/a.txt", false, 42, 1000);
    let b = FileEntryDescriptor::new("renamed.txt", "out/a.txt", false, 999, 2000);
    assert_eq!(a, b);

    let state = RandomState::new();
    assert_eq!(hash_of(&state, &a), hash_of(&state, &b));
}

#[test]
fn directory_and_file_with_same_normalized_path_are_equal() {
    let dir = FileEntryDescriptor::new("build", "out/build", true, 0, 1);
    let file = FileEntryDescriptor::new("build", "out/build/", false, 7, 2);
    assert_eq!(dir, file);

    let state = RandomState::new();
    assert_eq!(hash_of(&state, &dir), hash_of(&state, &file));
}

#[test]
fn directory_normalization_separates_from_plain_file() {
    let dir = FileEntryDescriptor::new("build", "out/build", true, 0, 0);
    let file = FileEntryDescriptor::new("build", "out/build", false, 0, 0);
    assert_ne!(dir, file);
}

#[test]
fn set_deduplicates_by_path() {
    let set: HashSet<_> = [
        FileEntryDescriptor::new("a", "x/a", false, 1, 1),
        FileEntryDescriptor::new("a", "x/a", false, 2, 2),
        FileEntryDescriptor::new("b", "x/b", true, 0, 0),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains("x/b/"));
}

proptest! {
    #[test]
    fn directory_path_always_ends_with_single_added_separator(path in "[a-z/]{0,24}") {
        let entry = FileEntryDescriptor::new("n", path.clone(), true, 0, 0);
        if path.ends_with('/') {
            prop_assert_eq!(entry.path(), path.as_str());
        } else {
            prop_assert_eq!(entry.path(), format!("{path}/"));
        }
    }

    #[test]
    fn file_path_is_identity(path in "\\PC{0,32}") {
        let entry = FileEntryDescriptor::new("n", path.clone(), false, 0, 0);
        prop_assert_eq!(entry.path(), path.as_str());
        prop_assert_eq!(entry.to_string(), path);
    }

    #[test]
    fn equal_paths_hash_equally(
        stem in "[a-z./]{0,23}",
        dir_a in any::<bool>(),
        dir_b in any::<bool>(),
        len_a in any::<i64>(),
        len_b in any::<i64>(),
        ts_a in any::<i64>(),
        ts_b in any::<i64>(),
    ) {
        // A trailing `/` keeps files and directories on the same normalized path.
        let a = FileEntryDescriptor::new("a", format!("{stem}/"), dir_a, len_a, ts_a);
        let b = FileEntryDescriptor::new("b", a.path(), dir_b, len_b, ts_b);
        let state = RandomState::new();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&state, &a), hash_of(&state, &b));
    }

    #[test]
    fn distinct_paths_never_equal(a in "[a-z]{1,12}", b in "[a-z]{1,12}") {
        prop_assume!(a != b);
        let left = FileEntryDescriptor::new("x", a, false, 0, 0);
        let right = FileEntryDescriptor::new("x", b, false, 0, 0);
        prop_assert_ne!(left, right);
    }
}
