// crates/shared-kernel/tests/descriptor_normalization.rs
use fileentry_shared_kernel::FileEntryDescriptor;

#[test]
fn directory_without_separator_gains_one() {
    let entry = FileEntryDescriptor::new("build", "out/build", true, 0, 1000);
    assert_eq!(entry.path(), "out/build/");
    assert_eq!(entry.to_string(), "out/build/");
}

#[test]
fn directory_with_separator_is_unchanged() {
    let entry = FileEntryDescriptor::new("build", "out/build/", true, 0, 1000);
    assert_eq!(entry.path(), "out/build/");
    assert!(!entry.path().ends_with("//"));
}

#[test]
fn file_path_is_stored_verbatim() {
    let entry = FileEntryDescriptor::new("a.txt", "out/a.txt", false, 42, 1000);
    assert_eq!(entry.path(), "out/a.txt");

    let trailing = FileEntryDescriptor::new("odd", "out/odd/", false, 0, 0);
    assert_eq!(trailing.path(), "out/odd/");
}

#[test]
fn repeated_inner_separators_are_kept() {
    let entry = FileEntryDescriptor::new("b", "out//b", true, 0, 0);
    assert_eq!(entry.path(), "out//b/");
}

#[test]
fn accessors_return_stored_values() {
    let entry = FileEntryDescriptor::new("a.txt", "out/a.txt", false, -1, i64::MIN);
    assert_eq!(entry.name(), "a.txt");
    assert!(!entry.is_directory());
    assert_eq!(entry.length(), -1);
    assert_eq!(entry.last_modified(), i64::MIN);
    assert!(entry.last_modified_at().is_none());
}
