//! Integration tests for the storage operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime};

use snap_station::outcome::codes;
use snap_station::storage;
use tempfile::TempDir;

// Helper to create a file with contents
fn touch(path: &Path, contents: &str) {
    let mut file = File::create(path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
}

// Helper to push a file's modification time into the past
fn backdate(path: &Path, seconds: u64) {
    let earlier = SystemTime::now() - Duration::from_secs(seconds);
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(earlier)
        .unwrap();
}

#[test]
fn create_folder_is_idempotent() {
    let root = TempDir::new().unwrap();
    let target = root.path().join("shots");

    let first = storage::create_folder(&target);
    assert_eq!(first.status, codes::CREATED);

    let second = storage::create_folder(&target);
    assert_eq!(second.status, codes::ALREADY_EXISTS);

    assert!(target.is_dir());
}

#[test]
fn create_folder_requires_existing_parent() {
    let root = TempDir::new().unwrap();
    let target = root.path().join("missing").join("child");

    let outcome = storage::create_folder(&target);
    assert_eq!(outcome.status, codes::INTERNAL_ERROR);
    assert!(outcome.error.is_some());
}

#[test]
fn resolve_file_path_requires_the_folder() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("nowhere");

    // the file existing elsewhere must not matter
    touch(&root.path().join("any.txt"), "x");

    let outcome = storage::resolve_file_path(&missing, "any.txt");
    assert_eq!(outcome.status, codes::NOT_FOUND);
}

#[test]
fn resolve_file_path_joins_folder_and_file() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("shot.png"), "img");

    let outcome = storage::resolve_file_path(root.path(), "shot.png");
    assert_eq!(outcome.status, codes::OK);
    assert!(outcome.path.unwrap().ends_with("shot.png"));

    let outcome = storage::resolve_file_path(root.path(), "other.png");
    assert_eq!(outcome.status, codes::NOT_FOUND);
}

#[test]
fn count_images_matches_extensions_case_insensitively() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("a.PNG"), "1");
    touch(&root.path().join("b.txt"), "2");
    touch(&root.path().join("c.jpeg"), "3");

    let outcome = storage::count_images(root.path());
    assert_eq!(outcome.status, codes::OK);
    assert_eq!(outcome.file_count, Some(2));
}

#[test]
fn count_images_requires_the_folder() {
    let root = TempDir::new().unwrap();
    let outcome = storage::count_images(&root.path().join("nowhere"));
    assert_eq!(outcome.status, codes::NOT_FOUND);
}

#[test]
fn move_file_relocates_instead_of_duplicating() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("inbox");
    let dst = root.path().join("outbox");
    fs::create_dir(&src).unwrap();
    touch(&src.join("shot.jpg"), "img");

    let outcome = storage::move_file("shot.jpg", &src, &dst);
    assert_eq!(outcome.status, codes::OK);

    assert_eq!(storage::resolve_file_path(&dst, "shot.jpg").status, codes::OK);
    assert_eq!(
        storage::resolve_file_path(&src, "shot.jpg").status,
        codes::NOT_FOUND
    );
}

#[test]
fn move_file_requires_source_folder_and_file() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("inbox");
    let dst = root.path().join("outbox");

    let outcome = storage::move_file("shot.jpg", &src, &dst);
    assert_eq!(outcome.status, codes::NOT_FOUND);

    fs::create_dir(&src).unwrap();
    let outcome = storage::move_file("shot.jpg", &src, &dst);
    assert_eq!(outcome.status, codes::NOT_FOUND);
}

#[test]
fn copy_file_preserves_the_source() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("inbox");
    let dst = root.path().join("outbox");
    fs::create_dir(&src).unwrap();
    touch(&src.join("shot.jpg"), "img");

    let outcome = storage::copy_file("shot.jpg", &src, &dst);
    assert_eq!(outcome.status, codes::OK);

    assert!(src.join("shot.jpg").is_file());
    assert!(dst.join("shot.jpg").is_file());
}

#[test]
fn copy_file_overwrites_the_destination() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("inbox");
    let dst = root.path().join("outbox");
    fs::create_dir(&src).unwrap();
    fs::create_dir(&dst).unwrap();
    touch(&src.join("shot.jpg"), "new content");
    touch(&dst.join("shot.jpg"), "old");

    let outcome = storage::copy_file("shot.jpg", &src, &dst);
    assert_eq!(outcome.status, codes::OK);
    assert_eq!(
        fs::read_to_string(dst.join("shot.jpg")).unwrap(),
        "new content"
    );
}

#[test]
fn most_recent_file_wins_by_modification_time() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("old.png"), "1");
    touch(&root.path().join("new.png"), "2");
    backdate(&root.path().join("old.png"), 60);

    let outcome = storage::find_most_recent_file(root.path());
    assert_eq!(outcome.status, codes::OK);
    assert_eq!(outcome.most_recent_file.as_deref(), Some("new.png"));
}

#[test]
fn most_recent_file_skips_directories() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("only.png"), "1");
    backdate(&root.path().join("only.png"), 60);
    fs::create_dir(root.path().join("newer_dir")).unwrap();

    let outcome = storage::find_most_recent_file(root.path());
    assert_eq!(outcome.most_recent_file.as_deref(), Some("only.png"));
}

#[test]
fn most_recent_file_on_empty_folder_is_a_success() {
    let root = TempDir::new().unwrap();

    let outcome = storage::find_most_recent_file(root.path());
    assert_eq!(outcome.status, codes::OK);
    assert!(outcome.most_recent_file.is_none());
    assert!(outcome.error.is_none());
}

#[test]
fn empty_folder_removes_files_and_nested_directories() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("loose.txt"), "x");
    let nested = root.path().join("sub").join("deeper");
    fs::create_dir_all(&nested).unwrap();
    touch(&nested.join("buried.png"), "y");

    let outcome = storage::empty_folder(root.path());
    assert_eq!(outcome.status, codes::OK);
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn empty_folder_requires_the_folder() {
    let root = TempDir::new().unwrap();
    let outcome = storage::empty_folder(&root.path().join("nowhere"));
    assert_eq!(outcome.status, codes::NOT_FOUND);
}

#[cfg(unix)]
#[test]
fn empty_folder_unlinks_symlinks_without_following() {
    use std::os::unix::fs::symlink;

    let root = TempDir::new().unwrap();
    let kept = TempDir::new().unwrap();
    touch(&kept.path().join("target.png"), "x");
    symlink(kept.path().join("target.png"), root.path().join("link.png")).unwrap();

    let outcome = storage::empty_folder(root.path());
    assert_eq!(outcome.status, codes::OK);
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
    // the link target is untouched
    assert!(kept.path().join("target.png").is_file());
}
