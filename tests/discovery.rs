use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};
use vidkit::concat::render_manifest;
use vidkit::discovery::{find_media_files, SortMethod};
use vidkit::MediaError;

fn touch(dir: &Path, name: &str, age_secs: u64) {
    let path = dir.join(name);
    fs::write(&path, b"x").unwrap();
    let mtime = SystemTime::now() - Duration::from_secs(age_secs);
    File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(mtime)
        .unwrap();
}

fn names(dir: &Path, sort: SortMethod) -> Vec<String> {
    find_media_files(dir, "mp4", sort)
        .unwrap()
        .iter()
        .map(|f| f.file_name())
        .collect()
}

#[test]
fn test_only_non_matching_files_is_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["notes.txt", "clip.mov", "poster.png", "mp4"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }
    let err = find_media_files(dir.path(), "mp4", SortMethod::Alphabetical).unwrap_err();
    assert!(matches!(err, MediaError::EmptyResult { .. }));
}

#[test]
fn test_alphabetical_order_feeds_manifest() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.mp4", "a.mp4", "c.mp4"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }

    let files = find_media_files(dir.path(), "mp4", SortMethod::Alphabetical).unwrap();
    let manifest = render_manifest(&files).unwrap();
    let order: Vec<&str> = manifest
        .lines()
        .map(|l| l.rsplit('/').next().unwrap().trim_end_matches('\''))
        .collect();
    assert_eq!(order, vec!["a.mp4", "b.mp4", "c.mp4"]);
}

#[test]
fn test_date_modified_oldest_first() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.mp4", 10);
    touch(dir.path(), "b.mp4", 300);
    touch(dir.path(), "c.mp4", 60);

    assert_eq!(names(dir.path(), SortMethod::DateModified), vec!["b.mp4", "c.mp4", "a.mp4"]);
}

#[test]
fn test_equal_timestamps_fall_back_to_name() {
    let dir = tempfile::tempdir().unwrap();
    let stamp = SystemTime::now() - Duration::from_secs(120);
    for name in ["Zeta.mp4", "alpha.mp4", "Mid.mp4"] {
        let path = dir.path().join(name);
        fs::write(&path, b"x").unwrap();
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(stamp)
            .unwrap();
    }

    assert_eq!(
        names(dir.path(), SortMethod::DateModified),
        vec!["alpha.mp4", "Mid.mp4", "Zeta.mp4"]
    );
}

#[test]
fn test_date_created_oldest_first() {
    let dir = tempfile::tempdir().unwrap();
    // Platforms without a birth time fall back to mtime, which follows the same order.
    for name in ["c.mp4", "a.mp4", "b.mp4"] {
        fs::write(dir.path().join(name), b"x").unwrap();
        std::thread::sleep(Duration::from_millis(20));
    }
    assert_eq!(names(dir.path(), SortMethod::DateCreated), vec!["c.mp4", "a.mp4", "b.mp4"]);
}
