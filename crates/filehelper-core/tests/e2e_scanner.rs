/// End-to-end scanner, detection, and deletion tests.
///
/// These run the real `scan_directory` walk against a temporary directory
/// tree, then drive special-file detection and deletion on the result,
/// the same sequence the desktop shell performs. Big files are created
/// sparse with `set_len`, so a 150 MiB archive costs no disk space.
use filehelper_core::actions::{delete_record, delete_records};
use filehelper_core::analysis::find_special_files;
use filehelper_core::scanner::scan_directory;
use filehelper_core::{ActivityLog, DeleteError, HelperConfig, ScanError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MIB: u64 = 1024 * 1024;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_len(path: &Path, len: u64) {
    fs::File::create(path).unwrap().set_len(len).unwrap();
}

/// Build a reproducible tree:
///
/// ```text
/// root/
///   alpha/
///     a.txt     (100 bytes)
///     b.rs      (200 bytes)
///   beta/
///     deep/
///       c.png   (300 bytes)
///   d.zip       (400 bytes)
///   .hidden     (50 bytes)
/// ```
fn build_test_tree(root: &Path) {
    let alpha = root.join("alpha");
    let deep = root.join("beta").join("deep");
    fs::create_dir_all(&alpha).unwrap();
    fs::create_dir_all(&deep).unwrap();

    write_len(&alpha.join("a.txt"), 100);
    write_len(&alpha.join("b.rs"), 200);
    write_len(&deep.join("c.png"), 300);
    write_len(&root.join("d.zip"), 400);
    write_len(&root.join(".hidden"), 50);
}

fn names(records: &filehelper_core::RecordSet) -> Vec<String> {
    records.iter().map(|r| r.name.to_string()).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Every file, at any depth and including hidden ones, yields one record.
#[test]
fn scan_finds_every_file_once() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());

    let outcome = scan_directory(tmp.path(), &HelperConfig::default(), &ActivityLog::disabled());

    assert!(outcome.errors.is_empty(), "unexpected errors: {:?}", outcome.errors);
    assert_eq!(outcome.records.len(), 5);
    assert_eq!(names(&outcome.records), ["d.zip", "c.png", "b.rs", "a.txt", ".hidden"]);
    assert_eq!(outcome.records.total_size(), 1_050);
    assert!(outcome.records.iter().all(|r| r.available));
}

/// Records come back sorted by size, largest first.
#[test]
fn scan_sorts_by_size_descending() {
    let tmp = TempDir::new().unwrap();
    for (i, len) in [5u64, 500, 50, 5_000, 0, 50].iter().enumerate() {
        write_len(&tmp.path().join(format!("f{i}.bin")), *len);
    }

    let outcome = scan_directory(tmp.path(), &HelperConfig::default(), &ActivityLog::disabled());
    let sizes: Vec<u64> = outcome.records.iter().map(|r| r.size).collect();

    assert_eq!(sizes.len(), 6);
    assert!(sizes.windows(2).all(|w| w[0] >= w[1]), "not sorted: {sizes:?}");
}

/// An empty directory produces an empty record set and no errors.
#[test]
fn scan_empty_directory() {
    let tmp = TempDir::new().unwrap();

    let outcome = scan_directory(tmp.path(), &HelperConfig::default(), &ActivityLog::disabled());

    assert!(outcome.records.is_empty());
    assert!(outcome.errors.is_empty());
}

/// A missing root is reported as a walk error, not a panic.
#[test]
fn scan_missing_root_reports_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");

    let outcome = scan_directory(&missing, &HelperConfig::default(), &ActivityLog::disabled());

    assert!(outcome.records.is_empty());
    assert!(matches!(outcome.errors.first(), Some(ScanError::Walk { .. })));
}

/// Scanning the same unchanged tree twice gives the same content.
#[test]
fn scan_is_repeatable() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());
    let config = HelperConfig::default();

    let key = |records: &filehelper_core::RecordSet| {
        let mut v: Vec<_> = records
            .iter()
            .map(|r| (r.path.clone(), r.size, r.is_big, r.is_archive, r.available))
            .collect();
        v.sort();
        v
    };

    let first = scan_directory(tmp.path(), &config, &ActivityLog::disabled());
    let second = scan_directory(tmp.path(), &config, &ActivityLog::disabled());
    assert_eq!(key(&first.records), key(&second.records));
}

/// The scan appends a "scanned directory" line to the activity log.
#[test]
fn scan_writes_activity_log() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    write_len(&data.join("x.bin"), 1);
    let log = ActivityLog::new(tmp.path().join("file_helper.log"));

    scan_directory(&data, &HelperConfig::default(), &log);

    let text = fs::read_to_string(tmp.path().join("file_helper.log")).unwrap();
    assert!(text.contains(&format!(" | scanned directory: {}", data.display())));
}

/// The reference scenario: a small text file and a 150 MiB zip.
#[test]
fn big_archive_scenario() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("a.txt"), [b'x'; 10]).unwrap();
    write_len(&data.join("big.zip"), 150 * MIB);
    let log = ActivityLog::new(tmp.path().join("file_helper.log"));

    let mut records = scan_directory(&data, &HelperConfig::default(), &log).records;
    assert_eq!(names(&records), ["big.zip", "a.txt"]);

    let big = records.get(0).unwrap();
    assert!(big.is_big && big.is_archive && big.available);
    let small = records.get(1).unwrap();
    assert!(!small.is_big && !small.is_archive);

    let candidates = find_special_files(&records);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "big.zip");

    let report = delete_records(&mut records, &candidates, &log);
    assert!(report.is_clean());
    assert!(!data.join("big.zip").exists());
    assert!(data.join("a.txt").exists());
    assert_eq!(names(&records), ["a.txt"]);

    let text = fs::read_to_string(tmp.path().join("file_helper.log")).unwrap();
    assert!(text.contains(&format!("deleted: {}", data.join("big.zip").display())));
}

/// Archive detection ignores case; the big-file threshold is strict.
#[test]
fn classification_edges() {
    let tmp = TempDir::new().unwrap();
    write_len(&tmp.path().join("UPPER.ZIP"), 1);
    write_len(&tmp.path().join("exact.7z"), 100 * MIB);
    write_len(&tmp.path().join("over.gz"), 100 * MIB + 1);

    let records = scan_directory(tmp.path(), &HelperConfig::default(), &ActivityLog::disabled())
        .records;
    let by_name = |n: &str| records.iter().find(|r| r.name == n).unwrap().clone();

    assert!(by_name("UPPER.ZIP").is_archive);
    assert!(!by_name("exact.7z").is_big);
    assert!(by_name("over.gz").is_big);

    let candidates = find_special_files(&records);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "over.gz");
}

/// A custom configuration changes classification.
#[test]
fn custom_config_threshold_and_extensions() {
    let tmp = TempDir::new().unwrap();
    write_len(&tmp.path().join("image.iso"), 2_000);
    write_len(&tmp.path().join("small.zip"), 2_000);
    let config = HelperConfig {
        big_file_threshold: 1_000,
        archive_extensions: vec!["iso".into()],
        log_file: None,
    };

    let records = scan_directory(tmp.path(), &config, &ActivityLog::disabled()).records;
    let candidates = find_special_files(&records);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "image.iso");
}

/// Deleting a record that vanished after the scan fails and keeps it.
#[test]
fn delete_after_external_removal_fails() {
    let tmp = TempDir::new().unwrap();
    write_len(&tmp.path().join("a.bin"), 20);
    write_len(&tmp.path().join("b.bin"), 10);
    let mut records =
        scan_directory(tmp.path(), &HelperConfig::default(), &ActivityLog::disabled()).records;
    let target = records.get(1).unwrap().clone();
    fs::remove_file(&target.path).unwrap();
    let before = records.clone();

    let err = delete_record(&mut records, &target, &ActivityLog::disabled()).unwrap_err();

    assert!(matches!(err, DeleteError::Failed { .. }));
    assert_eq!(records, before);
}

/// Symlinks: links to files are recorded, broken links are unavailable,
/// and links to directories are neither followed nor recorded.
#[cfg(unix)]
#[test]
fn symlinks_do_not_break_the_scan() {
    use std::os::unix::fs::symlink;

    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("root");
    let outside = tmp.path().join("outside");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&outside).unwrap();
    write_len(&outside.join("target.bin"), 64);
    write_len(&outside.join("inner.bin"), 8);

    symlink(outside.join("target.bin"), root.join("link.bin")).unwrap();
    symlink(outside.join("missing.bin"), root.join("broken.zip")).unwrap();
    symlink(&outside, root.join("dirlink")).unwrap();

    let records = scan_directory(&root, &HelperConfig::default(), &ActivityLog::disabled()).records;

    assert_eq!(names(&records), ["link.bin", "broken.zip"]);
    assert_eq!(records.get(0).unwrap().size, 64);
    assert!(!records.get(1).unwrap().available);
}
