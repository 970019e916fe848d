use trireme_engine::{ensure_cache_dir, ImportSettings, DEFAULT_BUFFER_SIZE};
use tempfile::TempDir;

#[test]
fn creates_missing_cache_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("a").join("cache");
    assert!(!new_dir.exists());
    let resolved = ensure_cache_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
    assert!(resolved.is_absolute());
}

#[test]
fn probe_leaves_no_files_behind() {
    let temp = TempDir::new().unwrap();
    ensure_cache_dir(temp.path()).unwrap();
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn default_settings_use_small_fixed_buffer() {
    let settings = ImportSettings::default();
    assert_eq!(settings.buffer_size, DEFAULT_BUFFER_SIZE);
    assert_eq!(DEFAULT_BUFFER_SIZE, 4096);
    assert!(settings.cache_dir.ends_with("trireme-cache"));
}
