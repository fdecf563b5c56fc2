use anyhow::Result;
use pmdetect::{report, Catalog, CatalogKind, Catalogs, Config, Reporter};
use std::collections::BTreeSet;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary search path directories populated with empty files
struct SearchPathFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl SearchPathFixture {
    fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    fn bin_dir(&self, name: &str, files: &[&str]) -> Result<PathBuf> {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir)?;
        for file in files {
            fs::write(dir.join(file), "")?;
        }
        Ok(dir)
    }

    fn missing(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

fn search_path<P: AsRef<Path>>(dirs: &[P]) -> Result<OsString> {
    Ok(env::join_paths(dirs.iter().map(|d| d.as_ref()))?)
}

fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_two_directories_split_across_catalogs() -> Result<()> {
    let fixture = SearchPathFixture::new()?;
    let bin1 = fixture.bin_dir("testbin1", &["apt", "README"])?;
    let bin2 = fixture.bin_dir("testbin2", &["snap", "dnf"])?;

    let result = Reporter::new()
        .report_path(&search_path(&[&bin1, &bin2])?)
        .await;

    assert_eq!(result.official, names(&["apt", "dnf"]));
    assert_eq!(result.alternative, names(&["snap"]));
    assert!(result.failures.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_same_binary_in_two_directories_is_reported_once() -> Result<()> {
    let fixture = SearchPathFixture::new()?;
    let bin1 = fixture.bin_dir("testbin1", &["apt"])?;
    let bin2 = fixture.bin_dir("testbin2", &["apt"])?;

    let result = Reporter::new()
        .report_path(&search_path(&[&bin1, &bin2])?)
        .await;

    assert_eq!(result.official, names(&["apt"]));
    assert!(result.alternative.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_nonexistent_directory_is_skipped() -> Result<()> {
    let fixture = SearchPathFixture::new()?;
    let missing = fixture.missing("gone");
    let bin = fixture.bin_dir("bin", &["pacman", "flatpak"])?;

    let result = Reporter::new()
        .report_path(&search_path(&[&missing, &bin])?)
        .await;

    assert_eq!(result.official, names(&["pacman"]));
    assert_eq!(result.alternative, names(&["flatpak"]));
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].directory, missing);
    Ok(())
}

#[tokio::test]
async fn test_file_in_search_path_is_skipped() -> Result<()> {
    let fixture = SearchPathFixture::new()?;
    let bin = fixture.bin_dir("bin", &["yum"])?;
    let not_a_dir = bin.join("yum");

    let result = Reporter::new()
        .report_path(&search_path(&[&not_a_dir, &bin])?)
        .await;

    assert_eq!(result.official, names(&["yum"]));
    assert_eq!(result.failures.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_search_path() {
    let result = Reporter::new().report_path(&OsString::new()).await;

    assert!(result.official.is_empty());
    assert!(result.alternative.is_empty());
    assert!(result.failures.is_empty());
}

#[tokio::test]
async fn test_subdirectory_names_also_match() -> Result<()> {
    let fixture = SearchPathFixture::new()?;
    let bin = fixture.bin_dir("bin", &[])?;
    fs::create_dir(bin.join("brew"))?;

    let result = Reporter::new().report_path(&search_path(&[&bin])?).await;

    assert_eq!(result.alternative, names(&["brew"]));
    Ok(())
}

#[tokio::test]
async fn test_repeated_scans_agree() -> Result<()> {
    let fixture = SearchPathFixture::new()?;
    let bin1 = fixture.bin_dir("a", &["zypper", "npm", "yarn"])?;
    let bin2 = fixture.bin_dir("b", &["apk", "npm"])?;
    let path = search_path(&[&bin1, &fixture.missing("c"), &bin2])?;

    let reporter = Reporter::new();
    let first = reporter.report_path(&path).await;
    let second = reporter.report_path(&path).await;

    assert!(first.same_detections(&second));
    assert_eq!(first.failures, second.failures);
    Ok(())
}

#[tokio::test]
async fn test_process_path_report_is_stable() {
    let first = report().await;
    let second = report().await;

    assert!(first.same_detections(&second));
    assert!(first.official.iter().all(|n| Catalog::official().contains(n)));
    assert!(first
        .alternative
        .iter()
        .all(|n| Catalog::alternative().contains(n)));
}

#[tokio::test]
async fn test_many_directories_with_low_concurrency() -> Result<()> {
    let fixture = SearchPathFixture::new()?;
    let mut dirs = Vec::new();
    for i in 0..20 {
        let file = if i % 2 == 0 { "apt" } else { "snap" };
        dirs.push(fixture.bin_dir(&format!("bin{}", i), &[file, "ls"])?);
    }
    let path = search_path(&dirs)?;

    let parallel = Reporter::new().max_concurrency(3).report_path(&path).await;
    let sequential = Reporter::new().parallel(false).report_path(&path).await;

    assert_eq!(parallel.official, names(&["apt"]));
    assert_eq!(parallel.alternative, names(&["snap"]));
    assert_eq!(parallel.directories_scanned, 20);
    assert!(parallel.same_detections(&sequential));
    Ok(())
}

#[tokio::test]
async fn test_synthetic_catalogs_on_real_directories() -> Result<()> {
    let fixture = SearchPathFixture::new()?;
    let bin = fixture.bin_dir("bin", &["apt", "mytool", "other"])?;

    let catalogs = Catalogs::new(
        Catalog::new(CatalogKind::Official, ["mytool"]),
        Catalog::new(CatalogKind::Alternative, ["apt"]),
    );
    let result = Reporter::new()
        .with_catalogs(catalogs)
        .report_path(&search_path(&[&bin])?)
        .await;

    assert_eq!(result.official, names(&["mytool"]));
    assert_eq!(result.alternative, names(&["apt"]));
    Ok(())
}

#[tokio::test]
async fn test_reporter_from_config_uses_extra_names() -> Result<()> {
    let fixture = SearchPathFixture::new()?;
    let bin = fixture.bin_dir("bin", &["emerge", "dnf"])?;

    let config = Config::from_toml_str(
        r#"
        parallel = false
        [catalogs]
        extra_official = ["emerge"]
        "#,
    )?;
    let result = Reporter::from_config(&config)
        .report_path(&search_path(&[&bin])?)
        .await;

    assert_eq!(result.official, names(&["dnf", "emerge"]));
    Ok(())
}
