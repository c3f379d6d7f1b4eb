//! Packaging-time vendor asset publishing.
//!
//! Third-party front-end libraries live in a dependency cache next to the
//! module sources; packaging copies the deployable parts of that cache into
//! a fixed vendor resource path. Scripts and stylesheets additionally get a
//! precompressed sibling and a content hash recorded in the bundle manifest
//! so the host can serve and cache-bust them.

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Extensions that get compression and a manifest entry.
const SCRIPT_EXTENSIONS: &[&str] = &["js", "css"];
/// Fonts and images are copied verbatim.
const ASSET_EXTENSIONS: &[&str] = &["gif", "otf", "eot", "svg", "ttf", "woff", "woff2"];

pub const MANIFEST_FILE: &str = "vendor-manifest.json";

#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Front-end dependency cache to publish from.
    pub cache_dir: PathBuf,
    /// Vendor resource path inside the packaged module.
    pub out_dir: PathBuf,
    /// Write `.gz` siblings for scripts and stylesheets.
    pub compress: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ManifestEntry {
    /// Path relative to the vendor root, with `/` separators.
    pub path: String,
    pub md5: String,
    pub size: u64,
    pub compressed: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct VendorManifest {
    pub entries: Vec<ManifestEntry>,
}

/// Publish every deployable asset from the cache into the vendor path and
/// write the manifest. Returns the manifest for the caller to report on.
pub fn publish_vendor_assets(options: &BundleOptions) -> Result<VendorManifest> {
    let mut manifest = VendorManifest::default();
    let mut copied = 0usize;

    for entry in WalkDir::new(&options.cache_dir) {
        let entry = entry.with_context(|| {
            format!("failed to walk cache dir {}", options.cache_dir.display())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(extension) = file_extension(entry.path()) else {
            continue;
        };
        let is_script = SCRIPT_EXTENSIONS.contains(&extension.as_str());
        if !is_script && !ASSET_EXTENSIONS.contains(&extension.as_str()) {
            debug!(path = %entry.path().display(), "skipping foreign extension");
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&options.cache_dir)
            .with_context(|| format!("{} is outside the cache dir", entry.path().display()))?;
        let destination = options.out_dir.join(relative);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let bytes = fs::read(entry.path())
            .with_context(|| format!("failed to read {}", entry.path().display()))?;
        fs::write(&destination, &bytes)
            .with_context(|| format!("failed to write {}", destination.display()))?;
        copied += 1;

        if is_script {
            let compressed = options.compress;
            if compressed {
                write_gzip(&destination, &bytes)?;
            }
            manifest.entries.push(ManifestEntry {
                path: relative_path_string(relative),
                md5: format!("{:x}", md5::compute(&bytes)),
                size: bytes.len() as u64,
                compressed,
            });
        }
    }

    fs::create_dir_all(&options.out_dir)
        .with_context(|| format!("failed to create {}", options.out_dir.display()))?;
    let manifest_path = options.out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&manifest_path, json)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    info!(
        copied,
        hashed = manifest.entries.len(),
        out = %options.out_dir.display(),
        "published vendor assets"
    );
    Ok(manifest)
}

fn write_gzip(destination: &Path, bytes: &[u8]) -> Result<()> {
    let gz_path = destination.with_extension(format!(
        "{}.gz",
        file_extension(destination).unwrap_or_default()
    ));
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    let compressed = encoder.finish()?;
    fs::write(&gz_path, compressed)
        .with_context(|| format!("failed to write {}", gz_path.display()))?;
    Ok(())
}

fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

fn relative_path_string(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(root: &Path, relative: &str, contents: &[u8]) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn options(cache: &Path, out: &Path, compress: bool) -> BundleOptions {
        BundleOptions {
            cache_dir: cache.to_path_buf(),
            out_dir: out.to_path_buf(),
            compress,
        }
    }

    #[test]
    fn publishes_the_cache_layout_and_skips_foreign_files() {
        let cache = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_file(cache.path(), "jquery/dist/jquery.min.js", b"window.$=1;");
        write_file(cache.path(), "datatables/css/jquery.dataTables.min.css", b".dt{}");
        write_file(cache.path(), "font-awesome/fonts/fa.woff2", b"\x00\x01");
        write_file(cache.path(), "jquery/README.md", b"docs");

        let manifest =
            publish_vendor_assets(&options(cache.path(), out.path(), false)).unwrap();

        assert!(out.path().join("jquery/dist/jquery.min.js").is_file());
        assert!(out
            .path()
            .join("datatables/css/jquery.dataTables.min.css")
            .is_file());
        assert!(out.path().join("font-awesome/fonts/fa.woff2").is_file());
        assert!(!out.path().join("jquery/README.md").exists());
        assert!(out.path().join(MANIFEST_FILE).is_file());

        let mut paths: Vec<_> = manifest.entries.iter().map(|e| e.path.clone()).collect();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                "datatables/css/jquery.dataTables.min.css".to_string(),
                "jquery/dist/jquery.min.js".to_string(),
            ]
        );
    }

    #[test]
    fn manifest_hashes_the_published_bytes() {
        let cache = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let contents = b"window.$=1;";
        write_file(cache.path(), "jquery/jquery.min.js", contents);

        let manifest =
            publish_vendor_assets(&options(cache.path(), out.path(), false)).unwrap();

        assert_eq!(manifest.entries.len(), 1);
        let entry = &manifest.entries[0];
        assert_eq!(entry.md5, format!("{:x}", md5::compute(contents)));
        assert_eq!(entry.size, contents.len() as u64);
        assert!(!entry.compressed);
    }

    #[test]
    fn compression_writes_gzip_siblings_for_scripts_only() {
        let cache = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_file(cache.path(), "jquery/jquery.min.js", b"window.$=1;");
        write_file(cache.path(), "font-awesome/fonts/fa.woff2", b"\x00\x01");

        publish_vendor_assets(&options(cache.path(), out.path(), true)).unwrap();

        assert!(out.path().join("jquery/jquery.min.js.gz").is_file());
        assert!(!out.path().join("font-awesome/fonts/fa.woff2.gz").exists());
    }

    #[test]
    fn empty_cache_still_writes_a_manifest() {
        let cache = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        let manifest =
            publish_vendor_assets(&options(cache.path(), out.path(), true)).unwrap();

        assert!(manifest.entries.is_empty());
        assert!(out.path().join(MANIFEST_FILE).is_file());
    }
}
