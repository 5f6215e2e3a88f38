use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::catalog::store::Catalog;

/// The AssetLibrary maps the catalog's site-absolute media references
/// ("/projects/...") onto files under the local assets root.
///
/// The tree is walked once at startup; lookups afterwards are set probes,
/// so views can cheaply decide between an image and a placeholder.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    root: PathBuf,
    present: HashSet<PathBuf>,
}

impl AssetLibrary {
    /// Walk the assets root and index every file found
    pub fn scan(root: &Path) -> Self {
        let mut present = HashSet::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.path().is_file() {
                present.insert(entry.path().to_path_buf());
            }
        }

        println!("📁 Indexed {} files under {}", present.len(), root.display());

        AssetLibrary {
            root: root.to_path_buf(),
            present,
        }
    }

    /// Resolve a site-absolute reference against the assets root
    pub fn resolve(&self, reference: &str) -> PathBuf {
        self.root.join(reference.trim_start_matches('/'))
    }

    /// Whether the referenced file was present when the root was scanned
    pub fn exists(&self, reference: &str) -> bool {
        self.present.contains(&self.resolve(reference))
    }

    /// Every image reference in the catalog that has no file on disk.
    /// Missing assets degrade to placeholders in the views; this only
    /// reports them.
    pub fn verify(&self, catalog: &Catalog) -> Vec<String> {
        let mut missing = Vec::new();

        for reference in image_references(catalog) {
            if !self.exists(&reference) {
                missing.push(reference);
            }
        }

        if !missing.is_empty() {
            eprintln!("⚠️  {} catalog images missing from disk:", missing.len());
            for reference in &missing {
                eprintln!("   {}", reference);
            }
        }

        missing
    }
}

/// Collect every image reference a catalog can render: covers, screenshots,
/// and section images
fn image_references(catalog: &Catalog) -> Vec<String> {
    let mut references = Vec::new();

    for project in catalog.projects() {
        references.push(project.image.clone());
        references.extend(project.screenshots.iter().cloned());
        for section in &project.sections {
            if let Some(images) = &section.images {
                references.extend(images.iter().map(|img| img.src().to_string()));
            }
        }
    }

    references
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("portfolio-viewer-tests")
            .join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("projects")).unwrap();
        dir
    }

    #[test]
    fn test_resolve_strips_leading_slash() {
        let library = AssetLibrary {
            root: PathBuf::from("/srv/assets"),
            present: HashSet::new(),
        };
        assert_eq!(
            library.resolve("/projects/demo/cover.png"),
            PathBuf::from("/srv/assets/projects/demo/cover.png")
        );
    }

    #[test]
    fn test_scan_finds_files_and_exists_answers() {
        let root = scratch_dir("scan");
        fs::write(root.join("projects/cover.png"), b"png").unwrap();

        let library = AssetLibrary::scan(&root);
        assert!(library.exists("/projects/cover.png"));
        assert!(!library.exists("/projects/other.png"));
    }

    #[test]
    fn test_scan_of_missing_root_is_empty() {
        let root = std::env::temp_dir().join("portfolio-viewer-tests/nonexistent");
        let _ = fs::remove_dir_all(&root);

        let library = AssetLibrary::scan(&root);
        assert!(!library.exists("/projects/cover.png"));
    }
}
