use image::imageops::FilterType;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Width of the thumbnail chips in the detail-page strip
pub const TIER_CHIP: u32 = 256;
/// Width of the cover renditions used by the home-screen cards
pub const TIER_CARD: u32 = 640;

/// Get the cache directory for a thumbnail tier
/// Returns ~/.cache/portfolio-viewer/<tier> on Linux
fn cache_dir(tier: u32) -> Result<PathBuf, String> {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .ok_or_else(|| "Could not determine cache directory".to_string())?;

    path.push("portfolio-viewer");
    path.push(format!("{}px", tier));

    fs::create_dir_all(&path)
        .map_err(|e| format!("Failed to create thumbnail cache directory: {}", e))?;

    Ok(path)
}

/// Cache filename for a source image: stem plus a hash of the full path,
/// since different projects reuse stems like "cover"
fn cached_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().replace(' ', "_"))
        .unwrap_or_else(|| "image".to_string());

    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);

    format!("{}-{:016x}.jpg", stem, hasher.finish())
}

/// Generate (or reuse) a resized rendition of `source` at the given tier.
/// Returns the cached file's path.
pub fn generate(source: &Path, tier: u32) -> Result<PathBuf, String> {
    let target = cache_dir(tier)?.join(cached_name(source));

    // Already generated on a previous run.
    if target.exists() {
        return Ok(target);
    }

    let img = image::open(source)
        .map_err(|e| format!("Failed to decode {}: {}", source.display(), e))?;

    // Width-constrained resize, preserving aspect ratio.
    let resized = img.resize(tier, tier * 10, FilterType::Lanczos3);

    let rgb = image::DynamicImage::ImageRgb8(resized.to_rgb8());
    rgb.save(&target)
        .map_err(|e| format!("Failed to save thumbnail: {}", e))?;

    println!("📸 Generated {}px thumbnail: {}", tier, target.display());
    Ok(target)
}

/// Generate one tier for a batch of images on the blocking pool.
///
/// Sources that fail to decode are skipped with a warning; the caller keeps
/// using the original file for those.
pub async fn warm(sources: Vec<PathBuf>, tier: u32) -> Vec<(PathBuf, PathBuf)> {
    tokio::task::spawn_blocking(move || {
        let mut generated = Vec::with_capacity(sources.len());

        for source in sources {
            if !source.exists() {
                continue;
            }
            match generate(&source, tier) {
                Ok(cached) => generated.push((source, cached)),
                Err(e) => eprintln!("⚠️  {}", e),
            }
        }

        generated
    })
    .await
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_name_disambiguates_equal_stems() {
        let a = cached_name(Path::new("/assets/projects/alpha/cover.png"));
        let b = cached_name(Path::new("/assets/projects/beta/cover.png"));
        assert_ne!(a, b);
        assert!(a.starts_with("cover-"));
        assert!(a.ends_with(".jpg"));
    }

    #[test]
    fn test_cached_name_is_stable() {
        let path = Path::new("/assets/projects/demo/Medieval Village-ss.png");
        let first = cached_name(path);
        assert_eq!(first, cached_name(path));
        assert!(!first.contains(' '));
    }

    #[tokio::test]
    async fn test_warm_skips_missing_sources() {
        let generated = warm(
            vec![PathBuf::from("/nonexistent/projects/cover.png")],
            TIER_CARD,
        )
        .await;
        assert!(generated.is_empty());
    }
}
