use std::path::PathBuf;

pub const DEFAULT_TARGET_DIR: &str = "static/images";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

const COFFEE_IMAGES: [(&str, &str); 7] = [
    (
        "coffee-beans-background.jpg",
        "https://images.unsplash.com/photo-1447933601403-0c6688de566e?w=1920&q=80",
    ),
    (
        "coffee-shop-interior.jpg",
        "https://images.unsplash.com/photo-1501339847302-ac426a4c7c8e?w=1920&q=80",
    ),
    (
        "coffee-latte-art.jpg",
        "https://images.unsplash.com/photo-1442512595331-e89e73853f31?w=1920&q=80",
    ),
    (
        "coffee-making.jpg",
        "https://images.unsplash.com/photo-1511920170033-f8396924c348?w=1920&q=80",
    ),
    (
        "coffee-cup-hero.jpg",
        "https://images.unsplash.com/photo-1461023058943-07fcbe16d735?w=1920&q=80",
    ),
    (
        "pastries.jpg",
        "https://images.unsplash.com/photo-1555507036-ab1f4038808a?w=1920&q=80",
    ),
    (
        "coffee-bar.jpg",
        "https://images.unsplash.com/photo-1509042239860-f550c710c120?w=1920&q=80",
    ),
];

/// One file to keep in the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadEntry {
    /// File name inside the target directory.
    pub filename: String,
    pub source_url: String,
}

impl DownloadEntry {
    pub fn new(filename: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            source_url: source_url.into(),
        }
    }
}

/// Everything a run needs. Entries are processed in the order given.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub target_dir: PathBuf,
    pub entries: Vec<DownloadEntry>,
    /// Sent with every request.
    pub headers: Vec<(String, String)>,
}

impl FetchConfig {
    pub fn new(target_dir: impl Into<PathBuf>, entries: Vec<DownloadEntry>) -> Self {
        Self {
            target_dir: target_dir.into(),
            entries,
            headers: vec![("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string())],
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        let entries = COFFEE_IMAGES
            .iter()
            .map(|(filename, url)| DownloadEntry::new(*filename, *url))
            .collect();

        Self::new(DEFAULT_TARGET_DIR, entries)
    }
}
