mod fetcher;

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::DownloadEntry;
use crate::error::{DownloadError, SetupError};
use crate::report::{group_thousands, EntryReport, FileSize, Report, Status};

pub use fetcher::UReqFetcher;

#[derive(Debug)]
pub enum Response {
    Ok(Vec<u8>),
    Status(u16),
    InvalidBody(String),
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn not_found() -> Self {
        Self::Status(404)
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody(message.into())
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }
}

/// Blocking GET of a whole response body.
pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    path: PathBuf,
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub size: u64,
}

impl Download {
    pub fn new(source: String, file: PathBuf, size: u64) -> Self {
        Self { source, file, size }
    }
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    /// Resolves `path` against the current directory and creates it.
    pub fn with_fetcher(path: impl AsRef<Path>, fetcher: T) -> Result<Self, SetupError> {
        let path = path.as_ref();

        let path = Self::create_path(path).map_err(|source| SetupError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("target directory: {:?}", path);

        Ok(Downloader { path, fetcher })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fetcher(&self) -> &T {
        &self.fetcher
    }

    /// Fetches `entry` and writes it to the target directory, replacing any
    /// file already there.
    pub fn download(&self, entry: &DownloadEntry) -> Result<Download, DownloadError> {
        let url = Url::parse(&entry.source_url).map_err(|error| DownloadError::InvalidUrl {
            url: entry.source_url.clone(),
            message: error.to_string(),
        })?;

        let url = url.as_str();

        let body = match self.fetcher.fetch(url) {
            Response::Ok(body) => body,
            Response::Status(code) => return Err(DownloadError::Status(code)),
            Response::InvalidBody(message) => return Err(DownloadError::InvalidBody(message)),
            Response::NetworkError(message) => return Err(DownloadError::Network(message)),
        };

        let file_path = self.path.join(&entry.filename);

        // A failed write may leave a truncated file behind.
        fs::write(&file_path, &body).map_err(|error| DownloadError::Write {
            path: file_path.clone(),
            message: error.to_string(),
        })?;

        Ok(Download::new(
            String::from(url),
            file_path,
            body.len() as u64,
        ))
    }

    /// Downloads `entry` unless a file with its name already exists.
    pub fn ensure(&self, entry: &DownloadEntry) -> Status {
        let file_path = self.path.join(&entry.filename);

        if file_path.exists() {
            info!("✓ {} already exists, skipping...", entry.filename);
            return Status::Skipped;
        }

        info!("Downloading {}...", entry.filename);

        match self.download(entry) {
            Ok(download) => {
                info!(
                    "✓ Downloaded {} ({} bytes)",
                    entry.filename,
                    group_thousands(download.size)
                );
                Status::Downloaded {
                    size: download.size,
                }
            }
            Err(error) => {
                warn!("✗ Failed to download {}: {}", entry.filename, error);
                Status::Failed(error)
            }
        }
    }

    /// Regular files in the target directory, sorted by name.
    pub fn list_files(&self) -> Result<Vec<FileSize>, SetupError> {
        let mut files = Vec::new();

        for dir_entry in fs::read_dir(&self.path).map_err(|e| self.list_error(e))? {
            let dir_entry = dir_entry.map_err(|e| self.list_error(e))?;
            let metadata = dir_entry.metadata().map_err(|e| self.list_error(e))?;

            if !metadata.is_file() {
                continue;
            }

            files.push((dir_entry.file_name(), metadata.len()));
        }

        // Sorted on the raw name; non-UTF-8 names are only lossy for display.
        Ok(files
            .into_iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(name, size)| FileSize {
                name: name.to_string_lossy().into_owned(),
                size,
            })
            .collect())
    }

    pub fn run(&self, entries: &[DownloadEntry]) -> Result<Report, SetupError> {
        let entries = entries
            .iter()
            .map(|entry| EntryReport {
                filename: entry.filename.clone(),
                status: self.ensure(entry),
            })
            .collect();

        let report = Report {
            target_dir: self.path.clone(),
            entries,
            files: self.list_files()?,
        };

        info!(
            "{} downloaded, {} skipped, {} failed",
            report.downloaded(),
            report.skipped(),
            report.failed()
        );

        Ok(report)
    }

    fn list_error(&self, source: io::Error) -> SetupError {
        SetupError::ListDir {
            path: self.path.clone(),
            source,
        }
    }

    fn create_path(path: &Path) -> io::Result<PathBuf> {
        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()?.join(path)
        };

        fs::create_dir_all(&absolute_path)?;

        Ok(absolute_path)
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        Downloader::with_fetcher(path, UReqFetcher::new())
    }
}

#[cfg(test)]
use fetcher::MockFetcher;
