pub mod config;
pub mod downloader;
pub mod error;
pub mod logging;
pub mod report;

pub use config::{DownloadEntry, FetchConfig};
pub use downloader::{Download, Downloader, FileDownloader, Response, UReqFetcher};
pub use error::{DownloadError, SetupError};
pub use report::{EntryReport, FileSize, Report, Status};

/// Downloads every missing entry of `config` over HTTP, then lists the
/// target directory.
pub fn run(config: &FetchConfig) -> Result<Report, SetupError> {
    let fetcher = UReqFetcher::with_headers(config.headers.clone());

    let downloader = Downloader::with_fetcher(&config.target_dir, fetcher)?;

    downloader.run(&config.entries)
}
