use std::fmt;
use std::path::PathBuf;

use itertools::Itertools;

use crate::error::DownloadError;

/// Outcome of one entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Downloaded { size: u64 },
    Skipped,
    Failed(DownloadError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryReport {
    pub filename: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSize {
    pub name: String,
    pub size: u64,
}

/// Result of a whole run: one report per entry in table order, plus the
/// sorted listing of the target directory taken afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub target_dir: PathBuf,
    pub entries: Vec<EntryReport>,
    pub files: Vec<FileSize>,
}

impl Report {
    pub fn downloaded(&self) -> usize {
        self.count(|status| matches!(status, Status::Downloaded { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, Status::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, Status::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&Status) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(&e.status)).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Download complete!")?;
        writeln!(f)?;
        writeln!(f, "Files in {}:", self.target_dir.display())?;

        for file in &self.files {
            writeln!(f, "  {} ({} bytes)", file.name, group_thousands(file.size))?;
        }

        Ok(())
    }
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    n.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|digits| std::str::from_utf8(digits).unwrap_or_default())
        .join(",")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{group_thousands, EntryReport, FileSize, Report, Status};
    use crate::error::DownloadError;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(100000), "100,000");
    }

    #[test]
    fn test_report_display() {
        let report = Report {
            target_dir: PathBuf::from("static/images"),
            entries: vec![
                EntryReport {
                    filename: String::from("a.jpg"),
                    status: Status::Downloaded { size: 2048 },
                },
                EntryReport {
                    filename: String::from("b.jpg"),
                    status: Status::Failed(DownloadError::Status(404)),
                },
                EntryReport {
                    filename: String::from("c.jpg"),
                    status: Status::Skipped,
                },
            ],
            files: vec![
                FileSize {
                    name: String::from("a.jpg"),
                    size: 2048,
                },
                FileSize {
                    name: String::from("c.jpg"),
                    size: 12,
                },
            ],
        };

        assert_eq!(report.downloaded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);

        let expected = "Download complete!\n\
                        \n\
                        Files in static/images:\n  \
                        a.jpg (2,048 bytes)\n  \
                        c.jpg (12 bytes)\n";

        assert_eq!(report.to_string(), expected);
    }
}
