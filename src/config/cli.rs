use crate::domain::ports::RecordSource;
use crate::utils::error::{GolfError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Record file on local disk. The handle lives only inside `read_lines`.
///
/// Only a failed open is `FileUnreadable`; bytes that are not UTF-8 are a
/// bad line like any other.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unreadable(&self, source: std::io::Error) -> GolfError {
        GolfError::FileUnreadable {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| self.unreadable(e))?;

        let mut lines = Vec::new();
        for (offset, line) in BufReader::new(file).lines().enumerate() {
            match line {
                Ok(line) => lines.push(line),
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Err(GolfError::InvalidEncoding {
                        line_number: offset + 1,
                    })
                }
                Err(e) => return Err(self.unreadable(e)),
            }
        }
        Ok(lines)
    }
}
