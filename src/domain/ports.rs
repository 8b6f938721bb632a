use crate::utils::error::Result;

/// Supplies the raw record lines. Any handle it opens is released before
/// `read_lines` returns.
pub trait RecordSource {
    fn describe(&self) -> String;
    fn read_lines(&self) -> Result<Vec<String>>;
}

impl RecordSource for [&str] {
    fn describe(&self) -> String {
        "in-memory records".to_string()
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.iter().map(|line| line.to_string()).collect())
    }
}
