//! Symbol list loading

use crate::error::Result;
use std::path::Path;

/// Load the newline-delimited symbol list, dropping blank lines and
/// surrounding whitespace.
pub fn load_symbols(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn skips_blank_lines_and_trims() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "AAPL\nMSFT \n\n TSLA\n\n").unwrap();

        let symbols = load_symbols(file.path()).unwrap();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "TSLA"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_symbols(&dir.path().join("absent.txt"));
        assert!(result.is_err());
    }
}
