//! Filesystem loaders for series files and reference tables.

use std::fs;
use std::path::Path;

use basketlens_core::TickerSeries;

use crate::{BenchmarkRow, DataError, SeriesFile, UniverseRow};

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let body = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| DataError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Read one per-ticker series file.
pub fn read_series_file(path: &Path) -> Result<TickerSeries, DataError> {
    let file: SeriesFile = read_json(path)?;
    Ok(file.into_series()?)
}

/// Read every `*.json` series file in a directory, sorted by file name
/// for deterministic ordering. Non-series files fail loudly rather
/// than being skipped.
pub fn read_series_dir(dir: &Path) -> Result<Vec<TickerSeries>, DataError> {
    let entries = fs::read_dir(dir).map_err(|source| DataError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    paths.iter().map(|path| read_series_file(path)).collect()
}

/// Read the ordered universe reference table.
pub fn read_universe(path: &Path) -> Result<Vec<UniverseRow>, DataError> {
    read_json(path)
}

/// Read the ordered benchmark reference table.
pub fn read_benchmarks(path: &Path) -> Result<Vec<BenchmarkRow>, DataError> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_series_file_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("aapl.json");
        let mut file = fs::File::create(&path).expect("create file");
        write!(
            file,
            r#"{{ "ticker": "AAPL", "dates": ["2024-01-02"], "close": [185.0] }}"#
        )
        .expect("write file");

        let series = read_series_file(&path).expect("readable");
        assert_eq!(series.symbol.as_str(), "AAPL");
        assert_eq!(series.closes, vec![185.0]);
    }

    #[test]
    fn missing_file_surfaces_io_error_with_path() {
        let err = read_series_file(Path::new("/nonexistent/aapl.json")).expect_err("must fail");
        match err {
            DataError::Io { path, .. } => assert!(path.contains("aapl.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_surfaces_json_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").expect("write file");

        let err = read_series_file(&path).expect_err("must fail");
        assert!(matches!(err, DataError::Json { .. }));
    }

    #[test]
    fn reads_directory_in_name_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        for (name, ticker) in [("b_msft.json", "MSFT"), ("a_aapl.json", "AAPL")] {
            fs::write(
                dir.path().join(name),
                format!(r#"{{ "ticker": "{ticker}", "dates": ["2024-01-02"], "close": [1.0] }}"#),
            )
            .expect("write file");
        }
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write file");

        let series = read_series_dir(dir.path()).expect("readable");
        let tickers: Vec<&str> = series.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(tickers, vec!["AAPL", "MSFT"]);
    }
}
