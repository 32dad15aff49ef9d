pub mod backtest;
pub mod bands;

/// Derive a display symbol from a file path: the stem, upper-cased.
pub(crate) fn symbol_from_path(path: &str) -> String {
    std::path::Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_uppercase()
}
