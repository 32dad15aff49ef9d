pub mod file;
pub mod stdin;

use statarb_core::PriceSeries;

/// Load one price series from a path: `.csv` files are parsed as
/// `date,close` rows, anything else as a serialized [`PriceSeries`].
pub fn load_series(path: &str, symbol: &str) -> Result<PriceSeries, Box<dyn std::error::Error>> {
    if path.to_lowercase().ends_with(".csv") {
        file::read_price_csv(path, symbol)
    } else {
        file::read_json(path)
    }
}
