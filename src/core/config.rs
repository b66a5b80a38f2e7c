use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the normalized CSV exports.
    pub dataset_path: PathBuf,

    /// Defaulted bounds for the grid-vs-finish extraction when the caller
    /// does not supply a year range.
    pub default_start_year: i32,
    pub default_end_year: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_path: PathBuf::from("./dataset"),
            default_start_year: 1990,
            default_end_year: 2024,
        }
    }
}
