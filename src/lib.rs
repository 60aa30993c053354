pub mod config;
pub mod error;
pub mod excel_parser;
pub mod exporter;
pub mod models;
pub mod report;
pub mod searcher;

pub use config::AppConfig;
pub use error::{Result, ScanError};
pub use models::{KeywordGroup, MatchedCell, RowMatch, ScanReport, SheetRow};
pub use searcher::{search_paths, search_rows, search_workbook};
