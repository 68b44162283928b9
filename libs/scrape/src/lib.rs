pub mod extract;
pub mod fetch;

pub use extract::{extract_sections, PageExtract};
pub use fetch::{build_client, fetch_page, validate_url, ScrapeError};
