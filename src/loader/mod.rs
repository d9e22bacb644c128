//! Dataset ingestion: fetch a CSV of schools and turn its rows into
//! [`School`] records.
//!
//! Column names vary between dataset revisions, so every column is looked up
//! through a list of aliases compared on their lowercase alphanumeric form
//! (`"Undergraduate Enrollment"` matches `undergraduate_enrollment`).

pub mod file;
pub mod http;

use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::core::school::parse_enrollment;
use crate::core::School;
use crate::error::{AutocompleteError, Result};

pub use file::FileSource;
pub use http::{HttpSource, DEFAULT_DATASET_URL};

pub const NAME_COLUMNS: &[&str] = &["name", "Name"];

pub const URL_COLUMNS: &[&str] = &["url", "URL"];

pub const ENROLLMENT_COLUMNS: &[&str] = &[
    "Undergraduate Enrollment",
    "UndergraduateEnrollment",
    "undergraduate_enrollment",
    "Undergrad Enrollment",
    "UG Enrollment",
];

/// Trait for dataset locations (remote URL, local file)
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch the raw CSV text
    async fn fetch(&self) -> Result<String>;

    /// Human readable location for logs
    fn describe(&self) -> String;
}

/// Pick an HTTP source for `http(s)://` locations, a file source otherwise
pub fn source_for(location: &str, timeout_secs: u64) -> Result<Box<dyn DatasetSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout_secs)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// Fetch and parse a dataset
pub async fn load_schools(source: &dyn DatasetSource) -> Result<Vec<School>> {
    let text = source.fetch().await?;
    let schools = parse_schools(&text)?;
    tracing::info!("Loaded {} schools from {}", schools.len(), source.describe());
    Ok(schools)
}

fn column_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Index of the first header matching any alias, aliases tried in order
fn find_column(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| {
        let wanted = column_key(alias);
        headers.iter().position(|h| column_key(h) == wanted)
    })
}

fn field<'r>(record: &'r StringRecord, column: Option<usize>) -> &'r str {
    column.and_then(|i| record.get(i)).unwrap_or("").trim()
}

/// Parse CSV text with a header row into schools.
///
/// Rows without a name are dropped. Fails with
/// [`AutocompleteError::EmptyDataset`] when nothing survives.
pub fn parse_schools(text: &str) -> Result<Vec<School>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.trim().as_bytes());

    let headers = reader.headers()?.clone();
    let name_col = find_column(&headers, NAME_COLUMNS);
    let url_col = find_column(&headers, URL_COLUMNS);
    let enrollment_col = find_column(&headers, ENROLLMENT_COLUMNS);

    if name_col.is_none() {
        tracing::warn!("Dataset has no name column, headers: {:?}", headers);
    }

    let mut schools = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record?;
        let name = field(&record, name_col);
        if name.is_empty() {
            skipped += 1;
            continue;
        }

        let school = School::new(name)
            .with_url(field(&record, url_col))
            .with_enrollment(parse_enrollment(field(&record, enrollment_col)));
        schools.push(school);
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} rows without a name", skipped);
    }

    if schools.is_empty() {
        return Err(AutocompleteError::EmptyDataset);
    }

    Ok(schools)
}
