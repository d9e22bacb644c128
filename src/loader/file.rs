use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::Result;
use crate::loader::DatasetSource;

/// Local CSV dataset
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutocompleteError;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,url").unwrap();
        writeln!(file, "Caltech,https://caltech.edu").unwrap();

        let source = FileSource::new(file.path());
        let text = source.fetch().await.unwrap();

        assert!(text.starts_with("name,url"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.csv"));

        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, AutocompleteError::Io(_)));
    }
}
