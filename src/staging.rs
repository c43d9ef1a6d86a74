use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ExtractError;

/// A document staged to disk for the extraction passes. The backing file is
/// removed when the value drops, on success and failure paths alike.
pub(crate) struct StagedDocument {
    file: NamedTempFile,
}

impl StagedDocument {
    pub(crate) fn write(bytes: &[u8]) -> Result<Self, ExtractError> {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub(crate) fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::StagedDocument;

    #[test]
    fn staged_file_is_removed_on_drop() {
        let staged = StagedDocument::write(b"%PDF-1.5").expect("staging should succeed");
        let path = staged.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("pdf"));

        drop(staged);
        assert!(!path.exists());
    }
}
