#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    HeaderExtractionFailed,
    LineItemExtractionFailed,
    DocumentFailed,
    NoLineItems,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractWarning {
    pub code: WarningCode,
    pub message: String,
    pub source_file: Option<String>,
    pub detail: Option<String>,
}

impl ExtractWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source_file: None,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_source_file(mut self, source_file: impl Into<String>) -> Self {
        self.source_file = Some(source_file.into());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
