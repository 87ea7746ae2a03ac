use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Declared origin of a document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceHint {
    /// Native digital text layer.
    Digital,
    /// Scanned pages run through OCR.
    Scanned,
}

/// A byte range `[start, end)` of a document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRegion {
    pub start: usize,
    pub end: usize,
}

impl TextRegion {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Immutable input document: created once per ingestion, never mutated.
///
/// `text` is `None` when the upstream extractor produced nothing usable
/// (a JSON `null`, or bytes that are not valid UTF-8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentText {
    document_id: String,
    text: Option<String>,
    #[serde(default)]
    source_hint: Option<SourceHint>,
    /// Product code of the device the document is submitted for.
    #[serde(default)]
    product_code: Option<String>,
    /// Regions of `text` that came from a table/figure extraction pass.
    #[serde(default)]
    table_regions: Vec<TextRegion>,
}

impl DocumentText {
    pub fn new(document_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            text: Some(text.into()),
            source_hint: None,
            product_code: None,
            table_regions: Vec::new(),
        }
    }

    /// A document whose text could not be obtained at all.
    pub fn missing(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            text: None,
            source_hint: None,
            product_code: None,
            table_regions: Vec::new(),
        }
    }

    /// Decode raw extractor output. Invalid UTF-8 yields a document without text.
    pub fn from_bytes(document_id: impl Into<String>, bytes: Vec<u8>) -> Self {
        let document_id = document_id.into();
        match String::from_utf8(bytes) {
            Ok(text) => Self::new(document_id, text),
            Err(e) => {
                tracing::warn!(document_id = %document_id, error = %e, "document text is not valid UTF-8");
                Self::missing(document_id)
            }
        }
    }

    pub fn with_source_hint(mut self, hint: SourceHint) -> Self {
        self.source_hint = Some(hint);
        self
    }

    pub fn with_product_code(mut self, product_code: impl Into<String>) -> Self {
        self.product_code = Some(product_code.into());
        self
    }

    pub fn with_table_regions(mut self, regions: Vec<TextRegion>) -> Self {
        self.table_regions = regions;
        self
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn source_hint(&self) -> Option<SourceHint> {
        self.source_hint
    }

    pub fn product_code(&self) -> Option<&str> {
        self.product_code.as_deref()
    }

    pub fn table_regions(&self) -> &[TextRegion] {
        &self.table_regions
    }

    /// Raw text, if any. Empty text is still usable (it is simply low quality).
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Text for processing, or a `MalformedText` error describing why there is none.
    pub fn usable_text(&self) -> Result<&str, InputError> {
        self.text.as_deref().ok_or_else(|| InputError::MalformedText {
            document_id: self.document_id.clone(),
            reason: "text is null or not decodable".to_string(),
        })
    }

    /// Whether `offset` falls inside an upstream table/figure region.
    pub fn in_table_region(&self, offset: usize) -> bool {
        self.table_regions.iter().any(|r| r.contains(offset))
    }
}
