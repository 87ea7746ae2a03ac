/// Document input errors. Reported per document, never fatal to a batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("document {document_id} has no usable text: {reason}")]
    MalformedText { document_id: String, reason: String },
}
