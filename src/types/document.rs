// src/types/document.rs
use serde::{Deserialize, Serialize};

/// A source document handed over by the upload/extraction layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub content: String,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub file_name: String,
    pub file_size: u64,
}

impl Document {
    /// Build a document whose size is the UTF-8 byte length of its content
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let file_size = content.len() as u64;

        Self {
            content,
            metadata: DocumentMetadata {
                file_name: file_name.into(),
                file_size,
            },
        }
    }
}
