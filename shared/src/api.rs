use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Both clipboard representations of a signature.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderedSignature {
    pub html: String,
    pub text: String,
}
