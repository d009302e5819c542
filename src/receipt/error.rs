//! Error types for receipt encoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Decoded payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
