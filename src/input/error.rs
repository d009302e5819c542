//! Error types for terminal input.

use std::fmt;
use thiserror::Error;

/// Which prompt an input error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Selection,
    Quantity,
}

impl Field {
    fn range_message(&self) -> &'static str {
        match self {
            Field::Selection => "Pilihan item yang tidak valid.",
            Field::Quantity => "Nilai jumlah yang dimasukkan tidak valid.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Selection => f.write_str("pilihan"),
            Field::Quantity => f.write_str("jumlah"),
        }
    }
}

/// Errors raised while reading a selection or a quantity.
///
/// Both are reported to the user and abandon the current order line.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    /// The text is not made only of digits.
    #[error("Format {0} yang dimasukkan tidak valid.")]
    Format(Field),

    /// The number is outside the accepted bounds.
    #[error("{}", .0.range_message())]
    Range(Field),
}
