//! # Receipt
//!
//! Totals, the printed receipt, and the base64-encoded order summary.

pub mod error;

pub use error::*;

use base64::{engine::general_purpose, Engine as _};
use tokio::io::AsyncWrite;
use tracing::{debug, info};

use crate::model::{OrderLine, OrderList};
use crate::terminal::write_line;

/// Sum of `unit_price × quantity` over all lines.
pub fn total<'a>(lines: impl IntoIterator<Item = &'a OrderLine>) -> f64 {
    lines.into_iter().map(OrderLine::line_total).sum()
}

/// The text that gets encoded: list representation followed by the total.
pub fn summary(list: &OrderList, total: f64) -> String {
    format!("Pesanan: {}\nTotal Harga: Rp{:.2}", list, total)
}

pub fn encode_summary(summary: &str) -> String {
    general_purpose::STANDARD.encode(summary.as_bytes())
}

pub fn decode_summary(encoded: &str) -> Result<String, ReceiptError> {
    let bytes = general_purpose::STANDARD.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}

/// What [`ReceiptAggregator::render`] printed.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub total: f64,
    pub summary: String,
    pub encoded: String,
}

/// Prints the receipt for a finalized order list.
pub struct ReceiptAggregator;

impl ReceiptAggregator {
    /// Writes one line per order, the grand total, and the encoded summary.
    pub async fn render<W>(list: &OrderList, output: &mut W) -> std::io::Result<Receipt>
    where
        W: AsyncWrite + Unpin,
    {
        let mut grand_total = 0.0;
        for line in list {
            let line_total = line.line_total();
            grand_total += line_total;
            write_line(
                output,
                &format!(
                    "Item: {}, Jumlah: {}, Total: Rp.{:.2}",
                    line.name, line.quantity, line_total
                ),
            )
            .await?;
        }
        write_line(output, &format!("Total Harga: Rp{:.2}", grand_total)).await?;

        let summary = summary(list, grand_total);
        let encoded = encode_summary(&summary);
        debug!(%summary, "Encoded summary");
        write_line(output, &format!("Pesanan Terencoded: {}", encoded)).await?;

        info!(lines = list.len(), total = grand_total, "Receipt printed");
        Ok(Receipt {
            total: grand_total,
            summary,
            encoded,
        })
    }
}
