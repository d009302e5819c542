//! Line-oriented helpers over tokio's async I/O traits.
//!
//! Every user-facing component writes through these so the same code drives a
//! real terminal and the in-memory buffers used by tests.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Reads one line and trims surrounding whitespace.
///
/// Bytes that are not UTF-8 become replacement characters, so they reach the
/// validators as ordinary bad input. Returns `None` once the input is exhausted.
pub async fn read_line<R>(input: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let read = input.read_until(b'\n', &mut buf).await?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

/// Writes a prompt without a trailing newline and flushes it.
pub async fn prompt<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

pub async fn write_line<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
