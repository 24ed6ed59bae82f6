//! Native-messaging wire protocol: a frame is a 4-byte little-endian
//! unsigned length followed by that many bytes of UTF-8 JSON. No delimiter,
//! no checksum. Both directions use the same framing.

use std::io::{self, Read, Write};

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// One entry of a directory listing, using the extension's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "isDirectory")]
    pub is_directory: bool,
}

/// Response sent back over the wire. `success` is always present; the
/// remaining fields appear only when set, never as JSON null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn listing(files: Vec<FileEntry>) -> Self {
        Response {
            success: true,
            files: Some(files),
            path: None,
            error: None,
        }
    }

    pub fn with_path(path: String) -> Self {
        Response {
            success: true,
            files: None,
            path: Some(path),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Response {
            success: false,
            files: None,
            path: None,
            error: Some(error.into()),
        }
    }
}

/// Read one framed message. Returns `Ok(None)` on a clean end of stream
/// (no bytes before the prefix); a stream that closes mid-prefix or
/// mid-payload is a framing error, as is a payload that is not UTF-8 JSON.
/// The stream cannot be resynchronized after either, so callers must stop
/// reading on `Err`.
pub fn read_message<R: Read>(input: &mut R) -> Result<Option<Value>> {
    let mut prefix = [0u8; 4];
    if input.read(&mut prefix[..1])? == 0 {
        return Ok(None);
    }
    input.read_exact(&mut prefix[1..]).map_err(truncated("length prefix"))?;

    let length = u32::from_le_bytes(prefix) as usize;
    let mut payload = vec![0u8; length];
    input.read_exact(&mut payload).map_err(truncated("payload"))?;

    let text = String::from_utf8(payload)?;
    let message = serde_json::from_str(&text)?;
    log::debug!("read {} byte message", length);
    Ok(Some(message))
}

/// Write one framed message and flush, so the peer sees the response
/// without buffering delay.
pub fn write_message<W: Write, T: Serialize>(output: &mut W, message: &T) -> Result<()> {
    let payload = serde_json::to_vec(message)?;
    let length = u32::try_from(payload.len())
        .map_err(|_| Error::Frame(format!("{} byte payload exceeds frame limit", payload.len())))?;

    output.write_all(&length.to_le_bytes())?;
    output.write_all(&payload)?;
    output.flush()?;
    log::debug!("wrote {} byte message", length);
    Ok(())
}

fn truncated(what: &'static str) -> impl Fn(io::Error) -> Error {
    move |err| match err.kind() {
        io::ErrorKind::UnexpectedEof => Error::Frame(format!("stream closed inside {}", what)),
        _ => Error::Io(err),
    }
}
