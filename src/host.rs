//! The message loop: read one framed request, dispatch it, write exactly one
//! framed response, repeat until the peer closes its end of the pipe.

use std::io::{Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::handlers;
use crate::protocol::{self, Response};
use crate::Result;

/// Run the host until end of stream. Each request is fully handled before
/// the next read begins; no state survives between iterations. Framing
/// errors abort the loop, since the byte stream cannot be resynchronized.
pub fn run<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    while let Some(request) = protocol::read_message(input)? {
        let response = dispatch(&request);
        protocol::write_message(output, &response)?;
    }
    log::info!("input stream closed, shutting down");
    Ok(())
}

/// Pick a handler from the request's `action` field. A missing or
/// unrecognized action gets an error response without touching any handler.
pub fn dispatch(request: &Value) -> Response {
    let action = request.get("action").and_then(Value::as_str);
    let path = request.get("path").and_then(Value::as_str);
    log::debug!("dispatching action {:?}", action);

    match action {
        Some("listDirectory") => match path {
            Some(path) => handlers::list_directory(Path::new(path)),
            None => match dirs::home_dir() {
                Some(home) => handlers::list_directory(&home),
                None => Response::failure("home directory could not be determined"),
            },
        },
        Some("saveText") => handlers::save_text(
            path,
            request.get("content").and_then(Value::as_str).unwrap_or(""),
            request.get("append").and_then(Value::as_bool).unwrap_or(false),
        ),
        Some("ensureDirectory") => handlers::ensure_directory(path),
        _ => Response::failure("Unknown action"),
    }
}
