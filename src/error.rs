use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Frame(String),
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Frame(msg) => write!(f, "Framing error: {}", msg),
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_error = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));
        assert!(io_error.to_string().contains("IO error"));

        let frame_error = Error::Frame("stream closed mid-payload".to_string());
        assert_eq!(frame_error.to_string(), "Framing error: stream closed mid-payload");

        let decode_error = Error::Decode("invalid utf-8".to_string());
        assert_eq!(decode_error.to_string(), "Decode error: invalid utf-8");
    }

    #[test]
    fn test_error_from_conversions() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let error: Error = io_err.into();
        assert!(matches!(error, Error::Io(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error: Error = json_err.into();
        assert!(matches!(error, Error::Decode(_)));

        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error: Error = utf8_err.into();
        assert!(matches!(error, Error::Decode(_)));
    }
}
