use std::io;
use std::str::Utf8Error;

/// Failures at the edges of the engine. Parsing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidUtf8 { offset: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<Utf8Error> for Error {
    fn from(err: Utf8Error) -> Self {
        Error::InvalidUtf8 {
            offset: err.valid_up_to(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn utf8_offset_is_reported() {
        let bytes = b"ok\xffno";
        let err: Error = std::str::from_utf8(bytes).unwrap_err().into();
        assert!(matches!(err, Error::InvalidUtf8 { offset: 2 }));
        assert_eq!(
            err.to_string(),
            "input is not valid UTF-8 (first bad byte at offset 2)"
        );
    }
}
