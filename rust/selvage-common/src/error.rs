use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn capacity_exceeded(what: impl Into<String>, capacity: usize) -> Error {
        Error(
            ErrorKind::CapacityExceeded {
                what: what.into(),
                capacity,
            }
            .into(),
        )
    }

    pub fn out_of_memory(size: usize) -> Error {
        Error(ErrorKind::OutOfMemory { size }.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid format for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("invalid decimal number '{text}'")]
    InvalidDecimal { text: String },

    #[error("invalid hex digit 0x{byte:02x} at offset {offset}")]
    InvalidHexDigit { offset: usize, byte: u8 },

    #[error("{what} too long: exceeds {capacity} bytes")]
    CapacityExceeded { what: String, capacity: usize },

    #[error("low memory: failed to allocate {size} bytes")]
    OutOfMemory { size: usize },

    #[error("unknown hash kind '{name}'")]
    UnknownHashKind { name: String },

    #[error("digest mismatch for '{element}'")]
    DigestMismatch { element: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}
