use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A request parameter was rejected before any network call was made
    Validation,
    /// The underlying HTTP execution failed (DNS, connection, timeout)
    Transport,
    /// The response body could not be parsed into the expected record
    Decode,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn transport(method: Method, path: &str, source: reqwest::Error) -> Self {
        Transport {
            method,
            path: path.to_owned(),
            source,
        }
        .into()
    }

    pub fn decode(path: &str, source: serde_json::Error) -> Self {
        Decode {
            path: path.to_owned(),
            source,
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// A parameter fell outside its allowed inclusive range.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct OutOfRange {
    /// Name of the rejected parameter
    pub name: String,
    pub value: String,
    pub min: String,
    pub max: String,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: invalid value {}, must be within range [{}, {}]",
            self.name, self.value, self.min, self.max
        )
    }
}

impl StdError for OutOfRange {}

impl From<OutOfRange> for Error {
    fn from(err: OutOfRange) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

/// A parameter was not a member of its allowed enumeration.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct NotAllowed {
    /// Name of the rejected parameter
    pub name: String,
    pub value: String,
    pub allowed: Vec<String>,
}

impl fmt::Display for NotAllowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: invalid value {}, allowed values are: {}",
            self.name,
            self.value,
            self.allowed.join(", ")
        )
    }
}

impl StdError for NotAllowed {}

impl From<NotAllowed> for Error {
    fn from(err: NotAllowed) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

/// A cross-field request constraint was violated.
#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

/// An HTTP call failed at the network level.
///
/// Non-2xx responses are not transport failures; the response body is handed
/// back as-is and only fails later if it cannot be decoded.
#[non_exhaustive]
#[derive(Debug)]
pub struct Transport {
    pub method: Method,
    pub path: String,
    pub source: reqwest::Error,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error making {} call to {}: {}",
            self.method, self.path, self.source
        )
    }
}

impl StdError for Transport {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl From<Transport> for Error {
    fn from(err: Transport) -> Self {
        Error::with_source(Kind::Transport, err)
    }
}

/// A response body did not match the expected record shape.
#[non_exhaustive]
#[derive(Debug)]
pub struct Decode {
    pub path: String,
    pub source: serde_json::Error,
}

impl fmt::Display for Decode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse response from {}: {}",
            self.path, self.source
        )
    }
}

impl StdError for Decode {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl From<Decode> for Error {
    fn from(err: Decode) -> Self {
        Error::with_source(Kind::Decode, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Transport, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Transport, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Decode, e)
    }
}
