use std::borrow::Cow;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

/// Qualifier recorded for resource variants that declare no configuration.
pub const DEFAULT_RESOURCE_CONFIG: &str = "(default)";

/// Map of configuration qualifier (e.g. `hdpi-v4`) to the resource path inside the package.
///
/// A `BTreeMap` keeps iteration deterministic, so two resolutions of the same dump compare equal
/// and print identically.
pub type IconConfigMap = BTreeMap<String, String>;

/// Errors surfaced while handling resource dumps and finder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The dump text is not valid UTF-8; bytes after `valid_up_to` could not be decoded.
    InvalidEncoding { valid_up_to: usize },
    /// The configured resource finder name is not one we know about.
    UnknownResourceFinder(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::InvalidEncoding { valid_up_to } => {
                write!(f, "invalid byte sequence in UTF-8 after byte {valid_up_to}")
            }
            ResourceError::UnknownResourceFinder(name) => write!(f, "{name} is unknown"),
        }
    }
}

impl Error for ResourceError {}

impl From<std::str::Utf8Error> for ResourceError {
    fn from(value: std::str::Utf8Error) -> Self {
        ResourceError::InvalidEncoding {
            valid_up_to: value.valid_up_to(),
        }
    }
}

/// Raw standard output of a `dump resources` invocation.
///
/// The tool prints whatever the resource table holds, so the bytes are not guaranteed to be
/// UTF-8. [`DumpText::as_str`] decodes strictly, [`DumpText::scrub`] replaces bad sequences.
///
/// # Examples
///
/// ```
/// use android_apk::types::DumpText;
///
/// let mut bytes = b"  resource 0x7f010000 mipmap/ic_launcher\n".to_vec();
/// bytes.push(0xFF);
/// let dump = DumpText::from_bytes(bytes);
///
/// assert!(dump.as_str().is_err());
/// assert!(dump.scrub().contains("mipmap/ic_launcher"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DumpText {
    bytes: Vec<u8>,
}

impl DumpText {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        DumpText { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Strict view of the dump, failing on the first invalid UTF-8 sequence.
    pub fn as_str(&self) -> Result<&str, ResourceError> {
        Ok(std::str::from_utf8(&self.bytes)?)
    }

    /// Lossy view of the dump. Invalid sequences become U+FFFD, valid text is borrowed as is.
    pub fn scrub(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl From<&str> for DumpText {
    fn from(value: &str) -> Self {
        DumpText::from_bytes(value.as_bytes().to_vec())
    }
}

impl From<String> for DumpText {
    fn from(value: String) -> Self {
        DumpText::from_bytes(value.into_bytes())
    }
}

impl From<Vec<u8>> for DumpText {
    fn from(value: Vec<u8>) -> Self {
        DumpText::from_bytes(value)
    }
}
