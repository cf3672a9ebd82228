use crate::error::ScanError;

/// The largest pattern length the scanner accepts, per the external
/// interface contract (spec §6).
pub const MAX_PATTERN_LEN: usize = 4096;

/// An opaque byte pattern to search for.<br><br>
///
/// Unlike an AOB signature, a `Pattern` has no wildcard bytes: every byte is
/// matched exactly. This is the main type you pass to [`scan`](crate::scan)
/// and friends, and you can create it directly or through
/// [`PatternBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub(crate) bytes: Vec<u8>,
}

impl Pattern {
    /// Creates a pattern from a raw byte sequence.<br><br>
    ///
    /// # Arguments
    /// * `bytes` - The bytes to search for.
    ///
    /// # Errors
    /// * `ScanError::InvalidArgument` - The pattern is empty or longer than
    ///   [`MAX_PATTERN_LEN`] bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ScanError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(ScanError::InvalidArgument(
                "the pattern cannot be empty".to_string(),
            ));
        }
        if bytes.len() > MAX_PATTERN_LEN {
            return Err(ScanError::InvalidArgument(format!(
                "the pattern cannot be longer than {} bytes",
                MAX_PATTERN_LEN
            )));
        }

        Ok(Self { bytes })
    }

    /// The number of bytes in the pattern.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the pattern contains any bytes. Always `false` for a
    /// successfully constructed `Pattern` — kept for API completeness
    /// alongside [`Pattern::len`].
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the pattern's bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for Pattern {
    /// Formats the pattern as a string of space-separated hexadecimal bytes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ ")?;
        for byte in &self.bytes {
            write!(f, "{:02X} ", byte)?;
        }
        write!(f, "]")
    }
}

/// Builder for the [`Pattern`] type, mirroring the ergonomics of building a
/// validated value from one of a few common textual representations.
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder;

impl PatternBuilder {
    /// Creates a pattern from a string of non-spaced, case-insensitive hex
    /// bytes (e.g. `"488b0500"`).<br><br>
    ///
    /// # Errors
    /// * `ScanError::InvalidArgument` - The string is empty, has an odd
    ///   length, or contains non-hexadecimal characters.
    pub fn from_hex_string(pattern: &str) -> Result<Pattern, ScanError> {
        if pattern.is_empty() {
            return Err(ScanError::InvalidArgument(
                "the pattern cannot be empty".to_string(),
            ));
        }
        if pattern.len() % 2 != 0 {
            return Err(ScanError::InvalidArgument(
                "the pattern must have an even number of characters".to_string(),
            ));
        }

        let mut bytes = Vec::with_capacity(pattern.len() / 2);
        for pair in pattern.as_bytes().chunks(2) {
            let pair_str = std::str::from_utf8(pair).map_err(|_| {
                ScanError::InvalidArgument("the pattern contains an invalid character".to_string())
            })?;
            let byte = u8::from_str_radix(pair_str, 16).map_err(|err| {
                ScanError::InvalidArgument(format!("invalid hex byte '{}': {}", pair_str, err))
            })?;
            bytes.push(byte);
        }

        Pattern::new(bytes)
    }

    /// Creates a pattern from a UTF-8 string's raw bytes, with no escaping
    /// or interpretation beyond the encoding itself.
    pub fn from_text(pattern: &str) -> Result<Pattern, ScanError> {
        Pattern::new(pattern.as_bytes().to_vec())
    }
}
