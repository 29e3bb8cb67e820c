//! Error types for CNPJ validation and generation.

use thiserror::Error;

/// Reasons a CNPJ is rejected.
///
/// Each variant carries a stable identifier (see [`ValidationError::code`])
/// that callers branch on. The `Display` text is a default English rendering
/// only; presentation is left to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing left after stripping punctuation and whitespace.
    #[error("CNPJ is missing")]
    Missing,

    /// The normalized form is not 14 characters long.
    #[error("CNPJ must have 14 characters, got {actual}")]
    BadLength { actual: usize },

    /// Root is not `[0-9A-Z]{8}` or branch/check digits are not `[0-9]{6}`.
    #[error("CNPJ contains invalid characters")]
    BadCharset,

    /// All 14 characters are the same.
    #[error("CNPJ cannot have all characters identical")]
    RepeatedChars,

    /// Supplied check digits differ from the computed ones.
    #[error("invalid check digits")]
    BadCheckDigits,

    /// A character reached the checksum without a table entry.
    ///
    /// Unreachable for input that passed the structural checks.
    #[error("no checksum value for character {character:?}")]
    TableLookupFault { character: char },
}

impl ValidationError {
    /// Returns the stable identifier for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            ValidationError::Missing => "MISSING",
            ValidationError::BadLength { .. } => "BAD_LENGTH",
            ValidationError::BadCharset => "BAD_CHARSET",
            ValidationError::RepeatedChars => "REPEATED_CHARS",
            ValidationError::BadCheckDigits => "BAD_CHECK_DIGITS",
            ValidationError::TableLookupFault { .. } => "TABLE_LOOKUP_FAULT",
        }
    }

    /// Returns true if this error came from the structural checks.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ValidationError::Missing
                | ValidationError::BadLength { .. }
                | ValidationError::BadCharset
                | ValidationError::RepeatedChars
        )
    }

    /// Returns true if this error is an internal consistency fault rather
    /// than a problem with the input.
    pub fn is_fault(&self) -> bool {
        matches!(self, ValidationError::TableLookupFault { .. })
    }
}

impl serde::Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

/// Errors that can occur when generating a CNPJ.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The supplied root is not exactly 8 characters.
    #[error("root must have 8 characters, got {actual}")]
    InvalidRootLength { actual: usize },

    /// The supplied root contains a character outside `0-9A-Z`.
    #[error("root contains invalid character {character:?}")]
    InvalidRootCharacter { character: char },

    /// The branch does not fit in 4 digits.
    #[error("branch must be between 0 and 9999, got {branch}")]
    BranchOutOfRange { branch: u16 },

    /// The root and branch can only produce 14 identical characters.
    #[error("root and branch produce a CNPJ with all characters identical")]
    Degenerate,

    /// The checksum could not be computed.
    #[error("checksum failed: {0}")]
    Checksum(#[from] ValidationError),
}

impl GenerateError {
    /// Returns true if this error was caused by the supplied options.
    pub fn is_option_error(&self) -> bool {
        !matches!(self, GenerateError::Checksum(_))
    }
}
