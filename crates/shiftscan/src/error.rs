use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Wrong ROM size: expected {expected:#x} bytes, got {actual:#x}")]
    RomSize { expected: usize, actual: usize },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("No valid search patterns")]
    NoValidPatterns,

    #[error("Invalid pattern token '{token}': {reason}")]
    Syntax { token: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check whether this error aborts the run before any scanning starts.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::RomSize { .. } | Error::NoValidPatterns | Error::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let err = Error::RomSize {
            expected: 0x100000,
            actual: 10,
        };
        assert!(err.is_fatal());
        assert!(Error::NoValidPatterns.is_fatal());

        assert!(!Error::InvalidPattern("0xxx".to_string()).is_fatal());
        assert!(
            !Error::Syntax {
                token: "[x]".to_string(),
                reason: "bad range".to_string(),
            }
            .is_fatal()
        );
    }

    #[test]
    fn test_rom_size_message_names_both_sizes() {
        let err = Error::RomSize {
            expected: 0x100000,
            actual: 10,
        };
        let message = err.to_string();
        assert!(message.contains("0x100000"));
        assert!(message.contains("0xa"));
    }
}
