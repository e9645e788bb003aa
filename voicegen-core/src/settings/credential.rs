use std::fmt;

/// Environment variable consulted before the settings file
pub const API_KEY_ENV: &str = "ELEVEN_API_KEY";

/// The ElevenLabs API key. Established once at startup and only ever read
/// afterwards; `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for keys that are empty once trimmed
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_rejected() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   \n").is_none());
    }

    #[test]
    fn test_key_is_trimmed_and_redacted() {
        let credential = Credential::new("  sk_test \n").unwrap();
        assert_eq!(credential.expose(), "sk_test");
        assert_eq!(format!("{credential:?}"), "Credential(****)");
    }
}
