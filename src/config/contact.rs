//! Contact identity configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Contact identity returned in every success envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Official email address reported by the API
    #[serde(default = "default_official_email")]
    pub official_email: String,
}

impl ContactConfig {
    /// Validate contact configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.official_email.is_empty() || !self.official_email.contains('@') {
            return Err(ValidationError::InvalidOfficialEmail);
        }
        Ok(())
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            official_email: default_official_email(),
        }
    }
}

fn default_official_email() -> String {
    "your.email@chitkara.edu.in".to_string()
}
