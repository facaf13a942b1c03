//! Core configuration for conversion runs.
//!
//! Instances of `CoreConfig` are created by the front-end (kanimal-gui) and
//! passed to `process_selection` to control command assembly and execution.

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a conversion run.
///
/// All fields are optional overrides; the defaults reproduce the converter's
/// stock invocation (platform executable name, `output/<first file stem>`).
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    /// Override for the converter executable. `None` uses the platform
    /// default (`kanimal-cli.exe` on Windows, `./kanimal-cli` elsewhere).
    pub converter: Option<PathBuf>,

    /// Directory passed to the converter via `-o`. `None` derives
    /// `output/<stem>` from the first selected file.
    pub output_dir: Option<PathBuf>,

    /// Wait limit for the converter process. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl CoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the configured overrides for obviously unusable values.
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(converter) = &self.converter {
            if converter.as_os_str().is_empty() {
                return Err(CoreError::PathError(
                    "Converter path must not be empty".to_string(),
                ));
            }
        }
        if let Some(output_dir) = &self.output_dir {
            if output_dir.as_os_str().is_empty() {
                return Err(CoreError::PathError(
                    "Output directory must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(CoreConfig::new().validate().is_ok());
    }

    #[test]
    fn test_empty_converter_rejected() {
        let config = CoreConfig {
            converter: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::PathError(_))
        ));
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let config = CoreConfig {
            output_dir: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
