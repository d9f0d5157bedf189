// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Loading signer and verifier configuration from TOML or JSON.
//!
//! A settings document has an optional `[signer]` section and an optional
//! `[verifier]` section. Key material is embedded as PEM text. See
//! [`Settings`].

/// Settings for configuring a [`Signer`][crate::Signer].
pub mod signer;
/// Settings for configuring an [`ObjectVerifier`][crate::ObjectVerifier].
pub mod verifier;

use std::path::Path;

use config::{Config, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};
use signer::SignerSettings;
use verifier::VerifierSettings;

use crate::{ConfigurationError, ObjectVerifier, Result, Signer};

const VERSION: u32 = 1;

// checks user supplied configuration before it is handed out
pub(crate) trait SettingsValidate {
    // returns error if settings are invalid
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Settings describing a signer and a verifier.
///
/// Settings are read from TOML or JSON. Key material is given as PEM text:
///
/// ```
/// # use objsign::settings::Settings;
/// # fn main() -> objsign::Result<()> {
/// let settings = Settings::from_toml(
///     r#"
/// [verifier]
/// alg = "ed25519"
/// public_key = """
/// -----BEGIN PUBLIC KEY-----
/// MCowBQYDK2VwAyEAgqzZq8KEYHOCsF3A2sgXKADOzuJG7yKA4Y2YSXCGad8=
/// -----END PUBLIC KEY-----
/// """
/// "#,
/// )?;
///
/// assert!(settings.signer.is_none());
/// assert_eq!(settings.verifier.unwrap().alg, "ed25519");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema), schemars(default))]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Version of the configuration.
    pub version: u32,
    /// Settings for building a [`Signer`], accessible via [`Settings::signer`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer: Option<SignerSettings>,
    /// Settings for building an [`ObjectVerifier`], accessible via
    /// [`Settings::verifier`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifier: Option<VerifierSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: VERSION,
            signer: None,
            verifier: None,
        }
    }
}

impl Settings {
    /// Create a new `Settings` instance with no signer or verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load [`Settings`] from a TOML string.
    pub fn from_toml(toml: &str) -> Result<Self> {
        Self::from_string(toml, "toml")
    }

    /// Load [`Settings`] from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_string(json, "json")
    }

    /// Load [`Settings`] from a file. The extension (`json` or `toml`)
    /// selects the format.
    pub fn from_file<P: AsRef<Path>>(settings_path: P) -> Result<Self> {
        let path = settings_path.as_ref();

        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ConfigurationError::InvalidSettings(
                    "settings file must have json or toml extension".into(),
                )
            })?;

        let setting_buf = std::fs::read(path).map_err(|e| {
            ConfigurationError::InvalidSettings(format!("unable to read {}: {e}", path.display()))
        })?;

        debug!("loading settings from {}", path.display());

        Self::from_string(&String::from_utf8_lossy(&setting_buf), ext)
    }

    /// Load [`Settings`] from a string representation of the configuration.
    /// Format of configuration must be supplied (json or toml).
    pub fn from_string(settings_str: &str, format: &str) -> Result<Self> {
        let f = file_format(format)?;

        let config = Config::builder()
            .add_source(config::File::from_str(settings_str, f))
            .build()
            .map_err(|e| ConfigurationError::InvalidSettings(e.to_string()))?;

        Self::from_config(config)
    }

    /// Sets a value at the specified path using the builder pattern.
    ///
    /// The path uses dot notation to navigate nested structures, for example
    /// `"signer.alg"` or `"verifier.public_key"`.
    ///
    /// ```
    /// # use objsign::settings::Settings;
    /// # fn main() -> objsign::Result<()> {
    /// let settings = Settings::from_toml(
    ///     r#"
    /// [verifier]
    /// alg = "ed25519"
    /// public_key = """
    /// -----BEGIN PUBLIC KEY-----
    /// MCowBQYDK2VwAyEAgqzZq8KEYHOCsF3A2sgXKADOzuJG7yKA4Y2YSXCGad8=
    /// -----END PUBLIC KEY-----
    /// """
    /// "#,
    /// )?
    /// .with_value("verifier.alg", "EdDSA")?;
    ///
    /// assert_eq!(settings.verifier.unwrap().alg, "EdDSA");
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_value<T: Into<config::Value>>(self, path: &str, value: T) -> Result<Self> {
        let config = Config::try_from(&self)
            .map_err(|e| ConfigurationError::InvalidSettings(e.to_string()))?;

        let updated_config = Config::builder()
            .add_source(config)
            .set_override(path, value)
            .map_err(|e| {
                ConfigurationError::InvalidSettings(format!("invalid path '{path}': {e}"))
            })?
            .build()
            .map_err(|e| ConfigurationError::InvalidSettings(e.to_string()))?;

        Self::from_config(updated_config)
    }

    /// Returns a [`Signer`] built from the `signer` section.
    ///
    /// If the section is missing this returns a [`ConfigurationError`].
    pub fn signer(&self) -> Result<Signer> {
        self.signer
            .as_ref()
            .ok_or_else(|| ConfigurationError::InvalidSettings("no [signer] section".into()))?
            .signer()
    }

    /// Returns an [`ObjectVerifier`] built from the `verifier` section.
    ///
    /// If the section is missing this returns a [`ConfigurationError`].
    pub fn verifier<T: Serialize + ?Sized>(&self) -> Result<ObjectVerifier<T>> {
        self.verifier
            .as_ref()
            .ok_or_else(|| ConfigurationError::InvalidSettings("no [verifier] section".into()))?
            .verifier()
    }

    fn from_config(config: Config) -> Result<Self> {
        let settings = config
            .try_deserialize::<Settings>()
            .map_err(|e| ConfigurationError::InvalidSettings(e.to_string()))?;

        settings.validate()?;

        Ok(settings)
    }
}

impl SettingsValidate for Settings {
    fn validate(&self) -> Result<()> {
        if self.version > VERSION {
            return Err(ConfigurationError::InvalidSettings(format!(
                "settings version {} is newer than supported version {VERSION}",
                self.version
            ))
            .into());
        }

        if let Some(signer) = &self.signer {
            signer.validate()?;
        }

        if let Some(verifier) = &self.verifier {
            verifier.validate()?;
        }

        Ok(())
    }
}

fn file_format(format: &str) -> Result<FileFormat> {
    match format.to_lowercase().as_str() {
        "json" => Ok(FileFormat::Json),
        "toml" => Ok(FileFormat::Toml),
        _ => Err(ConfigurationError::InvalidSettings(format!(
            "unsupported settings format '{format}'"
        ))
        .into()),
    }
}
