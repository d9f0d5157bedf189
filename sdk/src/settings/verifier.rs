// Copyright 2025 Adobe. All rights reserved.
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

use log::debug;
use objsign_crypto::{Certificate, PublicKey};
use serde::{Deserialize, Serialize};

use crate::{settings::SettingsValidate, ConfigurationError, ObjectVerifier, Result, VerifyBean};

/// Settings for configuring an [`ObjectVerifier`].
///
/// At least one of `public_key` and `certificate` must be present. If both
/// are present the public key is used and the certificate is not decoded.
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VerifierSettings {
    /// Algorithm the signatures were made with.
    pub alg: String,
    /// Public key used for verification (PEM format).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// Certificate whose subject public key is used for verification (PEM
    /// format).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

impl VerifierSettings {
    /// Decode the key material and return the matching [`VerifyBean`].
    pub fn verify_bean(&self) -> Result<VerifyBean> {
        let mut builder = VerifyBean::builder().signature_algorithm(self.alg.as_str());

        match (&self.public_key, &self.certificate) {
            (Some(pem), certificate) => {
                if certificate.is_some() {
                    debug!("verifier settings: certificate ignored, public key present");
                }
                builder = builder.public_key(PublicKey::from_pem(pem)?);
            }
            (None, Some(pem)) => {
                builder = builder.certificate(Certificate::from_pem(pem)?);
            }
            (None, None) => {}
        }

        Ok(builder.build())
    }

    /// Returns an [`ObjectVerifier`] built from these settings.
    pub fn verifier<T: Serialize + ?Sized>(&self) -> Result<ObjectVerifier<T>> {
        ObjectVerifier::new(self.verify_bean()?)
    }
}

impl SettingsValidate for VerifierSettings {
    fn validate(&self) -> Result<()> {
        if self.alg.is_empty() {
            return Err(ConfigurationError::MissingSignatureAlgorithm.into());
        }

        if self.public_key.is_none() && self.certificate.is_none() {
            return Err(ConfigurationError::MissingVerificationKey.into());
        }

        self.verify_bean().map(|_| ())
    }
}
