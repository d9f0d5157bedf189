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

use objsign_crypto::PrivateKey;
use serde::{Deserialize, Serialize};

use crate::{settings::SettingsValidate, ConfigurationError, Result, SignatureBean, Signer};

/// Settings for configuring a [`Signer`].
///
/// A [`Signer`] can be obtained by calling [`SignerSettings::signer`] or
/// [`Settings::signer`].
///
/// [`Settings::signer`]: crate::settings::Settings::signer
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SignerSettings {
    /// Algorithm to use for signing, either a short name (`ps256`) or a JCA
    /// name (`SHA256withRSA/PSS`).
    pub alg: String,
    /// Private key used for signing (PKCS#8 PEM format).
    pub private_key: String,
}

impl SignerSettings {
    /// Decode the private key and return the matching [`SignatureBean`].
    pub fn signature_bean(&self) -> Result<SignatureBean> {
        let private_key = PrivateKey::from_pem(&self.private_key)?;

        Ok(SignatureBean::builder()
            .private_key(private_key)
            .signature_algorithm(self.alg.as_str())
            .build())
    }

    /// Returns a [`Signer`] built from these settings.
    pub fn signer(&self) -> Result<Signer> {
        Signer::new(self.signature_bean()?)
    }
}

impl SettingsValidate for SignerSettings {
    fn validate(&self) -> Result<()> {
        if self.alg.is_empty() {
            return Err(ConfigurationError::MissingSignatureAlgorithm.into());
        }

        self.signature_bean().map(|_| ())
    }
}
