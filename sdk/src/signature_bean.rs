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

/// Configuration for a [`Signer`]: the private key and the name of the
/// signature algorithm.
///
/// Both fields are required by [`Signer::new`]. The bean itself accepts
/// missing values so that the error is reported, as a
/// [`ConfigurationError`], at the point where the signer is built.
///
/// ```
/// use objsign::{PrivateKey, SignatureBean};
///
/// let bean = SignatureBean::builder()
///     .private_key(PrivateKey::from_der(b"PKCS#8 DER".to_vec()))
///     .signature_algorithm("SHA256withRSA")
///     .build();
///
/// assert_eq!(bean.signature_algorithm(), Some("SHA256withRSA"));
/// ```
///
/// [`Signer`]: crate::Signer
/// [`Signer::new`]: crate::Signer::new
/// [`ConfigurationError`]: crate::ConfigurationError
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SignatureBean {
    pub(crate) private_key: Option<PrivateKey>,
    pub(crate) signature_algorithm: Option<String>,
}

impl SignatureBean {
    /// Start building a `SignatureBean`.
    pub fn builder() -> SignatureBeanBuilder {
        SignatureBeanBuilder::default()
    }

    /// Private key used for signing.
    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.private_key.as_ref()
    }

    /// Signature algorithm name, as given.
    pub fn signature_algorithm(&self) -> Option<&str> {
        self.signature_algorithm.as_deref()
    }
}

/// Builder for [`SignatureBean`].
#[derive(Clone, Debug, Default)]
pub struct SignatureBeanBuilder {
    private_key: Option<PrivateKey>,
    signature_algorithm: Option<String>,
}

impl SignatureBeanBuilder {
    /// Set the private key.
    pub fn private_key(mut self, private_key: PrivateKey) -> Self {
        self.private_key = Some(private_key);
        self
    }

    /// Set the signature algorithm, either as a short name such as `ps256`
    /// or a JCA name such as `SHA256withRSA`.
    pub fn signature_algorithm(mut self, alg: impl Into<String>) -> Self {
        self.signature_algorithm = Some(alg.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> SignatureBean {
        SignatureBean {
            private_key: self.private_key,
            signature_algorithm: self.signature_algorithm,
        }
    }
}
