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

use objsign_crypto::{Certificate, PublicKey};

/// Configuration for an [`ObjectVerifier`].
///
/// A public key or a certificate must be supplied, along with the signature
/// algorithm name. When both a public key and a certificate are present the
/// public key is used and the certificate is ignored.
///
/// [`ObjectVerifier`]: crate::ObjectVerifier
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VerifyBean {
    pub(crate) public_key: Option<PublicKey>,
    pub(crate) certificate: Option<Certificate>,
    pub(crate) signature_algorithm: Option<String>,
}

impl VerifyBean {
    /// Start building a `VerifyBean`.
    pub fn builder() -> VerifyBeanBuilder {
        VerifyBeanBuilder::default()
    }

    /// Public key used for verification.
    pub fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    /// Certificate whose subject public key is used for verification.
    pub fn certificate(&self) -> Option<&Certificate> {
        self.certificate.as_ref()
    }

    /// Signature algorithm name, as given.
    pub fn signature_algorithm(&self) -> Option<&str> {
        self.signature_algorithm.as_deref()
    }
}

/// Builder for [`VerifyBean`].
#[derive(Clone, Debug, Default)]
pub struct VerifyBeanBuilder {
    public_key: Option<PublicKey>,
    certificate: Option<Certificate>,
    signature_algorithm: Option<String>,
}

impl VerifyBeanBuilder {
    /// Set the public key.
    pub fn public_key(mut self, public_key: PublicKey) -> Self {
        self.public_key = Some(public_key);
        self
    }

    /// Set the certificate.
    pub fn certificate(mut self, certificate: Certificate) -> Self {
        self.certificate = Some(certificate);
        self
    }

    /// Set the signature algorithm name.
    pub fn signature_algorithm(mut self, alg: impl Into<String>) -> Self {
        self.signature_algorithm = Some(alg.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> VerifyBean {
        VerifyBean {
            public_key: self.public_key,
            certificate: self.certificate,
            signature_algorithm: self.signature_algorithm,
        }
    }
}
