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

use std::{fmt, marker::PhantomData};

use log::{debug, trace, warn};
use objsign_crypto::{
    base64,
    raw_signature::{
        validator_for_signing_alg, RawSignatureValidationError, RawSignatureValidator,
    },
    Certificate, PublicKey, SigningAlg,
};
use serde::Serialize;

use crate::{
    serializer, ConfigurationError, InitializationError, OperationError, Result, VerifyBean,
};

/// The key an [`ObjectVerifier`] checks signatures against.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VerificationKey {
    /// A public key supplied directly.
    PublicKey(PublicKey),

    /// A certificate, along with the subject public key taken from it.
    Certificate {
        /// The certificate as supplied.
        certificate: Certificate,

        /// Subject public key of `certificate`.
        public_key: PublicKey,
    },
}

impl VerificationKey {
    /// Return the public key used for verification.
    pub fn public_key(&self) -> &PublicKey {
        match self {
            Self::PublicKey(public_key) => public_key,
            Self::Certificate { public_key, .. } => public_key,
        }
    }

    fn resolve(public_key: Option<PublicKey>, certificate: Option<Certificate>) -> Result<Self> {
        match (public_key, certificate) {
            (Some(public_key), certificate) => {
                if certificate.is_some() {
                    warn!("public key and certificate both supplied; using the public key");
                }
                Ok(Self::PublicKey(public_key))
            }

            (None, Some(certificate)) => {
                let public_key = certificate
                    .public_key()
                    .map_err(InitializationError::InvalidCertificate)?;

                if let Ok(subject) = certificate.subject() {
                    debug!("verifying with certificate for {subject}");
                }

                Ok(Self::Certificate {
                    certificate,
                    public_key,
                })
            }

            (None, None) => Err(ConfigurationError::MissingVerificationKey.into()),
        }
    }
}

/// Verifies Base64 signatures over serialized objects of type `T`.
///
/// The verification key and algorithm are resolved once, in
/// [`ObjectVerifier::new`]. Verification keeps no state between calls, so an
/// `ObjectVerifier` can be shared between threads.
pub struct ObjectVerifier<T: ?Sized> {
    key: VerificationKey,
    validator: Box<dyn RawSignatureValidator + Send + Sync>,
    alg: SigningAlg,
    _object: PhantomData<fn(&T)>,
}

impl<T: Serialize + ?Sized> ObjectVerifier<T> {
    /// Build an `ObjectVerifier` from a [`VerifyBean`].
    ///
    /// Returns a [`ConfigurationError`] if neither a public key nor a
    /// certificate is supplied or if the algorithm is missing. Returns an
    /// [`InitializationError`] if the algorithm is not recognized, the
    /// certificate can not be parsed, or the key does not fit the algorithm.
    pub fn new(bean: VerifyBean) -> Result<Self> {
        let VerifyBean {
            public_key,
            certificate,
            signature_algorithm,
        } = bean;

        if public_key.is_none() && certificate.is_none() {
            return Err(ConfigurationError::MissingVerificationKey.into());
        }

        let alg_name = signature_algorithm.ok_or(ConfigurationError::MissingSignatureAlgorithm)?;

        let alg: SigningAlg = alg_name
            .parse()
            .map_err(InitializationError::UnknownAlgorithm)?;

        let validator = validator_for_signing_alg(alg);

        let key = VerificationKey::resolve(public_key, certificate)?;

        validator
            .check_public_key(key.public_key().as_der())
            .map_err(|_| InitializationError::InvalidPublicKey { alg })?;

        debug!("verifier ready: alg = {alg} (from {alg_name:?})");

        Ok(Self {
            key,
            validator,
            alg,
            _object: PhantomData,
        })
    }

    /// Return `true` if `signature` is a valid Base64 encoded signature over
    /// the serialized form of `object`.
    ///
    /// A signature that does not match returns `Ok(false)`. A signature that
    /// is not valid Base64, or that can not be checked at all, is an
    /// [`OperationError`].
    pub fn verify(&self, object: &T, signature: &str) -> Result<bool> {
        let data = serializer::to_bytes(object)?;
        self.verify_bytes(&data, signature)
    }
}

impl<T: ?Sized> ObjectVerifier<T> {
    /// Return `true` if `signature` is a valid Base64 encoded signature over
    /// `data`.
    pub fn verify_bytes(&self, data: &[u8], signature: &str) -> Result<bool> {
        let signature = base64::decode(signature).map_err(OperationError::InvalidBase64)?;

        trace!(
            "verifying {} byte signature over {} bytes with {}",
            signature.len(),
            data.len(),
            self.alg
        );

        match self
            .validator
            .validate(&signature, data, self.key.public_key().as_der())
        {
            Ok(()) => Ok(true),
            Err(RawSignatureValidationError::SignatureMismatch) => Ok(false),
            Err(err) => Err(OperationError::Verification(err).into()),
        }
    }

    /// Return the key that signatures are checked against.
    pub fn verification_key(&self) -> &VerificationKey {
        &self.key
    }

    /// Return the signature algorithm.
    pub fn algorithm(&self) -> SigningAlg {
        self.alg
    }
}

impl<T: ?Sized> fmt::Debug for ObjectVerifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectVerifier")
            .field("key", &self.key)
            .field("alg", &self.alg)
            .finish_non_exhaustive()
    }
}
