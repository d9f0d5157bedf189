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

use objsign_crypto::{
    base64::DecodeError,
    raw_signature::{RawSignatureValidationError, RawSignerError, UnknownAlgorithmError},
    KeyMaterialError, SigningAlg,
};
use thiserror::Error;

/// `Error` enumerates errors returned by [`Signer`] and [`ObjectVerifier`]
/// operations.
///
/// Each variant corresponds to the stage at which the failure was detected.
/// None of them are transient, so retrying with the same inputs will fail
/// the same way.
///
/// [`Signer`]: crate::Signer
/// [`ObjectVerifier`]: crate::ObjectVerifier
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Required configuration was missing or could not be read.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The configured algorithm or key material could not be set up.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// A sign or verify call failed.
    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl Error {
    /// Return `true` if this is a [`ConfigurationError`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Return `true` if this is an [`InitializationError`].
    pub fn is_initialization(&self) -> bool {
        matches!(self, Self::Initialization(_))
    }

    /// Return `true` if this is an [`OperationError`].
    pub fn is_operation(&self) -> bool {
        matches!(self, Self::Operation(_))
    }
}

impl From<KeyMaterialError> for Error {
    fn from(err: KeyMaterialError) -> Self {
        Self::Configuration(ConfigurationError::InvalidKeyMaterial(err))
    }
}

/// Required configuration is absent or malformed.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// No private key was supplied to the [`Signer`].
    ///
    /// [`Signer`]: crate::Signer
    #[error("a private key is required for signing")]
    MissingPrivateKey,

    /// No signature algorithm was supplied.
    #[error("a signature algorithm is required")]
    MissingSignatureAlgorithm,

    /// Neither a public key nor a certificate was supplied to the
    /// [`ObjectVerifier`].
    ///
    /// [`ObjectVerifier`]: crate::ObjectVerifier
    #[error("a public key or a certificate is required for verification")]
    MissingVerificationKey,

    /// The settings could not be parsed or are incomplete.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// PEM key material in the settings could not be decoded.
    #[error(transparent)]
    InvalidKeyMaterial(#[from] KeyMaterialError),
}

/// The algorithm or key material could not be set up.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum InitializationError {
    /// The signature algorithm name is not recognized.
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithmError),

    /// The private key could not be used with the requested algorithm.
    #[error("private key can not be used for signing ({0})")]
    InvalidPrivateKey(RawSignerError),

    /// The public key could not be used with the requested algorithm.
    #[error("public key can not be used with {alg}")]
    InvalidPublicKey {
        /// Algorithm the key was checked against.
        alg: SigningAlg,
    },

    /// The certificate could not be parsed.
    #[error("certificate can not be used for verification ({0})")]
    InvalidCertificate(KeyMaterialError),
}

/// A sign or verify call failed.
///
/// A signature that simply does not match is not an error. In that case
/// [`ObjectVerifier::verify`] returns `Ok(false)`.
///
/// [`ObjectVerifier::verify`]: crate::ObjectVerifier::verify
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum OperationError {
    /// The signature could not be produced.
    #[error("unable to sign ({0})")]
    Signing(RawSignerError),

    /// The signature string is not valid Base64.
    #[error("signature is not valid Base64 ({0})")]
    InvalidBase64(DecodeError),

    /// The object could not be serialized.
    #[error("object could not be serialized to CBOR ({0})")]
    Serialization(String),

    /// The signature could not be checked.
    #[error("unable to verify ({0})")]
    Verification(RawSignatureValidationError),
}

/// A specialized `Result` type for signing and verification operations.
pub type Result<T> = std::result::Result<T, Error>;
