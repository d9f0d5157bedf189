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

use ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::{Signature as P256Signature, VerifyingKey as P256VerifyingKey};
use p384::ecdsa::{Signature as P384Signature, VerifyingKey as P384VerifyingKey};
use p521::{
    ecdsa::{Signature as P521Signature, VerifyingKey as P521VerifyingKey},
    PublicKey as P521PublicKey,
};
use pkcs8::DecodePublicKey;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::raw_signature::{RawSignatureValidationError, RawSignatureValidator};

/// An `EcdsaValidator` can validate raw signatures with one of the ECDSA
/// signature algorithms.
///
/// Both the fixed-size IEEE P1363 (`r || s`) form and the ASN.1 DER form of
/// the signature are accepted.
pub enum EcdsaValidator {
    /// ECDSA over P-256 with SHA-256
    Es256,

    /// ECDSA over P-384 with SHA-384
    Es384,

    /// ECDSA over P-521 with SHA-512
    Es512,
}

impl RawSignatureValidator for EcdsaValidator {
    fn validate(
        &self,
        sig: &[u8],
        data: &[u8],
        public_key: &[u8],
    ) -> Result<(), RawSignatureValidationError> {
        let result = match self {
            EcdsaValidator::Es256 => {
                let vk = P256VerifyingKey::from_public_key_der(public_key)
                    .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?;

                let signature = P256Signature::from_der(sig)
                    .or_else(|_| P256Signature::from_slice(sig))
                    .map_err(|_| RawSignatureValidationError::InvalidSignature)?;

                vk.verify_prehash(&Sha256::digest(data), &signature)
            }
            EcdsaValidator::Es384 => {
                let vk = P384VerifyingKey::from_public_key_der(public_key)
                    .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?;

                let signature = P384Signature::from_der(sig)
                    .or_else(|_| P384Signature::from_slice(sig))
                    .map_err(|_| RawSignatureValidationError::InvalidSignature)?;

                vk.verify_prehash(&Sha384::digest(data), &signature)
            }
            EcdsaValidator::Es512 => {
                let vk = p521_verifying_key(public_key)?;

                let signature = P521Signature::from_der(sig)
                    .or_else(|_| P521Signature::from_slice(sig))
                    .map_err(|_| RawSignatureValidationError::InvalidSignature)?;

                vk.verify_prehash(&Sha512::digest(data), &signature)
            }
        };

        result.map_err(|_| RawSignatureValidationError::SignatureMismatch)
    }

    fn check_public_key(&self, public_key: &[u8]) -> Result<(), RawSignatureValidationError> {
        match self {
            EcdsaValidator::Es256 => P256VerifyingKey::from_public_key_der(public_key)
                .map(|_| ())
                .map_err(|_| RawSignatureValidationError::InvalidPublicKey),
            EcdsaValidator::Es384 => P384VerifyingKey::from_public_key_der(public_key)
                .map(|_| ())
                .map_err(|_| RawSignatureValidationError::InvalidPublicKey),
            EcdsaValidator::Es512 => p521_verifying_key(public_key).map(|_| ()),
        }
    }
}

// from_public_key_der is not implemented for P521VerifyingKey so load it
// through the generic public key.
fn p521_verifying_key(
    public_key: &[u8],
) -> Result<P521VerifyingKey, RawSignatureValidationError> {
    let pk = P521PublicKey::from_public_key_der(public_key)
        .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?;

    P521VerifyingKey::from_sec1_bytes(&pk.to_sec1_bytes())
        .map_err(|_| RawSignatureValidationError::InvalidPublicKey)
}
