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

use rsa::{
    pkcs8::DecodePublicKey,
    pss::{Signature, VerifyingKey},
    sha2::{Sha256, Sha384, Sha512},
    signature::Verifier,
    traits::PublicKeyParts,
    RsaPublicKey,
};

use crate::raw_signature::{RawSignatureValidationError, RawSignatureValidator};

/// An `RsaValidator` can validate raw signatures with one of the RSA-PSS
/// signature algorithms.
///
/// The salt length is expected to equal the digest length.
#[non_exhaustive]
pub enum RsaValidator {
    /// RSASSA-PSS using SHA-256 and MGF1 with SHA-256
    Ps256,

    /// RSASSA-PSS using SHA-384 and MGF1 with SHA-384
    Ps384,

    /// RSASSA-PSS using SHA-512 and MGF1 with SHA-512
    Ps512,
}

impl RawSignatureValidator for RsaValidator {
    fn validate(
        &self,
        sig: &[u8],
        data: &[u8],
        public_key: &[u8],
    ) -> Result<(), RawSignatureValidationError> {
        let public_key = rsa_public_key(public_key)?;
        check_signature_len(sig, &public_key)?;

        let signature =
            Signature::try_from(sig).map_err(|_| RawSignatureValidationError::InvalidSignature)?;

        let result = match self {
            Self::Ps256 => VerifyingKey::<Sha256>::new(public_key).verify(data, &signature),
            Self::Ps384 => VerifyingKey::<Sha384>::new(public_key).verify(data, &signature),
            Self::Ps512 => VerifyingKey::<Sha512>::new(public_key).verify(data, &signature),
        };

        result.map_err(|_| RawSignatureValidationError::SignatureMismatch)
    }

    fn check_public_key(&self, public_key: &[u8]) -> Result<(), RawSignatureValidationError> {
        rsa_public_key(public_key).map(|_| ())
    }
}

pub(crate) fn rsa_public_key(
    public_key: &[u8],
) -> Result<RsaPublicKey, RawSignatureValidationError> {
    RsaPublicKey::from_public_key_der(public_key)
        .map_err(|_| RawSignatureValidationError::InvalidPublicKey)
}

// An RSA signature is always exactly as long as the modulus.
pub(crate) fn check_signature_len(
    sig: &[u8],
    public_key: &RsaPublicKey,
) -> Result<(), RawSignatureValidationError> {
    if sig.len() != public_key.size() {
        return Err(RawSignatureValidationError::InvalidSignature);
    }

    Ok(())
}
