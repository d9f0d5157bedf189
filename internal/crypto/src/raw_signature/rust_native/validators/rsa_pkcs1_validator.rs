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
    pkcs1v15::{Signature, VerifyingKey},
    sha2::{Sha256, Sha384, Sha512},
    signature::Verifier,
};

use super::rsa_validator::{check_signature_len, rsa_public_key};
use crate::raw_signature::{RawSignatureValidationError, RawSignatureValidator};

/// An `RsaPkcs1Validator` can validate raw signatures with one of the
/// RSASSA-PKCS1-v1_5 signature algorithms (`SHA256withRSA` and friends).
pub(crate) enum RsaPkcs1Validator {
    Rs256,
    Rs384,
    Rs512,
}

impl RawSignatureValidator for RsaPkcs1Validator {
    fn validate(
        &self,
        sig: &[u8],
        data: &[u8],
        public_key: &[u8],
    ) -> Result<(), RawSignatureValidationError> {
        let public_key = rsa_public_key(public_key)?;
        check_signature_len(sig, &public_key)?;

        let signature: Signature = sig
            .try_into()
            .map_err(|_| RawSignatureValidationError::InvalidSignature)?;

        let result = match self {
            Self::Rs256 => VerifyingKey::<Sha256>::new(public_key).verify(data, &signature),
            Self::Rs384 => VerifyingKey::<Sha384>::new(public_key).verify(data, &signature),
            Self::Rs512 => VerifyingKey::<Sha512>::new(public_key).verify(data, &signature),
        };

        result.map_err(|_| RawSignatureValidationError::SignatureMismatch)
    }

    fn check_public_key(&self, public_key: &[u8]) -> Result<(), RawSignatureValidationError> {
        rsa_public_key(public_key).map(|_| ())
    }
}
