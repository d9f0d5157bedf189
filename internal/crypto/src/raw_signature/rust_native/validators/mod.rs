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

//! This module binds Rust native logic for validating raw signatures to this
//! crate's [`RawSignatureValidator`] trait.

use crate::raw_signature::{RawSignatureValidator, SigningAlg};

mod ecdsa_validator;
pub(crate) use ecdsa_validator::EcdsaValidator;

mod ed25519_validator;
pub(crate) use ed25519_validator::Ed25519Validator;

mod rsa_pkcs1_validator;
pub(crate) use rsa_pkcs1_validator::RsaPkcs1Validator;

mod rsa_validator;
pub(crate) use rsa_validator::RsaValidator;

/// Return a validator for the given signing algorithm.
pub(crate) fn validator_for_signing_alg(
    alg: SigningAlg,
) -> Box<dyn RawSignatureValidator + Send + Sync> {
    match alg {
        SigningAlg::Ed25519 => Box::new(Ed25519Validator {}),
        SigningAlg::Rs256 => Box::new(RsaPkcs1Validator::Rs256),
        SigningAlg::Rs384 => Box::new(RsaPkcs1Validator::Rs384),
        SigningAlg::Rs512 => Box::new(RsaPkcs1Validator::Rs512),
        SigningAlg::Ps256 => Box::new(RsaValidator::Ps256),
        SigningAlg::Ps384 => Box::new(RsaValidator::Ps384),
        SigningAlg::Ps512 => Box::new(RsaValidator::Ps512),
        SigningAlg::Es256 => Box::new(EcdsaValidator::Es256),
        SigningAlg::Es384 => Box::new(EcdsaValidator::Es384),
        SigningAlg::Es512 => Box::new(EcdsaValidator::Es512),
    }
}
