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
    pkcs1v15,
    pkcs8::DecodePrivateKey,
    pss,
    sha2::{Sha256, Sha384, Sha512},
    signature::{RandomizedSigner, SignatureEncoding, Signer},
    RsaPrivateKey,
};

use crate::raw_signature::{RawSigner, RawSignerError, SigningAlg};

// PKCS#1 v1.5 and PSS signing keys are distinct types per digest.
enum RsaSigningKey {
    Rs256(pkcs1v15::SigningKey<Sha256>),
    Rs384(pkcs1v15::SigningKey<Sha384>),
    Rs512(pkcs1v15::SigningKey<Sha512>),
    Ps256(pss::SigningKey<Sha256>),
    Ps384(pss::SigningKey<Sha384>),
    Ps512(pss::SigningKey<Sha512>),
}

/// Implements [`RawSigner`] trait using `rsa` crate's implementation of
/// RSASSA-PKCS1-v1_5 and RSASSA-PSS.
pub(crate) struct RsaSigner {
    signing_key: RsaSigningKey,
}

impl RsaSigner {
    pub(crate) fn from_private_key(
        private_key: &[u8],
        alg: SigningAlg,
    ) -> Result<Self, RawSignerError> {
        let private_key = RsaPrivateKey::from_pkcs8_der(private_key).map_err(|e| {
            RawSignerError::InvalidSigningCredentials(format!("invalid RSA private key: {e}"))
        })?;

        let signing_key = match alg {
            SigningAlg::Rs256 => RsaSigningKey::Rs256(pkcs1v15::SigningKey::new(private_key)),
            SigningAlg::Rs384 => RsaSigningKey::Rs384(pkcs1v15::SigningKey::new(private_key)),
            SigningAlg::Rs512 => RsaSigningKey::Rs512(pkcs1v15::SigningKey::new(private_key)),
            SigningAlg::Ps256 => RsaSigningKey::Ps256(pss::SigningKey::new(private_key)),
            SigningAlg::Ps384 => RsaSigningKey::Ps384(pss::SigningKey::new(private_key)),
            SigningAlg::Ps512 => RsaSigningKey::Ps512(pss::SigningKey::new(private_key)),
            _ => {
                return Err(RawSignerError::InternalError(
                    "RsaSigner should be used only for SigningAlg::Rs*** or SigningAlg::Ps***"
                        .to_string(),
                ));
            }
        };

        Ok(RsaSigner { signing_key })
    }
}

impl RawSigner for RsaSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, RawSignerError> {
        let mut rng = rand::thread_rng();

        let sig = match self.signing_key {
            RsaSigningKey::Rs256(ref key) => key.try_sign(data).map(|s| s.to_vec()),
            RsaSigningKey::Rs384(ref key) => key.try_sign(data).map(|s| s.to_vec()),
            RsaSigningKey::Rs512(ref key) => key.try_sign(data).map(|s| s.to_vec()),
            RsaSigningKey::Ps256(ref key) => {
                key.try_sign_with_rng(&mut rng, data).map(|s| s.to_vec())
            }
            RsaSigningKey::Ps384(ref key) => {
                key.try_sign_with_rng(&mut rng, data).map(|s| s.to_vec())
            }
            RsaSigningKey::Ps512(ref key) => {
                key.try_sign_with_rng(&mut rng, data).map(|s| s.to_vec())
            }
        };

        sig.map_err(|e| RawSignerError::CryptoLibraryError(e.to_string()))
    }

    fn alg(&self) -> SigningAlg {
        match self.signing_key {
            RsaSigningKey::Rs256(_) => SigningAlg::Rs256,
            RsaSigningKey::Rs384(_) => SigningAlg::Rs384,
            RsaSigningKey::Rs512(_) => SigningAlg::Rs512,
            RsaSigningKey::Ps256(_) => SigningAlg::Ps256,
            RsaSigningKey::Ps384(_) => SigningAlg::Ps384,
            RsaSigningKey::Ps512(_) => SigningAlg::Ps512,
        }
    }
}
