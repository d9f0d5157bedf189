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

use ecdsa::signature::Signer;
use p256::ecdsa::{Signature as P256Signature, SigningKey as P256SigningKey};
use p384::ecdsa::{Signature as P384Signature, SigningKey as P384SigningKey};
use p521::ecdsa::{Signature as P521Signature, SigningKey as P521SigningKey};
use pkcs8::DecodePrivateKey;

use crate::raw_signature::{RawSigner, RawSignerError, SigningAlg};

// Signing keys for each curve are different types
enum EcdsaSigningKey {
    Es256(P256SigningKey),
    Es384(P384SigningKey),
    Es512(P521SigningKey),
}

/// Implements [`RawSigner`] trait using the RustCrypto NIST curve crates.
///
/// Signatures are produced in the fixed-size IEEE P1363 (`r || s`) form.
pub(crate) struct EcdsaSigner {
    signing_key: EcdsaSigningKey,
}

impl EcdsaSigner {
    pub(crate) fn from_private_key(
        private_key: &[u8],
        alg: SigningAlg,
    ) -> Result<Self, RawSignerError> {
        let signing_key = match alg {
            SigningAlg::Es256 => {
                let key = P256SigningKey::from_pkcs8_der(private_key).map_err(|e| {
                    RawSignerError::InvalidSigningCredentials(format!(
                        "invalid ES256 private key: {e}"
                    ))
                })?;
                EcdsaSigningKey::Es256(key)
            }
            SigningAlg::Es384 => {
                let key = P384SigningKey::from_pkcs8_der(private_key).map_err(|e| {
                    RawSignerError::InvalidSigningCredentials(format!(
                        "invalid ES384 private key: {e}"
                    ))
                })?;
                EcdsaSigningKey::Es384(key)
            }
            SigningAlg::Es512 => EcdsaSigningKey::Es512(es512_from_pkcs8_der(private_key)?),
            _ => {
                return Err(RawSignerError::InvalidSigningCredentials(
                    "Unsupported algorithm".to_string(),
                ))
            }
        };

        Ok(EcdsaSigner { signing_key })
    }
}

impl RawSigner for EcdsaSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, RawSignerError> {
        match self.signing_key {
            EcdsaSigningKey::Es256(ref key) => {
                let signature: P256Signature = key
                    .try_sign(data)
                    .map_err(|e| RawSignerError::CryptoLibraryError(e.to_string()))?;
                Ok(signature.to_vec())
            }
            EcdsaSigningKey::Es384(ref key) => {
                let signature: P384Signature = key
                    .try_sign(data)
                    .map_err(|e| RawSignerError::CryptoLibraryError(e.to_string()))?;
                Ok(signature.to_vec())
            }
            EcdsaSigningKey::Es512(ref key) => {
                let signature: P521Signature = key
                    .try_sign(data)
                    .map_err(|e| RawSignerError::CryptoLibraryError(e.to_string()))?;
                Ok(signature.to_vec())
            }
        }
    }

    fn alg(&self) -> SigningAlg {
        match self.signing_key {
            EcdsaSigningKey::Es256(_) => SigningAlg::Es256,
            EcdsaSigningKey::Es384(_) => SigningAlg::Es384,
            EcdsaSigningKey::Es512(_) => SigningAlg::Es512,
        }
    }
}

// p521's SigningKey has no PKCS#8 decoder of its own, so go through the
// generic secret key.
fn es512_from_pkcs8_der(private_key: &[u8]) -> Result<P521SigningKey, RawSignerError> {
    let secret_key = p521::SecretKey::from_pkcs8_der(private_key).map_err(|e| {
        RawSignerError::InvalidSigningCredentials(format!("invalid ES512 private key: {e}"))
    })?;

    P521SigningKey::from_slice(&secret_key.to_bytes()).map_err(|e| {
        RawSignerError::InvalidSigningCredentials(format!("invalid ES512 private key: {e}"))
    })
}
