// Copyright 2022 Adobe. All rights reserved.
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

use thiserror::Error;

use crate::{raw_signature::rust_native, PrivateKey, SigningAlg};

/// Implementations of the `RawSigner` trait generate a cryptographic signature
/// over an arbitrary byte array.
///
/// The private key is decoded once, when the signer is built. Each call to
/// [`sign`] works on its own signing context, so a single signer may be
/// shared between threads.
///
/// [`sign`]: Self::sign
pub trait RawSigner {
    /// Return a raw signature over the original byte slice.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, RawSignerError>;

    /// Return the algorithm implemented by this signer.
    fn alg(&self) -> SigningAlg;
}

/// Return a built-in [`RawSigner`] instance using the provided private key.
///
/// Returns an `Err` response if the private key can not be decoded or is not
/// usable with the requested algorithm.
pub fn signer_from_private_key(
    private_key: &PrivateKey,
    alg: SigningAlg,
) -> Result<Box<dyn RawSigner + Send + Sync>, RawSignerError> {
    rust_native::signers::signer_from_private_key(private_key.as_der(), alg)
}

/// Describes errors that can be identified when generating a raw signature.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum RawSignerError {
    /// The private key could not be decoded, or does not match the requested
    /// algorithm.
    #[error("invalid signing credentials ({0})")]
    InvalidSigningCredentials(String),

    /// An error was reported by the underlying cryptography implementation.
    #[error("an error was reported by the cryptography library: {0}")]
    CryptoLibraryError(String),

    /// An unexpected internal error occured.
    #[error("internal error ({0})")]
    InternalError(String),
}
