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

use std::fmt;

use log::{debug, trace};
use objsign_crypto::{
    base64,
    raw_signature::{signer_from_private_key, RawSigner},
    SigningAlg,
};
use serde::Serialize;

use crate::{
    serializer, ConfigurationError, InitializationError, OperationError, Result, SignatureBean,
};

/// Signs byte sequences with a private key.
///
/// The key is decoded once, in [`Signer::new`]. Every call to [`sign`] uses
/// its own signing context, so a `Signer` can be shared between threads
/// without a lock.
///
/// [`sign`]: Self::sign
pub struct Signer {
    raw_signer: Box<dyn RawSigner + Send + Sync>,
}

impl Signer {
    /// Build a `Signer` from a [`SignatureBean`].
    ///
    /// Returns a [`ConfigurationError`] if the private key or the algorithm
    /// is missing, and an [`InitializationError`] if the algorithm is not
    /// recognized or the private key can not be used with it.
    pub fn new(bean: SignatureBean) -> Result<Self> {
        let private_key = bean
            .private_key
            .ok_or(ConfigurationError::MissingPrivateKey)?;

        let alg_name = bean
            .signature_algorithm
            .ok_or(ConfigurationError::MissingSignatureAlgorithm)?;

        let alg: SigningAlg = alg_name
            .parse()
            .map_err(InitializationError::UnknownAlgorithm)?;

        let raw_signer = signer_from_private_key(&private_key, alg)
            .map_err(InitializationError::InvalidPrivateKey)?;

        debug!("signer ready: alg = {alg} (from {alg_name:?})");

        Ok(Self { raw_signer })
    }

    /// Return the raw signature over `data`.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        trace!("signing {} bytes with {}", data.len(), self.algorithm());

        Ok(self
            .raw_signer
            .sign(data)
            .map_err(OperationError::Signing)?)
    }

    /// Serialize `object`, sign it, and return the Base64 encoded signature.
    ///
    /// The result is accepted by [`ObjectVerifier::verify`] for the same
    /// object and the matching public key.
    ///
    /// [`ObjectVerifier::verify`]: crate::ObjectVerifier::verify
    pub fn sign_object<T: Serialize + ?Sized>(&self, object: &T) -> Result<String> {
        let data = serializer::to_bytes(object)?;
        let signature = self.sign(&data)?;

        Ok(base64::encode(&signature))
    }

    /// Return the signature algorithm.
    pub fn algorithm(&self) -> SigningAlg {
        self.raw_signer.alg()
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("alg", &self.algorithm())
            .finish_non_exhaustive()
    }
}
