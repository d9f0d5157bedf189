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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![deny(warnings)]
#![doc = include_str!("../../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod error;
pub use error::{ConfigurationError, Error, InitializationError, OperationError, Result};

mod object_verifier;
pub use object_verifier::{ObjectVerifier, VerificationKey};

pub mod serializer;

pub mod settings;

mod signature_bean;
pub use signature_bean::{SignatureBean, SignatureBeanBuilder};

mod signer;
pub use signer::Signer;

mod verify_bean;
pub use verify_bean::{VerifyBean, VerifyBeanBuilder};

pub use objsign_crypto::{Certificate, KeyMaterialError, PrivateKey, PublicKey, SigningAlg};

#[cfg(test)]
pub(crate) mod tests;

/// The name of this crate
pub const NAME: &str = "objsign";
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
