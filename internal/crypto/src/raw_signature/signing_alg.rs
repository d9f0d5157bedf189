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

use std::{fmt, str::FromStr};

#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Describes the digital signature algorithms supported by this crate.
///
/// Algorithms can be named either by their short name (`"rs256"`,
/// `"es384"`, ...) or by their standard Java Cryptography Architecture name
/// (`"SHA256withRSA"`, `"SHA384withECDSA"`, ...). Parsing is
/// case-insensitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SigningAlg {
    /// RSASSA-PKCS1-v1_5 using SHA-256
    Rs256,

    /// RSASSA-PKCS1-v1_5 using SHA-384
    Rs384,

    /// RSASSA-PKCS1-v1_5 using SHA-512
    Rs512,

    /// RSASSA-PSS using SHA-256 and MGF1 with SHA-256
    Ps256,

    /// RSASSA-PSS using SHA-384 and MGF1 with SHA-384
    Ps384,

    /// RSASSA-PSS using SHA-512 and MGF1 with SHA-512
    Ps512,

    /// ECDSA over P-256 with SHA-256
    Es256,

    /// ECDSA over P-384 with SHA-384
    Es384,

    /// ECDSA over P-521 with SHA-512
    Es512,

    /// Edwards-Curve DSA (Ed25519 instance only)
    Ed25519,
}

impl SigningAlg {
    /// Return the standard Java Cryptography Architecture name for this
    /// algorithm.
    pub fn jca_name(&self) -> &'static str {
        match self {
            Self::Rs256 => "SHA256withRSA",
            Self::Rs384 => "SHA384withRSA",
            Self::Rs512 => "SHA512withRSA",
            Self::Ps256 => "SHA256withRSA/PSS",
            Self::Ps384 => "SHA384withRSA/PSS",
            Self::Ps512 => "SHA512withRSA/PSS",
            Self::Es256 => "SHA256withECDSA",
            Self::Es384 => "SHA384withECDSA",
            Self::Es512 => "SHA512withECDSA",
            Self::Ed25519 => "Ed25519",
        }
    }
}

impl FromStr for SigningAlg {
    type Err = UnknownAlgorithmError;

    fn from_str(alg: &str) -> Result<Self, Self::Err> {
        match alg.to_ascii_lowercase().as_str() {
            "rs256" | "sha256withrsa" => Ok(Self::Rs256),
            "rs384" | "sha384withrsa" => Ok(Self::Rs384),
            "rs512" | "sha512withrsa" => Ok(Self::Rs512),
            "ps256" | "sha256withrsa/pss" | "sha256withrsaandmgf1" => Ok(Self::Ps256),
            "ps384" | "sha384withrsa/pss" | "sha384withrsaandmgf1" => Ok(Self::Ps384),
            "ps512" | "sha512withrsa/pss" | "sha512withrsaandmgf1" => Ok(Self::Ps512),
            "es256" | "sha256withecdsa" => Ok(Self::Es256),
            "es384" | "sha384withecdsa" => Ok(Self::Es384),
            "es512" | "sha512withecdsa" => Ok(Self::Es512),
            "ed25519" | "eddsa" => Ok(Self::Ed25519),
            _ => Err(UnknownAlgorithmError(alg.to_owned())),
        }
    }
}

impl fmt::Display for SigningAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}",
            match self {
                Self::Rs256 => "rs256",
                Self::Rs384 => "rs384",
                Self::Rs512 => "rs512",
                Self::Ps256 => "ps256",
                Self::Ps384 => "ps384",
                Self::Ps512 => "ps512",
                Self::Es256 => "es256",
                Self::Es384 => "es384",
                Self::Es512 => "es512",
                Self::Ed25519 => "ed25519",
            }
        )
    }
}

/// This error is thrown when converting from a string to [`SigningAlg`]
/// if the algorithm string is unrecognized.
#[derive(Debug, Eq, Error, PartialEq)]
#[error("UnknownAlgorithmError({0})")]
pub struct UnknownAlgorithmError(pub String);
