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

#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]


use serde::Serialize;

use crate::{Certificate, PrivateKey, PublicKey, SignatureBean, VerifyBean};

/// Known SHA256withRSA signature, made with `rs256.priv`, over
/// `Person::default()`.
pub(crate) const DEFAULT_PERSON_SIG: &str = "Rf3DxIkfV3nyvBsEGgagY8ETCUIaV0FV95/eoypPTIFZUif2vSBtslJVVgmLSLReHtH4K1VHGeCuV/mTF48aHthH1sgTX/u1I1Fu6UuJ2JYIJd9E7mYzWBucunWrHzvPfqJCAAdzc+49ynLN9ijNuvZO2Pt9WYBBAsBYhW+U3wHinz5Qb5QUagpfAX37s2ZvHvpMiWhhfM+cKfdChp6i/J+g5VnoLFD5moEu7wWe1efxMXlMkVILyjRdLRIESnvkQoPi/F/mYEwQ5pBxFtxlSlhuq66qlGX6xKus2pNK/Nv/zGiUwjotirFnyEwl6omhqB1bSl6qJw74kSwaLT00rA==";

/// Known SHA256withRSA signature, made with `rs256.priv`, over `arnold()`.
pub(crate) const ARNOLD_SIG: &str = "udYGXk/qRJCLMuW+gcGkgAN0yhXDpRmFOtdHen6HQ5ndgTotK/eBqTvg8NGWv7GaSn6FiBJnNUIhOLBFJBhzvFe2WuTnwfAPhi+WngkKN0a3DBD4pYbrSVjOOw7NfJfHBRBxWXobD+rZu3wxb7QJBNjk5jBRf0AwC85yjnJ6gI67c1eTz6pEgARa6XS9MTSr+qhHQvT0Gs5nGU9prWnNcsstELrEmchn5GPnPoUwL/xdAOMkGUTFmDkCGmIiv36jNhfdoCWnYTMEog9ulZww9fRMVdvPBysrdgvnHHyjV25bViDFegpreAdThPxw0S8ywAHK1dGEl8XOHtjqCRZXxA==";

#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct Person {
    pub(crate) name: Option<String>,
    pub(crate) about: Option<String>,
}

pub(crate) fn arnold() -> Person {
    Person {
        name: Some("Arnold".to_owned()),
        about: Some("foo".to_owned()),
    }
}

pub(crate) fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn rs256_private_key() -> PrivateKey {
    PrivateKey::from_pem(include_bytes!("../../tests/fixtures/certs/rs256.priv")).unwrap()
}

pub(crate) fn rs256_public_key() -> PublicKey {
    PublicKey::from_pem(include_bytes!("../../tests/fixtures/certs/rs256.pub_key")).unwrap()
}

pub(crate) fn rs256_certificate() -> Certificate {
    Certificate::from_pem(include_bytes!("../../tests/fixtures/certs/rs256.pub")).unwrap()
}

pub(crate) fn other_rsa_public_key() -> PublicKey {
    PublicKey::from_pem(include_bytes!("../../tests/fixtures/certs/other_rsa.pub_key")).unwrap()
}

pub(crate) fn rs256_signature_bean() -> SignatureBean {
    SignatureBean::builder()
        .private_key(rs256_private_key())
        .signature_algorithm("SHA256withRSA")
        .build()
}

pub(crate) fn rs256_verify_bean() -> VerifyBean {
    VerifyBean::builder()
        .public_key(rs256_public_key())
        .signature_algorithm("SHA256withRSA")
        .build()
}
