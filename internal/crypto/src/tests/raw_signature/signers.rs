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

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test;

use crate::{
    raw_signature::{
        signer_from_private_key, validator_for_signing_alg, RawSignatureValidationError,
        RawSignerError, SigningAlg,
    },
    PrivateKey,
};

const SAMPLE_DATA: &[u8] = b"some sample content to sign";

fn sign_and_validate(private_key: &[u8], pub_key: &[u8], alg: SigningAlg) -> Vec<u8> {
    let private_key = PrivateKey::from_pem(private_key).unwrap();
    let signer = signer_from_private_key(&private_key, alg).unwrap();
    assert_eq!(signer.alg(), alg);

    let signature = signer.sign(SAMPLE_DATA).unwrap();

    let validator = validator_for_signing_alg(alg);
    validator.validate(&signature, SAMPLE_DATA, pub_key).unwrap();

    assert_eq!(
        validator.validate(&signature, b"some other content", pub_key),
        Err(RawSignatureValidationError::SignatureMismatch)
    );

    signature
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn es256() {
    let private_key = include_bytes!("../../../tests/fixtures/raw_signature/es256.priv");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/es256.pub_key");

    let signature = sign_and_validate(private_key, pub_key, SigningAlg::Es256);
    assert_eq!(signature.len(), 64);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn es384() {
    let private_key = include_bytes!("../../../tests/fixtures/raw_signature/es384.priv");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/es384.pub_key");

    let signature = sign_and_validate(private_key, pub_key, SigningAlg::Es384);
    assert_eq!(signature.len(), 96);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn es512() {
    let private_key = include_bytes!("../../../tests/fixtures/raw_signature/es512.priv");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/es512.pub_key");

    let signature = sign_and_validate(private_key, pub_key, SigningAlg::Es512);
    assert_eq!(signature.len(), 132);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn ed25519() {
    let private_key = include_bytes!("../../../tests/fixtures/raw_signature/ed25519.priv");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/ed25519.pub_key");

    let signature = sign_and_validate(private_key, pub_key, SigningAlg::Ed25519);

    // Ed25519 is deterministic.
    let expected = include_bytes!("../../../tests/fixtures/raw_signature/ed25519.raw_sig");
    assert_eq!(signature, expected.to_vec());
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn rsa_pkcs1() {
    let private_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.priv");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.pub_key");

    let rs256 = sign_and_validate(private_key, pub_key, SigningAlg::Rs256);
    let rs384 = sign_and_validate(private_key, pub_key, SigningAlg::Rs384);
    let rs512 = sign_and_validate(private_key, pub_key, SigningAlg::Rs512);

    // PKCS#1 v1.5 padding is deterministic.
    assert_eq!(
        rs256,
        include_bytes!("../../../tests/fixtures/raw_signature/rs256.raw_sig").to_vec()
    );
    assert_eq!(
        rs384,
        include_bytes!("../../../tests/fixtures/raw_signature/rs384.raw_sig").to_vec()
    );
    assert_eq!(
        rs512,
        include_bytes!("../../../tests/fixtures/raw_signature/rs512.raw_sig").to_vec()
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn rsa_pss() {
    let private_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.priv");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.pub_key");

    let first = sign_and_validate(private_key, pub_key, SigningAlg::Ps256);
    let second = sign_and_validate(private_key, pub_key, SigningAlg::Ps256);

    // PSS is salted, so two signatures over the same data differ.
    assert_ne!(first, second);

    sign_and_validate(private_key, pub_key, SigningAlg::Ps384);
    sign_and_validate(private_key, pub_key, SigningAlg::Ps512);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn key_must_match_alg() {
    let rsa_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.priv");
    let rsa_key = PrivateKey::from_pem(rsa_key).unwrap();

    for alg in [
        SigningAlg::Es256,
        SigningAlg::Es384,
        SigningAlg::Es512,
        SigningAlg::Ed25519,
    ] {
        assert!(matches!(
            signer_from_private_key(&rsa_key, alg),
            Err(RawSignerError::InvalidSigningCredentials(_))
        ));
    }

    let ec_key = include_bytes!("../../../tests/fixtures/raw_signature/es256.priv");
    let ec_key = PrivateKey::from_pem(ec_key).unwrap();

    assert!(matches!(
        signer_from_private_key(&ec_key, SigningAlg::Rs256),
        Err(RawSignerError::InvalidSigningCredentials(_))
    ));

    assert!(matches!(
        signer_from_private_key(&ec_key, SigningAlg::Es384),
        Err(RawSignerError::InvalidSigningCredentials(_))
    ));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn garbage_private_key() {
    let private_key = PrivateKey::from_der(b"not a key".to_vec());

    assert!(matches!(
        signer_from_private_key(&private_key, SigningAlg::Ps256),
        Err(RawSignerError::InvalidSigningCredentials(_))
    ));
}
