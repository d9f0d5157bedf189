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

use crate::raw_signature::{validator_for_signing_alg, RawSignatureValidationError, SigningAlg};

const SAMPLE_DATA: &[u8] = b"some sample content to sign";

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn es256() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/es256.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/es256.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Es256);
    validator.validate(signature, SAMPLE_DATA, pub_key).unwrap();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn es384() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/es384.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/es384.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Es384);
    validator.validate(signature, SAMPLE_DATA, pub_key).unwrap();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn es512() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/es512.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/es512.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Es512);
    validator.validate(signature, SAMPLE_DATA, pub_key).unwrap();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn ed25519() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/ed25519.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/ed25519.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Ed25519);
    validator.validate(signature, SAMPLE_DATA, pub_key).unwrap();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn rs256() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/rs256.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Rs256);
    validator.validate(signature, SAMPLE_DATA, pub_key).unwrap();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn rs384() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/rs384.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Rs384);
    validator.validate(signature, SAMPLE_DATA, pub_key).unwrap();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn rs512() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/rs512.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Rs512);
    validator.validate(signature, SAMPLE_DATA, pub_key).unwrap();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn ps256() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/ps256.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Ps256);
    validator.validate(signature, SAMPLE_DATA, pub_key).unwrap();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn digest_must_match_alg() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/rs256.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Rs384);

    assert_eq!(
        validator.validate(signature, SAMPLE_DATA, pub_key),
        Err(RawSignatureValidationError::SignatureMismatch)
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn bad_data() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/es256.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/es256.pub_key");

    let mut data = SAMPLE_DATA.to_vec();
    data[5] = 10;

    let validator = validator_for_signing_alg(SigningAlg::Es256);

    assert_eq!(
        validator.validate(signature, &data, pub_key),
        Err(RawSignatureValidationError::SignatureMismatch)
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn unrelated_public_key() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/rs256.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/other_rsa.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Rs256);

    assert_eq!(
        validator.validate(signature, SAMPLE_DATA, pub_key),
        Err(RawSignatureValidationError::SignatureMismatch)
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn wrong_key_type() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/es256.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Es256);

    assert_eq!(
        validator.validate(signature, SAMPLE_DATA, pub_key),
        Err(RawSignatureValidationError::InvalidPublicKey)
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn malformed_signature() {
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/ed25519.pub_key");

    let validator = validator_for_signing_alg(SigningAlg::Ed25519);

    assert_eq!(
        validator.validate(b"short", SAMPLE_DATA, pub_key),
        Err(RawSignatureValidationError::InvalidSignature)
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn rsa_signature_must_match_modulus_size() {
    let signature = include_bytes!("../../../tests/fixtures/raw_signature/rs256.raw_sig");
    let pub_key = include_bytes!("../../../tests/fixtures/raw_signature/rs256.pub_key");

    let mut too_long = signature.to_vec();
    too_long.push(0);

    for alg in [SigningAlg::Rs256, SigningAlg::Ps256] {
        let validator = validator_for_signing_alg(alg);

        for sig in [&b""[..], &b"short"[..], &signature[1..], &too_long[..]] {
            assert_eq!(
                validator.validate(sig, SAMPLE_DATA, pub_key),
                Err(RawSignatureValidationError::InvalidSignature),
                "{alg} with {} byte signature",
                sig.len()
            );
        }
    }
}

fn check(alg: SigningAlg, public_key: &[u8]) -> Result<(), RawSignatureValidationError> {
    validator_for_signing_alg(alg).check_public_key(public_key)
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn check_public_key() {
    let rsa = include_bytes!("../../../tests/fixtures/raw_signature/rs256.pub_key");
    let p256 = include_bytes!("../../../tests/fixtures/raw_signature/es256.pub_key");
    let p521 = include_bytes!("../../../tests/fixtures/raw_signature/es512.pub_key");
    let ed25519 = include_bytes!("../../../tests/fixtures/raw_signature/ed25519.pub_key");

    assert_eq!(check(SigningAlg::Rs256, rsa), Ok(()));
    assert_eq!(check(SigningAlg::Ps512, rsa), Ok(()));
    assert_eq!(check(SigningAlg::Es256, p256), Ok(()));
    assert_eq!(check(SigningAlg::Es512, p521), Ok(()));
    assert_eq!(check(SigningAlg::Ed25519, ed25519), Ok(()));

    assert_eq!(
        check(SigningAlg::Es384, p256),
        Err(RawSignatureValidationError::InvalidPublicKey)
    );
    assert_eq!(
        check(SigningAlg::Ed25519, rsa),
        Err(RawSignatureValidationError::InvalidPublicKey)
    );
    assert_eq!(
        check(SigningAlg::Rs256, ed25519),
        Err(RawSignatureValidationError::InvalidPublicKey)
    );
}
