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

//! Sign a serialized object and verify the signature against a certificate.
//!
//! Run with `RUST_LOG=debug` to see what the library logs.

use objsign::{Certificate, ObjectVerifier, PrivateKey, Result, SignatureBean, Signer, VerifyBean};
use serde::Serialize;

const PRIVATE_KEY: &str = include_str!("../tests/fixtures/certs/rs256.priv");
const CERTIFICATE: &str = include_str!("../tests/fixtures/certs/rs256.pub");

#[derive(Serialize)]
struct Invoice {
    number: u32,
    customer: String,
    lines: Vec<(String, u64)>,
}

fn main() -> Result<()> {
    env_logger::init();

    let signer = Signer::new(
        SignatureBean::builder()
            .private_key(PrivateKey::from_pem(PRIVATE_KEY)?)
            .signature_algorithm("SHA256withRSA")
            .build(),
    )?;

    let verifier = ObjectVerifier::<Invoice>::new(
        VerifyBean::builder()
            .certificate(Certificate::from_pem(CERTIFICATE)?)
            .signature_algorithm("SHA256withRSA")
            .build(),
    )?;

    let mut invoice = Invoice {
        number: 1042,
        customer: "ACME".to_owned(),
        lines: vec![("widget".to_owned(), 3), ("sprocket".to_owned(), 12)],
    };

    let signature = signer.sign_object(&invoice)?;
    println!("signature: {signature}");
    println!("valid: {}", verifier.verify(&invoice, &signature)?);

    invoice.lines[1].1 = 13;
    println!("valid after edit: {}", verifier.verify(&invoice, &signature)?);

    Ok(())
}
