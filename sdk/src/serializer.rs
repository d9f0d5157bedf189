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

//! Object serialization.
//!
//! Objects are signed and verified over their CBOR encoding. Structs become
//! definite-length maps with fields in declaration order, so the bytes are
//! stable for a given type and value.

use serde::Serialize;

use crate::{OperationError, Result};

/// Serialize `value` to the CBOR bytes that are signed and verified.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();

    ciborium::into_writer(value, &mut buf)
        .map_err(|e| OperationError::Serialization(e.to_string()))?;

    Ok(buf)
}
