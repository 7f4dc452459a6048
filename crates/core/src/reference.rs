// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference-code generation.
//!
//! Reference codes are the short public identifiers guests share with
//! staff. Codes are drawn from an alphabet with the easily-confused
//! characters (`0/O`, `1/I`) removed, so they survive being read aloud.

use crate::error::CoreError;
use rand::RngExt;
use stay_reserve_domain::ReferenceCode;

/// Length of a generated reference code.
pub const REFERENCE_CODE_LENGTH: usize = 8;

/// Unambiguous alphanumeric alphabet (32 symbols).
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Collision retry budget before the generator gives up.
const MAX_ATTEMPTS: usize = 5;

/// Generates a reference code that is unique per the supplied predicate.
///
/// The 32^8 code space makes collisions vanishingly rare; the bounded
/// retry covers the remainder.
///
/// # Arguments
///
/// * `is_taken` - Returns true when a candidate already exists in the ledger
///
/// # Errors
///
/// Returns `CoreError::Internal` if every attempt collided.
pub fn generate_reference_code<F>(mut is_taken: F) -> Result<ReferenceCode, CoreError>
where
    F: FnMut(&ReferenceCode) -> bool,
{
    for _ in 0..MAX_ATTEMPTS {
        let candidate: ReferenceCode = random_code();
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }
    Err(CoreError::Internal(format!(
        "reference code generation collided {MAX_ATTEMPTS} times"
    )))
}

/// Draws one random code from the alphabet.
fn random_code() -> ReferenceCode {
    let mut rng = rand::rng();
    let code: String = (0..REFERENCE_CODE_LENGTH)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect();
    ReferenceCode::new(&code)
}
