// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, REFERENCE_CODE_LENGTH, generate_reference_code};
use std::collections::HashSet;
use stay_reserve_domain::ReferenceCode;

#[test]
fn test_generated_code_shape() {
    let code: ReferenceCode = generate_reference_code(|_| false).unwrap();

    assert_eq!(code.value().len(), REFERENCE_CODE_LENGTH);
    for c in code.value().chars() {
        assert!(c.is_ascii_uppercase() || c.is_ascii_digit());
        assert!(!matches!(c, '0' | 'O' | '1' | 'I'), "ambiguous char {c}");
    }
}

#[test]
fn test_ten_thousand_codes_pairwise_unique() {
    let mut seen: HashSet<String> = HashSet::new();

    for _ in 0..10_000 {
        let code: ReferenceCode =
            generate_reference_code(|candidate| seen.contains(candidate.value())).unwrap();
        assert!(
            seen.insert(code.value().to_owned()),
            "duplicate code {code}"
        );
    }
}

#[test]
fn test_generation_retries_then_gives_up() {
    let result = generate_reference_code(|_| true);

    assert!(matches!(result, Err(CoreError::Internal(_))));
}

#[test]
fn test_collision_retry_succeeds() {
    let mut attempts: usize = 0;
    let result = generate_reference_code(|_| {
        attempts += 1;
        // First two candidates collide, third is free
        attempts <= 2
    });

    assert!(result.is_ok());
    assert_eq!(attempts, 3);
}
