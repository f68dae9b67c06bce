//! Declarative per-field request validation.
//!
//! Each endpoint lists its `(field, value, rule)` triples; the whole list is
//! evaluated in one pass and every violation is reported together, before the
//! service layer is invoked. Cryptographic validity of private keys is
//! deferred to signer derivation.

use alloy_primitives::Address;
use serde::Serialize;
use token::amount::is_decimal_string;

/// Validation rule for a single request field.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// 0x-prefixed 20-byte hex address.
    Address,
    /// Non-empty strict decimal string.
    Amount,
    /// Non-empty string; key material is checked during signer derivation.
    PrivateKey,
}

/// One failed field rule.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

/// Evaluate all rules, collecting every violation.
pub fn check(fields: &[(&'static str, &str, Rule)]) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();
    for &(field, value, rule) in fields {
        if let Err(message) = apply(rule, value) {
            violations.push(Violation { field, message });
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn apply(rule: Rule, value: &str) -> Result<(), String> {
    let value = value.trim();
    match rule {
        Rule::Address => {
            if value.parse::<Address>().is_ok() {
                Ok(())
            } else {
                Err("must be a 0x-prefixed 20-byte hex address".to_string())
            }
        }
        Rule::Amount => {
            if value.is_empty() {
                Err("must not be empty".to_string())
            } else if is_decimal_string(value) {
                Ok(())
            } else {
                Err("must be a decimal number string (e.g. \"10\", \"10.5\")".to_string())
            }
        }
        Rule::PrivateKey => {
            if value.is_empty() {
                Err("must not be empty".to_string())
            } else {
                Ok(())
            }
        }
    }
}
