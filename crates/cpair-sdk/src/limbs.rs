// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Limb codec: integer ↔ fixed-length little-endian limb vector.
//!
//! A value `v` encodes to `limbs` with `v = Σ limbs[i] * 2^(limb_bits * i)`.
//! Values that need more than `limbs * limb_bits` bits are rejected instead
//! of losing their high bits.

use cpair_types::{FieldElement, LimbVector};
use num_bigint::BigUint;

use crate::config::LimbConfig;
use crate::error::{ConvertError, ConvertResult};

/// Split `value` into `config.limbs()` limbs of `config.limb_bits()` bits.
pub fn encode_limbs(value: &FieldElement, config: &LimbConfig) -> ConvertResult<LimbVector> {
    encode_limbs_at(value, config, "value")
}

pub(crate) fn encode_limbs_at(
    value: &FieldElement,
    config: &LimbConfig,
    location: &str,
) -> ConvertResult<LimbVector> {
    if value.bits() > config.capacity_bits() {
        return Err(ConvertError::ValueOutOfRange {
            location: location.to_string(),
            value: value.to_decimal(),
            capacity_bits: config.capacity_bits(),
        });
    }

    let mask = BigUint::from(config.limb_mask());
    let mut rest = value.as_biguint().clone();
    let mut limbs = Vec::with_capacity(config.limbs());
    for _ in 0..config.limbs() {
        let limb = (&rest & &mask).iter_u64_digits().next().unwrap_or(0);
        limbs.push(limb);
        rest >>= config.limb_bits();
    }
    debug_assert_eq!(rest.bits(), 0);

    Ok(LimbVector::new(limbs))
}

/// Inverse of [`encode_limbs`]: `Σ limbs[i] * 2^(limb_bits * i)`.
pub fn decode_limbs(limbs: &LimbVector, config: &LimbConfig) -> FieldElement {
    let value = limbs
        .limbs()
        .iter()
        .rev()
        .fold(BigUint::default(), |acc, &limb| (acc << config.limb_bits()) + limb);
    FieldElement::from(value)
}

/// Accept a coordinate that is already limb-encoded (`["l0", …, "lK-1"]`).
pub fn limbs_from_strings(
    raw: &[String],
    config: &LimbConfig,
    location: &str,
) -> ConvertResult<LimbVector> {
    if raw.len() != config.limbs() {
        return Err(ConvertError::coordinate(
            location,
            format!("expected {} limbs, got {}", config.limbs(), raw.len()),
        ));
    }

    let mut limbs = Vec::with_capacity(raw.len());
    for (i, s) in raw.iter().enumerate() {
        let limb_location = format!("{location}[{i}]");
        let value: FieldElement = s
            .parse()
            .map_err(|e| ConvertError::coordinate(&limb_location, format!("limb: {e}")))?;
        if value.bits() > config.limb_bits() as u64 {
            return Err(ConvertError::ValueOutOfRange {
                location: limb_location,
                value: value.to_decimal(),
                capacity_bits: config.limb_bits() as u64,
            });
        }
        limbs.push(value.as_biguint().iter_u64_digits().next().unwrap_or(0));
    }
    Ok(LimbVector::new(limbs))
}
