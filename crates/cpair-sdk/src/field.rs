// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Base-field negation and G1 point negation.

use cpair_types::{FieldElement, G1Point};
use num_bigint::BigUint;

use crate::error::{ConvertError, ConvertResult};

/// Additive inverse modulo `prime`: `prime - value`, or `0` for `0`.
pub fn negate(value: &FieldElement, prime: &BigUint) -> ConvertResult<FieldElement> {
    negate_at(value, prime, "value")
}

pub(crate) fn negate_at(
    value: &FieldElement,
    prime: &BigUint,
    location: &str,
) -> ConvertResult<FieldElement> {
    if value.as_biguint() >= prime {
        return Err(ConvertError::ValueOutOfRange {
            location: location.to_string(),
            value: value.to_decimal(),
            capacity_bits: prime.bits(),
        });
    }
    if value.is_zero() {
        return Ok(FieldElement::zero());
    }
    Ok(FieldElement::from(prime - value.as_biguint()))
}

/// `-P` on a short Weierstrass curve: `(x, y) -> (x, -y)`. The identity
/// is its own inverse.
pub fn negate_g1(point: &G1Point, prime: &BigUint) -> ConvertResult<G1Point> {
    negate_g1_at(point, prime, "point")
}

pub(crate) fn negate_g1_at(
    point: &G1Point,
    prime: &BigUint,
    location: &str,
) -> ConvertResult<G1Point> {
    match point {
        G1Point::Infinity => Ok(G1Point::Infinity),
        G1Point::Affine { x, y } => Ok(G1Point::Affine {
            x: x.clone(),
            y: negate_at(y, prime, &format!("{location}[1]"))?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::{rngs::StdRng, RngCore, SeedableRng};
    use cpair_types::bn254_base_modulus;

    #[test]
    fn negate_zero_is_zero() {
        let p = bn254_base_modulus();
        assert!(negate(&FieldElement::zero(), &p).unwrap().is_zero());
    }

    #[test]
    fn negate_sums_to_modulus() {
        let p = bn254_base_modulus();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            let y = FieldElement::from(BigUint::from_bytes_le(&bytes) % &p);
            let neg = negate(&y, &p).unwrap();
            assert_eq!((neg.as_biguint() + y.as_biguint()) % &p, BigUint::default());
            assert!(neg.as_biguint() < &p);
        }
    }

    #[test]
    fn negate_rejects_unreduced_value() {
        let p = bn254_base_modulus();
        assert!(negate(&FieldElement::from(p.clone()), &p).is_err());
    }

    #[test]
    fn negate_g1_flips_y_only() {
        let p = bn254_base_modulus();
        let point = G1Point::affine(FieldElement::from(5), FieldElement::from(7));
        let neg = negate_g1(&point, &p).unwrap();
        assert_eq!(
            neg,
            G1Point::affine(FieldElement::from(5), FieldElement::from(&p - 7u8))
        );
    }

    #[test]
    fn negate_g1_infinity() {
        let p = bn254_base_modulus();
        assert_eq!(negate_g1(&G1Point::Infinity, &p).unwrap(), G1Point::Infinity);
    }
}
