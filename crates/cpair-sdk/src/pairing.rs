// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Pairing evaluator.
//!
//! The bilinear pairing itself comes from a [`PairingBackend`]; the default
//! one is arkworks' BN254 (`ark-bn254`). This module converts points into the
//! backend's representation, checks them, and limb-encodes the `Fp12` result.
//!
//! # Fp12 layout
//!
//! arkworks builds `Fq12 = Fq6[w]/(w^2 - v)` over `Fq6 = Fq2[v]/(v^3 - (9+u))`,
//! i.e. `f = (a0 + a1 v + a2 v^2) + (b0 + b1 v + b2 v^2) w`. With `v = w^2`
//! the circuit's basis `w^0..w^5` reads `[a0, b0, a1, b1, a2, b2]`.

use ark_bn254::{Bn254, Fq, Fq12, Fq2, Fq6, G1Affine, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ff::PrimeField;
use cpair_types::{EncodedFp12, FieldElement, Fp12Element, Fp2Element, G1Point, G2Point};
use num_bigint::BigUint;

use crate::config::LimbConfig;
use crate::encode::encode_fp12;
use crate::error::{ConvertResult, PairingError};

/// External bilinear-pairing primitive `e: G1 x G2 -> Fp12`.
pub trait PairingBackend {
    fn pairing(&self, a: &G1Point, b: &G2Point) -> Result<Fp12Element, PairingError>;
}

/// arkworks BN254 pairing (optimal ate, with final exponentiation).
///
/// Holds no background resources; the handle only pins the field modulus
/// used to range-check coordinates. Drop it once the pairings are done.
#[derive(Debug)]
pub struct ArkBn254Pairing {
    modulus: BigUint,
}

impl ArkBn254Pairing {
    pub fn load() -> Self {
        tracing::debug!("BN254 pairing backend loaded");
        Self {
            modulus: BigUint::from(Fq::MODULUS),
        }
    }
}

impl Default for ArkBn254Pairing {
    fn default() -> Self {
        Self::load()
    }
}

impl Drop for ArkBn254Pairing {
    fn drop(&mut self) {
        tracing::debug!("BN254 pairing backend released");
    }
}

impl PairingBackend for ArkBn254Pairing {
    fn pairing(&self, a: &G1Point, b: &G2Point) -> Result<Fp12Element, PairingError> {
        let a = g1_to_ark(a, &self.modulus)?;
        let b = g2_to_ark(b, &self.modulus)?;
        let f = Bn254::pairing(a, b).0;
        Ok(fq12_to_element(&f))
    }
}

/// `e(a, b)` encoded as `[6][2][K]` limbs.
///
/// Backend failures come back as
/// [`PairingComputationFailed`](crate::error::ConvertError::PairingComputationFailed);
/// what to do about them is the caller's decision (see
/// [`PairingFailurePolicy`](crate::config::PairingFailurePolicy)).
pub fn evaluate_pairing<B: PairingBackend + ?Sized>(
    backend: &B,
    a: &G1Point,
    b: &G2Point,
    config: &LimbConfig,
) -> ConvertResult<EncodedFp12> {
    tracing::debug!("computing pairing e(G1, G2)");
    let f = backend.pairing(a, b)?;
    encode_fp12(&f, config)
}

/// All-zero `[6][2][K]` stand-in for a pairing that could not be computed.
/// Carries no cryptographic meaning.
pub fn pairing_placeholder(config: &LimbConfig) -> EncodedFp12 {
    EncodedFp12::zeros(config.limbs())
}

fn to_fq(value: &FieldElement, modulus: &BigUint) -> Result<Fq, PairingError> {
    if value.as_biguint() >= modulus {
        return Err(PairingError::NotInField(value.to_decimal()));
    }
    Ok(Fq::from(value.as_biguint().clone()))
}

fn to_fq2(value: &Fp2Element, modulus: &BigUint) -> Result<Fq2, PairingError> {
    Ok(Fq2::new(to_fq(&value.c0, modulus)?, to_fq(&value.c1, modulus)?))
}

pub fn g1_to_ark(point: &G1Point, modulus: &BigUint) -> Result<G1Affine, PairingError> {
    match point {
        G1Point::Infinity => Ok(G1Affine::identity()),
        G1Point::Affine { x, y } => {
            let p = G1Affine::new_unchecked(to_fq(x, modulus)?, to_fq(y, modulus)?);
            if !p.is_on_curve() {
                return Err(PairingError::NotOnCurve("G1"));
            }
            if !p.is_in_correct_subgroup_assuming_on_curve() {
                return Err(PairingError::NotInSubgroup("G1"));
            }
            Ok(p)
        }
    }
}

pub fn g2_to_ark(point: &G2Point, modulus: &BigUint) -> Result<G2Affine, PairingError> {
    match point {
        G2Point::Infinity => Ok(G2Affine::identity()),
        G2Point::Affine { x, y } => {
            let p = G2Affine::new_unchecked(to_fq2(x, modulus)?, to_fq2(y, modulus)?);
            if !p.is_on_curve() {
                return Err(PairingError::NotOnCurve("G2"));
            }
            if !p.is_in_correct_subgroup_assuming_on_curve() {
                return Err(PairingError::NotInSubgroup("G2"));
            }
            Ok(p)
        }
    }
}

fn fq_to_element(value: &Fq) -> FieldElement {
    FieldElement::from(BigUint::from(value.into_bigint()))
}

fn fq2_to_element(value: &Fq2) -> Fp2Element {
    Fp2Element::new(fq_to_element(&value.c0), fq_to_element(&value.c1))
}

pub fn g1_from_ark(point: &G1Affine) -> G1Point {
    if point.infinity {
        return G1Point::Infinity;
    }
    G1Point::affine(fq_to_element(&point.x), fq_to_element(&point.y))
}

pub fn g2_from_ark(point: &G2Affine) -> G2Point {
    if point.infinity {
        return G2Point::Infinity;
    }
    G2Point::affine(fq2_to_element(&point.x), fq2_to_element(&point.y))
}

/// `Fq12` → coefficients of `w^0..w^5`.
pub fn fq12_to_element(f: &Fq12) -> Fp12Element {
    Fp12Element {
        coeffs: [
            fq2_to_element(&f.c0.c0),
            fq2_to_element(&f.c1.c0),
            fq2_to_element(&f.c0.c1),
            fq2_to_element(&f.c1.c1),
            fq2_to_element(&f.c0.c2),
            fq2_to_element(&f.c1.c2),
        ],
    }
}

/// Inverse of [`fq12_to_element`].
pub fn fq12_from_element(f: &Fp12Element) -> Result<Fq12, PairingError> {
    let modulus = BigUint::from(Fq::MODULUS);
    let c: Vec<Fq2> = f
        .coeffs
        .iter()
        .map(|coeff| to_fq2(coeff, &modulus))
        .collect::<Result<_, _>>()?;
    Ok(Fq12::new(
        Fq6::new(c[0], c[2], c[4]),
        Fq6::new(c[1], c[3], c[5]),
    ))
}
