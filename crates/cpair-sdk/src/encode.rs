// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Point encoder: curve points → circom-pairing limb arrays.
//!
//! | Input | Output shape |
//! |---|---|
//! | [`G1Point`] | `[2][K]` |
//! | [`G2Point`] | `[2][2][K]` |
//! | [`Fp12Element`] | `[6][2][K]` |
//!
//! The identity has no affine coordinates; it is written as all-zero limbs.
//! No valid BN254 point has `(0, 0)` as affine coordinates, so the circuit
//! can treat that pattern as the identity.

use cpair_types::{
    EncodedFp12, EncodedFp2, EncodedG1, EncodedG2, Fp12Element, Fp2Element, G1Point, G2Point,
};

use crate::config::LimbConfig;
use crate::error::ConvertResult;
use crate::limbs::{decode_limbs, encode_limbs_at};

pub fn encode_g1(point: &G1Point, config: &LimbConfig) -> ConvertResult<EncodedG1> {
    encode_g1_at(point, config, "G1")
}

pub fn encode_g2(point: &G2Point, config: &LimbConfig) -> ConvertResult<EncodedG2> {
    encode_g2_at(point, config, "G2")
}

pub fn encode_fp2(value: &Fp2Element, config: &LimbConfig) -> ConvertResult<EncodedFp2> {
    encode_fp2_at(value, config, "Fp2")
}

pub fn encode_fp12(value: &Fp12Element, config: &LimbConfig) -> ConvertResult<EncodedFp12> {
    let mut out = EncodedFp12::zeros(config.limbs());
    for (i, coeff) in value.coeffs.iter().enumerate() {
        out.0[i] = encode_fp2_at(coeff, config, &format!("Fp12[{i}]"))?;
    }
    Ok(out)
}

/// Read an encoded G1 point back; all-zero limbs decode to the identity.
pub fn decode_g1(encoded: &EncodedG1, config: &LimbConfig) -> G1Point {
    if encoded.is_zero() {
        return G1Point::Infinity;
    }
    G1Point::affine(
        decode_limbs(&encoded.0[0], config),
        decode_limbs(&encoded.0[1], config),
    )
}

pub fn decode_g2(encoded: &EncodedG2, config: &LimbConfig) -> G2Point {
    if encoded.is_zero() {
        return G2Point::Infinity;
    }
    G2Point::affine(decode_fp2(&encoded.0[0], config), decode_fp2(&encoded.0[1], config))
}

pub fn decode_fp2(encoded: &EncodedFp2, config: &LimbConfig) -> Fp2Element {
    Fp2Element::new(
        decode_limbs(&encoded.0[0], config),
        decode_limbs(&encoded.0[1], config),
    )
}

pub fn decode_fp12(encoded: &EncodedFp12, config: &LimbConfig) -> Fp12Element {
    Fp12Element {
        coeffs: core::array::from_fn(|i| decode_fp2(&encoded.0[i], config)),
    }
}

pub(crate) fn encode_g1_at(
    point: &G1Point,
    config: &LimbConfig,
    location: &str,
) -> ConvertResult<EncodedG1> {
    match point {
        G1Point::Infinity => {
            tracing::warn!(%location, "G1 point at infinity, encoding as zero limbs");
            Ok(EncodedG1::zeros(config.limbs()))
        }
        G1Point::Affine { x, y } => Ok(EncodedG1([
            encode_limbs_at(x, config, &format!("{location}[0]"))?,
            encode_limbs_at(y, config, &format!("{location}[1]"))?,
        ])),
    }
}

pub(crate) fn encode_g2_at(
    point: &G2Point,
    config: &LimbConfig,
    location: &str,
) -> ConvertResult<EncodedG2> {
    match point {
        G2Point::Infinity => {
            tracing::warn!(%location, "G2 point at infinity, encoding as zero limbs");
            Ok(EncodedG2::zeros(config.limbs()))
        }
        G2Point::Affine { x, y } => Ok(EncodedG2([
            encode_fp2_at(x, config, &format!("{location}[0]"))?,
            encode_fp2_at(y, config, &format!("{location}[1]"))?,
        ])),
    }
}

fn encode_fp2_at(
    value: &Fp2Element,
    config: &LimbConfig,
    location: &str,
) -> ConvertResult<EncodedFp2> {
    Ok(EncodedFp2([
        encode_limbs_at(&value.c0, config, &format!("{location}[0]"))?,
        encode_limbs_at(&value.c1, config, &format!("{location}[1]"))?,
    ]))
}
