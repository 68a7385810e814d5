// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs artifact mirrors and their conversion into typed points.
//!
//! snarkjs writes every coordinate as a decimal string and every point in
//! homogeneous form:
//!
//! - G1: `["x", "y", "z"]`
//! - G2: `[["x0","x1"], ["y0","y1"], ["z0","z1"]]`
//!
//! A coordinate may also arrive already limb-encoded (`["l0", …, "l5"]`).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use cpair_types::{FieldElement, Fp2Element, G1Point, G2Point, ParseFieldElementError};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{ArtifactPaths, LimbConfig};
use crate::error::{ConvertError, ConvertResult};
use crate::limbs::{decode_limbs, limbs_from_strings};

/// One coordinate as written in the artifact.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Decimal(String),
    Limbs(Vec<String>),
    Other(serde_json::Value),
}

#[derive(Clone, Debug, Deserialize)]
pub struct VerificationKeyJson {
    pub protocol: Option<String>,
    pub curve: Option<String>,
    #[serde(rename = "nPublic")]
    pub n_public: Option<usize>,
    pub vk_alpha_1: Vec<Coordinate>,
    pub vk_beta_2: Vec<Vec<Coordinate>>,
    pub vk_gamma_2: Vec<Vec<Coordinate>>,
    pub vk_delta_2: Vec<Vec<Coordinate>>,
    #[serde(rename = "IC")]
    pub ic: Vec<Vec<Coordinate>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProofJson {
    pub protocol: Option<String>,
    pub curve: Option<String>,
    pub pi_a: Vec<Coordinate>,
    pub pi_b: Vec<Vec<Coordinate>>,
    pub pi_c: Vec<Coordinate>,
}

/// The three inputs of one conversion.
#[derive(Clone, Debug)]
pub struct Artifacts {
    pub vkey: VerificationKeyJson,
    pub proof: ProofJson,
    pub public_signals: Vec<serde_json::Value>,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> ConvertResult<T> {
    let data = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConvertError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => ConvertError::Io(e),
    })?;
    serde_json::from_str(&data).map_err(|source| ConvertError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Read verification key, proof and public signals. Missing files are
/// reported before any of them is parsed.
pub fn load_artifacts(paths: &ArtifactPaths) -> ConvertResult<Artifacts> {
    for path in paths.inputs() {
        if !path.is_file() {
            return Err(ConvertError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
    }
    tracing::info!(vkey = %paths.vkey.display(), "loading verification key and proof");
    Ok(Artifacts {
        vkey: read_json(&paths.vkey)?,
        proof: read_json(&paths.proof)?,
        public_signals: read_json(&paths.public)?,
    })
}

fn parse_decimal(s: &str, config: &LimbConfig, location: &str) -> ConvertResult<FieldElement> {
    s.parse().map_err(|e| match e {
        ParseFieldElementError::Negative(value) => ConvertError::ValueOutOfRange {
            location: location.to_string(),
            value,
            capacity_bits: config.capacity_bits(),
        },
        other => ConvertError::coordinate(location, other.to_string()),
    })
}

pub fn parse_coordinate(
    coord: &Coordinate,
    config: &LimbConfig,
    location: &str,
) -> ConvertResult<FieldElement> {
    match coord {
        Coordinate::Decimal(s) => parse_decimal(s, config, location),
        Coordinate::Limbs(raw) => {
            let limbs = limbs_from_strings(raw, config, location)?;
            Ok(decode_limbs(&limbs, config))
        }
        Coordinate::Other(v) => Err(ConvertError::coordinate(
            location,
            format!("expected decimal string or limb array, got {v}"),
        )),
    }
}

fn parse_fp2(raw: &[Coordinate], config: &LimbConfig, location: &str) -> ConvertResult<Fp2Element> {
    let [c0, c1] = raw else {
        return Err(ConvertError::coordinate(
            location,
            format!("expected [c0, c1], got {} entries", raw.len()),
        ));
    };
    Ok(Fp2Element::new(
        parse_coordinate(c0, config, &format!("{location}[0]"))?,
        parse_coordinate(c1, config, &format!("{location}[1]"))?,
    ))
}

/// `["x", "y", "z"]` → [`G1Point`].
pub fn parse_g1(raw: &[Coordinate], config: &LimbConfig, location: &str) -> ConvertResult<G1Point> {
    let [x, y, z] = raw else {
        return Err(ConvertError::coordinate(
            location,
            format!("expected [x, y, z], got {} entries", raw.len()),
        ));
    };
    let x = parse_coordinate(x, config, &format!("{location}[0]"))?;
    let y = parse_coordinate(y, config, &format!("{location}[1]"))?;
    let z = parse_coordinate(z, config, &format!("{location}[2]"))?;
    if !z.is_zero() && !z.is_one() {
        tracing::warn!(
            %location,
            %z,
            "homogeneous coordinate is neither 0 nor 1, reading x and y as affine"
        );
    }
    Ok(G1Point::from_homogeneous(x, y, &z))
}

/// `[[x0,x1], [y0,y1], [z0,z1]]` → [`G2Point`].
pub fn parse_g2(
    raw: &[Vec<Coordinate>],
    config: &LimbConfig,
    location: &str,
) -> ConvertResult<G2Point> {
    let [x, y, z] = raw else {
        return Err(ConvertError::coordinate(
            location,
            format!("expected [x, y, z], got {} entries", raw.len()),
        ));
    };
    let x = parse_fp2(x, config, &format!("{location}[0]"))?;
    let y = parse_fp2(y, config, &format!("{location}[1]"))?;
    let z = parse_fp2(z, config, &format!("{location}[2]"))?;
    if !z.is_zero() && !(z.c0.is_one() && z.c1.is_zero()) {
        tracing::warn!(
            %location,
            "homogeneous coordinate is neither [0,0] nor [1,0], reading x and y as affine"
        );
    }
    Ok(G2Point::from_homogeneous(x, y, &z))
}

/// Validate public signals; the returned strings are the inputs unchanged.
pub fn parse_public_signals(
    raw: &[serde_json::Value],
    config: &LimbConfig,
) -> ConvertResult<Vec<String>> {
    raw.iter()
        .enumerate()
        .map(|(i, v)| {
            let location = format!("publicSignals[{i}]");
            match v {
                serde_json::Value::String(s) => {
                    parse_decimal(s, config, &location)?;
                    Ok(s.clone())
                }
                other => Err(ConvertError::coordinate(
                    &location,
                    format!("expected decimal string, got {other}"),
                )),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coords(v: serde_json::Value) -> Vec<Coordinate> {
        serde_json::from_value(v).unwrap()
    }

    fn coords2(v: serde_json::Value) -> Vec<Vec<Coordinate>> {
        serde_json::from_value(v).unwrap()
    }

    fn fe(v: u64) -> FieldElement {
        FieldElement::from(v)
    }

    #[test]
    fn coordinate_variants() {
        let c: Vec<Coordinate> =
            serde_json::from_value(json!(["5", ["1", "0", "0", "0", "0", "0"], 7])).unwrap();
        assert_eq!(c[0], Coordinate::Decimal("5".into()));
        assert!(matches!(c[1], Coordinate::Limbs(_)));
        assert!(matches!(c[2], Coordinate::Other(_)));
    }

    #[test]
    fn g1_affine() {
        let cfg = LimbConfig::bn254();
        let p = parse_g1(&coords(json!(["5", "7", "1"])), &cfg, "vk_alpha_1").unwrap();
        assert_eq!(p, G1Point::affine(fe(5), fe(7)));
    }

    #[test]
    fn g1_infinity() {
        let cfg = LimbConfig::bn254();
        let p = parse_g1(&coords(json!(["0", "1", "0"])), &cfg, "pi_c").unwrap();
        assert!(p.is_infinity());
    }

    #[test]
    fn g1_pre_encoded_coordinate() {
        let cfg = LimbConfig::bn254();
        let raw = coords(json!([["3", "1", "0", "0", "0", "0"], "9", "1"]));
        let p = parse_g1(&raw, &cfg, "pi_a").unwrap();
        let x = FieldElement::from(3u64 + (1u64 << 43));
        assert_eq!(p, G1Point::affine(x, fe(9)));
    }

    #[test]
    fn g1_wrong_arity() {
        let cfg = LimbConfig::bn254();
        let err = parse_g1(&coords(json!(["5", "7"])), &cfg, "pi_a").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidCoordinateFormat { .. }));
    }

    #[test]
    fn g1_invalid_coordinate_type() {
        let cfg = LimbConfig::bn254();
        let err = parse_g1(&coords(json!(["5", {"y": 7}, "1"])), &cfg, "IC[0]").unwrap_err();
        match err {
            ConvertError::InvalidCoordinateFormat { location, .. } => {
                assert_eq!(location, "IC[0][1]")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn g1_hex_coordinate_rejected() {
        let cfg = LimbConfig::bn254();
        let err = parse_g1(&coords(json!(["0x05", "7", "1"])), &cfg, "pi_a").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidCoordinateFormat { .. }));
    }

    #[test]
    fn negative_coordinate_out_of_range() {
        let cfg = LimbConfig::bn254();
        let err = parse_g1(&coords(json!(["-5", "7", "1"])), &cfg, "pi_a").unwrap_err();
        assert!(matches!(err, ConvertError::ValueOutOfRange { .. }));
    }

    #[test]
    fn g2_affine_and_infinity() {
        let cfg = LimbConfig::bn254();
        let affine = coords2(json!([["1", "2"], ["3", "4"], ["1", "0"]]));
        let p = parse_g2(&affine, &cfg, "pi_b").unwrap();
        assert_eq!(
            p,
            G2Point::affine(Fp2Element::new(fe(1), fe(2)), Fp2Element::new(fe(3), fe(4)))
        );

        let zero_z = coords2(json!([["1", "2"], ["3", "4"], ["0", "0"]]));
        let inf = parse_g2(&zero_z, &cfg, "pi_b").unwrap();
        assert!(inf.is_infinity());

        let half_z = coords2(json!([["1", "2"], ["3", "4"], ["0", "1"]]));
        let not_inf = parse_g2(&half_z, &cfg, "pi_b").unwrap();
        assert!(!not_inf.is_infinity());
    }

    #[test]
    fn g2_wrong_fp2_arity() {
        let cfg = LimbConfig::bn254();
        let short_x = coords2(json!([["1"], ["3", "4"], ["1", "0"]]));
        let err = parse_g2(&short_x, &cfg, "vk_beta_2").unwrap_err();
        match err {
            ConvertError::InvalidCoordinateFormat { location, .. } => {
                assert_eq!(location, "vk_beta_2[0]")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn public_signals_pass_through() {
        let cfg = LimbConfig::bn254();
        let raw = vec![json!("33"), json!("0")];
        assert_eq!(parse_public_signals(&raw, &cfg).unwrap(), vec!["33", "0"]);

        let bad = vec![json!("33"), json!(12)];
        assert!(matches!(
            parse_public_signals(&bad, &cfg).unwrap_err(),
            ConvertError::InvalidCoordinateFormat { .. }
        ));
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json::<serde_json::Value>(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { .. }));
    }

    #[test]
    fn malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_json::<serde_json::Value>(&path).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedJson { .. }));
    }
}
