// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifier input assembly: snarkjs artifacts → circom-pairing `input.json`.
//!
//! Steps run in a fixed order: `gamma2`, `delta2`, `IC[..]`,
//! `negalfa1xbeta2 = e(-alpha1, beta2)`, `negpa = -pi_a`, `pb`, `pc`,
//! `pubInput`. The whole document is built in memory before anything is
//! written, so a failed conversion leaves no output behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use cpair_types::{EncodedFp12, EncodedG1, EncodedG2, G1Point};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::config::{ArtifactPaths, ConverterConfig, LimbConfig, PairingFailurePolicy};
use crate::encode::{encode_g1_at, encode_g2_at};
use crate::error::{ConvertError, ConvertResult, PairingError};
use crate::field::negate_g1_at;
use crate::pairing::{evaluate_pairing, pairing_placeholder, ArkBn254Pairing, PairingBackend};
use crate::snarkjs::{load_artifacts, parse_g1, parse_g2, parse_public_signals, Artifacts};

/// The `input.json` document consumed by the circom-pairing Groth16 verifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierInput {
    pub negalfa1xbeta2: EncodedFp12,
    pub gamma2: EncodedG2,
    pub delta2: EncodedG2,
    #[serde(rename = "IC")]
    pub ic: Vec<EncodedG1>,
    pub negpa: EncodedG1,
    pub pb: EncodedG2,
    pub pc: EncodedG1,
    #[serde(rename = "pubInput")]
    pub pub_input: Vec<String>,
}

impl VerifierInput {
    /// Pretty-printed JSON, two-space indent, fields in declaration order.
    pub fn to_json(&self) -> ConvertResult<String> {
        serde_json::to_string_pretty(self).map_err(ConvertError::Serialize)
    }

    /// Array shape of every field, e.g. `("IC", "[3][2][6]")`.
    pub fn shapes(&self) -> Vec<(&'static str, String)> {
        let k = self.gamma2.limbs_per_element();
        vec![
            ("negalfa1xbeta2", format!("[6][2][{k}]")),
            ("gamma2", format!("[2][2][{k}]")),
            ("delta2", format!("[2][2][{k}]")),
            ("IC", format!("[{}][2][{k}]", self.ic.len())),
            ("negpa", format!("[2][{k}]")),
            ("pb", format!("[2][2][{k}]")),
            ("pc", format!("[2][{k}]")),
            ("pubInput", format!("[{}]", self.pub_input.len())),
        ]
    }
}

/// Result of one conversion.
#[derive(Clone, Debug)]
pub struct Conversion {
    pub input: VerifierInput,
    /// `negalfa1xbeta2` is the all-zero placeholder, not a real pairing.
    pub pairing_placeholder: bool,
}

pub struct Assembler<'a, B: PairingBackend + ?Sized> {
    config: &'a ConverterConfig,
    backend: &'a B,
}

impl<'a, B: PairingBackend + ?Sized> Assembler<'a, B> {
    pub fn new(config: &'a ConverterConfig, backend: &'a B) -> Self {
        Self { config, backend }
    }

    pub fn assemble(&self, artifacts: &Artifacts) -> ConvertResult<Conversion> {
        let limbs = &self.config.limbs;
        let vkey = &artifacts.vkey;
        let proof = &artifacts.proof;
        check_metadata(artifacts)?;

        tracing::info!("converting verification key");

        tracing::info!("converting gamma2");
        let gamma2 = encode_g2_at(
            &parse_g2(&vkey.vk_gamma_2, limbs, "vk_gamma_2")?,
            limbs,
            "vk_gamma_2",
        )?;

        tracing::info!("converting delta2");
        let delta2 = encode_g2_at(
            &parse_g2(&vkey.vk_delta_2, limbs, "vk_delta_2")?,
            limbs,
            "vk_delta_2",
        )?;

        tracing::info!(count = vkey.ic.len(), "converting IC points");
        let ic = vkey
            .ic
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let location = format!("IC[{i}]");
                tracing::debug!(%location, "converting");
                encode_g1_at(&parse_g1(raw, limbs, &location)?, limbs, &location)
            })
            .collect::<ConvertResult<Vec<_>>>()?;

        tracing::info!("computing negalfa1xbeta2 = e(-alpha1, beta2)");
        let alpha1 = parse_g1(&vkey.vk_alpha_1, limbs, "vk_alpha_1")?;
        let beta2 = parse_g2(&vkey.vk_beta_2, limbs, "vk_beta_2")?;
        let pairing = negate_alpha1(&alpha1, limbs)
            .and_then(|neg_alpha1| evaluate_pairing(self.backend, &neg_alpha1, &beta2, limbs));
        let (negalfa1xbeta2, placeholder_used) = match pairing {
            Ok(f) => (f, false),
            Err(ConvertError::PairingComputationFailed(e)) => {
                tracing::error!(error = %e, "pairing computation failed");
                match self.config.on_pairing_failure {
                    PairingFailurePolicy::Abort => return Err(e.into()),
                    PairingFailurePolicy::Placeholder => {
                        tracing::warn!("using all-zero placeholder for negalfa1xbeta2");
                        (pairing_placeholder(limbs), true)
                    }
                }
            }
            Err(e) => return Err(e),
        };

        tracing::info!("converting proof");

        tracing::info!("converting pi_a to negpa");
        let pi_a = parse_g1(&proof.pi_a, limbs, "pi_a")?;
        let negpa = encode_g1_at(&negate_g1_at(&pi_a, limbs.modulus(), "pi_a")?, limbs, "pi_a")?;

        tracing::info!("converting pi_b to pb");
        let pb = encode_g2_at(&parse_g2(&proof.pi_b, limbs, "pi_b")?, limbs, "pi_b")?;

        tracing::info!("converting pi_c to pc");
        let pc = encode_g1_at(&parse_g1(&proof.pi_c, limbs, "pi_c")?, limbs, "pi_c")?;

        let pub_input = parse_public_signals(&artifacts.public_signals, limbs)?;

        Ok(Conversion {
            input: VerifierInput {
                negalfa1xbeta2,
                gamma2,
                delta2,
                ic,
                negpa,
                pb,
                pc,
                pub_input,
            },
            pairing_placeholder: placeholder_used,
        })
    }
}

/// `-alpha1`. Coordinates beyond the limb capacity are fatal; an unreduced
/// `y` is a pairing input outside the field and follows the failure policy.
fn negate_alpha1(alpha1: &G1Point, limbs: &LimbConfig) -> ConvertResult<G1Point> {
    if let G1Point::Affine { x, y } = alpha1 {
        for (i, coord) in [x, y].into_iter().enumerate() {
            if coord.bits() > limbs.capacity_bits() {
                return Err(ConvertError::ValueOutOfRange {
                    location: format!("vk_alpha_1[{i}]"),
                    value: coord.to_decimal(),
                    capacity_bits: limbs.capacity_bits(),
                });
            }
        }
    }
    negate_g1_at(alpha1, limbs.modulus(), "vk_alpha_1").map_err(|e| match e {
        ConvertError::ValueOutOfRange { value, .. } => PairingError::NotInField(value).into(),
        other => other,
    })
}

fn check_metadata(artifacts: &Artifacts) -> ConvertResult<()> {
    let vkey = &artifacts.vkey;
    let proof = &artifacts.proof;

    for protocol in [&vkey.protocol, &proof.protocol].into_iter().flatten() {
        if !protocol.eq_ignore_ascii_case("groth16") {
            return Err(ConvertError::InvalidArtifact(format!(
                "unsupported protocol {protocol:?}, expected groth16"
            )));
        }
    }
    for curve in [&vkey.curve, &proof.curve].into_iter().flatten() {
        if !curve.eq_ignore_ascii_case("bn128") && !curve.eq_ignore_ascii_case("bn254") {
            return Err(ConvertError::InvalidArtifact(format!(
                "unsupported curve {curve:?}, expected bn128"
            )));
        }
    }
    if vkey.ic.is_empty() {
        return Err(ConvertError::InvalidArtifact("IC is empty".into()));
    }
    if let Some(n) = vkey.n_public {
        if n.checked_add(1) != Some(vkey.ic.len()) {
            return Err(ConvertError::InvalidArtifact(format!(
                "nPublic is {n} but IC has {} points",
                vkey.ic.len()
            )));
        }
    }
    let expected = vkey.ic.len() - 1;
    if artifacts.public_signals.len() != expected {
        tracing::warn!(
            expected,
            actual = artifacts.public_signals.len(),
            "public signal count does not match the verification key"
        );
    }
    Ok(())
}

/// Write `input` to `path` through a temp file in the same directory that is
/// persisted over `path` once fully written.
pub fn write_verifier_input(input: &VerifierInput, path: &Path) -> ConvertResult<()> {
    let json = input.to_json()?;
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(json.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ConvertError::Io(e.error))?;
    Ok(())
}

/// Load the artifacts named by `paths`, assemble them with the arkworks
/// BN254 backend and write the result to `paths.output`.
pub fn convert(paths: &ArtifactPaths, config: &ConverterConfig) -> ConvertResult<Conversion> {
    let artifacts = load_artifacts(paths)?;
    let conversion = {
        let backend = ArkBn254Pairing::load();
        Assembler::new(config, &backend).assemble(&artifacts)?
    };
    write_verifier_input(&conversion.input, &paths.output)?;
    tracing::info!(output = %paths.output.display(), "verifier input written");
    Ok(conversion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LimbConfig;
    use crate::encode::decode_g1;
    use crate::error::PairingError;
    use crate::snarkjs::{ProofJson, VerificationKeyJson};
    use cpair_types::{FieldElement, Fp12Element, G1Point, G2Point};
    use serde_json::json;

    /// Returns a fixed Fp12 so assembly runs on points that are not on the curve.
    struct FixedBackend;

    impl PairingBackend for FixedBackend {
        fn pairing(&self, _: &G1Point, _: &G2Point) -> Result<Fp12Element, PairingError> {
            let mut f = Fp12Element::default();
            f.coeffs[0].c0 = FieldElement::from(1);
            Ok(f)
        }
    }

    struct FailingBackend;

    impl PairingBackend for FailingBackend {
        fn pairing(&self, _: &G1Point, _: &G2Point) -> Result<Fp12Element, PairingError> {
            Err(PairingError::NotOnCurve("G1"))
        }
    }

    fn g2_json() -> serde_json::Value {
        json!([["1", "2"], ["3", "4"], ["1", "0"]])
    }

    fn artifacts(ic_len: usize) -> Artifacts {
        let ic: Vec<_> = (0..ic_len).map(|i| json!([(i + 10).to_string(), "20", "1"])).collect();
        let vkey: VerificationKeyJson = serde_json::from_value(json!({
            "protocol": "groth16",
            "curve": "bn128",
            "nPublic": ic_len - 1,
            "vk_alpha_1": ["5", "7", "1"],
            "vk_beta_2": g2_json(),
            "vk_gamma_2": g2_json(),
            "vk_delta_2": [["1", "2"], ["3", "4"], ["0", "0"]],
            "IC": ic,
        }))
        .unwrap();
        let proof: ProofJson = serde_json::from_value(json!({
            "pi_a": ["5", "7", "1"],
            "pi_b": g2_json(),
            "pi_c": ["0", "1", "0"],
            "protocol": "groth16",
        }))
        .unwrap();
        let public_signals = (1..ic_len).map(|i| json!(i.to_string())).collect();
        Artifacts {
            vkey,
            proof,
            public_signals,
        }
    }

    #[test]
    fn ic_shape_follows_vkey() {
        let config = ConverterConfig::default();
        let out = Assembler::new(&config, &FixedBackend).assemble(&artifacts(3)).unwrap();
        assert_eq!(out.input.ic.len(), 3);
        for p in &out.input.ic {
            assert_eq!(p.0.len(), 2);
            assert_eq!(p.limbs_per_element(), 6);
        }
        assert_eq!(out.input.pub_input, vec!["1", "2"]);
        assert!(!out.pairing_placeholder);
    }

    #[test]
    fn negpa_flips_y() {
        let config = ConverterConfig::default();
        let out = Assembler::new(&config, &FixedBackend).assemble(&artifacts(2)).unwrap();
        let p = LimbConfig::bn254().modulus().clone();
        assert_eq!(
            decode_g1(&out.input.negpa, &config.limbs),
            G1Point::affine(FieldElement::from(5), FieldElement::from(p - 7u8))
        );
    }

    #[test]
    fn infinity_points_are_zero() {
        let config = ConverterConfig::default();
        let out = Assembler::new(&config, &FixedBackend).assemble(&artifacts(2)).unwrap();
        assert!(out.input.delta2.is_zero());
        assert!(out.input.pc.is_zero());
        assert!(!out.input.gamma2.is_zero());
    }

    #[test]
    fn pairing_failure_aborts_by_default() {
        let config = ConverterConfig::default();
        let err = Assembler::new(&config, &FailingBackend).assemble(&artifacts(2)).unwrap_err();
        assert!(matches!(err, ConvertError::PairingComputationFailed(_)));
    }

    #[test]
    fn pairing_failure_placeholder() {
        let config = ConverterConfig {
            on_pairing_failure: PairingFailurePolicy::Placeholder,
            ..ConverterConfig::default()
        };
        let out = Assembler::new(&config, &FailingBackend).assemble(&artifacts(2)).unwrap();
        assert!(out.pairing_placeholder);
        assert!(out.input.negalfa1xbeta2.is_zero());
    }

    #[test]
    fn n_public_mismatch() {
        let config = ConverterConfig::default();
        let mut a = artifacts(3);
        a.vkey.n_public = Some(5);
        let err = Assembler::new(&config, &FixedBackend).assemble(&a).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidArtifact(_)));
    }

    #[test]
    fn n_public_at_usize_max() {
        let config = ConverterConfig::default();
        let mut a = artifacts(1);
        a.vkey.n_public = Some(usize::MAX);
        let err = Assembler::new(&config, &FixedBackend).assemble(&a).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidArtifact(_)));
    }

    fn unreduced_alpha(config: &ConverterConfig) -> ConvertResult<Conversion> {
        let mut a = artifacts(2);
        let p_plus_3 = LimbConfig::bn254().modulus().clone() + 3u32;
        a.vkey.vk_alpha_1 =
            serde_json::from_value(json!(["5", p_plus_3.to_string(), "1"])).unwrap();
        Assembler::new(config, &FixedBackend).assemble(&a)
    }

    #[test]
    fn unreduced_alpha_y_is_pairing_failure() {
        let err = unreduced_alpha(&ConverterConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::PairingComputationFailed(PairingError::NotInField(_))
        ));

        let config = ConverterConfig {
            on_pairing_failure: PairingFailurePolicy::Placeholder,
            ..ConverterConfig::default()
        };
        let out = unreduced_alpha(&config).unwrap();
        assert!(out.pairing_placeholder);
        assert!(out.input.negalfa1xbeta2.is_zero());
    }

    #[test]
    fn oversized_alpha_is_fatal_under_placeholder() {
        let config = ConverterConfig {
            on_pairing_failure: PairingFailurePolicy::Placeholder,
            ..ConverterConfig::default()
        };
        let mut a = artifacts(2);
        let too_big = num_bigint::BigUint::from(1u8) << 258u32;
        a.vkey.vk_alpha_1 = serde_json::from_value(json!(["5", too_big.to_string(), "1"])).unwrap();
        match Assembler::new(&config, &FixedBackend).assemble(&a).unwrap_err() {
            ConvertError::ValueOutOfRange { location, .. } => assert_eq!(location, "vk_alpha_1[1]"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_curve() {
        let config = ConverterConfig::default();
        let mut a = artifacts(2);
        a.vkey.curve = Some("bls12381".into());
        assert!(matches!(
            Assembler::new(&config, &FixedBackend).assemble(&a).unwrap_err(),
            ConvertError::InvalidArtifact(_)
        ));
    }

    #[test]
    fn output_key_order() {
        let config = ConverterConfig::default();
        let out = Assembler::new(&config, &FixedBackend).assemble(&artifacts(2)).unwrap();
        let json = out.input.to_json().unwrap();
        let keys = ["negalfa1xbeta2", "gamma2", "delta2", "IC", "negpa", "pb", "pc", "pubInput"];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.starts_with("{\n  \"negalfa1xbeta2\": [\n    [\n"));
    }

    #[test]
    fn shapes_summary() {
        let config = ConverterConfig::default();
        let out = Assembler::new(&config, &FixedBackend).assemble(&artifacts(3)).unwrap();
        let shapes = out.input.shapes();
        assert!(shapes.contains(&("IC", "[3][2][6]".to_string())));
        assert!(shapes.contains(&("negalfa1xbeta2", "[6][2][6]".to_string())));
        assert!(shapes.contains(&("pubInput", "[2]".to_string())));
    }

    #[test]
    fn write_replaces_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("input.json");
        let config = ConverterConfig::default();
        let out = Assembler::new(&config, &FixedBackend).assemble(&artifacts(2)).unwrap();

        write_verifier_input(&out.input, &path).unwrap();
        write_verifier_input(&out.input, &path).unwrap();

        let back: VerifierInput =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, out.input);
        let entries: Vec<_> = std::fs::read_dir(dir.path().join("out"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["input.json"]);
    }

    #[test]
    fn missing_inputs_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = ArtifactPaths::from_build_dir(dir.path());
        paths.output = dir.path().join("input.json");
        let err = convert(&paths, &ConverterConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { .. }));
        assert!(!paths.output.exists());
    }
}
