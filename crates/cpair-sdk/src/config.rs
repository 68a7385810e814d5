// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Conversion parameters and artifact locations.
//!
//! [`LimbConfig`] carries the limb count, limb width and field prime that
//! every component reads; nothing else in the crate hard-codes them.

use std::path::{Path, PathBuf};

use cpair_types::{bn254_base_modulus, BN254_LIMBS, BN254_LIMB_BITS};
use num_bigint::BigUint;

use crate::error::{ConvertError, ConvertResult};

pub const VKEY_FILE: &str = "vkey_raw.json";
pub const PROOF_FILE: &str = "proof_raw.json";
pub const PUBLIC_FILE: &str = "public_raw.json";
pub const OUTPUT_FILE: &str = "input.json";
pub const DEFAULT_BUILD_DIR: &str = "./build";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LimbConfig {
    limbs: usize,
    limb_bits: u32,
    modulus: BigUint,
}

impl LimbConfig {
    pub fn new(limbs: usize, limb_bits: u32, modulus: BigUint) -> ConvertResult<Self> {
        if !(1..=63).contains(&limb_bits) {
            return Err(ConvertError::InvalidConfig(format!(
                "limb width must be 1..=63 bits, got {limb_bits}"
            )));
        }
        if limbs == 0 {
            return Err(ConvertError::InvalidConfig("limb count must be positive".into()));
        }
        if modulus.bits() < 2 {
            return Err(ConvertError::InvalidConfig(format!("modulus {modulus} is too small")));
        }
        let capacity = limbs as u64 * limb_bits as u64;
        if capacity < modulus.bits() {
            return Err(ConvertError::InvalidConfig(format!(
                "{limbs} x {limb_bits}-bit limbs cannot hold a {}-bit modulus",
                modulus.bits()
            )));
        }
        Ok(Self {
            limbs,
            limb_bits,
            modulus,
        })
    }

    /// circom-pairing BN254 layout: 6 limbs of 43 bits over the base field.
    pub fn bn254() -> Self {
        Self {
            limbs: BN254_LIMBS,
            limb_bits: BN254_LIMB_BITS,
            modulus: bn254_base_modulus(),
        }
    }

    pub fn limbs(&self) -> usize {
        self.limbs
    }

    pub fn limb_bits(&self) -> u32 {
        self.limb_bits
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Total bits representable, `limbs * limb_bits`.
    pub fn capacity_bits(&self) -> u64 {
        self.limbs as u64 * self.limb_bits as u64
    }

    /// Largest value a single limb may hold.
    pub fn limb_mask(&self) -> u64 {
        (1u64 << self.limb_bits) - 1
    }
}

impl Default for LimbConfig {
    fn default() -> Self {
        Self::bn254()
    }
}

/// What the assembler does when `e(-alpha1, beta2)` cannot be computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairingFailurePolicy {
    /// Fail the whole conversion.
    #[default]
    Abort,
    /// Log the failure and emit an all-zero Fp12 in place of the result.
    Placeholder,
}

#[derive(Clone, Debug, Default)]
pub struct ConverterConfig {
    pub limbs: LimbConfig,
    pub on_pairing_failure: PairingFailurePolicy,
}

/// Input artifacts and output location for one conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub vkey: PathBuf,
    pub proof: PathBuf,
    pub public: PathBuf,
    pub output: PathBuf,
}

impl ArtifactPaths {
    /// `<dir>/vkey_raw.json`, `<dir>/proof_raw.json`, `<dir>/public_raw.json`,
    /// written to `./input.json`.
    pub fn from_build_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vkey: dir.join(VKEY_FILE),
            proof: dir.join(PROOF_FILE),
            public: dir.join(PUBLIC_FILE),
            output: PathBuf::from(OUTPUT_FILE),
        }
    }

    pub fn inputs(&self) -> [&Path; 3] {
        [&self.vkey, &self.proof, &self.public]
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::from_build_dir(DEFAULT_BUILD_DIR)
    }
}
