// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # cpair-sdk
//!
//! Converts a snarkjs Groth16 proof over **BN254** (verification key, proof,
//! public signals) into the limb-encoded `input.json` expected by a
//! circom-pairing Groth16 verifier circuit.
//!
//! Every base-field element becomes `K = 6` little-endian limbs of 43 bits,
//! each written as a decimal string. G1 points become `[2][K]`, G2 points
//! `[2][2][K]`, and the precomputed pairing `e(-alpha1, beta2)` `[6][2][K]`.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | [`limbs`] | Integer ↔ limb vector codec |
//! | [`field`] | Base-field negation, G1 point negation |
//! | [`encode`] | G1 / G2 / Fp12 → limb arrays (and back) |
//! | [`pairing`] | Pairing backend trait, arkworks BN254 backend |
//! | [`snarkjs`] | Artifact mirrors, coordinate parsing |
//! | [`assemble`] | Builds and writes the [`VerifierInput`] document |
//! | [`config`] | [`LimbConfig`], failure policy, artifact paths |
//! | [`error`] | [`ConvertError`] |
//!
//! ## Example
//!
//! ```rust,no_run
//! use cpair_sdk::{convert, ArtifactPaths, ConverterConfig};
//!
//! # fn example() -> cpair_sdk::ConvertResult<()> {
//! let paths = ArtifactPaths::from_build_dir("./build");
//! let conversion = convert(&paths, &ConverterConfig::default())?;
//! for (field, shape) in conversion.input.shapes() {
//!     println!("{field}: {shape}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod config;
pub mod encode;
pub mod error;
pub mod field;
pub mod limbs;
pub mod pairing;
pub mod snarkjs;

pub use cpair_types::{
    EncodedFp12, EncodedFp2, EncodedG1, EncodedG2, FieldElement, Fp12Element, Fp2Element, G1Point,
    G2Point, LimbVector,
};

pub use assemble::{convert, write_verifier_input, Assembler, Conversion, VerifierInput};
pub use config::{ArtifactPaths, ConverterConfig, LimbConfig, PairingFailurePolicy};
pub use error::{ConvertError, ConvertResult, PairingError};
pub use pairing::{evaluate_pairing, ArkBn254Pairing, PairingBackend};
