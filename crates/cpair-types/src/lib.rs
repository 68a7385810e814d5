//! Data model shared by the converter library and the `cpair` binary.
//!
//! Values read from snarkjs artifacts are kept as arbitrary-precision
//! integers ([`FieldElement`]) and grouped into curve points. The encoded
//! side ([`LimbVector`] and the `Encoded*` shapes) is what a
//! circom-pairing verifier circuit consumes.

pub mod field;
pub mod limbs;
pub mod point;

pub use field::{bn254_base_modulus, FieldElement, Fp12Element, Fp2Element, ParseFieldElementError};
pub use limbs::{
    EncodedFp12, EncodedFp2, EncodedG1, EncodedG2, LimbVector, BN254_LIMBS, BN254_LIMB_BITS,
};
pub use point::{G1Point, G2Point};
