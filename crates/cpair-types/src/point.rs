use crate::field::{FieldElement, Fp2Element};

/// G1 point over the base field.
///
/// snarkjs marks the identity with a zero homogeneous coordinate; here it is
/// its own variant so a zero coordinate is never mistaken for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum G1Point {
    Infinity,
    Affine { x: FieldElement, y: FieldElement },
}

impl G1Point {
    pub fn affine(x: FieldElement, y: FieldElement) -> Self {
        Self::Affine { x, y }
    }

    /// Build from snarkjs `[x, y, z]`; `z == 0` is the identity.
    pub fn from_homogeneous(x: FieldElement, y: FieldElement, z: &FieldElement) -> Self {
        if z.is_zero() {
            Self::Infinity
        } else {
            Self::Affine { x, y }
        }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }
}

/// G2 point over the quadratic extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum G2Point {
    Infinity,
    Affine { x: Fp2Element, y: Fp2Element },
}

impl G2Point {
    pub fn affine(x: Fp2Element, y: Fp2Element) -> Self {
        Self::Affine { x, y }
    }

    /// Build from snarkjs `[[x0,x1],[y0,y1],[z0,z1]]`; identity when both
    /// `z0` and `z1` are zero.
    pub fn from_homogeneous(x: Fp2Element, y: Fp2Element, z: &Fp2Element) -> Self {
        if z.is_zero() {
            Self::Infinity
        } else {
            Self::Affine { x, y }
        }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }
}
