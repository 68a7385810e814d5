use core::fmt;
use core::str::FromStr;

use ark_bn254::Fq;
use ark_ff::PrimeField;
use num_bigint::BigUint;

/// BN254 base-field prime `p` (254 bits), read from the curve library.
pub fn bn254_base_modulus() -> BigUint {
    BigUint::from(Fq::MODULUS)
}

/// Non-negative integer as it appears in a snarkjs artifact.
///
/// Parsing only checks decimal syntax. Whether the value fits the limb
/// capacity or lies below the field modulus is checked where it is consumed,
/// so an oversized coordinate is reported as out of range rather than as a
/// syntax error.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement(pub BigUint);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseFieldElementError {
    #[error("empty string")]
    Empty,

    #[error("negative value {0}")]
    Negative(String),

    #[error("not a decimal integer: {0:?}")]
    NotDecimal(String),
}

impl FieldElement {
    pub fn zero() -> Self {
        Self(BigUint::default())
    }

    pub fn is_zero(&self) -> bool {
        self.0.bits() == 0
    }

    pub fn is_one(&self) -> bool {
        self.0 == BigUint::from(1u8)
    }

    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for FieldElement {
    type Err = ParseFieldElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseFieldElementError::Empty);
        }
        if let Some(rest) = s.strip_prefix('-') {
            return if all_digits(rest) {
                Err(ParseFieldElementError::Negative(s.to_string()))
            } else {
                Err(ParseFieldElementError::NotDecimal(s.to_string()))
            };
        }
        // num-bigint tolerates '+' and '_' separators; snarkjs never emits them
        if !all_digits(s) {
            return Err(ParseFieldElementError::NotDecimal(s.to_string()));
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or_else(|| ParseFieldElementError::NotDecimal(s.to_string()))
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BigUint> for FieldElement {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

/// `c0 + c1*u` with `u^2 = -1`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fp2Element {
    pub c0: FieldElement,
    pub c1: FieldElement,
}

impl Fp2Element {
    pub fn new(c0: FieldElement, c1: FieldElement) -> Self {
        Self { c0, c1 }
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }
}

/// Pairing result in `Fp12 = Fp2[w] / (w^6 - (9 + u))`.
///
/// `coeffs[i]` is the Fp2 coefficient of `w^i`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fp12Element {
    pub coeffs: [Fp2Element; 6],
}
