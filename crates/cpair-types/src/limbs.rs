use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Limbs per base-field element in the circom-pairing BN254 circuits.
pub const BN254_LIMBS: usize = 6;
/// Bits per limb.
pub const BN254_LIMB_BITS: u32 = 43;

/// Little-endian limbs of a multi-precision integer (`limbs[0]` least
/// significant). Serialized as an array of decimal strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LimbVector(Vec<u64>);

impl LimbVector {
    pub fn new(limbs: Vec<u64>) -> Self {
        Self(limbs)
    }

    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn limbs(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&l| l == 0)
    }
}

impl Serialize for LimbVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for limb in &self.0 {
            seq.serialize_element(&limb.to_string())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for LimbVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|s| s.parse::<u64>().map_err(|e| D::Error::custom(format!("limb {s:?}: {e}"))))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// `[c0_limbs, c1_limbs]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedFp2(pub [LimbVector; 2]);

/// `[x_limbs, y_limbs]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedG1(pub [LimbVector; 2]);

/// `[[x.c0, x.c1], [y.c0, y.c1]]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedG2(pub [EncodedFp2; 2]);

/// Six Fp2 coefficients, `w^0` first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedFp12(pub [EncodedFp2; 6]);

impl EncodedFp2 {
    pub fn zeros(limbs: usize) -> Self {
        Self([LimbVector::zeros(limbs), LimbVector::zeros(limbs)])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(LimbVector::is_zero)
    }
}

impl EncodedG1 {
    pub fn zeros(limbs: usize) -> Self {
        Self([LimbVector::zeros(limbs), LimbVector::zeros(limbs)])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(LimbVector::is_zero)
    }

    pub fn limbs_per_element(&self) -> usize {
        self.0[0].len()
    }
}

impl EncodedG2 {
    pub fn zeros(limbs: usize) -> Self {
        Self([EncodedFp2::zeros(limbs), EncodedFp2::zeros(limbs)])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(EncodedFp2::is_zero)
    }

    pub fn limbs_per_element(&self) -> usize {
        self.0[0].0[0].len()
    }
}

impl EncodedFp12 {
    pub fn zeros(limbs: usize) -> Self {
        Self(core::array::from_fn(|_| EncodedFp2::zeros(limbs)))
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(EncodedFp2::is_zero)
    }

    pub fn limbs_per_element(&self) -> usize {
        self.0[0].0[0].len()
    }
}
