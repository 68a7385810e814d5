pub mod convert;
pub mod limbs;
pub mod negate;
