// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for artifact conversion.

use std::path::PathBuf;

/// Failure reported by a [`PairingBackend`](crate::pairing::PairingBackend).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairingError {
    #[error("coordinate {0} is not below the base-field modulus")]
    NotInField(String),

    #[error("{0} point is not on the curve")]
    NotOnCurve(&'static str),

    #[error("{0} point is not in the prime-order subgroup")]
    NotInSubgroup(&'static str),

    #[error("pairing backend: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("malformed JSON in {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid coordinate at {location}: {reason}")]
    InvalidCoordinateFormat { location: String, reason: String },

    #[error("value at {location} does not fit in {capacity_bits} bits: {value}")]
    ValueOutOfRange {
        location: String,
        value: String,
        capacity_bits: u64,
    },

    #[error("pairing computation failed: {0}")]
    PairingComputationFailed(#[from] PairingError),

    #[error("invalid artifact: {0}")]
    InvalidArtifact(String),

    #[error("invalid limb configuration: {0}")]
    InvalidConfig(String),

    #[error("serialize verifier input: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub(crate) fn coordinate(location: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinateFormat {
            location: location.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
