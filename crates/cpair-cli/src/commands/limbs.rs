use anyhow::{Context, Result};
use cpair_sdk::limbs::{decode_limbs, encode_limbs, limbs_from_strings};
use cpair_sdk::{FieldElement, LimbConfig};

use crate::output;

fn encode_value(value: &str, config: &LimbConfig) -> Result<Vec<String>> {
    let value: FieldElement = value
        .parse()
        .with_context(|| format!("invalid decimal value {value:?}"))?;
    let limbs = encode_limbs(&value, config)?;
    Ok(limbs.limbs().iter().map(u64::to_string).collect())
}

fn decode_value(limbs: &[String], config: &LimbConfig) -> Result<FieldElement> {
    let limbs = limbs_from_strings(limbs, config, "limbs")?;
    Ok(decode_limbs(&limbs, config))
}

pub fn encode(value: &str) -> Result<()> {
    let limbs = encode_value(value, &LimbConfig::bn254())?;
    if output::is_json() {
        output::json_output(serde_json::json!(limbs))?;
    } else {
        output::value(&limbs.join(" "));
    }
    Ok(())
}

pub fn decode(limbs: &[String]) -> Result<()> {
    let value = decode_value(limbs, &LimbConfig::bn254())?;
    if output::is_json() {
        output::json_output(serde_json::json!(value.to_decimal()))?;
    } else {
        output::value(&value.to_decimal());
    }
    Ok(())
}
