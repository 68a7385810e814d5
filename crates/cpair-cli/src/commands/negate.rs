use anyhow::{Context, Result};
use cpair_sdk::field::negate;
use cpair_sdk::{FieldElement, LimbConfig};

use crate::output;

fn negate_value(value: &str, config: &LimbConfig) -> Result<FieldElement> {
    let value: FieldElement = value
        .parse()
        .with_context(|| format!("invalid decimal value {value:?}"))?;
    Ok(negate(&value, config.modulus())?)
}

pub fn run(value: &str) -> Result<()> {
    let negated = negate_value(value, &LimbConfig::bn254())?;
    if output::is_json() {
        output::json_output(serde_json::json!(negated.to_decimal()))?;
    } else {
        output::value(&negated.to_decimal());
    }
    Ok(())
}
