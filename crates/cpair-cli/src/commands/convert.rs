use std::path::{Path, PathBuf};

use anyhow::Result;
use cpair_sdk::{ArtifactPaths, ConvertError, Conversion, ConverterConfig, PairingFailurePolicy};
use serde_json::{json, Map, Value};

use crate::output;

pub struct Args {
    pub build_dir: PathBuf,
    pub vkey: Option<PathBuf>,
    pub proof: Option<PathBuf>,
    pub public: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub allow_placeholder: bool,
}

fn artifact_paths(args: &Args) -> ArtifactPaths {
    let mut paths = ArtifactPaths::from_build_dir(&args.build_dir);
    if let Some(vkey) = &args.vkey {
        paths.vkey = vkey.clone();
    }
    if let Some(proof) = &args.proof {
        paths.proof = proof.clone();
    }
    if let Some(public) = &args.public {
        paths.public = public.clone();
    }
    if let Some(out) = &args.out {
        paths.output = out.clone();
    }
    paths
}

fn summary(conversion: &Conversion, output: &Path) -> Value {
    let shapes: Map<String, Value> = conversion
        .input
        .shapes()
        .into_iter()
        .map(|(field, shape)| (field.to_string(), Value::String(shape)))
        .collect();
    json!({
        "output": output.display().to_string(),
        "pairing_placeholder": conversion.pairing_placeholder,
        "public_inputs": conversion.input.pub_input.len(),
        "shapes": shapes,
    })
}

pub fn run(args: Args) -> Result<()> {
    let paths = artifact_paths(&args);
    let config = ConverterConfig {
        on_pairing_failure: if args.allow_placeholder {
            PairingFailurePolicy::Placeholder
        } else {
            PairingFailurePolicy::Abort
        },
        ..ConverterConfig::default()
    };

    tracing::debug!(?paths, "resolved artifact paths");

    let pb = output::spinner("converting verification key and proof...")?;
    let result = cpair_sdk::convert(&paths, &config);
    pb.finish_and_clear();

    let conversion = match result {
        Ok(c) => c,
        Err(e @ ConvertError::InputNotFound { .. }) => {
            return Err(output::fail_with_hint(
                &e.to_string(),
                "run the proof generation step first",
            ));
        }
        Err(e @ ConvertError::PairingComputationFailed(_)) => {
            return Err(output::fail_with_hint(
                &e.to_string(),
                "pass --allow-placeholder to write an all-zero negalfa1xbeta2",
            ));
        }
        Err(e) => return Err(e.into()),
    };

    if output::is_json() {
        output::json_output(summary(&conversion, &paths.output))?;
    } else {
        output::success(&format!("wrote {}", paths.output.display()));
        for (field, shape) in conversion.input.shapes() {
            output::label(field, &shape);
        }
        if conversion.pairing_placeholder {
            output::warn(
                "negalfa1xbeta2 is an all-zero placeholder; the verifier will reject this input",
            );
        }
    }
    Ok(())
}
