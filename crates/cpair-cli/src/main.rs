mod commands;
mod output;

use std::env;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use cpair_sdk::config::DEFAULT_BUILD_DIR;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cpair",
    about = "Convert snarkjs Groth16 artifacts into circom-pairing verifier input"
)]
struct Cli {
    /// Print machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Build input.json from a verification key, proof and public signals
    Convert {
        /// Directory holding vkey_raw.json, proof_raw.json and public_raw.json
        #[arg(long, default_value = DEFAULT_BUILD_DIR)]
        build_dir: PathBuf,
        /// Verification key (overrides --build-dir)
        #[arg(long)]
        vkey: Option<PathBuf>,
        /// Proof (overrides --build-dir)
        #[arg(long)]
        proof: Option<PathBuf>,
        /// Public signals (overrides --build-dir)
        #[arg(long)]
        public: Option<PathBuf>,
        /// Output file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Write an all-zero negalfa1xbeta2 if the pairing fails instead of aborting
        #[arg(long)]
        allow_placeholder: bool,
    },
    /// Limb codec helpers
    Limbs {
        #[command(subcommand)]
        command: LimbsCmd,
    },
    /// Negate a base-field element
    Negate {
        /// Decimal value below the field modulus
        value: String,
    },
}

#[derive(Subcommand)]
enum LimbsCmd {
    /// Split a decimal integer into 6 x 43-bit limbs
    Encode {
        /// Decimal value
        value: String,
    },
    /// Recombine limbs (least significant first)
    Decode {
        /// Decimal limbs
        #[arg(required = true)]
        limbs: Vec<String>,
    },
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let filter = match env::var_os("RUST_LOG") {
        Some(_) => EnvFilter::try_from_default_env()?,
        None => EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }),
    };

    tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    init_logging(cli.verbose)?;

    match cli.command {
        Cmd::Convert {
            build_dir,
            vkey,
            proof,
            public,
            out,
            allow_placeholder,
        } => commands::convert::run(commands::convert::Args {
            build_dir,
            vkey,
            proof,
            public,
            out,
            allow_placeholder,
        })?,
        Cmd::Limbs { command } => match command {
            LimbsCmd::Encode { value } => commands::limbs::encode(&value)?,
            LimbsCmd::Decode { limbs } => commands::limbs::decode(&limbs)?,
        },
        Cmd::Negate { value } => commands::negate::run(&value)?,
    }
    Ok(())
}
