//! AntKey CLI
//!
//! Script-hash wallet generation and key inspection.

use antkey_address::{derive_wallet, generate_wallet, AddressScheme, Wallet};
use antkey_curve::CurveId;
use antkey_keys::PrivateKeyValue;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "antkey")]
#[command(version = "0.1.0")]
#[command(about = "Script-hash wallet address generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fresh wallets
    Generate {
        #[command(flatten)]
        scheme: SchemeArgs,

        /// Number of wallets to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Derive the wallet for an existing private key
    Derive {
        /// Private key (hex, compressed hex, or WIF)
        #[arg(short, long)]
        key: String,

        #[command(flatten)]
        scheme: SchemeArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SchemeArgs {
    /// Curve (secp256r1, secp256k1)
    #[arg(long, default_value = "secp256r1")]
    curve: CurveId,

    /// Address version byte
    #[arg(long, default_value = "23")]
    address_version: u8,

    /// WIF version byte offset (added to 0x80)
    #[arg(long, default_value = "0")]
    wif_version: u8,
}

impl From<SchemeArgs> for AddressScheme {
    fn from(args: SchemeArgs) -> Self {
        AddressScheme {
            curve: args.curve,
            address_version: args.address_version,
            wif_version: args.wif_version,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            scheme,
            count,
            json,
        } => cmd_generate(scheme.into(), count, json),
        Commands::Derive { key, scheme, json } => cmd_derive(&key, scheme.into(), json),
    }
}

fn cmd_generate(scheme: AddressScheme, count: usize, json_output: bool) -> Result<()> {
    for _ in 0..count {
        let wallet = generate_wallet(&scheme)?;
        if json_output {
            println!("{}", serde_json::to_string_pretty(&wallet)?);
        } else {
            print_wallet(&wallet);
        }
    }
    Ok(())
}

fn cmd_derive(key: &str, scheme: AddressScheme, json_output: bool) -> Result<()> {
    let wallet = derive_wallet(&PrivateKeyValue::from(key), &scheme)?;
    if json_output {
        println!("{}", serde_json::to_string_pretty(&wallet)?);
    } else {
        print_wallet(&wallet);
    }
    Ok(())
}

fn print_wallet(wallet: &Wallet) {
    println!("{:-<60}", "");
    println!("Address:     {}", wallet.address);
    println!("Script Hash: {}", wallet.script_hash);
    println!("Public Key:  {}", wallet.public_key);
    println!("Private Key: {}", wallet.private_key_wif);
    println!("Private Hex: {}", wallet.private_key_hex);
    println!("Curve:       {}", wallet.curve);
}
