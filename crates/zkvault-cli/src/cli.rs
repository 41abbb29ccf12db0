use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use zkvault_core::VERSION;

/// zkvault - Encrypt and decrypt vault envelopes locally with a password-derived key
#[derive(Parser)]
#[command(name = "zkvault")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "ZKVAULT_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Password and salt sources shared by key-using commands
#[derive(Args)]
pub struct KeyArgs {
    /// Base64 salt issued by the identity service
    #[arg(long, env = "ZKVAULT_SALT", hide_env_values = true)]
    pub salt: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Plaintext to encrypt (otherwise read from stdin)
    #[arg(long)]
    pub text: Option<String>,

    /// Pretty-print the envelope
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// File holding the envelope (otherwise read from stdin)
    #[arg(long, value_name = "FILE")]
    pub envelope: Option<String>,
}

/// Arguments for the `inspect` command
#[derive(Args)]
pub struct InspectArgs {
    /// File holding the envelope (otherwise read from stdin)
    #[arg(long, value_name = "FILE")]
    pub envelope: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt plaintext into a vault envelope
    Encrypt(EncryptArgs),

    /// Decrypt a vault envelope
    Decrypt(DecryptArgs),

    /// Check an envelope's structure without decrypting it
    Inspect(InspectArgs),

    /// Print the effective configuration
    Config,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
