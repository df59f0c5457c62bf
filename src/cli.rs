use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "smkm", version, about = "Identity/license key manager: key file + smkm:// transport tokens")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a key file at the default path
    GenerateKey(GenerateKeyArgs),
    /// Decrypt and display the key file
    View(ViewArgs),
    /// Remove the key file
    RemoveKey(RemoveKeyArgs),
    /// Wrap plaintext into an smkm:// token
    Encode(EncodeArgs),
    /// Unwrap an smkm:// token back to plaintext
    Decode(DecodeArgs),
}

#[derive(Parser)]
pub struct GenerateKeyArgs {
    /// Password protecting the key file (random 32 characters if omitted)
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Human-readable label stored inside the record
    #[arg(long, default_value = crate::record::DEFAULT_KEY_NAME)]
    pub name: String,

    /// Overwrite an existing key file without confirmation
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser)]
pub struct ViewArgs {
    /// Key file password (prompts when omitted)
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,
}

#[derive(Parser)]
pub struct RemoveKeyArgs {
    /// Remove without confirmation
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Plaintext to wrap into the token
    #[arg(long, value_name = "TEXT")]
    pub data: String,

    /// Key file password (prompts when omitted)
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// smkm:// token to unwrap
    #[arg(long, value_name = "TOKEN")]
    pub data: String,

    /// Token password (prompts when omitted)
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,
}
