//! CLI argument definitions.

use clap::{Parser, Subcommand};

pub mod prompts;

#[derive(Parser)]
#[command(name = "rolecall", version, about = "Role prompt store and companion API")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the companion HTTP API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1", env = "ROLECALL_HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 7450, env = "ROLECALL_PORT")]
        port: u16,
    },

    /// List the prompts configured for a guild
    Prompts {
        /// Guild id
        guild_id: u64,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}
