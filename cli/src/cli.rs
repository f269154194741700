//! # CLI Interface
//!
//! Defines the command-line argument structure for `campustrust` using
//! `clap` derive. Supports five subcommands: `keygen`, `sponsor`, `status`,
//! `send`, and `version`.

use clap::{Args, Parser, Subcommand};

/// CampusTrust gasless transfer client.
///
/// Sends payments whose network fees are covered by the CampusTrust
/// sponsor account. The relayer completes the sponsor's half of each
/// atomic group; this binary only ever holds the user's key.
#[derive(Parser, Debug)]
#[command(
    name = "campustrust",
    about = "CampusTrust gasless transfer client",
    version,
    propagate_version = true
)]
pub struct CampusTrustCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Base URL of the sponsorship relayer.
    #[arg(long, global = true, env = "CAMPUSTRUST_RELAYER_URL")]
    pub relayer_url: Option<String>,

    /// Root URL of the backend serving `/api/health` and `/api/sponsor/info`.
    #[arg(long, global = true, env = "CAMPUSTRUST_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Base URL of the node REST API used for suggested params.
    #[arg(long, global = true, env = "CAMPUSTRUST_NODE_URL")]
    pub node_url: Option<String>,

    /// Log output format: `pretty` or `json`.
    #[arg(long, global = true, env = "CAMPUSTRUST_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fresh keypair and print its secret key and address.
    Keygen,
    /// Print the relayer's sponsor address.
    Sponsor,
    /// Report whether sponsorship is enabled and the sponsor's balance.
    Status,
    /// Send a sponsored payment.
    Send(SendArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `send` subcommand.
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// Receiver address.
    #[arg(long)]
    pub to: String,

    /// Amount in microunits.
    #[arg(long)]
    pub amount: u64,

    /// Optional UTF-8 note attached to the payment.
    #[arg(long)]
    pub note: Option<String>,

    /// Hex-encoded Ed25519 secret key of the sender.
    ///
    /// **Prefer the environment variable**; flags end up in shell history.
    #[arg(long, env = "CAMPUSTRUST_SECRET_KEY", hide_env_values = true)]
    pub secret_key: String,

    /// Print the relayer receipt as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        CampusTrustCli::command().debug_assert();
    }

    #[test]
    fn send_parses_required_flags() {
        let cli = CampusTrustCli::try_parse_from([
            "campustrust",
            "send",
            "--to",
            "RECEIVER",
            "--amount",
            "1000000",
            "--secret-key",
            "00",
            "--note",
            "lab fee",
        ])
        .unwrap();

        match cli.command {
            Commands::Send(args) => {
                assert_eq!(args.to, "RECEIVER");
                assert_eq!(args.amount, 1_000_000);
                assert_eq!(args.note.as_deref(), Some("lab fee"));
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = CampusTrustCli::try_parse_from([
            "campustrust",
            "status",
            "--relayer-url",
            "http://relayer.test/api/algo",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Status));
        assert_eq!(
            cli.global.relayer_url.as_deref(),
            Some("http://relayer.test/api/algo")
        );
        assert_eq!(cli.global.log_format, "json");
    }

    #[test]
    fn backend_url_is_separate_from_relayer_url() {
        let cli = CampusTrustCli::try_parse_from([
            "campustrust",
            "--backend-url",
            "http://backend.test",
            "--relayer-url",
            "http://backend.test/api/algo",
            "status",
        ])
        .unwrap();

        assert_eq!(cli.global.backend_url.as_deref(), Some("http://backend.test"));
        assert_eq!(
            cli.global.relayer_url.as_deref(),
            Some("http://backend.test/api/algo")
        );
    }
}
