//! CLI module for ClimateTree session tokens
//!
//! Provides subcommands working against the configured secret:
//! - `issue`: sign a token for a user
//! - `validate`: check a token against a nickname and the current time
//! - `inspect`: print the verified claims of a token

pub mod inspect;
pub mod issue;
pub mod validate;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::auth::JwtTokenIssuer;
use crate::infrastructure::logging;

/// ClimateTree session tokens - issue and validate signed user tokens
#[derive(Debug, Parser)]
#[command(name = "climatetree-auth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Issue a session token for a user
    Issue(issue::IssueArgs),

    /// Validate a session token for a nickname
    Validate(validate::ValidateArgs),

    /// Print the verified claims of a session token
    Inspect(inspect::InspectArgs),
}

/// Load `.env` and configuration, start logging and build the issuer
pub fn bootstrap() -> anyhow::Result<JwtTokenIssuer> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    let issuer = JwtTokenIssuer::new(config.token)?;
    tracing::debug!(lifetime = ?issuer.lifetime(), "Token issuer ready");

    Ok(issuer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issue() {
        let cli = Cli::try_parse_from([
            "climatetree-auth",
            "issue",
            "--email",
            "ada@climatetree.org",
            "--user-id",
            "42",
            "--role-id",
            "2",
            "--nickname",
            "ada",
        ])
        .unwrap();

        match cli.command {
            Command::Issue(args) => {
                assert_eq!(args.email, "ada@climatetree.org");
                assert_eq!(args.user_id, 42);
                assert_eq!(args.role_id, 2);
                assert_eq!(args.nickname, "ada");
            }
            other => panic!("Expected issue command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "climatetree-auth",
            "validate",
            "--token",
            "a.b.c",
            "--nickname",
            "ada",
        ])
        .unwrap();

        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.token, "a.b.c");
                assert_eq!(args.nickname, "ada");
            }
            other => panic!("Expected validate command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from([
            "climatetree-auth",
            "inspect",
            "--token",
            "a.b.c",
            "--claim",
            "email",
        ])
        .unwrap();

        match cli.command {
            Command::Inspect(args) => {
                assert_eq!(args.token, "a.b.c");
                assert_eq!(args.claim, Some(crate::domain::ClaimName::Email));
            }
            other => panic!("Expected inspect command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_inspect_without_claim() {
        let cli = Cli::try_parse_from(["climatetree-auth", "inspect", "--token", "a.b.c"]).unwrap();

        match cli.command {
            Command::Inspect(args) => assert_eq!(args.claim, None),
            other => panic!("Expected inspect command, got {:?}", other),
        }
    }

    #[test]
    fn test_inspect_rejects_unknown_claim() {
        let result = Cli::try_parse_from([
            "climatetree-auth",
            "inspect",
            "--token",
            "a.b.c",
            "--claim",
            "role",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_validate_has_no_email_flag() {
        let result = Cli::try_parse_from([
            "climatetree-auth",
            "validate",
            "--token",
            "a.b.c",
            "--nickname",
            "ada",
            "--email",
            "ada@climatetree.org",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_issue_requires_nickname() {
        let result = Cli::try_parse_from([
            "climatetree-auth",
            "issue",
            "--email",
            "ada@climatetree.org",
            "--user-id",
            "42",
            "--role-id",
            "2",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
