//! Inspect command - prints the verified claims of a token

use std::process::ExitCode;

use clap::Args;

use crate::domain::{ClaimName, TokenIssuer};

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Compact session token
    #[arg(long)]
    pub token: String,

    /// Print a single claim (e.g. `email`, `sub`, `exp`) instead of all claims
    #[arg(long)]
    pub claim: Option<ClaimName>,
}

/// Render the claims of a verified token; expiry is not checked
pub fn render(issuer: &dyn TokenIssuer, args: &InspectArgs) -> anyhow::Result<String> {
    match args.claim {
        Some(name) => Ok(issuer.get_claim(&args.token, name)?.to_string()),
        None => {
            let claims = issuer.get_claims(&args.token)?;
            Ok(serde_json::to_string_pretty(&claims)?)
        }
    }
}

pub fn run(issuer: &dyn TokenIssuer, args: InspectArgs) -> anyhow::Result<ExitCode> {
    println!("{}", render(issuer, &args)?);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TokenError, User};
    use crate::infrastructure::auth::JwtTokenIssuer;

    fn issue(issuer: &JwtTokenIssuer) -> String {
        issuer
            .issue(&User::new("ada@climatetree.org", 42, 2, "ada"))
            .unwrap()
    }

    #[test]
    fn test_render_all_claims() {
        let issuer = JwtTokenIssuer::with_default_config().unwrap();
        let args = InspectArgs {
            token: issue(&issuer),
            claim: None,
        };

        let rendered = render(&issuer, &args).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["sub"], "ada");
        assert_eq!(json["userId"], 42);
    }

    #[test]
    fn test_render_single_claim() {
        let issuer = JwtTokenIssuer::with_default_config().unwrap();
        let args = InspectArgs {
            token: issue(&issuer),
            claim: Some(ClaimName::Email),
        };

        assert_eq!(render(&issuer, &args).unwrap(), "ada@climatetree.org");
    }

    #[test]
    fn test_render_rejects_forged_token() {
        let issuer = JwtTokenIssuer::with_default_config().unwrap();
        let args = InspectArgs {
            token: "a.b.c".to_string(),
            claim: None,
        };

        let error = render(&issuer, &args).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<TokenError>(),
            Some(TokenError::Signature { .. })
        ));
    }
}
