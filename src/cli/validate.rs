//! Validate command - checks a token against a nickname

use std::process::ExitCode;

use clap::Args;

use crate::domain::TokenError;
use crate::infrastructure::auth::JwtTokenIssuer;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Compact session token
    #[arg(long)]
    pub token: String,

    /// Nickname the token must belong to
    #[arg(long)]
    pub nickname: String,
}

/// Outcome of a validate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
    Unauthenticated(String),
}

impl Verdict {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Valid => ExitCode::SUCCESS,
            Self::Invalid => ExitCode::from(1),
            Self::Unauthenticated(_) => ExitCode::from(2),
        }
    }
}

/// Evaluate a token; misconfiguration is the only hard error
pub fn verdict(issuer: &JwtTokenIssuer, args: &ValidateArgs) -> Result<Verdict, TokenError> {
    match issuer.validate_nickname(&args.token, &args.nickname) {
        Ok(true) => Ok(Verdict::Valid),
        Ok(false) => Ok(Verdict::Invalid),
        Err(e) if e.is_unauthenticated() => Ok(Verdict::Unauthenticated(e.to_string())),
        Err(e) => Err(e),
    }
}

/// Print `valid`, `invalid` or `unauthenticated` and exit 0, 1 or 2
pub fn run(issuer: &JwtTokenIssuer, args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let verdict = verdict(issuer, &args)?;

    match &verdict {
        Verdict::Valid => println!("valid"),
        Verdict::Invalid => println!("invalid"),
        Verdict::Unauthenticated(reason) => {
            println!("unauthenticated");
            eprintln!("{}", reason);
        }
    }

    Ok(verdict.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::{MockClock, FIXED_ISSUED_AT};
    use crate::domain::{TokenIssuer, User};
    use crate::infrastructure::auth::TokenConfig;
    use chrono::DateTime;
    use std::sync::Arc;

    fn create_issuer() -> JwtTokenIssuer {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .return_const(DateTime::from_timestamp(FIXED_ISSUED_AT, 0).unwrap());

        JwtTokenIssuer::with_clock(TokenConfig::default(), Arc::new(clock)).unwrap()
    }

    fn args(token: &str, nickname: &str) -> ValidateArgs {
        ValidateArgs {
            token: token.to_string(),
            nickname: nickname.to_string(),
        }
    }

    #[test]
    fn test_verdicts() {
        let issuer = create_issuer();
        let token = issuer
            .issue(&User::new("ada@climatetree.org", 42, 2, "ada"))
            .unwrap();

        assert_eq!(verdict(&issuer, &args(&token, "ada")), Ok(Verdict::Valid));
        assert_eq!(verdict(&issuer, &args(&token, "bo")), Ok(Verdict::Invalid));
        assert!(matches!(
            verdict(&issuer, &args("not-a-token", "ada")),
            Ok(Verdict::Unauthenticated(_))
        ));
    }
}
