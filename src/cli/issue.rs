//! Issue command - signs a session token for a user

use std::process::ExitCode;

use clap::Args;

use crate::domain::{TokenIssuer, User};

#[derive(Debug, Args)]
pub struct IssueArgs {
    /// User email address
    #[arg(long)]
    pub email: String,

    /// Numeric user ID
    #[arg(long)]
    pub user_id: i64,

    /// Numeric role ID
    #[arg(long)]
    pub role_id: i64,

    /// Nickname, used as the token subject
    #[arg(long)]
    pub nickname: String,
}

impl IssueArgs {
    pub fn to_user(&self) -> User {
        User::new(&self.email, self.user_id, self.role_id, &self.nickname)
    }
}

/// Print a freshly signed token on stdout
pub fn run(issuer: &dyn TokenIssuer, args: IssueArgs) -> anyhow::Result<ExitCode> {
    let token = issuer.issue(&args.to_user())?;
    println!("{}", token);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::auth::JwtTokenIssuer;

    #[test]
    fn test_args_to_user() {
        let args = IssueArgs {
            email: "ada@climatetree.org".to_string(),
            user_id: 42,
            role_id: 2,
            nickname: "ada".to_string(),
        };

        assert_eq!(args.to_user(), User::new("ada@climatetree.org", 42, 2, "ada"));
    }

    #[test]
    fn test_run_succeeds() {
        let issuer = JwtTokenIssuer::with_default_config().unwrap();
        let args = IssueArgs {
            email: "ada@climatetree.org".to_string(),
            user_id: 42,
            role_id: 2,
            nickname: "ada".to_string(),
        };

        assert!(run(&issuer, args).is_ok());
    }
}
