use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Args;
use rpassword::prompt_password;
use shared::models::LoginRequest;
use shared::{ClientConfig, NavTarget, RentDeskClient, SessionManager, SessionState};

use crate::token_store::FileTokenStore;

pub type CliSession = SessionManager<FileTokenStore, RentDeskClient>;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Bearer token to store instead of signing in with credentials
    #[arg(long, conflicts_with = "email")]
    pub token: Option<String>,

    /// Account email; the password is prompted
    #[arg(long, short)]
    pub email: Option<String>,
}

pub fn session_manager(config: &ClientConfig) -> CliSession {
    SessionManager::new(
        FileTokenStore::for_config(config),
        RentDeskClient::from_config(config),
    )
}

pub async fn login(config: &ClientConfig, args: LoginArgs) -> Result<()> {
    let manager = session_manager(config);

    let token = match args.token {
        Some(token) => token,
        None => {
            let email = match args.email {
                Some(email) => email,
                None => prompt("Email: ")?,
            };
            let password = prompt_password("Password: ")?;
            if password.trim().is_empty() {
                bail!("password must not be empty");
            }
            manager
                .api()
                .login(&LoginRequest { email, password })
                .await
                .context("login failed")?
                .token
        }
    };

    let session = manager.login(&token).await;
    if !session.is_authenticated() {
        bail!("not authenticated: the token was rejected");
    }
    print_session(&session, &manager);
    Ok(())
}

pub async fn status(config: &ClientConfig) -> Result<()> {
    let manager = session_manager(config);
    let session = manager.resolve().await;
    print_session(&session, &manager);
    Ok(())
}

pub fn logout(config: &ClientConfig) -> Result<()> {
    let manager = session_manager(config);
    let path = manager.store().path().to_path_buf();
    let had_token = path.exists();
    manager.logout();

    if had_token {
        println!("Logged out, removed token at {}", path.display());
    } else {
        println!("No stored token at {}", path.display());
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim().to_string();
    if trimmed.is_empty() {
        bail!("input must not be empty");
    }
    Ok(trimmed)
}

fn print_session(session: &SessionState, manager: &CliSession) {
    match session {
        SessionState::Authenticated { user } => {
            println!("Authenticated as {} <{}>", user.full_name(), user.email);
            println!("role: {}", user.role);
            println!("landing page: {}", NavTarget::landing_for(user.role).path());
            println!("token stored at {}", manager.store().path().display());
        }
        SessionState::Unauthenticated | SessionState::Loading => {
            println!("Not authenticated");
        }
    }
}
