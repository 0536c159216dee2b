//! Auth commands: login, whoami, logout.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::context::AppContext;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Credentials, User};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,
    /// Account password (or set HEARTH_PASSWORD)
    #[arg(short, long, env = "HEARTH_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

#[derive(Args, Debug)]
pub struct LogoutArgs {}

#[derive(Debug, Serialize)]
pub struct UserOutput {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&User> for UserOutput {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginOutput {
    pub user: UserOutput,
}

impl CommandOutput for LoginOutput {
    fn to_human(&self) -> String {
        format!("Logged in as {} ({})", self.user.name, self.user.role)
    }
}

#[derive(Debug, Serialize)]
pub struct WhoamiOutput {
    pub user: Option<UserOutput>,
}

impl CommandOutput for WhoamiOutput {
    fn to_human(&self) -> String {
        match &self.user {
            Some(user) => format!("{} <{}> ({})", user.name, user.email, user.role),
            None => "Not logged in.".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogoutOutput {
    pub logged_out: bool,
}

impl CommandOutput for LogoutOutput {
    fn to_human(&self) -> String {
        "Logged out.".to_string()
    }
}

pub async fn execute_login(args: LoginArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    let credentials = Credentials {
        email: args.email,
        password: args.password,
    };
    let user = ctx.session.login(&credentials).await?;
    output(
        &LoginOutput {
            user: UserOutput::from(&user),
        },
        json_mode,
    );
    Ok(())
}

pub async fn execute_whoami(_args: WhoamiArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    let user = ctx.session.current_user().await?;
    output(
        &WhoamiOutput {
            user: user.as_ref().map(UserOutput::from),
        },
        json_mode,
    );
    Ok(())
}

pub async fn execute_logout(_args: LogoutArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    ctx.session.logout().await?;
    output(&LogoutOutput { logged_out: true }, json_mode);
    Ok(())
}
