//! User commands - lookup by email or id, registration

use anyhow::{Context as _, Result};
use clap::{ArgGroup, Parser, Subcommand};
use lightbnb_store::NewUser;
use std::process::ExitCode;

use super::Context;
use crate::output::print_one;

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Look up a user by email (any casing) or by id
    Get(GetArgs),
    /// Register a new user
    Add(AddArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["email", "id"])))]
pub struct GetArgs {
    /// Email address, matched case-insensitively
    #[arg(long)]
    pub email: Option<String>,

    /// User id
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (stored lowercased)
    #[arg(long)]
    pub email: String,

    /// Password hash to store
    #[arg(long)]
    pub password: String,
}

pub async fn run_user(args: UserArgs, ctx: &Context) -> Result<ExitCode> {
    match args.command {
        UserCommand::Get(args) => run_get(args, ctx).await,
        UserCommand::Add(args) => run_add(args, ctx).await,
    }
}

async fn run_get(args: GetArgs, ctx: &Context) -> Result<ExitCode> {
    let user = match (&args.email, args.id) {
        (Some(email), _) => ctx
            .store
            .get_user_with_email(email)
            .await
            .with_context(|| format!("failed to look up user {email}"))?,
        (None, Some(id)) => ctx
            .store
            .get_user_with_id(id)
            .await
            .with_context(|| format!("failed to look up user #{id}"))?,
        (None, None) => anyhow::bail!("pass --email or --id"),
    };

    match user {
        Some(user) => {
            print_one(ctx.format, &user)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("user not found");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_add(args: AddArgs, ctx: &Context) -> Result<ExitCode> {
    let new_user = NewUser::new(args.name, &args.email, args.password)?;

    let user = ctx.store.add_user(&new_user).await.map_err(|err| {
        if err.is_unique_violation() {
            anyhow::anyhow!("a user with email {} already exists", new_user.email)
        } else {
            anyhow::Error::new(err).context("failed to add user")
        }
    })?;

    tracing::info!(id = user.id, "user added");
    print_one(ctx.format, &user)?;
    Ok(ExitCode::SUCCESS)
}
