//! Reservations command - a guest's past stays

use anyhow::{Context as _, Result};
use clap::Parser;
use lightbnb_store::models::DEFAULT_LIMIT;
use std::process::ExitCode;

use super::Context;
use crate::output::print_many;

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    pub guest_id: i32,

    /// Maximum number of reservations (0-100)
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

pub async fn run_reservations(args: ReservationsArgs, ctx: &Context) -> Result<ExitCode> {
    let reservations = ctx
        .store
        .get_all_reservations(args.guest_id, args.limit)
        .await
        .with_context(|| format!("failed to list reservations for guest #{}", args.guest_id))?;

    print_many(ctx.format, &reservations)?;
    Ok(ExitCode::SUCCESS)
}
