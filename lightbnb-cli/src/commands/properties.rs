//! Property commands - filtered search and new listings
//!
//! Prices on the command line are whole dollars. They are stored and compared
//! in cents.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use lightbnb_store::models::DEFAULT_LIMIT;
use lightbnb_store::{Cents, NewProperty, PropertySearch};
use std::process::ExitCode;

use super::Context;
use crate::output::{print_many, print_one};

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommand,
}

#[derive(Subcommand, Debug)]
pub enum PropertiesCommand {
    /// Search properties, cheapest first
    Search(SearchArgs),
    /// Add a property listing
    Add(AddArgs),
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// City substring, case-insensitive
    #[arg(long)]
    pub city: Option<String>,

    /// Only properties owned by this user id
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Minimum price per night, in dollars
    #[arg(long)]
    pub min_price: Option<i32>,

    /// Maximum price per night, in dollars
    #[arg(long)]
    pub max_price: Option<i32>,

    /// Maximum number of properties (0-100)
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

impl SearchArgs {
    fn to_search(&self) -> PropertySearch {
        PropertySearch {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
        }
    }
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Owner user id
    #[arg(long)]
    pub owner_id: i32,

    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub thumbnail_photo_url: String,

    #[arg(long)]
    pub cover_photo_url: String,

    /// Price per night, in dollars
    #[arg(long)]
    pub cost_per_night: i32,

    #[arg(long)]
    pub street: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub province: String,

    #[arg(long)]
    pub post_code: String,

    #[arg(long)]
    pub country: String,

    #[arg(long, default_value_t = 0)]
    pub parking_spaces: i32,

    #[arg(long, default_value_t = 0)]
    pub number_of_bathrooms: i32,

    #[arg(long, default_value_t = 0)]
    pub number_of_bedrooms: i32,
}

impl AddArgs {
    fn into_new_property(self) -> Result<NewProperty> {
        Ok(NewProperty {
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            thumbnail_photo_url: self.thumbnail_photo_url,
            cover_photo_url: self.cover_photo_url,
            cost_per_night: Cents::from_dollars("cost_per_night", self.cost_per_night)?,
            street: self.street,
            city: self.city,
            province: self.province,
            post_code: self.post_code,
            country: self.country,
            parking_spaces: self.parking_spaces,
            number_of_bathrooms: self.number_of_bathrooms,
            number_of_bedrooms: self.number_of_bedrooms,
        })
    }
}

pub async fn run_properties(args: PropertiesArgs, ctx: &Context) -> Result<ExitCode> {
    match args.command {
        PropertiesCommand::Search(args) => run_search(args, ctx).await,
        PropertiesCommand::Add(args) => run_add(args, ctx).await,
    }
}

async fn run_search(args: SearchArgs, ctx: &Context) -> Result<ExitCode> {
    let properties = ctx
        .store
        .get_all_properties(&args.to_search(), args.limit)
        .await
        .context("property search failed")?;

    print_many(ctx.format, &properties)?;
    Ok(ExitCode::SUCCESS)
}

async fn run_add(args: AddArgs, ctx: &Context) -> Result<ExitCode> {
    let new_property = args.into_new_property()?;

    let property = ctx
        .store
        .add_property(&new_property)
        .await
        .context("failed to add property")?;

    tracing::info!(id = property.id, "property added");
    print_one(ctx.format, &property)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_args_map_to_options() {
        let args = SearchArgs {
            city: Some("van".into()),
            owner_id: None,
            min_price: Some(50),
            max_price: Some(150),
            limit: 10,
        };
        let search = args.to_search();
        assert_eq!(search.city.as_deref(), Some("van"));
        assert_eq!(search.minimum_price_per_night, Some(50));
        assert_eq!(search.maximum_price_per_night, Some(150));
    }
}
