//! Result printing: JSON for scripts, plain text for people

use anyhow::Result;
use lightbnb_store::{Property, PropertyListing, ReservationListing, User};
use serde::Serialize;

/// Output mode selected by the global `--json` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Things that know how to print themselves as a text line
pub trait Render {
    fn render(&self) -> String;
}

impl Render for User {
    fn render(&self) -> String {
        format!("#{} {} <{}>", self.id, self.name, self.email)
    }
}

impl Render for Property {
    fn render(&self) -> String {
        format!(
            "#{} {} - {}, {} - {}/night ({} bed, {} bath, {} parking)",
            self.id,
            self.title,
            self.city,
            self.province,
            self.cost_per_night,
            self.number_of_bedrooms,
            self.number_of_bathrooms,
            self.parking_spaces
        )
    }
}

impl Render for PropertyListing {
    fn render(&self) -> String {
        format!("{}  {}", self.property.render(), rating(self.average_rating))
    }
}

impl Render for ReservationListing {
    fn render(&self) -> String {
        format!(
            "{} → {}  #{} {} ({})  {}",
            self.reservation.start_date,
            self.reservation.end_date,
            self.property.id,
            self.property.title,
            self.property.city,
            rating(self.average_rating)
        )
    }
}

fn rating(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("★ {:.2}", avg),
        None => "★ -".to_string(),
    }
}

pub fn print_one<T: Serialize + Render>(format: Format, item: &T) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(item)?),
        Format::Text => println!("{}", item.render()),
    }
    Ok(())
}

pub fn print_many<T: Serialize + Render>(format: Format, items: &[T]) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(items)?),
        Format::Text if items.is_empty() => println!("(no results)"),
        Format::Text => {
            for item in items {
                println!("{}", item.render());
            }
        }
    }
    Ok(())
}
