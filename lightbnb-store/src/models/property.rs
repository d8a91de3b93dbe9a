//! Property rows and insert payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Cents, UserId};

/// Primary key of `properties`
pub type PropertyId = i32;

/// Property record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Property {
    pub id: PropertyId,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: Cents,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// Property with its average review rating
///
/// `average_rating` is `None` only when the aggregate has nothing to average.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Payload for `add_property`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProperty {
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: Cents,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_serializes_flat() {
        let listing = PropertyListing {
            property: Property {
                id: 7,
                owner_id: 3,
                title: "Speed lamp".into(),
                description: None,
                thumbnail_photo_url: "https://img/thumb.jpg".into(),
                cover_photo_url: "https://img/cover.jpg".into(),
                cost_per_night: Cents::new(93_061),
                street: "536 Namsub Highway".into(),
                city: "Sotboske".into(),
                province: "Quebec".into(),
                post_code: "28142".into(),
                country: "Canada".into(),
                parking_spaces: 6,
                number_of_bathrooms: 4,
                number_of_bedrooms: 8,
            },
            average_rating: Some(4.1),
        };

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["cost_per_night"], 93_061);
        assert_eq!(json["average_rating"], 4.1);
    }

    #[test]
    fn new_property_counts_default_to_zero() {
        let json = serde_json::json!({
            "owner_id": 1,
            "title": "Cabin",
            "description": null,
            "thumbnail_photo_url": "t",
            "cover_photo_url": "c",
            "cost_per_night": 12_000,
            "street": "1 Lake Rd",
            "city": "Vancouver",
            "province": "BC",
            "post_code": "V5K",
            "country": "Canada"
        });
        let property: NewProperty = serde_json::from_value(json).unwrap();
        assert_eq!(property.cost_per_night, Cents::new(12_000));
        assert_eq!(property.parking_spaces, 0);
        assert_eq!(property.number_of_bedrooms, 0);
    }
}
