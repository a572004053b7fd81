// src/domain/listing.rs

use crate::domain::geo::LatLng;
use serde::Deserialize;

// listing
//  ├── zpid
//  ├── address
//  │    └── streetAddress
//  ├── zipcode, bedrooms, bathrooms, price
//  ├── latitude, longitude
//  ├── photos[]
//  │    └── mixedSources
//  │         └── jpeg[] { url, width }
//  ├── description
//  ├── property[] { title, values[] }
//  └── schools[] { name, link, level, type, rating, distance }

/// One apartment record from the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    #[serde(rename = "zpid")]
    pub id: u64,
    pub address: Address,
    pub zipcode: String,
    /// Counts are numbers in the dataset; half baths show up as `1.5`.
    pub bedrooms: f64,
    pub bathrooms: f64,
    /// `None` when the price is unknown or has been redacted.
    #[serde(default)]
    pub price: Option<i64>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub photos: Vec<PhotoGroup>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "property", default)]
    pub property_groups: Vec<PropertyGroup>,
    #[serde(default)]
    pub schools: Vec<School>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_address: String,
}

/// The same photo at several widths.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoGroup {
    #[serde(rename = "mixedSources")]
    pub mixed_sources: MixedSources,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MixedSources {
    #[serde(default)]
    pub jpeg: Vec<PhotoVariant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoVariant {
    pub url: String,
    pub width: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertyGroup {
    pub title: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct School {
    pub name: String,
    pub link: String,
    pub level: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rating: Option<u8>,
    pub distance: f64,
}

impl Listing {
    pub fn coordinates(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// "street address, zip"
    pub fn headline(&self) -> String {
        format!("{}, {}", self.address.street_address, self.zipcode)
    }

    /// "{beds} bed/{baths} bath", with " - ${price}" appended when the price is known.
    /// Whole counts print without a fraction, so `2.0` reads "2" and `1.5` reads "1.5".
    pub fn summary(&self) -> String {
        let suffix = match self.price {
            Some(price) => format!(" - ${price}"),
            None => String::new(),
        };
        format!("{} bed/{} bath{}", self.bedrooms, self.bathrooms, suffix)
    }

    /// First variant of the first photo, used on preview cards.
    pub fn preview_photo(&self) -> Option<&str> {
        self.photos
            .first()
            .and_then(|group| group.mixed_sources.jpeg.first())
            .map(|variant| variant.url.as_str())
    }

    /// The widest variant of each photo, in photo order.
    pub fn gallery(&self) -> Vec<&str> {
        self.photos
            .iter()
            .filter_map(|group| group.widest())
            .map(|variant| variant.url.as_str())
            .collect()
    }
}

impl PhotoGroup {
    /// Widest variant; the earliest one wins a tie.
    pub fn widest(&self) -> Option<&PhotoVariant> {
        self.mixed_sources.jpeg.iter().fold(None, |best, next| match best {
            Some(b) if b.width >= next.width => Some(b),
            _ => Some(next),
        })
    }
}

impl School {
    /// "(a public elementary school, rated 7/10)"
    pub fn description(&self) -> String {
        let rating = match self.rating {
            Some(r) => format!("rated {r}/10"),
            None => "not yet rated".to_string(),
        };
        format!(
            "(a {} {} school, {})",
            self.kind.to_lowercase(),
            self.level.to_lowercase(),
            rating
        )
    }
}
