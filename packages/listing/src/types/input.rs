//! Property submission as received from clients.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ListingError, Result};

/// Whether the property is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sale => f.write_str("sale"),
            Self::Rent => f.write_str("rent"),
        }
    }
}

/// Output language of the generated listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    /// Generation always happens in English; other languages are translated.
    pub fn needs_translation(self) -> bool {
        !matches!(self, Self::En)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDetails {
    pub city: String,
    pub neighborhood: String,
}

/// Optional property features.
///
/// A feature counts as present only when it is set and truthy: `Some(0)` and
/// `Some(false)` are treated exactly like `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFeatures {
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub area_sqm: Option<u32>,
    #[serde(default)]
    pub balcony: Option<bool>,
    #[serde(default)]
    pub parking: Option<bool>,
    #[serde(default)]
    pub elevator: Option<bool>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub year_built: Option<u32>,
}

impl PropertyFeatures {
    pub fn bedroom_count(&self) -> Option<u32> {
        nonzero(self.bedrooms)
    }

    pub fn bathroom_count(&self) -> Option<u32> {
        nonzero(self.bathrooms)
    }

    pub fn area(&self) -> Option<u32> {
        nonzero(self.area_sqm)
    }

    pub fn floor_level(&self) -> Option<i32> {
        nonzero(self.floor)
    }

    pub fn built_in(&self) -> Option<u32> {
        nonzero(self.year_built)
    }

    pub fn has_balcony(&self) -> bool {
        self.balcony.unwrap_or(false)
    }

    pub fn has_parking(&self) -> bool {
        self.parking.unwrap_or(false)
    }

    pub fn has_elevator(&self) -> bool {
        self.elevator.unwrap_or(false)
    }
}

fn nonzero<T: Copy + Default + PartialEq>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}

/// A validated property submission. Constructed once per request.
///
/// Accepts both the canonical wire keys (`location_details`,
/// `property_features`) and the short forms (`location`, `features`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInput {
    /// Free-form draft title; the only source of the property type.
    pub title: String,
    #[serde(alias = "location")]
    pub location_details: LocationDetails,
    #[serde(default, alias = "features")]
    pub property_features: PropertyFeatures,
    pub price: u64,
    pub listing_type: ListingType,
    #[serde(default)]
    pub language: Language,
}

impl PropertyInput {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Parse and validate a JSON request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let input: Self =
            serde_json::from_slice(body).map_err(|e| ListingError::InvalidInput(e.to_string()))?;
        input.validate()?;
        Ok(input)
    }

    /// Reject values that deserialize but cannot produce a listing.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("location_details.city", &self.location_details.city),
            (
                "location_details.neighborhood",
                &self.location_details.neighborhood,
            ),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ListingError::InvalidInput(format!(
                "`{field}` must not be empty"
            ))),
            None => Ok(()),
        }
    }

    pub fn city(&self) -> &str {
        &self.location_details.city
    }

    pub fn neighborhood(&self) -> &str {
        &self.location_details.neighborhood
    }

    pub fn features(&self) -> &PropertyFeatures {
        &self.property_features
    }
}
