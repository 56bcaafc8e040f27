//! Deterministic listing fields: key features and the call to action.
//!
//! Neither touches the generation backend; both are pure functions of the
//! input.

use crate::types::PropertyInput;

/// Ordered key-feature phrases for a property.
///
/// Order: area, bedrooms/bathrooms, balcony, elevator, parking, location.
/// The location entry is always present and always last.
pub fn key_features(input: &PropertyInput) -> Vec<String> {
    let features = input.features();
    let mut list = Vec::new();

    if let Some(area) = features.area() {
        list.push(format!("{area} sqm of living space"));
    }

    if let Some(bedrooms) = features.bedroom_count() {
        let rooms = counted(bedrooms, "bedroom", "bedrooms");
        match features.bathroom_count() {
            Some(bathrooms) => list.push(format!(
                "{rooms} and {}",
                counted(bathrooms, "bathroom", "bathrooms")
            )),
            None => list.push(rooms),
        }
    }

    if features.has_balcony() {
        list.push("Private balcony".to_string());
    }
    if features.has_elevator() {
        list.push("Elevator access".to_string());
    }
    if features.has_parking() {
        list.push("Dedicated parking".to_string());
    }

    list.push(format!(
        "Located in {}, {}",
        title_case(input.neighborhood()),
        title_case(input.city())
    ));

    list
}

/// Fixed closing line inviting a viewing in `city`.
pub fn call_to_action(city: &str) -> String {
    format!(
        "Don\u{2019}t miss this opportunity\u{2014}schedule your viewing today and discover your new home in {city}."
    )
}

fn counted(n: u32, singular: &str, plural: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { plural })
}

/// Uppercase the first letter of every word, lowercase the rest.
///
/// A word starts at any letter not preceded by another letter, so
/// `"são joão-da-madeira"` becomes `"São João-Da-Madeira"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Language, ListingType, LocationDetails, PropertyFeatures, PropertyInput,
    };

    fn input(features: PropertyFeatures, neighborhood: &str, city: &str) -> PropertyInput {
        PropertyInput {
            title: "Apartment".into(),
            location_details: LocationDetails {
                city: city.into(),
                neighborhood: neighborhood.into(),
            },
            property_features: features,
            price: 1000,
            listing_type: ListingType::Rent,
            language: Language::En,
        }
    }

    #[test]
    fn test_single_bedroom_without_bathrooms() {
        for bathrooms in [None, Some(0)] {
            let features = PropertyFeatures {
                bedrooms: Some(1),
                bathrooms,
                ..Default::default()
            };
            let list = key_features(&input(features, "Sol", "Madrid"));
            assert_eq!(list, vec!["1 bedroom", "Located in Sol, Madrid"]);
        }
    }

    #[test]
    fn test_plural_bedrooms_with_single_bathroom() {
        let features = PropertyFeatures {
            bedrooms: Some(2),
            bathrooms: Some(1),
            ..Default::default()
        };
        let list = key_features(&input(features, "Sol", "Madrid"));
        assert_eq!(list[0], "2 bedrooms and 1 bathroom");
    }

    #[test]
    fn test_bathrooms_alone_are_not_listed() {
        let features = PropertyFeatures {
            bathrooms: Some(2),
            ..Default::default()
        };
        let list = key_features(&input(features, "Sol", "Madrid"));
        assert_eq!(list, vec!["Located in Sol, Madrid"]);
    }

    #[test]
    fn test_full_feature_order() {
        let features = PropertyFeatures {
            bedrooms: Some(3),
            bathrooms: Some(2),
            area_sqm: Some(120),
            balcony: Some(true),
            parking: Some(true),
            elevator: Some(true),
            floor: Some(4),
            year_built: Some(1998),
        };
        let list = key_features(&input(features, "campo de ourique", "LISBON"));

        assert_eq!(
            list,
            vec![
                "120 sqm of living space",
                "3 bedrooms and 2 bathrooms",
                "Private balcony",
                "Elevator access",
                "Dedicated parking",
                "Located in Campo De Ourique, Lisbon",
            ]
        );
    }

    #[test]
    fn test_false_amenities_are_omitted() {
        let features = PropertyFeatures {
            balcony: Some(false),
            parking: Some(false),
            elevator: Some(false),
            area_sqm: Some(0),
            ..Default::default()
        };
        let list = key_features(&input(features, "Alfama", "Lisbon"));
        assert_eq!(list, vec!["Located in Alfama, Lisbon"]);
    }

    #[test]
    fn test_derivations_are_repeatable() {
        let property = input(
            PropertyFeatures {
                bedrooms: Some(2),
                ..Default::default()
            },
            "Gràcia",
            "Barcelona",
        );
        assert_eq!(key_features(&property), key_features(&property));
        assert_eq!(call_to_action("Porto"), call_to_action("Porto"));
    }

    #[test]
    fn test_call_to_action_names_city() {
        let cta = call_to_action("Madrid");
        assert!(cta.ends_with("discover your new home in Madrid."));
        assert!(cta.starts_with("Don\u{2019}t miss this opportunity"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("lavapies"), "Lavapies");
        assert_eq!(title_case("CAMPO DE OURIQUE"), "Campo De Ourique");
        assert_eq!(title_case("são joão-da-madeira"), "São João-Da-Madeira");
        assert_eq!(title_case(""), "");
    }
}
