//! Request bodies shared by the endpoint tests.

use serde_json::{json, Value};

/// One-bedroom rental in Lavapies, short-form keys.
pub fn madrid_rental() -> Value {
    json!({
        "title": "T3 apartment in Madrid",
        "features": {"bedrooms": 1, "bathrooms": 1, "area_sqm": 35},
        "location": {"city": "Madrid", "neighborhood": "Lavapies"},
        "language": "en",
        "price": 5000,
        "listing_type": "rent"
    })
}

/// Two-bedroom sale in Alfama, canonical keys, Portuguese output.
pub fn lisbon_sale_pt() -> Value {
    json!({
        "title": "T2 apartment in Alfama",
        "location_details": {"city": "Lisbon", "neighborhood": "Alfama"},
        "property_features": {
            "bedrooms": 2,
            "bathrooms": 1,
            "area_sqm": 70,
            "balcony": true,
            "floor": 3
        },
        "language": "pt",
        "price": 420000,
        "listing_type": "sale"
    })
}
