use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Descriptive phrases generated for a property, grouped by theme.
///
/// Doc comments on the fields become schema descriptions for the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PropertyAdjectives {
    /// List of adjectives/phrases relating to the size of the property and whether or not it features a balcony.
    pub area_size: Vec<String>,
    /// List of adjectives/phrases relating to the age of the property.
    pub year_built: Vec<String>,
    /// List of phrases relating to the ideal occupants, e.g. 'ideal for couples'.
    pub ideal_occupants: Vec<String>,
    /// List of phrases/adjectives relating to the available amenities, if any.
    pub amenities: Vec<String>,
}

impl PropertyAdjectives {
    /// All phrases in fixed category order: size, age, occupants, amenities.
    pub fn all(&self) -> Vec<&str> {
        self.area_size
            .iter()
            .chain(&self.year_built)
            .chain(&self.ideal_occupants)
            .chain(&self.amenities)
            .map(String::as_str)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.area_size.is_empty()
            && self.year_built.is_empty()
            && self.ideal_occupants.is_empty()
            && self.amenities.is_empty()
    }
}
