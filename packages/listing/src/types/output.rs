use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The user-facing fields of a generated listing.
///
/// Also the target schema for translation, so the translated listing always
/// has exactly the same field set as the English one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListingOutput {
    /// Browser tab title.
    pub title: String,
    /// SEO meta description, at most 155 characters.
    pub meta_description: String,
    pub headline: String,
    pub full_description: String,
    /// Short feature phrases, in display order.
    pub key_features_list: Vec<String>,
    pub neighborhood_summary: String,
    pub call_to_action: String,
}

impl ListingOutput {
    /// Field names in declaration order.
    pub const FIELDS: [&'static str; 7] = [
        "title",
        "meta_description",
        "headline",
        "full_description",
        "key_features_list",
        "neighborhood_summary",
        "call_to_action",
    ];

    /// `**field**: value` blocks, one per field, for the translation prompt.
    pub fn to_prompt_text(&self) -> String {
        let key_features =
            serde_json::to_string(&self.key_features_list).unwrap_or_else(|_| String::from("[]"));
        let values: [&str; 7] = [
            &self.title,
            &self.meta_description,
            &self.headline,
            &self.full_description,
            &key_features,
            &self.neighborhood_summary,
            &self.call_to_action,
        ];

        Self::FIELDS
            .iter()
            .zip(values)
            .map(|(field, value)| format!("**{field}**: {value}\n\n"))
            .collect()
    }
}
