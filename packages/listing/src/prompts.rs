//! LLM prompts for the listing pipeline.
//!
//! System prompts are fixed; user prompts are rendered from the input and the
//! fields generated so far. A feature is only ever mentioned when it is
//! present and truthy.

use std::fmt::Write;

use crate::types::{PropertyAdjectives, PropertyInput};

pub const TITLE_SYSTEM_PROMPT: &str = r#"You are responsible for generating a concise browser tab title for a real estate property listing.
You will be given a draft title, from which you will extract the property type (e.g. 'apartment', 'house', or simply 'property').
You will also be given the names of the neighborhood and city, and the number of bedrooms when known.
You are expected to generate a title similar to 'T3 Apartment in Campo de Ourique, Lisbon' or '2BR House in Salamanca, Madrid'."#;

pub const ADJECTIVES_SYSTEM_PROMPT: &str = r#"You are a real estate marketing assistant.
Your task is to generate descriptive adjectives and short phrases for property listings based on structured property details provided by the user.

For each property, come up with:
1. **Area/Size adjectives:** describing how big or small the property feels (e.g., "cozy," "spacious," "bright and airy"). This is based on the property's size and also whether or not it has a balcony. Unless explicitly stated, assume there is no balcony.
2. **Year Built adjectives:** reflecting the property's age or style (e.g., "historic," "modern," "state-of-the-art").
3. **Ideal Occupants phrases:** describing the type of residents who would find it perfect based on the number of bedrooms/bathrooms (e.g., "perfect for young families," "great for professionals").
4. **Amenities adjectives/phrases:** highlighting special features like balcony, parking, or elevator. Only if they are explicitly mentioned.

Requirements:
- Choose words that fit the actual property details. Do not generate adjectives for features that are not mentioned.
- Use natural, appealing, and concise language suitable for real estate listings.
- Provide 2-3 adjectives or phrases per category when possible. If you cannot come up with meaningful adjectives, return an empty list.
- Focus on creativity while staying relevant to the property details."#;

pub const NEIGHBORHOOD_SYSTEM_PROMPT: &str = "You are responsible for generating a single-paragraph, concise summary of the given neighborhood, to be included in a property listing. Focus on lifestyle and area information.";

pub const HEADLINE_SYSTEM_PROMPT: &str = "You will write a headline for a property listing. You will be given a tab title to which you will add a couple of descriptive features at most. You will select the most attractive or defining features from a list of phrases.";

pub const FULL_DESCRIPTION_SYSTEM_PROMPT: &str = r#"You are a real estate listing writer.
You create compelling property listings based on structured input.
You will not mention amenities such as parking or balcony unless it is explicitly stated that the property has them.
In the same vein, you will not mention any features such as number of bedrooms, property size, etc unless explicitly mentioned by the user.
You will be given a list of features such as number of bedrooms or neighborhood, as well as adjectives/descriptive phrases. You are not expected to use all available adjectives or phrases.
Additionally, you will be given a neighborhood summary. The neighborhood summary will be displayed elsewhere, you are not responsible for including it in your description, but make sure your description is aligned with it."#;

pub const META_DESCRIPTION_SYSTEM_PROMPT: &str = "You are responsible for writing a concise description (max 155 characters) for a property listing. You will be given a long description which you will summarize into a concise SEO-optimized meta-description. Be sure to include keywords related to the location, property type, and listing intent, e.g. '3-bedroom apartment for rent in Salamanca, Madrid'";

pub const TRANSLATION_SYSTEM_PROMPT: &str = "You are responsible for translating, section by section, a property listing from English to Portuguese (Portugal). Keep every section, translate each key feature individually and keep their order.";

/// Draft title, bedrooms (if any), neighborhood and city.
pub fn title_prompt(input: &PropertyInput) -> String {
    let mut prompt = format!("Title: {}", input.title);
    if let Some(bedrooms) = input.features().bedroom_count() {
        let _ = write!(prompt, ", number of bedrooms: {bedrooms}");
    }
    let _ = write!(
        prompt,
        ", neighborhood: {}, city: {}",
        input.neighborhood(),
        input.city()
    );
    prompt
}

/// Plain-language description of the property, one fact per line.
pub fn features_paragraph(input: &PropertyInput) -> String {
    let features = input.features();
    let mut text = format!("{}\n", input.title);

    if let Some(bedrooms) = features.bedroom_count() {
        let _ = writeln!(text, "Number of bedrooms: {bedrooms}.");
    }
    if let Some(bathrooms) = features.bathroom_count() {
        let _ = writeln!(text, "Number of bathrooms: {bathrooms}.");
    }
    if let Some(area) = features.area() {
        let _ = writeln!(text, "The property has {area} square meters of living space.");
    }
    if features.has_balcony() {
        text.push_str("The property has a balcony.\n");
    }
    if features.has_parking() {
        text.push_str("The property has a parking space.\n");
    }
    if features.has_elevator() {
        text.push_str("The property has an elevator.\n");
    }
    if let Some(floor) = features.floor_level() {
        let _ = writeln!(text, "The property is located on floor {floor}.");
    }
    if let Some(year) = features.built_in() {
        let _ = writeln!(text, "The property was built in {year}.");
    }

    let _ = write!(text, "The property is available for {}", input.listing_type);
    if input.price > 0 {
        let _ = write!(text, " at EUR {}", input.price);
    }
    text.push_str(".\n");

    let _ = writeln!(
        text,
        "The property is located in the {} neighborhood of {}.",
        input.neighborhood(),
        input.city()
    );

    text
}

pub fn neighborhood_prompt(input: &PropertyInput) -> String {
    format!("{}, {}", input.neighborhood(), input.city())
}

pub fn headline_prompt(title: &str, adjectives: &PropertyAdjectives) -> String {
    format!("Title: {title}.\nFeatures: {}", adjectives.all().join(", "))
}

/// Shared by the full description and the meta description steps.
pub fn description_prompt(
    input: &PropertyInput,
    adjectives: &PropertyAdjectives,
    neighborhood_summary: &str,
) -> String {
    let mut prompt = features_paragraph(input);

    let phrases = adjectives.all();
    if !phrases.is_empty() {
        prompt.push_str("Here's a list of adjectives/phrases you can use to populate your description:\n- ");
        prompt.push_str(&phrases.join("\n- "));
    }

    let _ = write!(
        prompt,
        "\nAnd here is a summary for the neighborhood: {neighborhood_summary}"
    );
    prompt
}
