//! Listing data types: validated input, generated phrases, final output.

pub mod adjectives;
pub mod input;
pub mod output;

pub use adjectives::PropertyAdjectives;
pub use input::{Language, ListingType, LocationDetails, PropertyFeatures, PropertyInput};
pub use output::ListingOutput;
