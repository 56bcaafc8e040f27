//! Schema generation for OpenAI structured outputs.
//!
//! `schemars` produces draft-07 schemas with `$ref`s into `definitions`;
//! OpenAI strict mode wants every object closed, every property required and
//! no references. [`StructuredOutput::openai_schema`] bridges the two.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Types that can be requested as OpenAI structured output.
///
/// Blanket-implemented for every `JsonSchema + DeserializeOwned` type.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// OpenAI strict-mode schema for this type.
    fn openai_schema() -> Value {
        let mut value = serde_json::to_value(schema_for!(Self)).unwrap_or_default();

        close_objects(&mut value);

        let definitions = value.get("definitions").cloned();
        if let Some(definitions) = definitions {
            inline_refs(&mut value, &definitions);
        }

        if let Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// Schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Mark every object schema `additionalProperties: false` and list all of
/// its properties (optional ones included) under `required`.
fn close_objects(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.get("type").and_then(Value::as_str) == Some("object") {
                map.insert("additionalProperties".to_string(), Value::Bool(false));
                if let Some(required) = property_names(map) {
                    map.insert("required".to_string(), required);
                }
            }
            map.values_mut().for_each(close_objects);
        }
        Value::Array(items) => items.iter_mut().for_each(close_objects),
        _ => {}
    }
}

fn property_names(map: &Map<String, Value>) -> Option<Value> {
    let props = map.get("properties")?.as_object()?;
    Some(Value::Array(
        props.keys().map(|k| Value::String(k.clone())).collect(),
    ))
}

/// Replace `{"$ref": "#/definitions/Name"}` nodes with the definition body.
fn inline_refs(value: &mut Value, definitions: &Value) {
    match value {
        Value::Object(map) => {
            let target = map
                .get("$ref")
                .and_then(Value::as_str)
                .and_then(|r| r.strip_prefix("#/definitions/"))
                .and_then(|name| definitions.get(name))
                .cloned();

            if let Some(def) = target {
                *value = def;
                inline_refs(value, definitions);
                return;
            }

            for v in map.values_mut() {
                inline_refs(v, definitions);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                inline_refs(item, definitions);
            }
        }
        _ => {}
    }
}
