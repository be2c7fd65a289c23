use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Body of `POST /generar-receta`.
///
/// `ingredientes` is taken as-is: it may be missing, `null`, or any JSON type.
/// An explicit `null` is kept as `Some(Value::Null)`.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeRequest {
    #[serde(rename = "ingredientes", default, deserialize_with = "present")]
    pub ingredients: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RecipeRequest {
    /// Text interpolated into the prompt.
    ///
    /// A missing field is empty. Anything else is stringified the way a
    /// JavaScript template literal would: `null`, `true`, `3`, arrays joined
    /// with commas, objects as `[object Object]`.
    pub fn ingredients_text(&self) -> String {
        self.ingredients.as_ref().map(js_string).unwrap_or_default()
    }
}

fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => js_number(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn js_number(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float == 0.0 => "0".to_string(),
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
            format!("{:.0}", float)
        }
        _ => number.to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    #[serde(rename = "receta")]
    pub recipe: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
