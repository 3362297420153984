pub mod file;
pub mod settings;
pub mod stdin;

use afh_scout_core::Listing;
use serde::de::DeserializeOwned;

/// Resolve a typed input from --input or piped stdin, in that order.
pub fn typed_input<T: DeserializeOwned>(
    path: Option<&str>,
    missing_hint: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        file::read_json(path)
    } else if let Some(data) = stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Err(missing_hint.into())
    }
}

/// Resolve a listings array from --input or piped stdin. Accepts either a
/// bare array or an object with a "listings" key, the two shapes scrapers
/// commonly emit.
pub fn listings_input(path: Option<&str>) -> Result<Vec<Listing>, Box<dyn std::error::Error>> {
    let value = if let Some(path) = path {
        file::read_json_value(path)?
    } else if let Some(data) = stdin::read_stdin()? {
        data
    } else {
        return Err("--input <file.json> or stdin required for listings".into());
    };

    let array = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut map) => map
            .remove("listings")
            .ok_or("Expected a listings array or an object with a \"listings\" key")?,
        _ => return Err("Expected a listings array".into()),
    };
    Ok(serde_json::from_value(array)?)
}
