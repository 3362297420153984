use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// Batch envelopes with a "results" array become one row per listing with
/// the nested sub-analyses flattened into dotted column names; everything
/// else degrades to two-column field/value rows.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(results)) = map.get("results") {
                write_results_csv(&mut wtr, results);
            } else if let Some(Value::Array(listings)) = map.get("listings") {
                write_results_csv(&mut wtr, listings);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in flatten(map) {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(&val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_results_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_results_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    // Column set comes from the flattened first object
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = flatten(first).into_iter().map(|(k, _)| k).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let flat: std::collections::HashMap<String, Value> =
                    flatten(map).into_iter().collect();
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| flat.get(h).map(format_csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

/// Flatten one nesting level into dotted keys, preserving field order.
fn flatten(map: &serde_json::Map<String, Value>) -> Vec<(String, Value)> {
    let mut flat = Vec::new();
    for (key, val) in map {
        match val {
            Value::Object(inner) => {
                for (inner_key, inner_val) in inner {
                    flat.push((format!("{key}.{inner_key}"), inner_val.clone()));
                }
            }
            _ => flat.push((key.clone(), val.clone())),
        }
    }
    flat
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_csv_value).collect();
            items.join("; ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
