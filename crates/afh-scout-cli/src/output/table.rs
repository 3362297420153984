use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Keys rendered as trailing note lists rather than table rows.
const NOTE_KEYS: &[&str] = &[
    "recommendations",
    "negotiation_strategy",
    "strengths",
    "issues",
    "risks",
    "warnings",
];

/// Batch-row columns: header and the path into each result object.
const BATCH_COLUMNS: &[(&str, &[&str])] = &[
    ("Address", &["listing", "address"]),
    ("County", &["listing", "county"]),
    ("Price", &["listing", "price"]),
    ("Score", &["score"]),
    ("Viable", &["viable"]),
    ("Cash Flow", &["financial", "monthly_cash_flow"]),
    ("Optimal Price", &["pricing", "optimal_price"]),
    ("Risk", &["risk", "level"]),
];

/// Format output as a table using the tabled crate.
///
/// Analysis objects become a two-column field/value table with nested
/// sub-analyses flattened one level deep; batch envelopes with a "results"
/// array become one row per listing.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Array(results)) = map.get("results") {
                print_batch_table(map, results);
            } else if let Some(Value::Array(listings)) = map.get("listings") {
                // Filter output: summary fields, then one row per listing
                if let Some(Value::Object(summary)) = map.get("summary") {
                    for key in ["total", "passed"] {
                        if let Some(val) = summary.get(key) {
                            println!("{key}: {}", format_value(val));
                        }
                    }
                }
                print_array_table(listings);
                if let Some(Value::Object(summary)) = map.get("summary") {
                    print_notes(summary);
                }
            } else {
                print_object_table(map);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_object_table(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if NOTE_KEYS.contains(&key.as_str()) {
            continue;
        }
        match val {
            // Flatten sub-analyses one level so scores stay readable
            Value::Object(inner) => {
                for (inner_key, inner_val) in inner {
                    if NOTE_KEYS.contains(&inner_key.as_str()) {
                        continue;
                    }
                    builder.push_record([
                        format!("{key}.{inner_key}").as_str(),
                        &format_value(inner_val),
                    ]);
                }
            }
            _ => builder.push_record([key.as_str(), &format_value(val)]),
        }
    }
    println!("{}", Table::from(builder));

    print_notes(map);
    for val in map.values() {
        if let Value::Object(inner) = val {
            print_notes(inner);
        }
    }
}

fn print_batch_table(envelope: &serde_json::Map<String, Value>, results: &[Value]) {
    // Headline counts first
    for key in ["analyzed", "viable"] {
        if let Some(val) = envelope.get(key) {
            println!("{key}: {}", format_value(val));
        }
    }

    let mut builder = Builder::default();
    builder.push_record(BATCH_COLUMNS.iter().map(|(header, _)| *header));
    for result in results {
        let Value::Object(map) = result else { continue };
        let row: Vec<String> = BATCH_COLUMNS
            .iter()
            .map(|(_, path)| lookup(map, path).map(format_value).unwrap_or_default())
            .collect();
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Object(summary)) = envelope.get("filter_summary") {
        print_notes(summary);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }
        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn print_notes(map: &serde_json::Map<String, Value>) {
    for key in NOTE_KEYS {
        if let Some(Value::Array(notes)) = map.get(*key) {
            if notes.is_empty() {
                continue;
            }
            println!("\n{}:", title_case(key));
            for note in notes {
                if let Value::String(s) = note {
                    println!("  - {}", s);
                }
            }
        }
    }
}

fn lookup<'a>(map: &'a serde_json::Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let mut current: &Value = map.get(path[0])?;
    for key in &path[1..] {
        current = current.get(key)?;
    }
    Some(current)
}

fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
    .replace('_', " ")
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
