use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first field in the object.
pub fn print_minimal(value: &Value) {
    // Priority list of key output fields across the subcommands
    let priority_keys = [
        "score",
        "viable",
        "optimal_price",
        "negotiation_target",
        "monthly_cash_flow",
        "cap_rate",
        "passed",
        "analyzed",
    ];

    if let Value::Object(map) = value {
        // Batch envelope: one address/score line per result
        if let Some(Value::Array(results)) = map.get("results") {
            for result in results {
                let address = result
                    .get("listing")
                    .and_then(|l| l.get("address"))
                    .and_then(Value::as_str)
                    .unwrap_or("?");
                let score = result.get("score").map(format_minimal).unwrap_or_default();
                println!("{}: {}", address, score);
            }
            return;
        }

        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if is_scalar(val) {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Filter envelope: the summary carries the headline counts
        if let Some(Value::Object(summary)) = map.get("summary") {
            for key in &priority_keys {
                if let Some(val) = summary.get(*key) {
                    if is_scalar(val) {
                        println!("{}", format_minimal(val));
                        return;
                    }
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(value));
}

fn is_scalar(value: &Value) -> bool {
    !value.is_null() && !value.is_array() && !value.is_object()
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
