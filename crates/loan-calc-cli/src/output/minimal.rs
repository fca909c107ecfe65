use serde_json::Value;

/// Print just the headline figure from the output.
///
/// Looks for well-known result fields in priority order, then falls back to
/// the first field of the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "monthlyInstallment",
        "score",
        "recommendedId",
        "valid",
        "formatted",
    ];

    if let Value::Object(map) = result_obj {
        // Schedules nest the headline figures under "summary"
        let map = match map.get("summary") {
            Some(Value::Object(summary)) => summary,
            _ => map,
        };

        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Ranked offers: print the recommended id
    if let Value::Array(items) = result_obj {
        let recommended = items
            .iter()
            .find(|item| item.get("recommended") == Some(&Value::Bool(true)))
            .and_then(|item| item.get("id"));
        if let Some(id) = recommended {
            println!("{}", format_minimal(id));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
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
