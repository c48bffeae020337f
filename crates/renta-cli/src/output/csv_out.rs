use serde_json::Value;
use std::io;

use super::flatten;

/// Write output as two-column CSV (field, value) to stdout. The result
/// section of an envelope is unwrapped; anything else is dumped as-is.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let rows = match value {
        Value::Object(map) => match map.get("result") {
            Some(result) => flatten(result),
            None => flatten(value),
        },
        other => flatten(other),
    };

    let _ = wtr.write_record(["field", "value"]);
    for (field, val) in rows {
        let _ = wtr.write_record([field.as_str(), val.as_str()]);
    }

    let _ = wtr.flush();
}
