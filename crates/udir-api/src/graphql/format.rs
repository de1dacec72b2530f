//! Shapes engine responses into the JSON body sent to clients.
//!
//! Each error carries `message`, `locations`, `stack` and `path`, plus
//! `extensions` when the resolver attached any.

use async_graphql::{PathSegment, Response, ServerError};
use axum::http::StatusCode;
use serde_json::{Map, Value, json};

/// Format an engine response into a status code and JSON body
///
/// Errors without a field path mean the request never executed (parse or
/// validation failure): 400 with only an `errors` list. Otherwise the body
/// carries `data`, with `null` under every top-level field that failed.
pub fn format_response(response: Response) -> (StatusCode, Value) {
    let errors: Vec<Value> = response.errors.iter().map(format_error).collect();
    let mut body = Map::new();

    let executed = errors.is_empty() || response.errors.iter().any(|e| !e.path.is_empty());
    let status = if executed {
        let mut data = json!(response.data);
        null_failed_fields(&mut data, &response.errors);
        body.insert("data".to_string(), data);
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    if !errors.is_empty() {
        body.insert("errors".to_string(), Value::Array(errors));
    }
    if !response.extensions.is_empty() {
        body.insert("extensions".to_string(), json!(response.extensions));
    }

    (status, Value::Object(body))
}

/// The engine drops a failed nullable root field from `data`; put it back
/// as `null` under its response key.
fn null_failed_fields(data: &mut Value, errors: &[ServerError]) {
    let roots: Vec<&str> = errors
        .iter()
        .filter_map(|error| match error.path.first() {
            Some(PathSegment::Field(name)) => Some(name.as_str()),
            _ => None,
        })
        .collect();
    if roots.is_empty() {
        return;
    }

    if !data.is_object() {
        *data = Value::Object(Map::new());
    }
    if let Value::Object(fields) = data {
        for root in roots {
            fields.entry(root.to_string()).or_insert(Value::Null);
        }
    }
}

pub fn format_error(error: &ServerError) -> Value {
    let mut formatted = json!({
        "message": error.message,
        "locations": error.locations,
        "stack": stack(error),
        "path": error.path,
    });

    if let Some(extensions) = &error.extensions {
        formatted["extensions"] = json!(extensions);
    }

    formatted
}

fn stack(error: &ServerError) -> Vec<String> {
    let mut lines = vec![format!("Error: {}", error.message)];
    if !error.path.is_empty() {
        lines.push(format!("    at {}", dotted_path(&error.path)));
    }
    lines
}

fn dotted_path(path: &[PathSegment]) -> String {
    path.iter()
        .map(|segment| match segment {
            PathSegment::Field(name) => name.clone(),
            PathSegment::Index(index) => index.to_string(),
        })
        .collect::<Vec<_>>()
        .join(".")
}
