//! JSON document patcher backed by `serde_json`.
//!
//! Output is two-space indented with object keys in sorted order and a
//! single trailing newline, so patching the same document twice yields the
//! same bytes.

use serde_json::{Map, Value};
use tracing::trace;

use scaffold_core::{
    application::ports::{DocumentPatcher, PatchError},
    domain::{JsonMutation, KeyPath},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentPatcher;

impl JsonDocumentPatcher {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPatcher for JsonDocumentPatcher {
    fn patch(&self, document: &str, mutations: &[JsonMutation]) -> Result<String, PatchError> {
        let mut value: Value =
            serde_json::from_str(document).map_err(|e| PatchError::Syntax(e.to_string()))?;
        let root = value.as_object_mut().ok_or(PatchError::NotAnObject)?;

        for mutation in mutations {
            trace!(key = %mutation.key, "Setting JSON key");
            apply(root, mutation);
        }

        let mut out =
            serde_json::to_string_pretty(&value).map_err(|e| PatchError::Serialize(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}

fn apply(root: &mut Map<String, Value>, mutation: &JsonMutation) {
    let value = Value::String(mutation.value.clone());
    match &mutation.key {
        KeyPath::Top(key) => {
            root.insert(key.clone(), value);
        }
        KeyPath::Nested { parent, key } => {
            let slot = root
                .entry(parent.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            // A non-object parent is replaced wholesale.
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(map) = slot {
                map.insert(key.clone(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wails_mutations() -> Vec<JsonMutation> {
        vec![
            JsonMutation::set("name", "notes"),
            JsonMutation::set("outputfilename", "notes"),
            JsonMutation::set("info.productName", "Notes"),
            JsonMutation::set("info.companyName", "Acme"),
        ]
    }

    #[test]
    fn sets_top_level_and_nested_keys() {
        let doc = r#"{"name":"project-go","info":{"productName":"Project Go","version":"1.0"},"frontend:install":"npm install"}"#;
        let out = JsonDocumentPatcher::new().patch(doc, &wails_mutations()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["name"], "notes");
        assert_eq!(value["outputfilename"], "notes");
        assert_eq!(value["info"]["productName"], "Notes");
        assert_eq!(value["info"]["companyName"], "Acme");
        assert_eq!(value["info"]["version"], "1.0");
        assert_eq!(value["frontend:install"], "npm install");
    }

    #[test]
    fn missing_or_scalar_parent_becomes_object() {
        let patcher = JsonDocumentPatcher::new();
        let mutation = [JsonMutation::set("info.productName", "Notes")];

        let out = patcher.patch("{}", &mutation).unwrap();
        assert!(out.contains("\"productName\": \"Notes\""));

        let out = patcher.patch(r#"{"info": 3}"#, &mutation).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["info"]["productName"], "Notes");
    }

    #[test]
    fn output_is_sorted_indented_and_newline_terminated() {
        let out = JsonDocumentPatcher::new()
            .patch(r#"{"b":1,"a":{"d":2,"c":3}}"#, &[])
            .unwrap();
        assert_eq!(
            out,
            "{\n  \"a\": {\n    \"c\": 3,\n    \"d\": 2\n  },\n  \"b\": 1\n}\n"
        );
    }

    #[test]
    fn repatching_is_stable() {
        let patcher = JsonDocumentPatcher::new();
        let once = patcher
            .patch(r#"{"name":"x","info":{}}"#, &wails_mutations())
            .unwrap();
        let twice = patcher.patch(&once, &wails_mutations()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_invalid_and_non_object_documents() {
        let patcher = JsonDocumentPatcher::new();
        assert!(matches!(
            patcher.patch("{not json", &[]),
            Err(PatchError::Syntax(_))
        ));
        assert_eq!(patcher.patch("[1, 2]", &[]), Err(PatchError::NotAnObject));
    }
}
