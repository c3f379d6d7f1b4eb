use serde_json::Value;

/// Get a (nested) property safely out of a REST resource.
///
/// `property` is given in dot notation (e.g. "orderReason.display"). Missing
/// segments, non-object intermediates and null leaves all resolve to the
/// empty string, so shaping a partial payload never fails.
pub fn get_property(object: &Value, property: &str) -> String {
    let mut current = object;
    for name in property.split('.') {
        if has_property(current, name) {
            current = &current[name];
        } else {
            return String::new();
        }
    }
    if is_defined_and_not_null(current) {
        render(current)
    } else {
        String::new()
    }
}

fn is_defined_and_not_null(value: &Value) -> bool {
    !value.is_null()
}

fn has_property(value: &Value, name: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(name))
}

// Display cells only ever target scalars; a non-scalar leaf renders as its
// JSON text rather than failing.
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn returns_property_which_is_defined_and_not_null() {
        let full = json!({
            "orderReason": {
                "uuid": "uuid",
                "display": "FRACTURE"
            }
        });
        assert_eq!(get_property(&full, "orderReason.uuid"), "uuid");
        assert_eq!(get_property(&full, "orderReason.display"), "FRACTURE");
    }

    #[test]
    fn returns_empty_string_for_missing_or_null_leaf() {
        let full = json!({
            "orderReason": {
                "display": null
            }
        });
        assert_eq!(get_property(&full, "orderReason.display"), "");
        assert_eq!(get_property(&full, "orderReason.uuid"), "");
    }

    #[test]
    fn returns_empty_string_when_intermediate_is_null() {
        let full = json!({ "orderReason": null });
        assert_eq!(get_property(&full, "orderReason.display"), "");
    }

    #[test]
    fn returns_empty_string_when_object_is_null() {
        let full = Value::Null;
        assert_eq!(get_property(&full, "orderReason.display"), "");
    }

    #[test]
    fn returns_empty_string_when_intermediate_is_not_an_object() {
        let full = json!({ "orderReason": "FRACTURE" });
        assert_eq!(get_property(&full, "orderReason.display"), "");
    }

    #[test]
    fn descends_deep_paths() {
        let full = json!({
            "patient": { "person": { "preferredName": { "display": "Doe, John" } } }
        });
        assert_eq!(
            get_property(&full, "patient.person.preferredName.display"),
            "Doe, John"
        );
    }

    #[test]
    fn renders_non_string_scalars() {
        let full = json!({ "study": { "mwlStatus": 2, "completed": false } });
        assert_eq!(get_property(&full, "study.mwlStatus"), "2");
        assert_eq!(get_property(&full, "study.completed"), "false");
    }
}
