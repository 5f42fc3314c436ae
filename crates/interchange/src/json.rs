//! JSON export and import.

use std::fs;
use std::path::Path;

use scene::{Element, Project, PropertyValue};
use serde_json::{json, Map, Value};

use crate::InterchangeError;

/// Serialize `project` as pretty-printed JSON at `path`.
///
/// The project must have a canvas. Every failure, the missing canvas
/// included, surfaces as [`InterchangeError::FileWrite`].
pub fn export_json(path: impl AsRef<Path>, project: &Project) -> Result<(), InterchangeError> {
    let path = path.as_ref();
    let value = project_to_value(project)
        .ok_or_else(|| InterchangeError::FileWrite("project has no canvas".into()))?;
    let text = serde_json::to_string_pretty(&value)
        .map_err(|e| InterchangeError::FileWrite(e.to_string()))?;
    fs::write(path, text).map_err(|e| InterchangeError::FileWrite(e.to_string()))?;

    let count = project.canvas().map_or(0, |canvas| canvas.elements().len());
    log::debug!(
        "wrote project '{}' ({} elements) as JSON to {}",
        project.name(),
        count,
        path.display()
    );
    Ok(())
}

/// Read and parse the JSON document at `path` without interpreting it.
pub fn import_json(path: impl AsRef<Path>) -> Result<Value, InterchangeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| InterchangeError::FileRead(e.to_string()))?;
    let value: Value =
        serde_json::from_str(&text).map_err(|e| InterchangeError::FileRead(e.to_string()))?;

    log::debug!("read JSON document from {}", path.display());
    Ok(value)
}

/// Build the exported JSON structure of `project` without touching the
/// filesystem. Returns `None` when the project has no canvas.
pub fn project_to_value(project: &Project) -> Option<Value> {
    let canvas = project.canvas()?;
    let elements: Vec<Value> = canvas.elements().iter().map(element_to_value).collect();

    Some(json!({
        "name": project.name(),
        "canvas": {
            "width": canvas.width(),
            "height": canvas.height(),
            "elements": elements,
        }
    }))
}

fn element_to_value(element: &Element) -> Value {
    let mut properties = Map::new();
    for (name, value) in element.properties() {
        properties.insert(name.to_string(), property_to_value(&value));
    }

    json!({
        "type": element.tag(),
        "properties": properties,
    })
}

fn property_to_value(value: &PropertyValue) -> Value {
    match value {
        PropertyValue::Str(text) => Value::String(text.clone()),
        PropertyValue::Float(number) => Value::from(*number),
        PropertyValue::Int(number) => Value::from(*number),
        PropertyValue::Elements(items) => {
            Value::Array(items.iter().map(element_to_value).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_project;
    use scene::{Canvas, Circle, Group, Project, Text};
    use tempfile::tempdir;

    #[test]
    fn test_export_import_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("design.json");

        export_json(&path, &sample_project()).unwrap();
        let value = import_json(&path).unwrap();

        assert_eq!(value["name"], "My Design");
        assert_eq!(value["canvas"]["width"].as_f64(), Some(800.0));
        assert_eq!(value["canvas"]["height"].as_f64(), Some(600.0));

        let elements = value["canvas"]["elements"].as_array().unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0]["type"], "Circle");
        assert_eq!(elements[0]["properties"]["color"], "red");
        assert_eq!(elements[0]["properties"]["radius"].as_f64(), Some(50.0));
        assert_eq!(elements[2]["type"], "Text");
        assert_eq!(elements[2]["properties"]["content"], "Hello, World!");
    }

    #[test]
    fn test_groups_nest_in_the_document() {
        let mut group = Group::new();
        group.add(Circle::new("green", 5.0).unwrap()).unwrap();
        group.add(Text::new("label", 12.0).unwrap()).unwrap();

        let mut canvas = Canvas::new(100.0, 100.0).unwrap();
        canvas.add_element(group);
        let mut project = Project::new("grouped").unwrap();
        project.set_canvas(canvas);

        let value = project_to_value(&project).unwrap();
        let items = value["canvas"]["elements"][0]["properties"]["items"]
            .as_array()
            .unwrap();
        assert_eq!(value["canvas"]["elements"][0]["type"], "Group");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["type"], "Circle");
        assert_eq!(items[1]["properties"]["content"], "label");
    }

    #[test]
    fn test_export_requires_a_canvas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        let project = Project::new("empty").unwrap();

        let err = export_json(&path, &project).unwrap_err();
        match err {
            InterchangeError::FileWrite(msg) => assert!(msg.contains("no canvas")),
            other => panic!("expected FileWrite, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_export_to_unwritable_path_is_a_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("design.json");

        let err = export_json(&path, &sample_project()).unwrap_err();
        match err {
            InterchangeError::FileWrite(msg) => assert!(msg.contains("os error")),
            other => panic!("expected FileWrite, got {:?}", other),
        }
    }

    #[test]
    fn test_import_missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = import_json(dir.path().join("nowhere.json")).unwrap_err();
        assert!(matches!(err, InterchangeError::FileRead(_)));
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = import_json(&path).unwrap_err();
        assert!(matches!(err, InterchangeError::FileRead(_)));
    }
}
