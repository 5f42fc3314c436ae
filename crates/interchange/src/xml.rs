//! XML export and import.

use std::fs::File;
use std::path::Path;

use scene::{Element, Project, PropertyValue};
use xmltree::{Element as XmlElement, XMLNode};

use crate::InterchangeError;

/// Serialize `project` as XML at `path`.
///
/// The layout mirrors the JSON rendition: a `project` root with the name
/// as an attribute, a `canvas` child carrying the dimensions, and one
/// `element` node per canvas element whose children are its fields.
pub fn export_xml(path: impl AsRef<Path>, project: &Project) -> Result<(), InterchangeError> {
    let path = path.as_ref();
    let tree = project_to_tree(project)
        .ok_or_else(|| InterchangeError::FileWrite("project has no canvas".into()))?;
    let file = File::create(path).map_err(|e| InterchangeError::FileWrite(e.to_string()))?;
    tree.write(file)
        .map_err(|e| InterchangeError::FileWrite(e.to_string()))?;

    let count = project.canvas().map_or(0, |canvas| canvas.elements().len());
    log::debug!(
        "wrote project '{}' ({} elements) as XML to {}",
        project.name(),
        count,
        path.display()
    );
    Ok(())
}

/// Parse the XML document at `path` and return its root element untouched.
pub fn import_xml(path: impl AsRef<Path>) -> Result<XmlElement, InterchangeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| InterchangeError::FileRead(e.to_string()))?;
    let root = XmlElement::parse(file).map_err(|e| InterchangeError::FileRead(e.to_string()))?;

    log::debug!("read XML document from {}", path.display());
    Ok(root)
}

/// Build the exported XML tree of `project` without touching the
/// filesystem. Returns `None` when the project has no canvas.
pub fn project_to_tree(project: &Project) -> Option<XmlElement> {
    let canvas = project.canvas()?;

    let mut canvas_node = XmlElement::new("canvas");
    canvas_node
        .attributes
        .insert("width".to_string(), canvas.width().to_string());
    canvas_node
        .attributes
        .insert("height".to_string(), canvas.height().to_string());
    for element in canvas.elements() {
        canvas_node
            .children
            .push(XMLNode::Element(element_to_node(element)));
    }

    let mut root = XmlElement::new("project");
    root.attributes
        .insert("name".to_string(), project.name().to_string());
    root.children.push(XMLNode::Element(canvas_node));
    Some(root)
}

fn element_to_node(element: &Element) -> XmlElement {
    let mut node = XmlElement::new("element");
    node.attributes.insert("type".to_string(), element.tag());

    for (name, value) in element.properties() {
        let mut field = XmlElement::new(name);
        match value {
            // Whitespace-only character data is dropped as ignorable on
            // parse; a CDATA section survives the trip intact.
            PropertyValue::Str(text) if text.trim().is_empty() => {
                field.children.push(XMLNode::CData(text))
            }
            PropertyValue::Str(text) => field.children.push(XMLNode::Text(text)),
            PropertyValue::Float(number) => field.children.push(XMLNode::Text(number.to_string())),
            PropertyValue::Int(number) => field.children.push(XMLNode::Text(number.to_string())),
            PropertyValue::Elements(items) => {
                for item in &items {
                    field.children.push(XMLNode::Element(element_to_node(item)));
                }
            }
        }
        node.children.push(XMLNode::Element(field));
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_project;
    use scene::{Canvas, Group, Polygon, Project};
    use tempfile::tempdir;

    fn child_text(node: &XmlElement, name: &str) -> String {
        node.get_child(name)
            .map(|child| {
                child
                    .children
                    .iter()
                    .filter_map(|entry| match entry {
                        XMLNode::Text(text) => Some(text.as_str()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_export_import_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("design.xml");

        export_xml(&path, &sample_project()).unwrap();
        let root = import_xml(&path).unwrap();

        assert_eq!(root.name, "project");
        assert_eq!(root.attributes.get("name").map(String::as_str), Some("My Design"));

        let root_children: Vec<&XmlElement> = root
            .children
            .iter()
            .filter_map(|node| match node {
                XMLNode::Element(element) => Some(element),
                _ => None,
            })
            .collect();
        assert_eq!(root_children.len(), 1);
        let canvas = root_children[0];
        assert_eq!(canvas.name, "canvas");
        assert_eq!(canvas.attributes.get("width").map(String::as_str), Some("800"));
        assert_eq!(canvas.attributes.get("height").map(String::as_str), Some("600"));

        let elements: Vec<&XmlElement> = canvas
            .children
            .iter()
            .filter_map(|node| match node {
                XMLNode::Element(element) => Some(element),
                _ => None,
            })
            .collect();
        assert_eq!(elements.len(), 3);
        assert!(elements.iter().all(|element| element.name == "element"));
        assert_eq!(elements[0].attributes.get("type").map(String::as_str), Some("Circle"));
        assert_eq!(child_text(elements[0], "color"), "red");
        assert_eq!(child_text(elements[0], "radius"), "50");
        assert_eq!(elements[2].attributes.get("type").map(String::as_str), Some("Text"));
        assert_eq!(child_text(elements[2], "content"), "Hello, World!");
        assert_eq!(child_text(elements[2], "font_size"), "24");
    }

    #[test]
    fn test_groups_nest_under_an_items_node() {
        let mut group = Group::new();
        group.add(Polygon::new("gold", 6).unwrap()).unwrap();

        let mut canvas = Canvas::new(40.0, 40.0).unwrap();
        canvas.add_element(group);
        let mut project = Project::new("grouped").unwrap();
        project.set_canvas(canvas);

        let tree = project_to_tree(&project).unwrap();
        let canvas_node = tree.get_child("canvas").unwrap();
        let group_node = canvas_node.get_child("element").unwrap();
        assert_eq!(group_node.attributes.get("type").map(String::as_str), Some("Group"));

        let items = group_node.get_child("items").unwrap();
        let polygon = items.get_child("element").unwrap();
        assert_eq!(polygon.attributes.get("type").map(String::as_str), Some("Polygon"));
        assert_eq!(child_text(polygon, "sides"), "6");
    }

    #[test]
    fn test_export_requires_a_canvas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.xml");
        let project = Project::new("empty").unwrap();

        let err = export_xml(&path, &project).unwrap_err();
        match err {
            InterchangeError::FileWrite(msg) => assert!(msg.contains("no canvas")),
            other => panic!("expected FileWrite, got {:?}", other),
        }
    }

    #[test]
    fn test_export_to_unwritable_path_is_a_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("design.xml");

        let err = export_xml(&path, &sample_project()).unwrap_err();
        match err {
            InterchangeError::FileWrite(msg) => assert!(msg.contains("os error")),
            other => panic!("expected FileWrite, got {:?}", other),
        }
    }

    #[test]
    fn test_import_missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = import_xml(dir.path().join("nowhere.xml")).unwrap_err();
        assert!(matches!(err, InterchangeError::FileRead(_)));
    }

    #[test]
    fn test_import_rejects_malformed_xml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.xml");
        std::fs::write(&path, "<project name=\"x\"><canvas>").unwrap();

        let err = import_xml(&path).unwrap_err();
        assert!(matches!(err, InterchangeError::FileRead(_)));
    }
}
