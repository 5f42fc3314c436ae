//! Rebuilding live documents from imported data.
//!
//! Import hands back raw trees; the functions here walk them and rebuild
//! [`Project`] values. Every field passes through the model constructors
//! again, so a document violating an invariant (a negative radius, an
//! empty color) is rejected rather than smuggled in.

use std::path::Path;

use scene::{Canvas, Circle, Element, Group, Line, Polygon, Project, Rectangle, Text};
use serde_json::{Map, Value};
use xmltree::{Element as XmlElement, XMLNode};

use crate::{import_json, import_xml, InterchangeError};

/// Import the JSON document at `path` and rebuild the project it describes.
pub fn load_json(path: impl AsRef<Path>) -> Result<Project, InterchangeError> {
    let value = import_json(path)?;
    project_from_value(&value)
}

/// Import the XML document at `path` and rebuild the project it describes.
pub fn load_xml(path: impl AsRef<Path>) -> Result<Project, InterchangeError> {
    let root = import_xml(path)?;
    project_from_xml(&root)
}

/// Rebuild a [`Project`] from a previously exported JSON document.
pub fn project_from_value(value: &Value) -> Result<Project, InterchangeError> {
    let object = value.as_object().ok_or_else(|| {
        InterchangeError::InvalidStructure("document root is not an object".into())
    })?;

    let name = str_field(object, "name")?;
    let mut project = Project::new(name).map_err(invalid_value)?;

    let canvas_object = field(object, "canvas")?.as_object().ok_or_else(|| {
        InterchangeError::InvalidStructure("canvas is not an object".into())
    })?;
    let width = number_field(canvas_object, "width")?;
    let height = number_field(canvas_object, "height")?;
    let mut canvas = Canvas::new(width, height).map_err(invalid_value)?;

    let elements = field(canvas_object, "elements")?.as_array().ok_or_else(|| {
        InterchangeError::InvalidStructure("elements is not an array".into())
    })?;
    for entry in elements {
        canvas.add_element(element_from_value(entry)?);
    }

    log::debug!(
        "rebuilt project '{}' ({} elements) from JSON",
        project.name(),
        canvas.elements().len()
    );
    project.set_canvas(canvas);
    Ok(project)
}

fn element_from_value(value: &Value) -> Result<Element, InterchangeError> {
    let object = value.as_object().ok_or_else(|| {
        InterchangeError::InvalidStructure("element entry is not an object".into())
    })?;
    let tag = str_field(object, "type")?;
    let properties = field(object, "properties")?.as_object().ok_or_else(|| {
        InterchangeError::InvalidValue("properties must be an object".into())
    })?;

    match tag {
        "Circle" => {
            let color = str_field(properties, "color")?;
            let radius = number_field(properties, "radius")?;
            Ok(Circle::new(color, radius).map_err(invalid_value)?.into())
        }
        "Rectangle" => {
            let color = str_field(properties, "color")?;
            let width = number_field(properties, "width")?;
            let height = number_field(properties, "height")?;
            Ok(Rectangle::new(color, width, height)
                .map_err(invalid_value)?
                .into())
        }
        "Line" => {
            let color = str_field(properties, "color")?;
            let length = number_field(properties, "length")?;
            Ok(Line::new(color, length).map_err(invalid_value)?.into())
        }
        "Polygon" => {
            let color = str_field(properties, "color")?;
            let sides = int_field(properties, "sides")?;
            let sides = u32::try_from(sides)
                .map_err(|_| InterchangeError::InvalidValue("sides is out of range".into()))?;
            Ok(Polygon::new(color, sides).map_err(invalid_value)?.into())
        }
        "Text" => {
            let content = str_field(properties, "content")?;
            let font_size = number_field(properties, "font_size")?;
            Ok(Text::new(content, font_size).map_err(invalid_value)?.into())
        }
        "Group" => {
            let items = field(properties, "items")?.as_array().ok_or_else(|| {
                InterchangeError::InvalidValue("items must be an array".into())
            })?;
            let mut group = Group::new();
            for item in items {
                group.add(element_from_value(item)?).map_err(invalid_value)?;
            }
            Ok(group.into())
        }
        other => Err(InterchangeError::InvalidValue(format!(
            "unknown element type: {}",
            other
        ))),
    }
}

/// Rebuild a [`Project`] from a previously exported XML tree.
pub fn project_from_xml(root: &XmlElement) -> Result<Project, InterchangeError> {
    if root.name != "project" {
        return Err(InterchangeError::InvalidStructure(format!(
            "expected a project element, found '{}'",
            root.name
        )));
    }

    let name = attribute(root, "name")?;
    let mut project = Project::new(name).map_err(invalid_value)?;

    let canvas_node = root
        .get_child("canvas")
        .ok_or_else(|| InterchangeError::MissingField("canvas".into()))?;
    let width = parse_number(attribute(canvas_node, "width")?, "width")?;
    let height = parse_number(attribute(canvas_node, "height")?, "height")?;
    let mut canvas = Canvas::new(width, height).map_err(invalid_value)?;

    for child in child_elements(canvas_node) {
        canvas.add_element(element_from_node(child)?);
    }

    log::debug!(
        "rebuilt project '{}' ({} elements) from XML",
        project.name(),
        canvas.elements().len()
    );
    project.set_canvas(canvas);
    Ok(project)
}

fn element_from_node(node: &XmlElement) -> Result<Element, InterchangeError> {
    if node.name != "element" {
        return Err(InterchangeError::InvalidStructure(format!(
            "expected an element node, found '{}'",
            node.name
        )));
    }
    let tag = attribute(node, "type")?;

    match tag {
        "Circle" => {
            let color = child_text(node, "color")?;
            let radius = parse_number(&child_text(node, "radius")?, "radius")?;
            Ok(Circle::new(color, radius).map_err(invalid_value)?.into())
        }
        "Rectangle" => {
            let color = child_text(node, "color")?;
            let width = parse_number(&child_text(node, "width")?, "width")?;
            let height = parse_number(&child_text(node, "height")?, "height")?;
            Ok(Rectangle::new(color, width, height)
                .map_err(invalid_value)?
                .into())
        }
        "Line" => {
            let color = child_text(node, "color")?;
            let length = parse_number(&child_text(node, "length")?, "length")?;
            Ok(Line::new(color, length).map_err(invalid_value)?.into())
        }
        "Polygon" => {
            let color = child_text(node, "color")?;
            let sides = parse_int(&child_text(node, "sides")?, "sides")?;
            Ok(Polygon::new(color, sides).map_err(invalid_value)?.into())
        }
        "Text" => {
            let content = child_text(node, "content")?;
            let font_size = parse_number(&child_text(node, "font_size")?, "font_size")?;
            Ok(Text::new(content, font_size).map_err(invalid_value)?.into())
        }
        "Group" => {
            let items = node
                .get_child("items")
                .ok_or_else(|| InterchangeError::MissingField("items".into()))?;
            let mut group = Group::new();
            for item in child_elements(items) {
                group.add(element_from_node(item)?).map_err(invalid_value)?;
            }
            Ok(group.into())
        }
        other => Err(InterchangeError::InvalidValue(format!(
            "unknown element type: {}",
            other
        ))),
    }
}

fn invalid_value(err: scene::SceneError) -> InterchangeError {
    InterchangeError::InvalidValue(err.to_string())
}

fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Result<&'a Value, InterchangeError> {
    object
        .get(name)
        .ok_or_else(|| InterchangeError::MissingField(name.to_string()))
}

fn str_field<'a>(object: &'a Map<String, Value>, name: &str) -> Result<&'a str, InterchangeError> {
    field(object, name)?
        .as_str()
        .ok_or_else(|| InterchangeError::InvalidValue(format!("{} must be a string", name)))
}

fn number_field(object: &Map<String, Value>, name: &str) -> Result<f64, InterchangeError> {
    field(object, name)?
        .as_f64()
        .ok_or_else(|| InterchangeError::InvalidValue(format!("{} must be a number", name)))
}

fn int_field(object: &Map<String, Value>, name: &str) -> Result<u64, InterchangeError> {
    field(object, name)?
        .as_u64()
        .ok_or_else(|| InterchangeError::InvalidValue(format!("{} must be an integer", name)))
}

fn attribute<'a>(node: &'a XmlElement, name: &str) -> Result<&'a str, InterchangeError> {
    node.attributes
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| InterchangeError::MissingField(name.to_string()))
}

fn child_elements(node: &XmlElement) -> impl Iterator<Item = &XmlElement> {
    node.children.iter().filter_map(|child| match child {
        XMLNode::Element(element) => Some(element),
        _ => None,
    })
}

fn child_text(node: &XmlElement, name: &str) -> Result<String, InterchangeError> {
    let child = node
        .get_child(name)
        .ok_or_else(|| InterchangeError::MissingField(name.to_string()))?;
    let text: String = child
        .children
        .iter()
        .filter_map(|entry| match entry {
            XMLNode::Text(text) | XMLNode::CData(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    Ok(text)
}

fn parse_number(text: &str, name: &str) -> Result<f64, InterchangeError> {
    text.trim()
        .parse()
        .map_err(|_| InterchangeError::InvalidValue(format!("{} is not a number: '{}'", name, text)))
}

fn parse_int(text: &str, name: &str) -> Result<u32, InterchangeError> {
    text.trim()
        .parse()
        .map_err(|_| InterchangeError::InvalidValue(format!("{} is not an integer: '{}'", name, text)))
}
