//! The element wrapper and the shared drawing capability.
//!
//! [`Element`] is the universe of values a container can hold. Groups
//! restrict it further at insertion time; canvases do not.

use crate::property::PropertyValue;
use crate::shape::{Circle, Line, Polygon, Rectangle};
use crate::{Group, SceneError, Shape, Text};

/// Capability shared by everything that can describe itself when drawn.
pub trait Drawable {
    /// A human-readable description of the drawn result.
    fn draw(&self) -> String;
}

/// Any value a canvas or group can carry.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Shape(Shape),
    Text(Text),
    Group(Group),
}

impl Element {
    /// The discriminator written as `type` in exported documents:
    /// the concrete shape kind, `"Text"`, or `"Group"`.
    pub fn tag(&self) -> String {
        match self {
            Element::Shape(shape) => shape.to_string(),
            Element::Text(_) => "Text".to_string(),
            Element::Group(_) => "Group".to_string(),
        }
    }

    /// The element's exported fields, in declaration order.
    pub fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        match self {
            Element::Shape(shape) => shape.properties(),
            Element::Text(text) => text.properties(),
            Element::Group(group) => group.properties(),
        }
    }

    pub fn as_shape(&self) -> Result<&Shape, SceneError> {
        match self {
            Element::Shape(shape) => Ok(shape),
            other => Err(SceneError::TypeMismatch(format!(
                "expected a shape, found {}",
                other.tag()
            ))),
        }
    }

    pub fn as_text(&self) -> Result<&Text, SceneError> {
        match self {
            Element::Text(text) => Ok(text),
            other => Err(SceneError::TypeMismatch(format!(
                "expected text, found {}",
                other.tag()
            ))),
        }
    }

    pub fn as_group(&self) -> Result<&Group, SceneError> {
        match self {
            Element::Group(group) => Ok(group),
            other => Err(SceneError::TypeMismatch(format!(
                "expected a group, found {}",
                other.tag()
            ))),
        }
    }
}

impl Drawable for Element {
    fn draw(&self) -> String {
        match self {
            Element::Shape(shape) => shape.draw(),
            Element::Text(text) => text.draw(),
            Element::Group(group) => group.draw(),
        }
    }
}

impl From<Shape> for Element {
    fn from(shape: Shape) -> Self {
        Element::Shape(shape)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

impl From<Group> for Element {
    fn from(group: Group) -> Self {
        Element::Group(group)
    }
}

impl From<Circle> for Element {
    fn from(circle: Circle) -> Self {
        Element::Shape(Shape::Circle(circle))
    }
}

impl From<Rectangle> for Element {
    fn from(rectangle: Rectangle) -> Self {
        Element::Shape(Shape::Rectangle(rectangle))
    }
}

impl From<Line> for Element {
    fn from(line: Line) -> Self {
        Element::Shape(Shape::Line(line))
    }
}

impl From<Polygon> for Element {
    fn from(polygon: Polygon) -> Self {
        Element::Shape(Shape::Polygon(polygon))
    }
}
