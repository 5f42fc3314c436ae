//! Shape primitives and their construction-time validation.
//!
//! Shapes are plain value objects: a constructor checks every field once,
//! after which the value never changes. Variant names double as the `type`
//! discriminator in exported documents, so renaming one is a wire format
//! change.

use strum::Display;

use crate::element::Drawable;
use crate::property::PropertyValue;
use crate::SceneError;

/// A drawable geometric primitive.
#[derive(Clone, Debug, Display, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Line(Line),
    Polygon(Polygon),
}

impl Shape {
    pub fn circle(color: impl Into<String>, radius: f64) -> Result<Self, SceneError> {
        Circle::new(color, radius).map(Shape::Circle)
    }

    pub fn rectangle(
        color: impl Into<String>,
        width: f64,
        height: f64,
    ) -> Result<Self, SceneError> {
        Rectangle::new(color, width, height).map(Shape::Rectangle)
    }

    pub fn line(color: impl Into<String>, length: f64) -> Result<Self, SceneError> {
        Line::new(color, length).map(Shape::Line)
    }

    pub fn polygon(color: impl Into<String>, sides: u32) -> Result<Self, SceneError> {
        Polygon::new(color, sides).map(Shape::Polygon)
    }

    /// The color carried by every shape kind.
    pub fn color(&self) -> &str {
        match self {
            Shape::Circle(circle) => circle.color(),
            Shape::Rectangle(rectangle) => rectangle.color(),
            Shape::Line(line) => line.color(),
            Shape::Polygon(polygon) => polygon.color(),
        }
    }

    /// The shape's exported fields, in declaration order.
    pub fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        match self {
            Shape::Circle(circle) => circle.properties(),
            Shape::Rectangle(rectangle) => rectangle.properties(),
            Shape::Line(line) => line.properties(),
            Shape::Polygon(polygon) => polygon.properties(),
        }
    }
}

impl Drawable for Shape {
    fn draw(&self) -> String {
        match self {
            Shape::Circle(circle) => circle.draw(),
            Shape::Rectangle(rectangle) => rectangle.draw(),
            Shape::Line(line) => line.draw(),
            Shape::Polygon(polygon) => polygon.draw(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

fn validate_color(color: &str) -> Result<(), SceneError> {
    if color.is_empty() {
        return Err(SceneError::InvalidArgument("color cannot be empty".into()));
    }
    Ok(())
}

// Strictly positive and finite; rejects zero, negatives, NaN and infinities.
fn validate_dimension(name: &str, value: f64) -> Result<(), SceneError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(SceneError::InvalidArgument(format!(
            "{} must be a positive number",
            name
        )));
    }
    Ok(())
}

/// A circle described by its radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    color: String,
    radius: f64,
}

impl Circle {
    pub fn new(color: impl Into<String>, radius: f64) -> Result<Self, SceneError> {
        let color = color.into();
        validate_color(&color)?;
        validate_dimension("radius", radius)?;
        Ok(Self { color, radius })
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        vec![
            ("color", PropertyValue::Str(self.color.clone())),
            ("radius", PropertyValue::Float(self.radius)),
        ]
    }
}

impl Drawable for Circle {
    fn draw(&self) -> String {
        format!(
            "drawing circle with radius {} and color {}",
            self.radius, self.color
        )
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    color: String,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(color: impl Into<String>, width: f64, height: f64) -> Result<Self, SceneError> {
        let color = color.into();
        validate_color(&color)?;
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        Ok(Self {
            color,
            width,
            height,
        })
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        vec![
            ("color", PropertyValue::Str(self.color.clone())),
            ("width", PropertyValue::Float(self.width)),
            ("height", PropertyValue::Float(self.height)),
        ]
    }
}

impl Drawable for Rectangle {
    fn draw(&self) -> String {
        format!(
            "drawing rectangle {}x{} with color {}",
            self.width, self.height, self.color
        )
    }
}

/// A straight line segment of a given length.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    color: String,
    length: f64,
}

impl Line {
    pub fn new(color: impl Into<String>, length: f64) -> Result<Self, SceneError> {
        let color = color.into();
        validate_color(&color)?;
        validate_dimension("length", length)?;
        Ok(Self { color, length })
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        vec![
            ("color", PropertyValue::Str(self.color.clone())),
            ("length", PropertyValue::Float(self.length)),
        ]
    }
}

impl Drawable for Line {
    fn draw(&self) -> String {
        format!(
            "drawing line of length {} and color {}",
            self.length, self.color
        )
    }
}

/// A regular polygon with at least three sides.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    color: String,
    sides: u32,
}

impl Polygon {
    pub fn new(color: impl Into<String>, sides: u32) -> Result<Self, SceneError> {
        let color = color.into();
        validate_color(&color)?;
        if sides < 3 {
            return Err(SceneError::InvalidArgument(
                "a polygon needs at least 3 sides".into(),
            ));
        }
        Ok(Self { color, sides })
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        vec![
            ("color", PropertyValue::Str(self.color.clone())),
            ("sides", PropertyValue::Int(u64::from(self.sides))),
        ]
    }
}

impl Drawable for Polygon {
    fn draw(&self) -> String {
        format!(
            "drawing polygon with {} sides and color {}",
            self.sides, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_draw() {
        let circle = Circle::new("red", 50.0).unwrap();
        assert_eq!(circle.draw(), "drawing circle with radius 50 and color red");
    }

    #[test]
    fn test_rectangle_draw() {
        let rectangle = Rectangle::new("blue", 100.0, 200.0).unwrap();
        assert_eq!(rectangle.draw(), "drawing rectangle 100x200 with color blue");
    }

    #[test]
    fn test_line_draw() {
        let line = Line::new("green", 12.5).unwrap();
        assert_eq!(line.draw(), "drawing line of length 12.5 and color green");
    }

    #[test]
    fn test_polygon_draw() {
        let polygon = Polygon::new("black", 6).unwrap();
        assert_eq!(polygon.draw(), "drawing polygon with 6 sides and color black");
    }

    #[test]
    fn test_accessors_expose_constructor_fields() {
        let circle = Circle::new("red", 50.0).unwrap();
        assert_eq!(circle.color(), "red");
        assert_eq!(circle.radius(), 50.0);

        let rectangle = Rectangle::new("blue", 100.0, 200.0).unwrap();
        assert_eq!(rectangle.width(), 100.0);
        assert_eq!(rectangle.height(), 200.0);

        let line = Line::new("green", 12.5).unwrap();
        assert_eq!(line.length(), 12.5);

        let polygon = Polygon::new("black", 6).unwrap();
        assert_eq!(polygon.sides(), 6);
    }

    #[test]
    fn test_shape_tag_is_variant_name() {
        let shape = Shape::circle("red", 1.0).unwrap();
        assert_eq!(shape.to_string(), "Circle");
        let shape = Shape::polygon("red", 3).unwrap();
        assert_eq!(shape.to_string(), "Polygon");
    }

    #[test]
    fn test_shape_constructors_validate_like_the_structs() {
        assert!(Shape::rectangle("blue", 1.0, 2.0).is_ok());
        assert!(Shape::line("", 1.0).is_err());
        assert!(Shape::polygon("red", 2).is_err());
        assert_eq!(Shape::circle("red", 7.0).unwrap().color(), "red");
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(matches!(
            Circle::new("red", 0.0),
            Err(SceneError::InvalidArgument(_))
        ));
        assert!(matches!(
            Circle::new("red", -4.0),
            Err(SceneError::InvalidArgument(_))
        ));
        assert!(matches!(
            Rectangle::new("blue", 0.0, 10.0),
            Err(SceneError::InvalidArgument(_))
        ));
        assert!(matches!(
            Rectangle::new("blue", 10.0, -1.0),
            Err(SceneError::InvalidArgument(_))
        ));
        assert!(matches!(
            Line::new("green", 0.0),
            Err(SceneError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_dimensions() {
        assert!(Circle::new("red", f64::NAN).is_err());
        assert!(Circle::new("red", f64::INFINITY).is_err());
        assert!(Rectangle::new("blue", f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_rejects_too_few_polygon_sides() {
        assert!(matches!(
            Polygon::new("red", 2),
            Err(SceneError::InvalidArgument(_))
        ));
        assert!(Polygon::new("red", 3).is_ok());
    }

    #[test]
    fn test_rejects_empty_color() {
        assert!(matches!(
            Circle::new("", 5.0),
            Err(SceneError::InvalidArgument(_))
        ));
        assert!(matches!(
            Rectangle::new("", 1.0, 1.0),
            Err(SceneError::InvalidArgument(_))
        ));
        assert!(matches!(
            Line::new("", 1.0),
            Err(SceneError::InvalidArgument(_))
        ));
        assert!(matches!(
            Polygon::new("", 5),
            Err(SceneError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_circle_properties_in_declaration_order() {
        let circle = Circle::new("red", 50.0).unwrap();
        assert_eq!(
            circle.properties(),
            vec![
                ("color", PropertyValue::Str("red".into())),
                ("radius", PropertyValue::Float(50.0)),
            ]
        );
    }

    #[test]
    fn test_rectangle_properties_in_declaration_order() {
        let rectangle = Rectangle::new("blue", 100.0, 200.0).unwrap();
        let names: Vec<_> = rectangle
            .properties()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["color", "width", "height"]);
    }
}
