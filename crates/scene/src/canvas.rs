use crate::element::Drawable;
use crate::{Element, SceneError};

/// A fixed-size drawing surface holding an ordered list of elements.
///
/// `add_element` accepts any [`Element`] without checking it, groups
/// included; [`Group`](crate::Group) is the only container that validates
/// its members.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
    elements: Vec<Element>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Result<Self, SceneError> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(SceneError::InvalidArgument(
                "canvas width and height must be positive numbers".into(),
            ));
        }
        Ok(Self {
            width,
            height,
            elements: Vec::new(),
        })
    }

    pub fn add_element(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl Drawable for Canvas {
    fn draw(&self) -> String {
        let body = self
            .elements
            .iter()
            .map(|element| element.draw())
            .collect::<Vec<_>>()
            .join("\n");
        format!("canvas size: {}x{}\n{}", self.width, self.height, body)
    }
}
