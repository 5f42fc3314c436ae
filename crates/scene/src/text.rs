use crate::element::Drawable;
use crate::property::PropertyValue;
use crate::SceneError;

/// A run of text with a font size.
///
/// Text is not a shape: it joins groups and canvases through the shared
/// [`Drawable`] capability instead of the shape hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    content: String,
    font_size: f64,
}

impl Text {
    pub fn new(content: impl Into<String>, font_size: f64) -> Result<Self, SceneError> {
        let content = content.into();
        if content.is_empty() {
            return Err(SceneError::InvalidArgument(
                "text content cannot be empty".into(),
            ));
        }
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(SceneError::InvalidArgument(
                "font size must be a positive number".into(),
            ));
        }
        Ok(Self { content, font_size })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        vec![
            ("content", PropertyValue::Str(self.content.clone())),
            ("font_size", PropertyValue::Float(self.font_size)),
        ]
    }
}

impl Drawable for Text {
    fn draw(&self) -> String {
        format!(
            "drawing text '{}' with font size {}",
            self.content, self.font_size
        )
    }
}
