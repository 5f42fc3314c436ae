use crate::element::Drawable;
use crate::{Canvas, SceneError};

/// The top of the document tree: a named project with at most one canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    name: String,
    canvas: Option<Canvas>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Result<Self, SceneError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SceneError::InvalidArgument(
                "project name cannot be empty".into(),
            ));
        }
        Ok(Self { name, canvas: None })
    }

    /// Attach a canvas, replacing any previous one.
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = Some(canvas);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }
}

impl Drawable for Project {
    fn draw(&self) -> String {
        match &self.canvas {
            None => "no canvas set".to_string(),
            Some(canvas) => format!("project: {}\n{}", self.name, canvas.draw()),
        }
    }
}
