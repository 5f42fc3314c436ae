use crate::element::Drawable;
use crate::property::PropertyValue;
use crate::{Element, SceneError};

/// An ordered collection of shapes and text.
///
/// Unlike [`Canvas`](crate::Canvas), a group checks what it is given:
/// only shapes and text may join, never another group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    items: Vec<Element>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member, rejecting anything that is not a shape or text.
    pub fn add(&mut self, element: impl Into<Element>) -> Result<(), SceneError> {
        let element = element.into();
        if matches!(element, Element::Group(_)) {
            return Err(SceneError::InvalidShape(
                "only shapes and text can be grouped".into(),
            ));
        }
        self.items.push(element);
        Ok(())
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        vec![("items", PropertyValue::Elements(self.items.clone()))]
    }
}

impl Drawable for Group {
    fn draw(&self) -> String {
        self.items
            .iter()
            .map(|item| item.draw())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
