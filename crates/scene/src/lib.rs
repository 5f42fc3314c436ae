//! Document model for Easel drawings.
//!
//! A document is a [`Project`] holding one [`Canvas`], which holds an
//! ordered list of [`Element`]s: shapes, text, or groups of those.
//! Every value is validated once at construction; after that the only
//! mutations are append-style additions to containers.

mod canvas;
mod element;
mod error;
mod group;
mod project;
mod property;
mod shape;
mod text;

pub use canvas::Canvas;
pub use element::{Drawable, Element};
pub use error::SceneError;
pub use group::Group;
pub use project::Project;
pub use property::PropertyValue;
pub use shape::{Circle, Line, Polygon, Rectangle, Shape};
pub use text::Text;
