//! Easel Interchange Formats
//!
//! JSON and XML renditions of an easel project. Both carry the same
//! information: the project name, the canvas dimensions, and one entry
//! per canvas element tagged with its kind and listing its fields.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "name": "My Design",
//!   "canvas": {
//!     "width": 800.0,
//!     "height": 600.0,
//!     "elements": [
//!       { "type": "Circle", "properties": { "color": "red", "radius": 50.0 } }
//!     ]
//!   }
//! }
//! ```
//!
//! # XML Format
//!
//! ```xml
//! <project name="My Design">
//!   <canvas width="800" height="600">
//!     <element type="Circle">
//!       <color>red</color>
//!       <radius>50</radius>
//!     </element>
//!   </canvas>
//! </project>
//! ```
//!
//! Importing (`import_json`, `import_xml`) hands back the parsed document
//! untouched; rebuilding live [`scene`] values from it is a separate step
//! ([`project_from_value`], [`project_from_xml`], or the `load_*` helpers
//! that chain the two).

mod decode;
mod json;
mod xml;

pub use decode::{load_json, load_xml, project_from_value, project_from_xml};
pub use json::{export_json, import_json, project_to_value};
pub use xml::{export_xml, import_xml, project_to_tree};

/// Error type for interchange operations.
#[derive(Debug)]
pub enum InterchangeError {
    /// Reading or parsing a document failed; carries the cause.
    FileRead(String),
    /// Writing a document failed; carries the cause.
    FileWrite(String),
    /// A required field, attribute, or child node is absent.
    MissingField(String),
    /// A field holds the wrong kind of value, or one the model rejects.
    InvalidValue(String),
    /// The document tree does not describe a project at all.
    InvalidStructure(String),
}

impl std::fmt::Display for InterchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileRead(msg) => write!(f, "File read error: {}", msg),
            Self::FileWrite(msg) => write!(f, "File write error: {}", msg),
            Self::MissingField(msg) => write!(f, "Missing field: {}", msg),
            Self::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            Self::InvalidStructure(msg) => write!(f, "Invalid structure: {}", msg),
        }
    }
}

impl std::error::Error for InterchangeError {}
