use crate::Element;

/// A single exported field of an element.
///
/// Each element kind declares its own field set through
/// [`Element::properties`](crate::Element::properties); the serializers
/// consume the returned pairs generically, so no format code hardcodes a
/// per-kind field list.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Str(String),
    Float(f64),
    Int(u64),
    /// Nested elements (group members), serialized recursively.
    Elements(Vec<Element>),
}
