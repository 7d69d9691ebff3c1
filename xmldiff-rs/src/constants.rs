//! Constants used throughout xmldiff.

/// Namespace URI of the XML-Document-Transform vocabulary.
pub const XDT_NAMESPACE: &str = "http://schemas.microsoft.com/XML-Document-Transform";

/// Prefix bound to [`XDT_NAMESPACE`] on the transform document root.
pub const XDT_PREFIX: &str = "xdt";

/// Qualified name of the transform instruction attribute.
pub const XDT_TRANSFORM_ATTR: &str = "xdt:Transform";

/// Qualified name of the locator instruction attribute.
pub const XDT_LOCATOR_ATTR: &str = "xdt:Locator";

/// Number of raw attributes shown next to an element in change logs.
pub const MAX_ATTRIBUTES_PREVIEW: usize = 2;

/// Indentation emitted once per depth level by the text renderer.
pub const TEXT_INDENT: &str = "...";
