//! XML text helpers used by the part generators.

mod escape;

pub use escape::escape_xml;
