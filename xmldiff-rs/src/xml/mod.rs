//! XML parsing and output.
//!
//! The diff core only works on element trees; this module is the boundary
//! that turns text into trees and trees back into text.

mod parser;
mod printer;

pub use parser::{parse_file, parse_str, XmlParser, XmlParserOptions};
pub use printer::{
    print_to_string, print_to_string_pretty, print_with_options, XmlPrinter, XmlPrinterOptions,
};
