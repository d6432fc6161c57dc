//! Input document: a PokeAPI-style list with a `results` array of records,
//! each carrying a resource `url`.

mod load;
mod parse;

pub use load::{load_document, parse_document};
pub use parse::{ApiDocument, ApiRecord};
