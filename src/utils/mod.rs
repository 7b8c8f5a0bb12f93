mod dom;
mod string;

pub use dom::{text_content, Body};
pub use string::decode_entities;
