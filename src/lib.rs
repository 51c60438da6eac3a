pub mod config;
pub mod logger;
pub mod schema;
pub mod content;
pub mod post_list;
pub mod collection;
pub mod text_utils;
pub mod view;
mod test_data;

pub use schema::{validate, PostEntry, ValidationErrors};
