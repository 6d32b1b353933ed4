mod handler;
mod model;

pub use handler::{index, submit};
pub use model::SearchForm;
