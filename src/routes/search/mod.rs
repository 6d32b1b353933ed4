mod handler;

pub use handler::search;
