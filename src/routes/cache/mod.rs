mod handler;

pub use handler::{clear, stats};
