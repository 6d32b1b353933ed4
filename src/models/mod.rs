mod variant;

pub use variant::{Lookup, LookupError, VariantRecord};
