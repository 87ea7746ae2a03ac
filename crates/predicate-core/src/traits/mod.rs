pub mod lookup;

pub use lookup::{InMemoryLookup, RegulatoryLookup};
