//! Item system: item values and the archetype item pools.

pub mod pools;
pub mod types;

pub use pools::*;
pub use types::*;
