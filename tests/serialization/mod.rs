//! # Serialization through serde
//!
//! Values are written as a pair of decimal strings and survive a round trip through JSON.

/// # Generation and execution
#[allow(missing_docs)]
mod test;
