//! Model card record types.
//!
//! # Responsibility
//! - Define the nested record built by one submission cycle.
//! - Own the JSON wire shape (`modelDetails.*`, camelCase keys).
//!
//! # Invariants
//! - List fields keep submission order.
//! - Records carry no identity or lifecycle beyond one submission.

pub mod card;
pub mod iso_date;
