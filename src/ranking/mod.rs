//! Rating-based ranking of rated entities.
//!
//! The ranker fixes the order in which players are dealt to teams:
//! highest total rating first, with equal ratings kept in input order so
//! that a given roster always produces the same deal.

mod engine;

pub use engine::Ranker;
