//! Cellars & Centaurs - Creature domain model
//!
//! Layers, innermost first:
//! - `domain`: creature entity, value objects and the `Creatures` storage port
//! - `infrastructure`: record stores, the persistence adapter and configuration
//! - `application`: the facade that builds and saves creatures

pub mod application;
pub mod domain;
pub mod infrastructure;
