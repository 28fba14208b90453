//! Domain services - Storage contract and the service that fronts it

mod creature_service;
mod creatures;

pub use creature_service::CreatureService;
pub use creatures::Creatures;
