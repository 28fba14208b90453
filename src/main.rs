//! Cellars & Centaurs - Creature store demo
//!
//! Builds the storage stack from the environment, creates a creature,
//! reads it back and lists the bestiary.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cellars_and_centaurs::application::{
    challenge_rating, format_creature_info, CreateCreatureRequest,
};
use cellars_and_centaurs::domain::value_objects::{ArmorClass, CreatureType, Speed};
use cellars_and_centaurs::infrastructure::config::AppConfig;
use cellars_and_centaurs::infrastructure::state::AppState;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cellars & Centaurs");
    tracing::info!("  Store: {:?}", config.store);

    let state = AppState::new(config);
    let facade = &state.creature_facade;

    let griffon = facade
        .create(CreateCreatureRequest {
            creature_type: CreatureType::Monstrosity,
            walk_speed: Speed::feet(30),
            fly_speed: Speed::feet(80),
            swim_speed: Speed::ZERO,
            burrow_speed: Speed::ZERO,
            climb_speed: Speed::ZERO,
            armor_class: ArmorClass::new(12, 0),
            hit_points_value: 59,
        })
        .context("Failed to create griffon")?;
    tracing::info!(
        challenge_rating = challenge_rating(&griffon),
        "Created creature\n{}",
        format_creature_info(&griffon)
    );

    let standard = facade
        .create_standard()
        .context("Failed to create standard creature")?;

    let found = facade.find(griffon.id())?;
    tracing::info!(creature_id = %found.id(), "Found creature");

    let all = facade.find_all()?;
    tracing::info!(count = all.len(), "Bestiary loaded");

    facade.delete(standard.id())?;
    if let Err(e) = facade.find(standard.id()) {
        tracing::info!("Lookup after delete: {}", e);
    }

    Ok(())
}
