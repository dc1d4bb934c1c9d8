//! # Restaurant Chooser
//!
//! Runs one scripted session against the configured data directory: seeds a few people and
//! restaurants when the catalogs are empty, then picks participants, filters, chooses and
//! vetoes until a restaurant is accepted.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! CHOOSER_SEED=7 CHOOSER_DATA_DIR=/tmp/chooser RUST_LOG=debug cargo run
//! ```

use catalog_actor::tracing::setup_tracing;
use restaurant_chooser::config::Config;
use restaurant_chooser::error::ChooserError;
use restaurant_chooser::lifecycle::{ChooserSystem, Event, Snapshot};
use restaurant_chooser::model::{PersonForm, RestaurantForm};
use restaurant_chooser::selection::{FilterField, Phase};
use tracing::{info, warn, Instrument};

fn demo_people() -> Vec<PersonForm> {
    vec![
        PersonForm::new("Alice", "Smith", "me"),
        PersonForm::new("Bob", "Jones", "friend"),
        PersonForm::new("Carol", "Nguyen", "coworker"),
    ]
}

fn demo_restaurant(
    name: &str,
    cuisine: &str,
    price: &str,
    rating: &str,
    delivery: &str,
) -> RestaurantForm {
    RestaurantForm {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        price: price.to_string(),
        rating: rating.to_string(),
        phone: "5551234567".to_string(),
        address: "100 Main Street".to_string(),
        website: format!("https://{}.example.com", name.to_lowercase().replace(' ', "-")),
        delivery: delivery.to_string(),
    }
}

fn demo_restaurants() -> Vec<RestaurantForm> {
    vec![
        demo_restaurant("Mario Pizza", "Italian", "2", "4", "Yes"),
        demo_restaurant("Sushi Go", "Sushi", "4", "5", "No"),
        demo_restaurant("Taco Town", "Mexican", "1", "3", "Yes"),
        demo_restaurant("Curry House", "Indian", "2", "5", "Yes"),
        demo_restaurant("Smoke Pit", "BBQ", "3", "4", "Yes"),
    ]
}

async fn seed_if_empty(system: &ChooserSystem) -> Result<(), ChooserError> {
    let snapshot = system.snapshot().await?;
    if !snapshot.is_complete() {
        // An unreadable catalog lists as empty; seeding on top of it would fail anyway
        for e in &snapshot.read_errors {
            warn!(error = %e, "Skipping demo data");
        }
        return Ok(());
    }
    if snapshot.people.is_empty() {
        for form in demo_people() {
            system.dispatch(Event::AddPerson(form)).await?;
        }
    }
    if snapshot.restaurants.is_empty() {
        for form in demo_restaurants() {
            system.dispatch(Event::AddRestaurant(form)).await?;
        }
    }
    Ok(())
}

async fn run_session(system: &ChooserSystem) -> Result<Snapshot, ChooserError> {
    let mut snapshot = system.dispatch(Event::StartSelection).await?;

    let everyone: Vec<_> = snapshot
        .selection
        .people
        .iter()
        .map(|(person, _)| person.key.clone())
        .collect();
    for key in everyone {
        system.dispatch(Event::ToggleParticipant(key)).await?;
    }
    system.dispatch(Event::ConfirmParticipants).await?;
    system
        .dispatch(Event::SetFilter(FilterField::Delivery, "Yes".to_string()))
        .await?;
    snapshot = system.dispatch(Event::ConfirmFilter).await?;
    info!(candidates = snapshot.selection.candidate_count, "Filter applied");

    if snapshot.selection.phase == Phase::Choosing {
        snapshot = system.dispatch(Event::RandomChoose).await?;
    }

    // Everyone vetoes in turn until something sticks or the vetoes run out
    while snapshot.selection.phase == Phase::VetoPending {
        if let Some(chosen) = &snapshot.selection.chosen {
            info!(restaurant = %chosen.name, "{}", chosen.summary());
        }
        let next_voter = snapshot
            .selection
            .participants
            .iter()
            .find(|p| !p.vetoed)
            .map(|p| p.key().clone());
        snapshot = match next_voter {
            Some(key) if snapshot.selection.veto_available => {
                info!(participant = %key, "Veto");
                system.dispatch(Event::Veto(key)).await?
            }
            _ => system.dispatch(Event::Accept).await?,
        };
    }

    Ok(snapshot)
}

#[tokio::main]
async fn main() -> Result<(), ChooserError> {
    setup_tracing();

    let config = Config::load()?;
    info!(data_dir = %config.data_dir.display(), "Starting restaurant chooser");

    let system = ChooserSystem::from_config(&config);
    seed_if_empty(&system).await?;

    let span = tracing::info_span!("session");
    match run_session(&system).instrument(span).await {
        Ok(snapshot) => match &snapshot.selection.accepted {
            Some(restaurant) => {
                info!("Enjoy your meal!");
                for (label, value) in restaurant.details() {
                    info!("{label}: {value}");
                }
            }
            None => warn!(phase = %snapshot.selection.phase, "Session ended without a restaurant"),
        },
        Err(e) => warn!(error = %e, "Session failed"),
    }
    system.dispatch(Event::Reset).await?;

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
