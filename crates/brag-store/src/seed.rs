//! Demo-data seeding
//!
//! Seeds the feed store with the demo directory and a couple of recent
//! shoutouts so a fresh instance has something to show. Reactions are
//! replayed through `toggle_reaction`, which keeps the per-kind tallies
//! equal to the membership sets from the very first request.

use brag_core::{DomainError, FeedStore, ReactionKind, Shoutout, SnowflakeGenerator, User};
use chrono::{Duration, Utc};

/// The demo user directory
pub fn demo_users(ids: &SnowflakeGenerator) -> Vec<User> {
    vec![
        User::new(ids.generate(), "Aarav Sharma", "HR"),
        User::new(ids.generate(), "Neha Patel", "Engineering"),
        User::new(ids.generate(), "Rohan Desai", "Marketing"),
        User::new(ids.generate(), "Priya Mehta", "Sales"),
        User::new(ids.generate(), "Soham Sawant", "Product"),
    ]
}

/// Seed an (empty) store with demo users and shoutouts
pub fn seed_demo_feed(
    store: &mut FeedStore,
    ids: &SnowflakeGenerator,
) -> Result<(), DomainError> {
    let users = demo_users(ids);
    let aarav = users[0].clone();
    let neha = users[1].clone();
    let rohan = users[2].clone();
    let priya = users[3].clone();
    let soham = users[4].clone();

    for user in users {
        store.add_user(user)?;
    }

    // Two days old, with a comment and a spread of reactions
    let mut first = Shoutout::new(
        ids.generate(),
        neha.clone(),
        vec![aarav.clone()],
        "Neha shipped the API improvements, massive speed up! 🚀".to_string(),
    );
    first.created_at = Utc::now() - Duration::days(2);
    let first_id = first.id;
    store.insert_shoutout(first);

    for reactor in [aarav.id, rohan.id, priya.id] {
        store.toggle_reaction(first_id, reactor, ReactionKind::Like)?;
    }
    store.toggle_reaction(first_id, rohan.id, ReactionKind::Clap)?;
    store.toggle_reaction(first_id, soham.id, ReactionKind::Star)?;
    store.add_comment(first_id, ids.generate(), rohan.id, "Fantastic work!")?;

    // Six hours old, two recipients
    let mut second = Shoutout::new(
        ids.generate(),
        priya.clone(),
        vec![neha.clone(), soham.clone()],
        "Priya and Soham crushed the client demo presentation, stellar teamwork. ✨".to_string(),
    );
    second.created_at = Utc::now() - Duration::hours(6);
    let second_id = second.id;
    store.insert_shoutout(second);

    for reactor in [aarav.id, neha.id] {
        store.toggle_reaction(second_id, reactor, ReactionKind::Like)?;
    }
    store.toggle_reaction(second_id, rohan.id, ReactionKind::Clap)?;
    store.toggle_reaction(second_id, aarav.id, ReactionKind::Star)?;

    tracing::info!(
        users = store.users().len(),
        shoutouts = store.len(),
        "Seeded demo feed"
    );
    Ok(())
}
