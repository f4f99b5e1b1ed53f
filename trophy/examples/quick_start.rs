//! Send a metric event and print what it changed.
//!
//! ```bash
//! export TROPHY_API_KEY="your-api-key"
//! RUST_LOG=trophy=debug cargo run --example quick_start
//! ```

use trophy::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Reads TROPHY_API_KEY when no key is given.
    let client = TrophyClient::builder()
        .max_retries(2)
        .http_debug(true)
        .build()?;

    let user = UpsertedUser::new("user-123")
        .with_email("user@example.com")
        .with_tz("Europe/London");

    let event = client
        .metrics()
        .event("words-written", &user, 750.0, None)
        .await?;
    println!("New total: {}", event.total);

    if let Some(streak) = &event.current_streak {
        println!("Streak: {} ({})", streak.length, streak.frequency);
    }
    for item in event.metrics.iter().flatten() {
        for completed in &item.completed {
            match completed {
                EventResponseMetricsItemCompletedItem::Metric(a) => {
                    println!("Unlocked: {}", a.name)
                }
                EventResponseMetricsItemCompletedItem::Streak(a) => {
                    println!("Streak achievement: {}", a.name)
                }
                EventResponseMetricsItemCompletedItem::Raw(raw) => println!("Other: {raw}"),
            }
        }
    }
    for (system, points) in event.points.iter().flatten() {
        println!("{system}: +{} (total {})", points.added, points.total);
    }

    let board = client
        .leaderboards()
        .get("weekly-words", &LeaderboardQuery::page(0, 10), None)
        .await?;
    for ranking in &board.rankings {
        println!("#{} {} {}", ranking.rank, ranking.user_id, ranking.value);
    }

    Ok(())
}
