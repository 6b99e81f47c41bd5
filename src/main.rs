use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use trip_buddy::{
    config::{self, database},
    core::{catalog, report, trip},
    errors::Result,
    session::Session,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!(
        date_policy = ?app_config.itinerary.date_policy,
        save_attempts = app_config.persistence.save_attempts,
        "Configuration loaded"
    );

    // 4. Connect and make sure the schema exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed the catalog
    catalog::seed_catalog(&db, &app_config)
        .await
        .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;

    // 6. Show the current user's trips
    let session = match Session::from_env() {
        Ok(session) => session,
        Err(e) => {
            warn!("No user session ({e}); set TRIP_BUDDY_USER_ID to list trips");
            return Ok(());
        }
    };

    let trips = trip::list_trips(&db, &session).await?;
    println!("Trips for {}: {}", session.display_name, trips.len());
    for summary in &trips {
        println!("  {}", report::format_trip_summary(summary));
        if let Some(stored) = trip::get_trip(&db, summary.id).await? {
            for line in report::format_budget(&stored.budget).lines() {
                println!("      {line}");
            }
        }
    }

    session.logout();
    Ok(())
}
