use anyhow::Result;
use shelf::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::{ApplicationServices, Repositories},
};
use shelf::config::AppConfig;
use shelf::infrastructure::{
    database,
    repositories::{
        PostgresBookRepository, PostgresContactMessageRepository, PostgresFeedRepository,
        PostgresFlatRepository, PostgresMovieRepository, PostgresRestaurantRepository,
        PostgresSlugRepository, PostgresSuggestionRepository, PostgresTripRepository,
    },
    telemetry,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use shelf::presentation::http::{routes::build_router, state::HttpState};
use sqlx::PgPool;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("info,tower_http=info,sqlx=warn");

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let services = Arc::new(ApplicationServices::new(
        postgres_repositories(&pool),
        clock,
        slugger,
    ));

    let state = HttpState { services };
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn postgres_repositories(pool: &PgPool) -> Repositories {
    Repositories {
        movies: Arc::new(PostgresMovieRepository::new(pool.clone())),
        books: Arc::new(PostgresBookRepository::new(pool.clone())),
        trips: Arc::new(PostgresTripRepository::new(pool.clone())),
        restaurants: Arc::new(PostgresRestaurantRepository::new(pool.clone())),
        flats: Arc::new(PostgresFlatRepository::new(pool.clone())),
        feed: Arc::new(PostgresFeedRepository::new(pool.clone())),
        suggestions: Arc::new(PostgresSuggestionRepository::new(pool.clone())),
        contact_messages: Arc::new(PostgresContactMessageRepository::new(pool.clone())),
        slugs: Arc::new(PostgresSlugRepository::new(pool.clone())),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
