use std::sync::Arc;
use votes_backend::{
    build_rocket,
    config::VotingConfig,
    queries::PgVoteStore,
    routes::AppState,
};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::info;

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting vote server");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let config = VotingConfig::from_lookup(|key| secret_store.get(key));
    info!("Signup redirect: {}", config.signup_path);

    let state = AppState::new(Arc::new(PgVoteStore::new(pool)), config);

    Ok(build_rocket(state).into())
}
