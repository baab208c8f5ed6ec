use user_directory::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let state = AppState::seeded(config.clone())?;
    tracing::info!(
        users = state.users().len(),
        base_path = %config.listing.base_path,
        "User directory loaded"
    );

    let app = router(state);

    Server::new(config).serve(app).await
}
