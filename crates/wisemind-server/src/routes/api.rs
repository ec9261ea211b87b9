use axum::Router;

pub(crate) mod achievements;
pub(crate) mod lessons;
pub(crate) mod modules;
pub(crate) mod status;
pub(crate) mod user;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .nest("/status", status::create_router())
        .nest("/modules", modules::create_router())
        .nest("/lessons", lessons::create_router())
        .nest("/user", user::create_router())
        .nest("/achievements", achievements::create_router())
}
