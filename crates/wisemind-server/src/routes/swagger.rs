use super::api;
use super::login;

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::status::get_status,
        api::modules::list_modules,
        api::modules::get_module,
        api::modules::create_module,
        api::modules::create_lesson,
        api::lessons::get_lesson,
        api::lessons::complete_lesson,
        api::user::get_user_info,
        api::user::login,
        api::user::update_role,
        api::achievements::create_achievement,
        login::logout,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "modules", description = "Module catalog and per-user unlock state"),
        (name = "lessons", description = "Lesson content and completion"),
        (name = "user", description = "The signed in user"),
        (name = "achievements", description = "Achievement catalog"),
        (name = "session", description = "Access token handling"),
        (name = "util", description = "Health checks")
    )
)]
pub(crate) struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Api Token"))
                    .build(),
            ),
        );
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/modules",
            "/api/modules/{module}",
            "/api/lessons/complete",
            "/api/user/update-role",
            "/logout",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("token"));
        assert!(components.schemas.contains_key("CompletionResult"));
    }
}
