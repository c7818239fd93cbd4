//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the response schemas and the session cookie security scheme. Debug
//! builds serve it through Swagger UI; `cargo run --bin openapi-dump` prints
//! it for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, Role, StockStatus, StockTone};
use crate::inbound::http::dashboard::DashboardDto;
use crate::inbound::http::products::{ProductDto, StockStatusDto};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by the storefront authentication service.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Storefront inventory API",
        description = "Session-authenticated product catalogue, admin dashboard and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::dashboard::dashboard,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Role,
        StockStatus,
        StockTone,
        StockStatusDto,
        ProductDto,
        DashboardDto
    )),
    tags(
        (name = "products", description = "Product catalogue"),
        (name = "admin", description = "Administrator-only views"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected object schema for {name}"),
        }
    }

    #[rstest]
    #[case("/api/v1/products")]
    #[case("/api/v1/products/{id}")]
    #[case("/api/v1/admin/dashboard")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_every_endpoint(#[case] path: &str) {
        assert!(ApiDoc::openapi().paths.paths.contains_key(path), "{path} missing");
    }

    #[rstest]
    fn product_schema_uses_camel_case() {
        let fields = object_fields("ProductDto");
        for field in ["formattedPrice", "quantityOnHand", "stockStatus"] {
            assert!(fields.iter().any(|f| f == field), "{field} missing");
        }
    }

    #[rstest]
    fn error_schema_has_envelope_fields() {
        let fields = object_fields("Error");
        assert!(fields.iter().any(|f| f == "code"));
        assert!(fields.iter().any(|f| f == "message"));
    }

    #[rstest]
    fn declares_session_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
