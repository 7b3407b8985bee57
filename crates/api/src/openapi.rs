//! OpenAPI documentation.

use utoipa::OpenApi;

use settings::ApiSettings;

use crate::handlers::health_handler::{HealthResponse, ModelHealth};
use crate::handlers::info_handler::ApiInfo;
use crate::handlers::model_handler::ModelInfo;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::info_handler::api_info,
        crate::handlers::health_handler::health_check,
        crate::handlers::model_handler::model_info,
    ),
    components(
        schemas(
            ApiInfo,
            HealthResponse,
            ModelHealth,
            ModelInfo,
        )
    ),
    tags(
        (name = "Service", description = "Service metadata and health"),
    )
)]
pub struct ApiDoc;

/// OpenAPI document with title, version and description taken from settings.
pub fn document(api: &ApiSettings) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = api.title.clone();
    doc.info.version = api.version.clone();
    doc.info.description = Some(api.description.clone()).filter(|d| !d.is_empty());
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_uses_settings_metadata() {
        let api = ApiSettings {
            title: "Forecasts".to_string(),
            version: "3.1.0".to_string(),
            description: String::new(),
        };

        let doc = document(&api);
        assert_eq!(doc.info.title, "Forecasts");
        assert_eq!(doc.info.version, "3.1.0");
        assert_eq!(doc.info.description, None);
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
