//! CORS policy built from settings.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use settings::CorsSettings;

/// Build the CORS layer for the configured policy.
///
/// A wildcard cannot be combined with credentials, so with credentials
/// enabled `*` origins, methods and headers mirror the request instead.
pub fn cors_layer(cors: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new().allow_credentials(cors.allow_credentials);

    let layer = match (cors.allows_any_method(), cors.allow_credentials) {
        (true, true) => layer.allow_methods(AllowMethods::mirror_request()),
        (true, false) => layer.allow_methods(Any),
        (false, _) => layer.allow_methods(allow_methods(&cors.methods)),
    };

    let layer = match (cors.allows_any_origin(), cors.allow_credentials) {
        (true, true) => layer.allow_origin(AllowOrigin::mirror_request()),
        (true, false) => layer.allow_origin(Any),
        (false, _) => layer.allow_origin(AllowOrigin::list(parse_all(&cors.origins, |origin| {
            HeaderValue::from_str(origin).ok()
        }))),
    };

    match (cors.allows_any_header(), cors.allow_credentials) {
        (true, true) => layer.allow_headers(AllowHeaders::mirror_request()),
        (true, false) => layer.allow_headers(Any),
        (false, _) => layer.allow_headers(AllowHeaders::list(parse_all(&cors.headers, |header| {
            HeaderName::from_bytes(header.as_bytes()).ok()
        }))),
    }
}

/// Method names are validated here, invalid ones are dropped.
fn allow_methods(methods: &[String]) -> AllowMethods {
    AllowMethods::list(parse_all(methods, |method| {
        Method::from_bytes(method.as_bytes()).ok()
    }))
}

/// Parse every entry, skipping (and logging) the ones that fail.
fn parse_all<T>(values: &[String], parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| {
            let parsed = parse(value);
            if parsed.is_none() {
                tracing::warn!("Ignoring invalid CORS entry: {:?}", value);
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_all_skips_invalid_entries() {
        let values = strings(&["https://ok.example", "bad\nvalue"]);
        let parsed = parse_all(&values, |v| HeaderValue::from_str(v).ok());
        assert_eq!(parsed, vec![HeaderValue::from_static("https://ok.example")]);
    }

    #[test]
    fn test_allow_methods_skips_invalid_names() {
        let methods = strings(&["GET", "BAD METHOD", "PATCH"]);
        let parsed = parse_all(&methods, |m| Method::from_bytes(m.as_bytes()).ok());
        assert_eq!(parsed, vec![Method::GET, Method::PATCH]);
    }

    #[test]
    fn test_wildcard_with_credentials_layers() {
        use axum::body::Body;
        use axum::http::{Request, Response};
        use std::convert::Infallible;
        use tower::Layer;

        let cors = CorsSettings {
            methods: vec!["*".to_string()],
            ..CorsSettings::default()
        };

        // tower-http panics here when `Any` is combined with credentials
        for settings in [CorsSettings::default(), cors] {
            let _service = cors_layer(&settings).layer(tower::service_fn(
                |_req: Request<Body>| async { Ok::<_, Infallible>(Response::new(Body::empty())) },
            ));
        }
    }
}
