use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const CORS_ALLOWED_ORIGIN_VAR: &str = "CORS_ALLOWED_ORIGIN";

/// Parses a comma-separated origin list, skipping blank entries.
///
/// Fails if any entry is not a valid header value or if nothing is left.
pub fn parse_allowed_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {} value: {}", CORS_ALLOWED_ORIGIN_VAR, e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} cannot be empty", CORS_ALLOWED_ORIGIN_VAR),
        ));
    }

    Ok(origins)
}

/// Reads and parses `CORS_ALLOWED_ORIGIN`, which is required.
///
/// - Development: `CORS_ALLOWED_ORIGIN=http://localhost:3000,http://localhost:5173`
/// - Production: `CORS_ALLOWED_ORIGIN=https://example.com`
pub fn allowed_origins_from_env() -> io::Result<Vec<HeaderValue>> {
    let raw = std::env::var(CORS_ALLOWED_ORIGIN_VAR).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} environment variable is required. Example: {}=http://localhost:3000,https://example.com",
                CORS_ALLOWED_ORIGIN_VAR, CORS_ALLOWED_ORIGIN_VAR
            ),
        )
    })?;

    parse_allowed_origins(&raw)
}

/// Creates a CORS layer with common settings for API services.
///
/// - Methods used by the API (GET, POST, PUT, PATCH, DELETE, OPTIONS)
/// - Headers: Content-Type, Authorization, Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed_origins_trims_and_skips_blanks() {
        let origins =
            parse_allowed_origins(" http://localhost:3000 , ,https://example.com").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:3000");
        assert_eq!(origins[1], "https://example.com");
    }

    #[test]
    fn test_parse_allowed_origins_rejects_empty() {
        let err = parse_allowed_origins(" , ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_allowed_origins_from_env_requires_var() {
        temp_env::with_var_unset(CORS_ALLOWED_ORIGIN_VAR, || {
            let err = allowed_origins_from_env().unwrap_err();
            assert!(err.to_string().contains(CORS_ALLOWED_ORIGIN_VAR));
        });
    }

    #[test]
    fn test_allowed_origins_from_env_reads_list() {
        temp_env::with_var(
            CORS_ALLOWED_ORIGIN_VAR,
            Some("http://localhost:5173"),
            || {
                let origins = allowed_origins_from_env().unwrap();
                assert_eq!(origins, vec![HeaderValue::from_static("http://localhost:5173")]);
            },
        );
    }
}
