//! Endpoint resolution for the analysis service
//!
//! The client runs in one of two deployment topologies: development,
//! where the frontend and the analysis service are separate processes and
//! the service is reached through an absolute base URL, and production,
//! where both share an origin and a path-relative endpoint suffices.
//! Resolution is a pure function of the current origin and the dev-build
//! flag so both branches are deterministic under test.

pub const ANALYZE_PATH: &str = "/api/analyze";
pub const HEALTH_PATH: &str = "/api/health";

/// Origins that identify a local development frontend even when the
/// dev-build flag is unset (Vite and CRA default ports).
const DEV_ORIGIN_MARKERS: [&str; 2] = ["localhost:5173", "localhost:3000"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointMode {
    Dev,
    Prod,
}

/// Resolved endpoint: absolute in development, path-relative in production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    pub mode: EndpointMode,
    pub url: String,
}

impl EndpointSpec {
    /// Absolute URL to actually request.
    ///
    /// A browser resolves a relative path against its own origin; a
    /// standalone client has to do that join itself.
    pub fn request_url(&self, origin: &str) -> String {
        if self.url.starts_with('/') {
            format!("{}{}", origin.trim_end_matches('/'), self.url)
        } else {
            self.url.clone()
        }
    }
}

/// Resolves analysis-service endpoints from the deployment context.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    base_url: String,
}

impl EndpointResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the URL-analysis endpoint.
    pub fn resolve(&self, current_origin: &str, dev_build: bool) -> EndpointSpec {
        self.resolve_path(current_origin, dev_build, ANALYZE_PATH)
    }

    /// Resolve the service health endpoint.
    pub fn resolve_health(&self, current_origin: &str, dev_build: bool) -> EndpointSpec {
        self.resolve_path(current_origin, dev_build, HEALTH_PATH)
    }

    fn resolve_path(&self, current_origin: &str, dev_build: bool, path: &str) -> EndpointSpec {
        let is_dev = dev_build
            || DEV_ORIGIN_MARKERS
                .iter()
                .any(|marker| current_origin.contains(marker));

        if is_dev {
            EndpointSpec {
                mode: EndpointMode::Dev,
                url: format!("{}{}", self.base_url, path),
            }
        } else {
            EndpointSpec {
                mode: EndpointMode::Prod,
                url: path.to_string(),
            }
        }
    }
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dev_build_flag_forces_dev_mode() {
        let resolver = EndpointResolver::default();
        let spec = resolver.resolve("https://clicksafe.example.com", true);
        assert_eq!(spec.mode, EndpointMode::Dev);
        assert_eq!(spec.url, "http://localhost:8000/api/analyze");
    }

    #[test]
    fn test_local_dev_origins_select_dev_mode() {
        let resolver = EndpointResolver::default();
        for origin in ["http://localhost:5173", "http://localhost:3000"] {
            let spec = resolver.resolve(origin, false);
            assert_eq!(spec.mode, EndpointMode::Dev, "origin {origin}");
            assert_eq!(spec.url, "http://localhost:8000/api/analyze");
        }
    }

    #[test]
    fn test_other_origins_select_prod_mode() {
        let resolver = EndpointResolver::default();
        let spec = resolver.resolve("https://clicksafe.example.com", false);
        assert_eq!(spec.mode, EndpointMode::Prod);
        assert_eq!(spec.url, "/api/analyze");
    }

    #[test]
    fn test_resolution_is_stable_across_calls() {
        let resolver = EndpointResolver::default();
        let first = resolver.resolve("http://localhost:5173", false);
        let second = resolver.resolve("http://localhost:5173", false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_base_url_trailing_slash_is_stripped() {
        let resolver = EndpointResolver::new("http://10.0.0.5:9000/");
        let spec = resolver.resolve("", true);
        assert_eq!(spec.url, "http://10.0.0.5:9000/api/analyze");
    }

    #[test]
    fn test_health_endpoint_follows_same_mode_logic() {
        let resolver = EndpointResolver::default();
        assert_eq!(
            resolver.resolve_health("", true).url,
            "http://localhost:8000/api/health"
        );
        assert_eq!(
            resolver.resolve_health("https://clicksafe.example.com", false).url,
            "/api/health"
        );
    }

    #[test]
    fn test_request_url_joins_relative_path_onto_origin() {
        let spec = EndpointSpec {
            mode: EndpointMode::Prod,
            url: "/api/analyze".to_string(),
        };
        assert_eq!(
            spec.request_url("https://clicksafe.example.com"),
            "https://clicksafe.example.com/api/analyze"
        );
        assert_eq!(
            spec.request_url("https://clicksafe.example.com/"),
            "https://clicksafe.example.com/api/analyze"
        );
    }

    #[test]
    fn test_request_url_passes_absolute_urls_through() {
        let spec = EndpointSpec {
            mode: EndpointMode::Dev,
            url: "http://localhost:8000/api/analyze".to_string(),
        };
        assert_eq!(spec.request_url(""), "http://localhost:8000/api/analyze");
    }
}
