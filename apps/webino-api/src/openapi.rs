//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::{diagnostics, site};
use crate::diagnostics::DiagnosticsReport;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Webino Solutions API",
        version = "1.0.0",
        description = "Webino Solutions site backend: services, inquiries and storage diagnostics"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(site::root_status, site::hello, diagnostics::test_storage),
    components(schemas(site::MessageResponse, DiagnosticsReport)),
    nest(
        (path = "/api/services", api = domain_catalog::ApiDoc),
        (path = "/api/inquiries", api = domain_inquiries::ApiDoc)
    ),
    tags(
        (name = "Site", description = "Status and greeting"),
        (name = "Diagnostics", description = "Storage reachability report")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Webino Solutions API");
        assert_eq!(doc.info.version, "1.0.0");

        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for path in ["/", "/api/hello", "/api/services", "/api/inquiries", "/test"] {
            assert!(paths.iter().any(|p| p == path), "missing {path}: {paths:?}");
        }
    }
}
