//! HTTP protocol layer module
//!
//! Response builders and conditional-request helpers shared by all routes.

pub mod cache;
pub mod response;

// Re-export commonly used types
pub use cache::{check_etag_match, generate_etag};
pub use response::{
    build_304_response, build_400_response, build_403_response, build_404_response,
    build_405_response, build_500_response, build_cached_response, build_health_response,
    build_options_response, build_redirect_response, build_status_response, with_server_header,
    CONTENT_TYPE_HTML, CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT, CONTENT_TYPE_XML,
};
