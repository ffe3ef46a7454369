//! Request handler module
//!
//! Request routing and the per-chapter fault behaviors of the complex profile.

pub mod faults;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
