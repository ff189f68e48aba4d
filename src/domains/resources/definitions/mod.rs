//! Resource definitions module.
//!
//! Each resource lives in its own file and implements [`ResourceDefinition`].

mod server_info;

pub use server_info::ServerInfoResource;

use super::service::ResourceContent;

/// Metadata and content source of a resource.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}
