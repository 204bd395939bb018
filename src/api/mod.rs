//! Google Photos media API module.
//!
//! This module provides:
//! - The [`PhotosApi`] trait the commands are written against
//! - [`PhotosClient`], bound to the active stored credential
//! - Request and response types

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{resolve_credential, PhotosApi, PhotosClient};
pub use types::*;
