//! Output module for console output and progress.
//!
//! Provides:
//! - Styled console messages
//! - Progress bars
//! - Upload statistics

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{print_error, print_info, print_success};
pub use progress::{create_download_bar, create_item_bar};
pub use stats::print_upload_summary;
