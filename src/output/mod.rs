//! Console output and progress reporting.

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{print_banner, print_error, print_info, print_success, print_warning};
pub use progress::{create_item_bar, create_spinner};
pub use stats::print_run_stats;
