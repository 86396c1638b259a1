pub mod footer;
pub mod header;
pub mod patch;
pub mod tracker;

pub use footer::{footer, rac_footer};
pub use header::rac_header;
pub use patch::{neutralize_scripts, patch_document};
pub use tracker::{conversion_tracker, format_amount};
