//! Listing assembly, ordering, filtering, and paste staging.

pub mod clipboard;
pub mod filter;
pub mod listing;

pub use clipboard::Clipboard;
pub use filter::{
    filter_by_name, filter_hidden, fuzzy_filter, sort_entries, FuzzyMatch, SortDirection,
    SortField,
};
pub use listing::{load_listing, ListingTarget, ScanSequencer, ScanTicket};
