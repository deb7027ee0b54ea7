pub mod cache;
pub mod controller;
pub mod debouncer;

// Re-export public types
pub use cache::SuggestionCache;
pub use controller::{QueryController, QueryStatus};
pub use debouncer::Debouncer;
