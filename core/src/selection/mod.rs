pub mod extractor;
pub mod resolver;

pub use extractor::{SerializedState, StateExtractor, ALPHABETICAL_SENTINEL};
pub use resolver::{Resolution, SelectionResolver};
