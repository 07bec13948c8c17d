pub mod model;
pub mod publisher;

pub use model::Frame;
pub use publisher::Publisher;
