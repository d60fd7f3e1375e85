pub mod cell;
pub mod error;
pub mod io;
pub mod render;
pub mod rule_set;
pub mod world;

pub use error::DomainError;
pub use error::Error;
pub use error::InvariantViolation;
pub use render::generate;
pub use render::write_image;
pub use rule_set::Rule;
