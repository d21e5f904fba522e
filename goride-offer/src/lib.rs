pub mod generator;
pub mod models;

pub use generator::{BusGenerator, GeneratorConfig};
pub use models::BusOffer;
