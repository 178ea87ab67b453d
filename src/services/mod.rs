pub mod seed_generator;

pub use seed_generator::{SeedGenerator, SeedSummary};
