// Infrastructure layer module
// Contains adapters that implement domain ports
// Follows Hexagonal Architecture

pub mod repositories;
