// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod chart;
pub mod repositories;
pub mod scoreboard;
