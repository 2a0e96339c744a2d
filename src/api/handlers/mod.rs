// HTTP handlers, one module per resource

pub mod charts;
pub mod health;
pub mod scoreboard;
pub mod sessions;
