pub mod analytics;
pub mod predict;
pub mod simulation;
pub mod transactions;
