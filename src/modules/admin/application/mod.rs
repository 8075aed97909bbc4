pub mod controller;

pub use controller::{AdminController, DashboardStats, DeleteOutcome};
