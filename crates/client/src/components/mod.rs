//! Reusable components.

pub mod protected_route;
pub mod ui;

pub use protected_route::ProtectedRoute;
