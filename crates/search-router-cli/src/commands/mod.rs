pub mod navigate;
pub mod resolve;
pub mod routes;
pub mod theme;
