pub mod app;
pub mod auth;
pub mod clients;
pub mod metrics;
pub mod publish;
pub mod upload;
