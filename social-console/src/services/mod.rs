pub mod clients;
pub mod credentials;
pub mod metrics;
pub mod publisher;
pub mod staging;

pub use clients::ClientRepo;
pub use credentials::CredentialStore;
pub use publisher::MockPublisher;
pub use staging::StagingArea;
