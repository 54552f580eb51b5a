pub mod client;
pub mod publish;
pub mod session;
pub mod upload;

pub use client::{Client, PlatformTokens};
pub use publish::{PostReceipt, PostResult, PostStatus};
pub use session::AdminUser;
pub use upload::StagedFile;
