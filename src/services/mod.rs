#[cfg(feature = "yew")]
mod client;
mod error;
mod payload;
mod progress;

#[cfg(feature = "yew")]
pub use client::ApiClient;
pub use error::ApiError;
pub use payload::ListPayload;
#[cfg(feature = "yew")]
pub use progress::progress_stream;
pub use progress::{percent_at, ProgressTimer, SessionGuard};
