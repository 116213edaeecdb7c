//! Request extractors that reject with [`AppError`](crate::error::AppError).

mod json;
pub use json::JsonBody;
