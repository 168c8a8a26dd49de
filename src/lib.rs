pub mod config;
pub mod html;
pub mod perspective;

pub use perspective::{AttributeScores, Client, Context, ContextEntry, Error, Options, RequestError, Transport};
