//! Local interactive page: upload resumes, paste a job description, browse the ranking

pub mod errors;
pub mod handlers;
pub mod pages;
pub mod server;

pub use errors::AppError;
pub use server::{build_router, serve, AppState};
