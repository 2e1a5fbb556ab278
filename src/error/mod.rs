mod app_error;

pub use app_error::{AppError, SERVER_ERROR_MESSAGE};

pub type Result<T> = std::result::Result<T, AppError>;
