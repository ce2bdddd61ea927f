use crate::error::AppError;

/// Mutations are allowed only when the acting member is the resource author.
pub fn ensure_author(acting: &str, author: &str, message: &'static str) -> Result<(), AppError> {
    if acting == author {
        Ok(())
    } else {
        tracing::info!(acting, author, "ownership check failed");
        Err(AppError::forbidden(message))
    }
}
