/*
 * Responsibility
 * - パスワードの bcrypt ハッシュ化 / 照合
 * - bcrypt は CPU bound なので blocking pool で実行する
 */
use thiserror::Error;

/// bcrypt only reads this many bytes of input; anything past it is ignored.
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("password hashing task failed")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, plain: &str) -> Result<String, PasswordError> {
        let plain = plain.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost)).await??;
        Ok(hashed)
    }

    /// A malformed stored hash counts as a mismatch, not an error.
    pub async fn verify(&self, plain: &str, hashed: &str) -> Result<bool, PasswordError> {
        let plain = plain.to_owned();
        let hashed = hashed.to_owned();
        let ok = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hashed)).await?;

        match ok {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash could not be parsed");
                Ok(false)
            }
        }
    }
}
