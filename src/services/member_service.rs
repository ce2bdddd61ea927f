/*
 * Responsibility
 * - signup / login / reissue / logout のユースケース
 * - password は bcrypt hash のみ保存
 * - token の発行・rotation は TokenService に委譲
 */
use std::sync::Arc;

use tracing::{error, info};

use crate::error::AppError;
use crate::repos::error::RepoError;
use crate::repos::member_repo::{MemberRepo, MemberRow};
use crate::services::auth::{TokenPair, TokenService};
use crate::services::password::PasswordHasher;

pub const ROLE_USER: &str = "ROLE_USER";

const BAD_CREDENTIALS: &str = "invalid username or password";

#[derive(Clone)]
pub struct MemberService {
    members: Arc<dyn MemberRepo>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
}

impl MemberService {
    pub fn new(members: Arc<dyn MemberRepo>, hasher: PasswordHasher, tokens: Arc<TokenService>) -> Self {
        Self {
            members,
            hasher,
            tokens,
        }
    }

    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<MemberRow, AppError> {
        if self.members.exists_by_username(username).await? {
            return Err(duplicate_username());
        }
        if password != password_confirm {
            return Err(AppError::bad_request(
                "PASSWORD_MISMATCH",
                "password and confirmation do not match",
            ));
        }

        let hash = self.hasher.hash(password).await.map_err(|e| {
            error!(error = %e, "password hashing failed");
            AppError::Internal
        })?;

        // exists check is racy; the UNIQUE constraint has the last word
        let member = self
            .members
            .create(username, &hash, ROLE_USER)
            .await
            .map_err(|e| match e {
                RepoError::Conflict => duplicate_username(),
                other => other.into(),
            })?;

        info!(member_id = %member.member_id, username, "member signed up");
        Ok(member)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<(MemberRow, TokenPair), AppError> {
        let Some(member) = self.members.find_by_username(username).await? else {
            info!(username, "login for unknown member");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        };

        let ok = self
            .hasher
            .verify(password, &member.password)
            .await
            .map_err(|e| {
                error!(error = %e, "password verification failed");
                AppError::Internal
            })?;
        if !ok {
            info!(username, "login with wrong password");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        }

        let pair = self.tokens.issue_for(&member).await?;
        Ok((member, pair))
    }

    pub async fn reissue(&self, access_token: &str, refresh_token: &str) -> Result<TokenPair, AppError> {
        self.tokens.reissue(access_token, refresh_token).await
    }

    pub async fn logout(&self, username: &str) -> Result<(), AppError> {
        self.tokens.revoke(username).await?;
        info!(username, "member logged out");
        Ok(())
    }
}

fn duplicate_username() -> AppError {
    AppError::conflict("DUPLICATE_USERNAME", "username is already taken")
}
