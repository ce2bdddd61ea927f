use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::repos::member_repo::{MemberRepo, MemberRow};
use crate::services::auth::jwt::TokenError;
use crate::services::auth::refresh_store::{RefreshTokenStore, StoredRefresh};
use crate::services::auth::token_provider::{AccessIdentity, TokenPair, TokenProvider, TokenStatus};

/// Identity attached to a request once its bearer token checks out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedMember {
    pub member_id: Uuid,
    pub username: String,
    pub authority: String,
}

/// Orchestrates token issuance, refresh rotation and bearer authentication.
///
/// - TokenProvider signs and verifies (stateless).
/// - RefreshTokenStore keeps the single live refresh token per member.
#[derive(Clone)]
pub struct TokenService {
    provider: TokenProvider,
    store: RefreshTokenStore,
    members: Arc<dyn MemberRepo>,
}

impl TokenService {
    pub fn new(
        provider: TokenProvider,
        store: RefreshTokenStore,
        members: Arc<dyn MemberRepo>,
    ) -> Self {
        Self {
            provider,
            store,
            members,
        }
    }

    /// Mint a pair for a freshly authenticated member and make its refresh token the live one.
    pub async fn issue_for(&self, member: &MemberRow) -> Result<TokenPair, AppError> {
        let identity = AccessIdentity {
            username: member.username.clone(),
            authority: member.authority.clone(),
        };
        let pair = self.provider.issue(&identity)?;
        self.store.save(&identity.username, &pair.refresh_token).await?;

        Ok(pair)
    }

    /// Exchange a (possibly expired) access token plus the live refresh token for a new pair.
    pub async fn reissue(&self, access_token: &str, refresh_token: &str) -> Result<TokenPair, AppError> {
        if self.provider.validate(refresh_token) != TokenStatus::Valid {
            return Err(TokenError::InvalidRefreshToken.into());
        }

        let identity = self.provider.claims(access_token)?;

        match self.store.check(&identity.username, refresh_token).await? {
            StoredRefresh::Match => {}
            StoredRefresh::Missing => {
                info!(username = %identity.username, "reissue after logout");
                return Err(TokenError::LoggedOut.into());
            }
            StoredRefresh::Mismatch => {
                warn!(username = %identity.username, "presented refresh token is not the live one");
                return Err(TokenError::TokenMismatch.into());
            }
        }

        let pair = self.provider.issue(&identity)?;
        self.store.save(&identity.username, &pair.refresh_token).await?;
        debug!(username = %identity.username, "rotated refresh token");

        Ok(pair)
    }

    pub async fn revoke(&self, username: &str) -> Result<(), AppError> {
        let removed = self.store.delete(username).await?;
        debug!(username, removed, "revoked refresh token");
        Ok(())
    }

    /// Resolve a bearer token to a member. Any failure means "unauthenticated".
    pub async fn authenticate(&self, access_token: &str) -> Option<AuthenticatedMember> {
        if self.provider.validate(access_token) != TokenStatus::Valid {
            return None;
        }

        let identity = match self.provider.claims(access_token) {
            Ok(identity) => identity,
            Err(e) => {
                info!(reason = %e, "bearer token has no usable identity");
                return None;
            }
        };

        let member = match self.members.find_by_username(&identity.username).await {
            Ok(Some(member)) => member,
            Ok(None) => {
                info!(username = %identity.username, "token names an unknown member");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "member lookup failed during authentication");
                return None;
            }
        };

        Some(AuthenticatedMember {
            member_id: member.member_id,
            username: member.username,
            authority: identity.authority,
        })
    }
}
