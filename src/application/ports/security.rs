// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedActor, TokenSubject},
};
use async_trait::async_trait;

/// Token issuance itself is an external concern; the port exposes `issue` so
/// operators and tests can mint tokens against the same key material that
/// `authenticate` verifies.
#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedActor>;
}
