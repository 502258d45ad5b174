// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedActor,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::actor::{ActorId, Role};
use chrono::{DateTime, Utc};
use std::time::SystemTime;

pub fn parse_claims(
    facts: Vec<biscuit_auth::builder::Fact>,
) -> ApplicationResult<AuthenticatedActor> {
    let ctx = ClaimsContext::from_facts(facts);
    build_authenticated_actor(ctx)
}

fn build_authenticated_actor(ctx: ClaimsContext) -> ApplicationResult<AuthenticatedActor> {
    let actor_id = ctx
        .actor_id
        .ok_or_else(|| ApplicationError::unauthorized("missing actor id"))?;
    let name = ctx
        .name
        .ok_or_else(|| ApplicationError::unauthorized("missing actor name"))?;
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    let id = ActorId::new(actor_id).map_err(ApplicationError::from)?;

    Ok(AuthenticatedActor {
        id,
        name,
        role,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    actor_id: Option<i64>,
    name: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<biscuit_auth::builder::Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: biscuit_auth::builder::Predicate) {
        match predicate.name.as_str() {
            "actor" => self.handle_actor(&predicate),
            "role" => self.handle_role(&predicate),
            "issued_at" => self.issued_at = extract_date(&predicate),
            "expires_at" => self.expires_at = extract_date(&predicate),
            _ => {}
        }
    }

    fn handle_actor(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if predicate.terms.len() == 2 {
            if let biscuit_auth::builder::Term::Integer(id) = predicate.terms[0] {
                self.actor_id = Some(id);
            }
            if let biscuit_auth::builder::Term::Str(name) = predicate.terms[1].clone() {
                self.name = Some(name);
            }
        }
    }

    fn handle_role(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if let Some(biscuit_auth::builder::Term::Str(role_name)) = predicate.terms.first() {
            if let Ok(parsed) = role_name.parse() {
                self.role = Some(parsed);
            }
        }
    }
}

fn extract_date(predicate: &biscuit_auth::builder::Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(biscuit_auth::builder::Term::Date(secs)) => {
            Some(SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(*secs))
        }
        _ => None,
    }
}
