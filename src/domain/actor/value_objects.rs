// src/domain/actor/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub i64);

impl ActorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("actor id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ActorId> for i64 {
    fn from(value: ActorId) -> Self {
        value.0
    }
}

/// Closed set of caller roles carried by auth tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Journalist,
    RegUser,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Journalist => "journalist",
            Role::RegUser => "reg_user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "journalist" => Ok(Role::Journalist),
            "reg_user" => Ok(Role::RegUser),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}
