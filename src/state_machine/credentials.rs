//! # Credentials
//!
//! Opaque tokens used by credential-matching guards, and the principals that
//! carry them.
//!
//! A [`Credential`] is minted once and handed both to the guarded workflow at
//! construction time and to the holder that is allowed to open it. Equality is
//! the only operation that matters; the token has no external representation
//! requirement and its `Debug` output is masked.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, immutable credential token
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(Uuid);

impl Credential {
    /// Mint a fresh credential
    ///
    /// Backed by a random (v4) UUID drawn from the operating system's secure
    /// random source, so two independently minted credentials collide with
    /// negligible probability.
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    /// Raw signature of this credential
    pub fn signature(&self) -> Uuid {
        self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([MASKED])")
    }
}

/// An actor holding a credential
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    key: Credential,
}

impl Principal {
    pub fn new(key: Credential) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &Credential {
        &self.key
    }
}
