//! Deterministic question assignment.
//!
//! Assignment is a two-stage pipeline:
//!
//! 1. **hash → seed**: MD5 over `"{name}_{email}"`, read as a big-endian
//!    128-bit integer, reduced modulo 10^8.
//! 2. **seed → index**: either a seeded MT19937 draw over the pool
//!    ([`AssignmentAlgorithm::Mersenne`]) or `seed % pool_size`
//!    ([`AssignmentAlgorithm::Modulo`]).
//!
//! Neither stage depends on process state, so a learner keeps their
//! question across restarts.

use std::fmt;
use std::str::FromStr;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::mersenne::Mt19937;
use crate::model::{student_id, Assignment, QuestionPool};

/// Seeds are reduced into `[0, SEED_MODULUS)`.
pub const SEED_MODULUS: u128 = 100_000_000;

/// How a seed is turned into a pool index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentAlgorithm {
    /// Seeded MT19937 draw over `0..pool_size`, matching existing deployments.
    #[default]
    Mersenne,
    /// `seed % pool_size`.
    Modulo,
}

impl fmt::Display for AssignmentAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentAlgorithm::Mersenne => write!(f, "mersenne"),
            AssignmentAlgorithm::Modulo => write!(f, "modulo"),
        }
    }
}

impl FromStr for AssignmentAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mersenne" | "mt19937" => Ok(AssignmentAlgorithm::Mersenne),
            "modulo" | "mod" => Ok(AssignmentAlgorithm::Modulo),
            other => Err(format!("unknown assignment algorithm: {other}")),
        }
    }
}

/// Maps identities to pool indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assigner {
    algorithm: AssignmentAlgorithm,
}

impl Assigner {
    pub fn new(algorithm: AssignmentAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Stage one: the seed for an identity.
    pub fn seed_for(name: &str, email: &str) -> u64 {
        let digest = Md5::digest(student_id(name, email).as_bytes());
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest);
        let value = u128::from_be_bytes(bytes);
        (value % SEED_MODULUS) as u64
    }

    /// Stage two: the pool index for an identity. `pool_size` must be non-zero.
    pub fn index_for(&self, name: &str, email: &str, pool_size: usize) -> usize {
        let seed = Self::seed_for(name, email);
        let n = pool_size as u64;
        let index = match self.algorithm {
            AssignmentAlgorithm::Mersenne => Mt19937::from_seed_u64(seed).below(n),
            AssignmentAlgorithm::Modulo => seed % n,
        };
        tracing::debug!(seed, index, algorithm = %self.algorithm, "derived question index");
        index as usize
    }

    /// Pick the question for a learner.
    pub fn assign(&self, pool: &QuestionPool, name: &str, email: &str) -> Assignment {
        let question_index = self.index_for(name, email, pool.len());
        let question = pool
            .get(question_index)
            .unwrap_or_default()
            .to_string();
        Assignment {
            student_id: student_id(name, email),
            question_index,
            question,
        }
    }
}
