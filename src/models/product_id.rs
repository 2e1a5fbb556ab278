use std::{
    fmt,
    sync::{
        LazyLock,
        atomic::{AtomicU32, Ordering},
    },
};

use chrono::Utc;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

const ID_BYTES: usize = 12;
pub const ID_LEN: usize = ID_BYTES * 2;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(|| {
    let mut bytes = [0u8; 5];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
});

static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::thread_rng().gen_range(0..0x0100_0000)));

/// Store-assigned product identifier.
///
/// Twelve bytes rendered as 24 lowercase hex characters: seconds since the
/// Unix epoch, a per-process random value, then a wrapping 24-bit counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn generate() -> Self {
        let seconds = Utc::now().timestamp() as u32;
        let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

        let mut bytes = [0u8; ID_BYTES];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

        let hex = bytes.iter().fold(String::with_capacity(ID_LEN), |mut hex, byte| {
            hex.push_str(&format!("{:02x}", byte));
            hex
        });
        Self(hex)
    }

    /// Syntax check only; says nothing about whether a record exists.
    pub fn is_well_formed(raw: &str) -> bool {
        raw.len() == ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn parse(raw: &str) -> Result<Self> {
        if !Self::is_well_formed(raw) {
            return Err(AppError::InvalidId);
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
