//! Core type aliases, traits, and constants for quill.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the quill workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seconds since the unix epoch. Token claims and clocks speak this unit.
pub type Timestamp = i64;

// ============================================================================
// TRAITS
// ============================================================================
/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over a sequential u64.
/// Values are handed out by the owning store; there is no `Default`.
pub struct ID<T> {
    inner: u64,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> u64 {
        self.inner
    }
    /// The id that follows this one in allocation order.
    pub fn next(self) -> Self {
        Self::from(self.inner + 1)
    }
}

impl<T> From<ID<T>> for u64 {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<u64> for ID<T> {
    fn from(inner: u64) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> std::str::FromStr for ID<T> {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self::from)
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.inner)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <u64 as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// TOKEN PARAMETERS
// ============================================================================
/// Lifetime of an access token when the caller does not ask for one.
pub const ACCESS_TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(30 * 60);
/// Tolerated clock skew past a token's expiry. Strict by default.
pub const ACCESS_TOKEN_LEEWAY: std::time::Duration = std::time::Duration::from_secs(0);
/// Token type reported alongside every issued access token.
pub const TOKEN_TYPE: &str = "bearer";
/// Length of the per-process signing secret generated when none is configured.
pub const SIGNING_SECRET_BYTES: usize = 32;

// ============================================================================
// CREDENTIAL PARAMETERS
// ============================================================================
/// Random salt length mixed into every password digest.
pub const PASSWORD_SALT_BYTES: usize = 16;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "server")]
pub fn log(level: log::LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
/// A bare number is read as seconds. Anything past `Timestamp::MAX` seconds
/// is rejected, since claims could not carry it.
pub fn duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (num, scale) = match s.char_indices().last() {
        Some((i, 's')) => (&s[..i], 1),
        Some((i, 'm')) => (&s[..i], 60),
        Some((i, 'h')) => (&s[..i], 3600),
        Some((i, 'd')) => (&s[..i], 86400),
        _ => (s, 1),
    };
    num.parse::<u64>()
        .ok()?
        .checked_mul(scale)
        .filter(|secs| Timestamp::try_from(*secs).is_ok())
        .map(std::time::Duration::from_secs)
}
