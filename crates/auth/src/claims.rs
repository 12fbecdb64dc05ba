use quill_core::Timestamp;

/// JWT payload. Only the subject and the validity window are asserted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: Timestamp,
    pub exp: Timestamp,
}

impl Claims {
    pub fn new(subject: String, now: Timestamp, ttl: std::time::Duration) -> Self {
        Self {
            sub: subject,
            iat: now,
            exp: now.saturating_add(seconds(ttl)),
        }
    }
    /// Expired once `now` reaches `exp`, pushed back by `leeway`.
    pub fn expired(&self, now: Timestamp, leeway: std::time::Duration) -> bool {
        now >= self.exp.saturating_add(seconds(leeway))
    }
    pub fn subject(&self) -> &str {
        &self.sub
    }
}

/// Whole seconds, saturating at the far end of the timeline.
fn seconds(duration: std::time::Duration) -> Timestamp {
    Timestamp::try_from(duration.as_secs()).unwrap_or(Timestamp::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn zero_ttl_is_born_expired() {
        let claims = Claims::new("a@x.com".into(), 100, Duration::ZERO);
        assert!(claims.expired(100, Duration::ZERO));
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let claims = Claims::new("a@x.com".into(), 100, Duration::from_secs(60));
        assert!(!claims.expired(159, Duration::ZERO));
        assert!(claims.expired(160, Duration::ZERO));
    }

    #[test]
    fn leeway_extends_acceptance() {
        let claims = Claims::new("a@x.com".into(), 100, Duration::from_secs(60));
        assert!(!claims.expired(165, Duration::from_secs(10)));
        assert!(claims.expired(170, Duration::from_secs(10)));
    }

    #[test]
    fn huge_windows_saturate() {
        let claims = Claims::new("a@x.com".into(), 100, Duration::from_secs(u64::MAX));
        assert_eq!(claims.exp, Timestamp::MAX);
        assert!(!claims.expired(100, Duration::ZERO));
        let claims = Claims::new("a@x.com".into(), 100, Duration::from_secs(60));
        assert!(!claims.expired(1_000, Duration::from_secs(u64::MAX)));
    }
}
