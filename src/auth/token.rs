use chrono::Utc;

/// Short-lived IAM bearer token with its computed expiration.
#[derive(Debug, Clone)]
pub struct Token {
    pub value: String,
    pub expires_at: i64, // UNIX timestamp
}

impl Token {
    pub fn new(value: String, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    /// A token whose expiry is not strictly in the future is unusable.
    pub fn expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}
