use base64::{prelude::BASE64_STANDARD, Engine};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenType {
    /// Bearer secret minted at login.
    User,
    /// One-time account activation code.
    Activation,
}

impl TokenType {
    pub fn prefix(&self) -> &'static str {
        match self {
            TokenType::User => "tok",
            TokenType::Activation => "act",
        }
    }
}

/// Wire form of a bearer credential: base64("{account_id}.{secret}").
pub fn construct_token(account_id: &Uuid, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{account_id}.{secret}"))
}

/// Inverse of `construct_token`. None for anything that does not decode
/// to utf-8, split on a dot and parse as a uuid.
pub fn split_token(token: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (account_id, secret) = decoded.split_once('.')?;
    let account_id = Uuid::parse_str(account_id).ok()?;
    Some((account_id, secret.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_split_roundtrip() {
        let id = Uuid::new_v4();
        let token = construct_token(&id, "tok_secret");
        let (parsed_id, secret) = split_token(&token).unwrap();
        assert_eq!(parsed_id, id);
        assert_eq!(secret, "tok_secret");
    }

    #[test]
    fn test_token_split_rejects_garbage() {
        assert!(split_token("not-base64!!").is_none());
        assert!(split_token(&BASE64_STANDARD.encode("no-dot-here")).is_none());
        assert!(split_token(&BASE64_STANDARD.encode("not-a-uuid.secret")).is_none());
    }
}
