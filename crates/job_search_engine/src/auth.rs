use std::fmt;

/// Bearer credential sent with every catalog request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Supplies the credential for each fetch. There is no refresh flow; a
/// provider is expected to always have a token.
pub trait AuthProvider: Send + Sync {
    fn bearer_token(&self) -> Credential;
}

/// Hands out the same token for the lifetime of the provider.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    credential: Credential,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            credential: Credential::new(token),
        }
    }
}

impl AuthProvider for StaticTokenProvider {
    fn bearer_token(&self) -> Credential {
        self.credential.clone()
    }
}
