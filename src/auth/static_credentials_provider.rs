use super::CredentialsProvider;

///
/// Provider backed by a token supplied once at startup.
///
pub struct StaticCredentialsProvider {
    token: Option<String>,
}

impl StaticCredentialsProvider {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl CredentialsProvider for StaticCredentialsProvider {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}
