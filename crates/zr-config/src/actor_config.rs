use serde::Deserialize;

/// Identity of the signed-in teacher.
///
/// `token` is a secret and must never be logged.
#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct ActorConfig {
    pub teacher_id: Option<String>,
    pub token: Option<String>,
}

impl std::fmt::Debug for ActorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorConfig")
            .field("teacher_id", &self.teacher_id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
