use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An established demo session.
///
/// There is no token and no credential system behind this; the login gate
/// hands one out after its literal credential comparison succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
}
