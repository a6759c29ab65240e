use serde::{Deserialize, Serialize};

/// The signed-in account as the client sees it.
///
/// Identity is an opaque stable id plus display metadata; credentials and
/// token handling live on the server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
}

impl UserAccount {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            neighborhood: None,
        }
    }
}
