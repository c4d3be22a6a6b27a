//! Client-side user model.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as handed to the UI by the auth context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = UserInfo {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            avatar_url: None,
        };
        assert_eq!(user.display_name(), "Ada");

        user.name = None;
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
