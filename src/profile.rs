// 👤 User Profile - name, email and avatar
//
// Edits go through a draft copy; saving the draft requires an email.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Storage key the avatar URI is kept under
pub const PROFILE_PHOTO_KEY: &str = "profilePhoto";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "Name".to_string(),
            surname: "Surname".to_string(),
            email: "@gmail".to_string(),
            photo_uri: None,
        }
    }
}

impl Profile {
    /// Editable copy of the current profile
    pub fn draft(&self) -> Profile {
        self.clone()
    }

    /// Commit an edited draft; an empty email leaves the profile unchanged
    pub fn apply(&mut self, draft: Profile) -> Result<()> {
        if draft.email.trim().is_empty() {
            bail!("Please enter an email");
        }
        *self = draft;
        Ok(())
    }

    /// (key, value) pair written for the avatar; empty when there is no photo
    pub fn photo_entry(&self) -> (&'static str, String) {
        (PROFILE_PHOTO_KEY, self.photo_uri.clone().unwrap_or_default())
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize profile")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse profile JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = Profile::default();
        assert_eq!(profile.display_name(), "Name Surname");
        assert_eq!(profile.photo_entry(), (PROFILE_PHOTO_KEY, String::new()));
    }

    #[test]
    fn test_apply_requires_email() {
        let mut profile = Profile::default();

        let mut draft = profile.draft();
        draft.name = "Anna".to_string();
        draft.email = "   ".to_string();
        assert!(profile.apply(draft).is_err());
        assert_eq!(profile.name, "Name");

        let mut draft = profile.draft();
        draft.name = "Anna".to_string();
        draft.email = "anna@example.com".to_string();
        draft.photo_uri = Some("file:///photos/anna.jpg".to_string());
        profile.apply(draft).unwrap();

        assert_eq!(profile.name, "Anna");
        assert_eq!(profile.photo_entry().1, "file:///photos/anna.jpg");
    }

    #[test]
    fn test_json_round_trip() {
        let mut profile = Profile::default();
        profile.email = "anna@example.com".to_string();

        let json = profile.to_json().unwrap();
        assert!(json.contains("\"email\":\"anna@example.com\""));
        assert!(!json.contains("photoUri"));

        assert_eq!(Profile::from_json(&json).unwrap(), profile);
        assert!(Profile::from_json("{}").is_err());
    }
}
