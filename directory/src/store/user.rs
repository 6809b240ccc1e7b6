//! # User Slice
//!
//! Profile state and its transitions.

use shared::dto::user::{ProfilePatch, UserProfile};

/// User profile state slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    pub profile: UserProfile,
    pub loading: bool,
}

impl UserState {
    /// Merge a partial update into the profile; `None` fields are kept.
    pub fn update_profile(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.profile.name = name;
        }
        if let Some(email) = patch.email {
            self.profile.email = email;
        }
        if let Some(avatar) = patch.avatar {
            self.profile.avatar = Some(avatar);
        }
    }

    /// Replace the avatar.
    pub fn set_avatar(&mut self, avatar: impl Into<String>) {
        self.profile.avatar = Some(avatar.into());
    }

    /// Reset the profile to its empty state.
    pub fn clear_profile(&mut self) {
        self.profile = UserProfile::default();
    }
}
