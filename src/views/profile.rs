//! Profile page summary

use serde::{Deserialize, Serialize};

use crate::store::{FavoriteDriver, FavoriteTeam, UserState};

/// What the profile page shows for the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProfileSummary {
    SignedOut,
    SignedIn {
        username: String,
        email: String,
        favorite_drivers: Vec<FavoriteDriver>,
        favorite_teams: Vec<FavoriteTeam>,
        dark_mode: bool,
        notifications: bool,
    },
}

pub fn profile_summary(state: &UserState) -> ProfileSummary {
    match (&state.user, state.is_authenticated) {
        (Some(user), true) => ProfileSummary::SignedIn {
            username: user.username.clone(),
            email: user.email.clone(),
            favorite_drivers: user.preferences.favorite_drivers.clone(),
            favorite_teams: user.preferences.favorite_teams.clone(),
            dark_mode: user.preferences.dark_mode,
            notifications: user.preferences.notifications,
        },
        _ => ProfileSummary::SignedOut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{RootState, User, UserIntent};

    #[test]
    fn test_signed_out_profile() {
        assert_eq!(profile_summary(&UserState::default()), ProfileSummary::SignedOut);
    }

    #[test]
    fn test_signed_in_profile_reflects_toggles() {
        let state = RootState::default()
            .reduce(UserIntent::SetUser(Some(User::new("u1", "fan@pitwall.dev", "fan"))))
            .reduce(UserIntent::ToggleNotifications);

        match profile_summary(&state.user) {
            ProfileSummary::SignedIn {
                username,
                notifications,
                dark_mode,
                ..
            } => {
                assert_eq!(username, "fan");
                assert!(notifications);
                assert!(!dark_mode);
            }
            ProfileSummary::SignedOut => panic!("expected signed-in profile"),
        }
    }
}
