//! User slice
//!
//! At most one authenticated user. Preference intents are ignored while
//! nobody is signed in.

use serde::{Deserialize, Serialize};

use super::intent::UserIntent;
use super::types::{User, UserPreferences};

/// User store slice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UserState {
    /// Run `f` against the signed-in user's preferences, if any
    fn with_preferences(&mut self, f: impl FnOnce(&mut UserPreferences)) {
        match self.user.as_mut() {
            Some(user) => f(&mut user.preferences),
            None => tracing::debug!("preference change without user ignored"),
        }
    }

    pub(crate) fn reduce(&mut self, intent: UserIntent) {
        match intent {
            UserIntent::SetUser(user) => {
                self.is_authenticated = user.is_some();
                self.user = user;
            }
            UserIntent::Logout => {
                self.is_authenticated = false;
                self.user = None;
            }
            UserIntent::AddFavoriteDriver(driver) => {
                self.with_preferences(|p| p.favorite_drivers.push(driver))
            }
            UserIntent::RemoveFavoriteDriver(id) => {
                self.with_preferences(|p| p.favorite_drivers.retain(|d| d.id != id))
            }
            UserIntent::AddFavoriteTeam(team) => {
                self.with_preferences(|p| p.favorite_teams.push(team))
            }
            UserIntent::RemoveFavoriteTeam(id) => {
                self.with_preferences(|p| p.favorite_teams.retain(|t| t.id != id))
            }
            UserIntent::ToggleDarkMode => self.with_preferences(|p| p.dark_mode = !p.dark_mode),
            UserIntent::ToggleNotifications => {
                self.with_preferences(|p| p.notifications = !p.notifications)
            }
            UserIntent::SetLoading(loading) => self.loading = loading,
            UserIntent::SetError(error) => self.error = error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::{FavoriteDriver, FavoriteTeam};

    fn signed_in() -> UserState {
        let mut state = UserState::default();
        state.reduce(UserIntent::SetUser(Some(User::new("u1", "fan@pitwall.dev", "fan"))));
        state
    }

    #[test]
    fn test_logout_clears_user() {
        let mut state = signed_in();
        assert!(state.is_authenticated);

        state.reduce(UserIntent::Logout);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_set_user_none_deauthenticates() {
        let mut state = signed_in();
        state.reduce(UserIntent::SetUser(None));
        assert!(!state.is_authenticated);
    }

    #[test]
    fn test_dark_mode_toggle_is_involution() {
        let mut state = signed_in();
        let original = state.user.as_ref().unwrap().preferences.dark_mode;

        state.reduce(UserIntent::ToggleDarkMode);
        assert_ne!(state.user.as_ref().unwrap().preferences.dark_mode, original);
        state.reduce(UserIntent::ToggleDarkMode);
        assert_eq!(state.user.as_ref().unwrap().preferences.dark_mode, original);
    }

    #[test]
    fn test_preferences_ignored_when_signed_out() {
        let mut state = UserState::default();
        state.reduce(UserIntent::ToggleNotifications);
        state.reduce(UserIntent::AddFavoriteTeam(FavoriteTeam {
            id: "fer".into(),
            name: "Ferrari".into(),
        }));
        assert_eq!(state, UserState::default());
    }

    #[test]
    fn test_favorites_add_and_remove() {
        let mut state = signed_in();
        state.reduce(UserIntent::AddFavoriteDriver(FavoriteDriver {
            id: "lec".into(),
            name: "Charles Leclerc".into(),
            team: "Ferrari".into(),
        }));
        state.reduce(UserIntent::AddFavoriteTeam(FavoriteTeam {
            id: "fer".into(),
            name: "Ferrari".into(),
        }));
        state.reduce(UserIntent::RemoveFavoriteDriver("lec".into()));

        let prefs = &state.user.as_ref().unwrap().preferences;
        assert!(prefs.favorite_drivers.is_empty());
        assert_eq!(prefs.favorite_teams.len(), 1);
    }
}
