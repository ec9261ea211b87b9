use crate::Api;
use crate::error::Error;
use chrono::Utc;
use wisemind_model::achievement::Achievement;
use wisemind_model::completion::CompletionResult;
use wisemind_model::permission::{Permission, Role};
use wisemind_model::user::User;

/// Client copy of the signed in user.
#[derive(Debug, Default, Clone)]
pub struct UserStore {
    user: Option<User>,
    is_loading: bool,
    error: Option<String>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn set_error(&mut self, error: &Error) {
        self.error = Some(error.to_string());
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.permissions.contains(&permission))
    }

    pub fn earned_achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.user
            .iter()
            .flat_map(|user| user.achievements.iter())
            .filter(|achievement| achievement.earned)
    }

    #[must_use]
    pub fn is_lesson_completed(&self, lesson_id: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.completed_lessons.iter().any(|id| id == lesson_id))
    }

    async fn load<F>(&mut self, fetch: F) -> Result<(), Error>
    where
        F: Future<Output = Result<User, Error>>,
    {
        self.is_loading = true;
        let res = fetch.await;
        self.is_loading = false;
        match res {
            Ok(user) => {
                self.user = Some(user);
                self.error = None;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(error = &error as &dyn std::error::Error, "failed to load user");
                self.set_error(&error);
                Err(error)
            }
        }
    }

    /// Replaces the local copy with the server state.
    pub async fn fetch_user<A: Api + ?Sized>(&mut self, api: &A) -> Result<(), Error> {
        self.load(api.fetch_user()).await
    }

    /// Records today's login and keeps the returned user, streak included.
    pub async fn record_login<A: Api + ?Sized>(&mut self, api: &A) -> Result<(), Error> {
        self.load(api.record_login()).await
    }

    /// Patches the local copy with a completion the server accepted.
    pub fn apply_completion(&mut self, result: &CompletionResult) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        self.error = None;

        user.xp_points = result.new_total_xp;
        user.overall_progress = result.overall_progress;
        if !result.was_already_completed && !user.completed_lessons.contains(&result.lesson_id) {
            user.completed_lessons.push(result.lesson_id.clone());
            user.skills_learned += 1;
        }

        for progress in &mut user.module_progress {
            if progress.module_id == result.module_id {
                progress.progress = result.module_progress;
            }
            if result.unlocked_module.as_ref() == Some(&progress.module_id) {
                progress.unlocked = true;
            }
        }

        let now = Utc::now().naive_utc();
        for achievement in &mut user.achievements {
            if !achievement.earned && result.new_achievements.contains(&achievement.id) {
                achievement.earned = true;
                achievement.earned_date = Some(now);
            }
        }
    }
}
