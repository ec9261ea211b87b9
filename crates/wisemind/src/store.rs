//! Client mirrors of the server state.
//!
//! The stores are patched optimistically from completion results. Whatever the
//! server returns on the next fetch replaces the local copy.

use crate::Api;
use crate::error::Error;
use wisemind_model::completion::{CompleteLesson, CompletionResult};

mod modules;
mod user;

pub use modules::{LessonEntry, ModuleEntry, ModuleStore};
pub use user::UserStore;

/// Completes `lesson_id` for the signed in user and patches both stores.
///
/// On failure neither store changes apart from its error message.
pub async fn complete_lesson<A: Api + ?Sized>(
    api: &A,
    user_store: &mut UserStore,
    module_store: &mut ModuleStore,
    lesson_id: &str,
) -> Result<CompletionResult, Error> {
    let res = match user_store.user() {
        Some(user) => {
            let request = CompleteLesson {
                user_id: user.id,
                lesson_id: lesson_id.to_owned(),
            };
            api.complete_lesson(&request).await
        }
        None => Err(Error::NoSession),
    };

    match res {
        Ok(result) => {
            tracing::debug!(lesson = %result.lesson_id, xp = result.xp_earned, "lesson completed");
            user_store.apply_completion(&result);
            module_store.apply_completion(&result);
            Ok(result)
        }
        Err(error) => {
            tracing::warn!(error = &error as &dyn std::error::Error, lesson_id, "failed to complete lesson");
            user_store.set_error(&error);
            module_store.set_error(&error);
            Err(error)
        }
    }
}
