use crate::Api;
use crate::error::Error;
use futures::future::try_join_all;
use wisemind_model::completion::CompletionResult;
use wisemind_model::lesson::Lesson;
use wisemind_model::module::Module;
use wisemind_model::progress::percentage;
use wisemind_model::user::User;

#[derive(Debug, Clone, PartialEq)]
pub struct LessonEntry {
    pub lesson: Lesson,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleEntry {
    pub module: Module,
    pub lessons: Vec<LessonEntry>,
    pub progress: i32,
}

impl ModuleEntry {
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.module.unlocked
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.lessons.iter().filter(|lesson| lesson.completed).count()
    }
}

/// Client copy of the catalog, ordered by module order, with the signed in
/// user's progress folded in.
#[derive(Debug, Default, Clone)]
pub struct ModuleStore {
    modules: Vec<ModuleEntry>,
    current_module: Option<String>,
    current_lesson: Option<String>,
    is_loading: bool,
    error: Option<String>,
}

impl ModuleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn modules(&self) -> &[ModuleEntry] {
        &self.modules
    }

    #[must_use]
    pub fn module(&self, module_id: &str) -> Option<&ModuleEntry> {
        self.modules.iter().find(|entry| entry.module.id == module_id)
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
    pub fn current_module(&self) -> Option<&ModuleEntry> {
        self.current_module.as_deref().and_then(|id| self.module(id))
    }

    #[must_use]
    pub fn current_lesson(&self) -> Option<&LessonEntry> {
        let lesson_id = self.current_lesson.as_deref()?;
        self.current_module()?
            .lessons
            .iter()
            .find(|entry| entry.lesson.id == lesson_id)
    }

    /// Selects a module and clears the lesson selection. Unknown ids are ignored.
    pub fn select_module(&mut self, module_id: &str) -> bool {
        if self.module(module_id).is_none() {
            return false;
        }
        self.current_module = Some(module_id.to_owned());
        self.current_lesson = None;
        true
    }

    /// Selects a lesson of the current module.
    pub fn select_lesson(&mut self, lesson_id: &str) -> bool {
        let known = self
            .current_module()
            .is_some_and(|module| module.lessons.iter().any(|entry| entry.lesson.id == lesson_id));
        if known {
            self.current_lesson = Some(lesson_id.to_owned());
        }
        known
    }

    /// Loads the module list and every module's lessons. On failure the
    /// previous catalog stays in place.
    pub async fn fetch_modules<A: Api + ?Sized>(&mut self, api: &A) -> Result<(), Error> {
        self.is_loading = true;
        let res = Self::load(api).await;
        self.is_loading = false;
        match res {
            Ok(modules) => {
                tracing::debug!(modules = modules.len(), "catalog loaded");
                self.modules = modules;
                self.error = None;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(error = &error as &dyn std::error::Error, "failed to load modules");
                self.set_error(&error);
                Err(error)
            }
        }
    }

    async fn load<A: Api + ?Sized>(api: &A) -> Result<Vec<ModuleEntry>, Error> {
        let modules = api.list_modules().await?;
        let details = try_join_all(modules.iter().map(|module| api.get_module(&module.id))).await?;
        let mut entries: Vec<_> = details
            .into_iter()
            .map(|detail| {
                let mut lessons: Vec<_> = detail
                    .lessons
                    .into_iter()
                    .map(|lesson| LessonEntry {
                        lesson,
                        completed: false,
                    })
                    .collect();
                lessons.sort_by_key(|entry| entry.lesson.order);
                ModuleEntry {
                    module: detail.module,
                    lessons,
                    progress: 0,
                }
            })
            .collect();
        entries.sort_by_key(|entry| entry.module.order);
        Ok(entries)
    }

    /// Folds the user's completed lessons, progress and unlocks into the catalog.
    pub fn sync_with_user(&mut self, user: &User) {
        for entry in &mut self.modules {
            for lesson in &mut entry.lessons {
                lesson.completed = user.completed_lessons.contains(&lesson.lesson.id);
            }
            if let Some(progress) = user
                .module_progress
                .iter()
                .find(|progress| progress.module_id == entry.module.id)
            {
                entry.progress = progress.progress;
                entry.module.unlocked = progress.unlocked;
            }
        }
    }

    /// Percentage of all lessons in the catalog that are completed.
    #[must_use]
    pub fn overall_progress(&self) -> i32 {
        let total: usize = self.modules.iter().map(|entry| entry.lessons.len()).sum();
        let completed: usize = self.modules.iter().map(ModuleEntry::completed_count).sum();
        percentage(completed as u64, total as u64)
    }

    fn successor_of(&self, module_id: &str) -> Option<String> {
        let order = self.module(module_id)?.module.order;
        self.modules
            .iter()
            .filter(|entry| entry.module.order > order)
            .min_by_key(|entry| entry.module.order)
            .map(|entry| entry.module.id.clone())
    }

    /// Marks the lesson completed, sets the module's progress and unlocks its
    /// successor once the module is complete.
    pub fn apply_completion(&mut self, result: &CompletionResult) {
        self.error = None;
        let successor = result.unlocked_module.clone().or_else(|| {
            result
                .is_module_complete
                .then(|| self.successor_of(&result.module_id))
                .flatten()
        });

        for entry in &mut self.modules {
            if entry.module.id == result.module_id {
                entry.progress = result.module_progress;
                for lesson in &mut entry.lessons {
                    if lesson.lesson.id == result.lesson_id {
                        lesson.completed = true;
                    }
                }
            }
            if successor.as_ref() == Some(&entry.module.id) {
                entry.module.unlocked = true;
            }
        }
    }
}
