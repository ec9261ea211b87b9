use crate::convert::{FromDbModel, FromModel};
use wisemind_entity::achievement::Model as AchievementModel;
use wisemind_entity::achievement::user_achievement::Model as UserAchievementModel;
use wisemind_model::achievement::{Achievement, NewAchievement};

/// A catalog entry and the user's record for it, if any.
impl FromDbModel<(AchievementModel, Option<UserAchievementModel>)> for Achievement {
    fn from_db_model((model, earned): (AchievementModel, Option<UserAchievementModel>)) -> Self {
        let earned = earned.filter(|record| record.earned);
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            icon: model.icon,
            earned: earned.is_some(),
            earned_date: earned.and_then(|record| record.earned_at),
        }
    }
}

impl FromModel<NewAchievement> for AchievementModel {
    fn from_model(model: NewAchievement) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            icon: model.icon,
            module_id: model.module_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::IntoModel;

    fn catalog_entry() -> AchievementModel {
        AchievementModel {
            id: "first-lesson".to_owned(),
            name: "First Steps".to_owned(),
            description: "Complete your first lesson".to_owned(),
            icon: "seedling".to_owned(),
            module_id: None,
        }
    }

    #[test]
    fn test_unearned() {
        let achievement: Achievement = (catalog_entry(), None).into_model();
        assert!(!achievement.earned);
        assert_eq!(achievement.earned_date, None);
    }

    #[test]
    fn test_earned() {
        let now = chrono::Utc::now().naive_utc();
        let record = UserAchievementModel {
            user_id: uuid::Uuid::new_v4(),
            achievement_id: "first-lesson".to_owned(),
            earned: true,
            earned_at: Some(now),
        };
        let achievement: Achievement = (catalog_entry(), Some(record)).into_model();
        assert!(achievement.earned);
        assert_eq!(achievement.earned_date, Some(now));
    }
}
