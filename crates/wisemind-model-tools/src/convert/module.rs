use crate::convert::{FromDbModel, FromModel};
use wisemind_entity::module::Model as ModuleModel;
use wisemind_model::module::{Module, NewModule};

impl FromDbModel<ModuleModel> for Module {
    fn from_db_model(model: ModuleModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            icon: model.icon,
            color: model.color,
            order: model.order,
            unlocked: model.unlocked,
        }
    }
}

/// A module together with its effective unlock state for one user.
impl FromDbModel<(ModuleModel, bool)> for Module {
    fn from_db_model((model, unlocked): (ModuleModel, bool)) -> Self {
        Self {
            unlocked,
            ..Self::from_db_model(model)
        }
    }
}

/// A new module with its resolved catalog default.
impl FromModel<(NewModule, bool)> for ModuleModel {
    fn from_model((module, unlocked): (NewModule, bool)) -> Self {
        Self {
            id: module.id,
            title: module.title,
            description: module.description,
            icon: module.icon,
            color: module.color,
            order: module.order,
            unlocked,
        }
    }
}
