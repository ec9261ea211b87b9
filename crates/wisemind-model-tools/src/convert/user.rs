use crate::convert::{FromDbModel, FromModel};
use wisemind_entity::user::{Model as UserModel, Role as RoleModel};
use wisemind_model::permission::Role;
use wisemind_model::user::UserRole;

impl FromDbModel<RoleModel> for Role {
    fn from_db_model(model: RoleModel) -> Self {
        match model {
            RoleModel::Student => Self::Student,
            RoleModel::Teacher => Self::Teacher,
            RoleModel::Admin => Self::Admin,
        }
    }
}

impl FromModel<Role> for RoleModel {
    fn from_model(model: Role) -> Self {
        match model {
            Role::Student => Self::Student,
            Role::Teacher => Self::Teacher,
            Role::Admin => Self::Admin,
        }
    }
}

impl FromDbModel<UserModel> for UserRole {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            role: Role::from_db_model(model.role),
        }
    }
}
