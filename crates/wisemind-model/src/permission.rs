//! Role based access control.
//!
//! Every role maps to a fixed set of `action:resource` permissions. Role
//! sufficiency is a separate check where higher roles also satisfy the
//! requirements of lower ones.

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    Modules,
    Lessons,
    Users,
    Achievements,
}

/// A single grant, written as `action:resource` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct Permission {
    pub action: Action,
    pub resource: Resource,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid permission {0:?}, expected action:resource")]
pub struct ParsePermissionError(String);

impl Permission {
    #[must_use]
    pub const fn new(action: Action, resource: Resource) -> Self {
        Self { action, resource }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.action, self.resource)
    }
}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePermissionError(s.to_owned());
        let (action, resource) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            action: action.parse().map_err(|_| invalid())?,
            resource: resource.parse().map_err(|_| invalid())?,
        })
    }
}

macro_rules! permissions {
    ($($action:ident $resource:ident),* $(,)?) => {
        &[$(Permission::new(Action::$action, Resource::$resource)),*]
    };
}

const STUDENT_PERMISSIONS: &[Permission] = permissions![Read Modules, Read Lessons];

const TEACHER_PERMISSIONS: &[Permission] = permissions![
    Read Modules,
    Read Lessons,
    Create Lessons,
    Update Lessons,
    Read Users,
];

const ADMIN_PERMISSIONS: &[Permission] = permissions![
    Read Modules,
    Create Modules,
    Update Modules,
    Delete Modules,
    Read Lessons,
    Create Lessons,
    Update Lessons,
    Delete Lessons,
    Read Users,
    Create Users,
    Update Users,
    Delete Users,
    Read Achievements,
    Create Achievements,
    Update Achievements,
    Delete Achievements,
];

#[must_use]
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Student => STUDENT_PERMISSIONS,
        Role::Teacher => TEACHER_PERMISSIONS,
        Role::Admin => ADMIN_PERMISSIONS,
    }
}

/// Whether `role` satisfies a `required` role.
#[must_use]
pub fn has_role(role: Role, required: Role) -> bool {
    match required {
        Role::Student => true,
        Role::Teacher => matches!(role, Role::Teacher | Role::Admin),
        Role::Admin => role == Role::Admin,
    }
}

#[must_use]
pub fn has_permission(role: Role, permission: Permission) -> bool {
    permissions_for(role).contains(&permission)
}

#[must_use]
pub fn has_all_permissions(granted: &[Permission], required: &[Permission]) -> bool {
    required.iter().all(|permission| granted.contains(permission))
}
