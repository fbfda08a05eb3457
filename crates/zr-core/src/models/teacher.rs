use crate::EntityId;

use crate::models::null_as_default;

use serde::{Deserialize, Serialize};

/// Per-menu capability flags granted to a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuPermission {
    pub menu_code: String,
    pub can_read: bool,
    pub can_create: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

impl MenuPermission {
    pub fn new(menu_code: &str) -> Self {
        Self {
            menu_code: menu_code.to_string(),
            ..Default::default()
        }
    }

    /// Grant every capability on this menu.
    pub fn all(menu_code: &str) -> Self {
        Self {
            menu_code: menu_code.to_string(),
            can_read: true,
            can_create: true,
            can_update: true,
            can_delete: true,
        }
    }
}

/// A teacher/doctor account, as far as the board cares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: Vec<MenuPermission>,
}

impl Teacher {
    pub fn new<I: Into<EntityId>>(id: I, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            role: None,
            permissions: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    pub fn with_permission(mut self, permission: MenuPermission) -> Self {
        self.permissions.push(permission);
        self
    }

    pub fn to_ref(&self) -> TeacherRef {
        TeacherRef {
            id: self.id.clone(),
            name: self.name.clone(),
            color: None,
        }
    }
}

/// Cached reference to a teacher embedded in task and comment records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherRef {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TeacherRef {
    pub fn new<I: Into<EntityId>>(id: I, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            color: None,
        }
    }
}
