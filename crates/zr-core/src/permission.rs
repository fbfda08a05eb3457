use crate::{MenuPermission, Teacher};

/// Role that bypasses per-menu permission entries.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Read,
    Create,
    Update,
    Delete,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "canRead",
            Self::Create => "canCreate",
            Self::Update => "canUpdate",
            Self::Delete => "canDelete",
        }
    }

    fn granted_by(&self, entry: &MenuPermission) -> bool {
        match self {
            Self::Read => entry.can_read,
            Self::Create => entry.can_create,
            Self::Update => entry.can_update,
            Self::Delete => entry.can_delete,
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Can `actor` perform `capability` on `menu_code`?
///
/// Fails closed: no actor, or no entry for the menu, means no.
pub fn can(actor: Option<&Teacher>, menu_code: &str, capability: Capability) -> bool {
    let Some(actor) = actor else {
        return false;
    };

    if actor
        .role
        .as_deref()
        .is_some_and(|role| role.eq_ignore_ascii_case(ADMIN_ROLE))
    {
        return true;
    }

    actor
        .permissions
        .iter()
        .find(|entry| entry.menu_code == menu_code)
        .is_some_and(|entry| capability.granted_by(entry))
}
