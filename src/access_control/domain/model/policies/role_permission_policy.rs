//! Role to capability grants.
//!
//! The grant table is a flat list of capability names per role. `*` grants
//! every capability in `Capability::ALL`.

use std::collections::BTreeSet;

use crate::access_control::domain::model::enums::{capability::Capability, member_role::MemberRole};

pub const WILDCARD: &str = "*";

pub fn granted_entries(role: MemberRole) -> &'static [&'static str] {
    match role {
        MemberRole::Admin => &[WILDCARD],
        MemberRole::Secretary => &[
            "members:read",
            "members:write",
            "documents:read",
            "documents:write",
            "programs:read",
            "programs:write",
            "attendance:read",
            "attendance:write",
            "notifications:send",
        ],
        MemberRole::Treasurer => &[
            "members:read",
            "documents:read",
            "documents:write",
            "programs:read",
            "attendance:read",
        ],
        MemberRole::Member => &["documents:read", "programs:read", "attendance:read"],
    }
}

pub fn permissions_for(role: MemberRole) -> BTreeSet<Capability> {
    let mut permissions = BTreeSet::new();
    for entry in granted_entries(role) {
        if *entry == WILDCARD {
            permissions.extend(Capability::ALL);
        } else if let Ok(capability) = entry.parse::<Capability>() {
            permissions.insert(capability);
        }
    }
    permissions
}

pub fn has_capability(role: MemberRole, capability: Capability) -> bool {
    permissions_for(role).contains(&capability)
}
