use std::str::FromStr;

use super::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Capability {
    MembersRead,
    MembersWrite,
    MembersDelete,
    DocumentsRead,
    DocumentsWrite,
    ProgramsRead,
    ProgramsWrite,
    AttendanceRead,
    AttendanceWrite,
    NotificationsSend,
}

impl Capability {
    /// Every capability the application knows about. The wildcard grant expands to this list.
    pub const ALL: [Capability; 10] = [
        Self::MembersRead,
        Self::MembersWrite,
        Self::MembersDelete,
        Self::DocumentsRead,
        Self::DocumentsWrite,
        Self::ProgramsRead,
        Self::ProgramsWrite,
        Self::AttendanceRead,
        Self::AttendanceWrite,
        Self::NotificationsSend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MembersRead => "members:read",
            Self::MembersWrite => "members:write",
            Self::MembersDelete => "members:delete",
            Self::DocumentsRead => "documents:read",
            Self::DocumentsWrite => "documents:write",
            Self::ProgramsRead => "programs:read",
            Self::ProgramsWrite => "programs:write",
            Self::AttendanceRead => "attendance:read",
            Self::AttendanceWrite => "attendance:write",
            Self::NotificationsSend => "notifications:send",
        }
    }
}

impl FromStr for Capability {
    type Err = AccessControlDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|capability| capability.as_str() == normalized)
            .ok_or(AccessControlDomainError::UnknownCapability)
    }
}
