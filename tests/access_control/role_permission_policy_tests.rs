use std::collections::BTreeSet;

use orpheo_api::access_control::domain::model::{
    enums::{
        access_control_domain_error::AccessControlDomainError, capability::Capability,
        member_role::MemberRole,
    },
    policies::role_permission_policy::{WILDCARD, granted_entries, has_capability, permissions_for},
};

#[test]
fn admin_wildcard_expands_to_every_capability() {
    assert_eq!(granted_entries(MemberRole::Admin), &[WILDCARD]);
    assert_eq!(
        permissions_for(MemberRole::Admin),
        Capability::ALL.into_iter().collect::<BTreeSet<_>>()
    );
    for capability in Capability::ALL {
        assert!(has_capability(MemberRole::Admin, capability));
    }
}

#[test]
fn plain_member_cannot_write_members() {
    assert!(!has_capability(MemberRole::Member, Capability::MembersWrite));
    assert!(!has_capability(MemberRole::Member, Capability::MembersRead));
    assert!(has_capability(MemberRole::Member, Capability::DocumentsRead));
}

#[test]
fn secretary_manages_members_but_cannot_delete() {
    assert!(has_capability(MemberRole::Secretary, Capability::MembersWrite));
    assert!(has_capability(MemberRole::Secretary, Capability::NotificationsSend));
    assert!(!has_capability(MemberRole::Secretary, Capability::MembersDelete));
}

#[test]
fn treasurer_reads_members_and_handles_documents() {
    let permissions = permissions_for(MemberRole::Treasurer);

    assert!(permissions.contains(&Capability::MembersRead));
    assert!(permissions.contains(&Capability::DocumentsWrite));
    assert!(!permissions.contains(&Capability::MembersWrite));
    assert_eq!(permissions.len(), 5);
}

#[test]
fn every_listed_grant_names_a_known_capability() {
    for role in [MemberRole::Secretary, MemberRole::Treasurer, MemberRole::Member] {
        assert_eq!(permissions_for(role).len(), granted_entries(role).len());
    }
}

#[test]
fn roles_and_capabilities_parse_case_insensitively() {
    assert_eq!("  Secretario ".parse::<MemberRole>().ok(), Some(MemberRole::Secretary));
    assert_eq!(
        "MEMBERS:DELETE".parse::<Capability>().ok(),
        Some(Capability::MembersDelete)
    );
    assert!(matches!(
        "visitante".parse::<MemberRole>(),
        Err(AccessControlDomainError::UnknownRole)
    ));
    assert!(matches!(
        "members:export".parse::<Capability>(),
        Err(AccessControlDomainError::UnknownCapability)
    ));
}
