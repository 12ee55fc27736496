use std::str::FromStr;

use crate::membership::domain::model::enums::{
    member_grade::MemberGrade, member_status::MemberStatus,
    membership_domain_error::MembershipDomainError,
};

#[derive(Clone, Debug, Default)]
pub struct ListMembersQuery {
    grade: Option<MemberGrade>,
    status: Option<MemberStatus>,
}

impl ListMembersQuery {
    pub fn new(
        grade: Option<String>,
        status: Option<String>,
    ) -> Result<Self, MembershipDomainError> {
        Ok(Self {
            grade: non_blank(grade).map(|g| MemberGrade::from_str(&g)).transpose()?,
            status: non_blank(status)
                .map(|s| MemberStatus::from_str(&s))
                .transpose()?,
        })
    }

    pub fn grade(&self) -> Option<MemberGrade> {
        self.grade
    }

    pub fn status(&self) -> Option<MemberStatus> {
        self.status
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
