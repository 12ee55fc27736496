use crate::membership::domain::model::{
    enums::membership_domain_error::MembershipDomainError, value_objects::rut::Rut,
};

#[derive(Clone, Debug)]
pub struct FindMemberByRutQuery {
    rut: Rut,
}

impl FindMemberByRutQuery {
    pub fn new(rut: String) -> Result<Self, MembershipDomainError> {
        Ok(Self { rut: Rut::new(rut)? })
    }

    pub fn rut(&self) -> &Rut {
        &self.rut
    }
}
