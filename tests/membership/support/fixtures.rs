use chrono::{NaiveDate, Utc};
use orpheo_api::membership::domain::model::{
    commands::register_member_command::RegisterMemberCommand, entities::member::Member,
    validation::member_record::MemberRecord,
};

pub const VALID_RUT: &str = "12345678-5";
pub const OTHER_VALID_RUT: &str = "11.111.111-1";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub fn valid_record() -> MemberRecord {
    MemberRecord {
        first_names: Some("  Juan   Pablo ".to_string()),
        last_names: Some("González Pérez".to_string()),
        rut: Some(VALID_RUT.to_string()),
        email: Some("Juan.Gonzalez@Example.cl".to_string()),
        phone: Some("912345678".to_string()),
        birth_date: Some("12/04/1985".to_string()),
        join_date: Some("2015-03-02".to_string()),
        grade: Some("Maestro".to_string()),
        status: Some("activo".to_string()),
        address: Some("Av. Libertad 1234, depto 5".to_string()),
        city: Some("Valparaíso".to_string()),
        profession: Some("Ingeniero civil".to_string()),
        notes: None,
    }
}

pub fn record_with(rut: &str, last_names: &str, grade: &str) -> MemberRecord {
    MemberRecord {
        rut: Some(rut.to_string()),
        last_names: Some(last_names.to_string()),
        grade: Some(grade.to_string()),
        ..valid_record()
    }
}

pub fn registered_member(record: MemberRecord) -> Member {
    let profile = RegisterMemberCommand::new_at(record, today())
        .expect("fixture record should be valid")
        .into_profile();
    Member::new_registered(profile, Utc::now())
}
