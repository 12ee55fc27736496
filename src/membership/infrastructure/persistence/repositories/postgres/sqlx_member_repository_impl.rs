use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use crate::membership::{
    domain::model::{
        entities::member::Member,
        enums::{
            member_grade::MemberGrade, member_status::MemberStatus,
            membership_domain_error::MembershipDomainError,
        },
        value_objects::{
            member_id::MemberId,
            member_profile::{MemberProfile, MemberProfileParts},
            rut::Rut,
        },
    },
    infrastructure::persistence::repositories::member_repository::MemberRepository,
};

const MEMBER_COLUMNS: &str = "id, rut, first_names, last_names, email, phone, birth_date, \
     join_date, grade, status, address, city, profession, notes, created_at, updated_at";

pub struct SqlxMemberRepositoryImpl {
    pool: PgPool,
}

impl SqlxMemberRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Member, MembershipDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let rut_raw: String = row.try_get("rut").map_err(map_infra_error)?;
        let birth_date: NaiveDate = row.try_get("birth_date").map_err(map_infra_error)?;
        let join_date: NaiveDate = row.try_get("join_date").map_err(map_infra_error)?;
        let grade_raw: String = row.try_get("grade").map_err(map_infra_error)?;
        let status_raw: String = row.try_get("status").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_infra_error)?;

        let grade = MemberGrade::from_str(&grade_raw).map_err(|_| {
            MembershipDomainError::InfrastructureError("unknown grade stored".to_string())
        })?;
        let status = MemberStatus::from_str(&status_raw).map_err(|_| {
            MembershipDomainError::InfrastructureError("unknown status stored".to_string())
        })?;

        let profile = MemberProfile::restore(MemberProfileParts {
            rut: Rut::new(rut_raw)?,
            first_names: row.try_get("first_names").map_err(map_infra_error)?,
            last_names: row.try_get("last_names").map_err(map_infra_error)?,
            email: row.try_get("email").map_err(map_infra_error)?,
            phone: row.try_get("phone").map_err(map_infra_error)?,
            birth_date,
            join_date,
            grade,
            status,
            address: row.try_get("address").map_err(map_infra_error)?,
            city: row.try_get("city").map_err(map_infra_error)?,
            profession: row.try_get("profession").map_err(map_infra_error)?,
            notes: row.try_get("notes").map_err(map_infra_error)?,
        });

        Ok(Member::restore(
            MemberId::from_uuid(id),
            profile,
            created_at,
            updated_at,
        ))
    }
}

#[async_trait]
impl MemberRepository for SqlxMemberRepositoryImpl {
    async fn save(&self, member: &Member) -> Result<(), MembershipDomainError> {
        let statement = r#"
            INSERT INTO members (
                id, rut, first_names, last_names, email, phone, birth_date, join_date,
                grade, status, address, city, profession, notes, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (id)
            DO UPDATE SET
                rut = EXCLUDED.rut,
                first_names = EXCLUDED.first_names,
                last_names = EXCLUDED.last_names,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                birth_date = EXCLUDED.birth_date,
                join_date = EXCLUDED.join_date,
                grade = EXCLUDED.grade,
                status = EXCLUDED.status,
                address = EXCLUDED.address,
                city = EXCLUDED.city,
                profession = EXCLUDED.profession,
                notes = EXCLUDED.notes,
                updated_at = EXCLUDED.updated_at
        "#;

        let profile = member.profile();
        sqlx::query(statement)
            .bind(member.id().value())
            .bind(profile.rut().value())
            .bind(profile.first_names())
            .bind(profile.last_names())
            .bind(profile.email())
            .bind(profile.phone())
            .bind(profile.birth_date())
            .bind(profile.join_date())
            .bind(profile.grade().as_str())
            .bind(profile.status().as_str())
            .bind(profile.address())
            .bind(profile.city())
            .bind(profile.profession())
            .bind(profile.notes())
            .bind(member.created_at())
            .bind(member.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_save_error)?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<Member>, MembershipDomainError> {
        let statement = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(member_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn find_by_rut(&self, rut: &Rut) -> Result<Option<Member>, MembershipDomainError> {
        let statement = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE rut = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(rut.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn list(
        &self,
        grade: Option<MemberGrade>,
        status: Option<MemberStatus>,
    ) -> Result<Vec<Member>, MembershipDomainError> {
        let statement = format!(
            "SELECT {MEMBER_COLUMNS} FROM members \
             WHERE ($1::text IS NULL OR grade = $1) AND ($2::text IS NULL OR status = $2) \
             ORDER BY last_names, first_names"
        );

        let rows = sqlx::query(&statement)
            .bind(grade.map(|g| g.as_str()))
            .bind(status.map(|s| s.as_str()))
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn delete(&self, member_id: &MemberId) -> Result<bool, MembershipDomainError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(member_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_save_error(error: sqlx::Error) -> MembershipDomainError {
    let is_unique_violation = error
        .as_database_error()
        .is_some_and(|db_error| db_error.is_unique_violation());

    if is_unique_violation {
        MembershipDomainError::MemberAlreadyRegistered
    } else {
        map_infra_error(error)
    }
}

fn map_infra_error(error: sqlx::Error) -> MembershipDomainError {
    MembershipDomainError::InfrastructureError(error.to_string())
}
