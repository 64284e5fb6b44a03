//! Output projection of member search results.

use serde::Serialize;

use crate::domain::member::MemberRecord;
use crate::services::{ServiceError, ServiceResult};

/// One member row as exposed by the API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    pub member_id: i32,
    pub name: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl TryFrom<MemberRecord> for MemberTeamDto {
    type Error = ServiceError;

    fn try_from(record: MemberRecord) -> Result<Self, Self::Error> {
        if record.team_id.is_some() != record.team_name.is_some() {
            log::error!(
                "Member {} has team id {:?} but team name {:?}",
                record.id,
                record.team_id,
                record.team_name
            );
            return Err(ServiceError::InternalInvariantViolation(format!(
                "member {} has an unresolved team reference",
                record.id
            )));
        }

        Ok(Self {
            member_id: record.id.get(),
            name: record.name.map(String::from),
            age: record.age.get(),
            team_id: record.team_id.map(i32::from),
            team_name: record.team_name.map(String::from),
        })
    }
}

/// Maps rows to DTOs one-to-one, keeping their order.
pub fn assemble(rows: Vec<MemberRecord>) -> ServiceResult<Vec<MemberTeamDto>> {
    rows.into_iter().map(MemberTeamDto::try_from).collect()
}
