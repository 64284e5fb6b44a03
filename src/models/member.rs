use diesel::prelude::*;

use crate::domain::member::{MemberRecord, NewMember as DomainNewMember};
use crate::domain::types::{Age, MemberId, MemberName, TeamId, TeamName, TypeConstraintError};

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
/// Insertable form of a member row.
pub struct NewMember<'a> {
    pub name: Option<&'a str>,
    pub age: i32,
    pub team_id: Option<i32>,
}

/// Row of the member LEFT JOIN team projection.
///
/// Columns are selected as
/// `(members::id, members::name, members::age, members::team_id, teams::name.nullable())`.
#[derive(Debug, Clone, Queryable)]
pub struct MemberTeamRow {
    pub member_id: i32,
    pub name: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(member: &'a DomainNewMember) -> Self {
        Self {
            name: member.name.as_deref(),
            age: member.age.get(),
            team_id: member.team_id.map(TeamId::get),
        }
    }
}

impl TryFrom<MemberTeamRow> for MemberRecord {
    type Error = TypeConstraintError;

    fn try_from(row: MemberTeamRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MemberId::new(row.member_id)?,
            name: row.name.map(MemberName::new).transpose()?,
            age: Age::new(row.age)?,
            team_id: row.team_id.map(TeamId::new).transpose()?,
            team_name: row.team_name.map(TeamName::new).transpose()?,
        })
    }
}
