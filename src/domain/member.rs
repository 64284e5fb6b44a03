use serde::{Deserialize, Serialize};

use crate::domain::types::{Age, MemberId, MemberName, TeamId, TeamName};

#[derive(Clone, Debug, Deserialize)]
pub struct NewMember {
    /// Legacy members may be stored without a name.
    pub name: Option<MemberName>,
    pub age: Age,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    #[must_use]
    pub fn new(name: Option<MemberName>, age: Age, team_id: Option<TeamId>) -> Self {
        Self { name, age, team_id }
    }
}

/// Read model produced by the member LEFT JOIN team query.
///
/// `team_id` and `team_name` are either both present or both absent. A row
/// carrying a team id without a team name means the team lookup failed and is
/// rejected when the record is assembled into an output DTO.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberRecord {
    pub id: MemberId,
    pub name: Option<MemberName>,
    pub age: Age,
    pub team_id: Option<TeamId>,
    pub team_name: Option<TeamName>,
}
