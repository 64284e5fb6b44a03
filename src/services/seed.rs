//! Sample data for local runs.

use crate::domain::member::NewMember;
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{Age, MemberName, TeamName};
use crate::repository::{MemberWriter, TeamReader, TeamWriter};
use crate::services::ServiceResult;

pub const SAMPLE_TEAMS: [&str; 2] = ["teamA", "teamB"];

fn find_or_create_team<R>(repo: &R, name: &str) -> ServiceResult<(Team, bool)>
where
    R: TeamReader + TeamWriter + ?Sized,
{
    let name = TeamName::new(name)?;
    if let Some(team) = repo.get_team_by_name(&name)? {
        return Ok((team, false));
    }
    Ok((repo.create_team(&NewTeam::new(name))?, true))
}

/// Creates `teamA`, `teamB` and `member_count` members alternating between
/// them, with `member{i}` aged `i`.
///
/// Members are only inserted when the teams did not exist yet, so running the
/// seed twice leaves the data unchanged. Returns the number of members
/// inserted.
pub fn seed_sample_data<R>(repo: &R, member_count: i32) -> ServiceResult<usize>
where
    R: TeamReader + TeamWriter + MemberWriter + ?Sized,
{
    let (team_a, created_a) = find_or_create_team(repo, SAMPLE_TEAMS[0])?;
    let (team_b, created_b) = find_or_create_team(repo, SAMPLE_TEAMS[1])?;

    if !created_a && !created_b {
        log::info!("Sample teams already present, skipping member seed");
        return Ok(0);
    }

    let members = (0..member_count)
        .map(|i| -> ServiceResult<NewMember> {
            let team = if i % 2 == 0 { &team_a } else { &team_b };
            Ok(NewMember::new(
                Some(MemberName::new(format!("member{i}"))?),
                Age::new(i)?,
                Some(team.id),
            ))
        })
        .collect::<ServiceResult<Vec<NewMember>>>()?;

    let inserted = repo.create_members(&members)?;
    log::info!("Seeded {inserted} member(s) into {} and {}", team_a.name, team_b.name);

    Ok(inserted)
}
