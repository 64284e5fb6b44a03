#![allow(dead_code)]

use std::time::Duration;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use member_search::db::{ConnectionOptions, DbPool, establish_connection_pool_with};
use member_search::domain::member::NewMember;
use member_search::domain::team::NewTeam;
use member_search::domain::types::{Age, MemberName, TeamId, TeamName};
use member_search::repository::{DieselRepository, MemberWriter, TeamWriter};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database in a temporary directory, migrated and removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let options = ConnectionOptions {
            busy_timeout: Some(Duration::from_secs(5)),
            ..ConnectionOptions::default()
        };
        let pool = establish_connection_pool_with(path.to_str().expect("utf-8 path"), options)
            .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn new_member(name: Option<&str>, age: i32, team_id: Option<TeamId>) -> NewMember {
    NewMember::new(
        name.map(|n| MemberName::new(n).unwrap()),
        Age::new(age).unwrap(),
        team_id,
    )
}

/// teamA: member1 (10), member2 (20); teamB: member3 (30), member4 (40).
pub fn seed_reference_members(repo: &DieselRepository) -> (TeamId, TeamId) {
    let team_a = repo
        .create_team(&NewTeam::new(TeamName::new("teamA").unwrap()))
        .unwrap();
    let team_b = repo
        .create_team(&NewTeam::new(TeamName::new("teamB").unwrap()))
        .unwrap();

    repo.create_members(&[
        new_member(Some("member1"), 10, Some(team_a.id)),
        new_member(Some("member2"), 20, Some(team_a.id)),
        new_member(Some("member3"), 30, Some(team_b.id)),
        new_member(Some("member4"), 40, Some(team_b.id)),
    ])
    .unwrap();

    (team_a.id, team_b.id)
}
