//! Storage traits consumed by the services and their Diesel implementation.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        member::{MemberRecord, NewMember},
        search::{Predicate, SortOrder},
        team::{NewTeam, Team},
        types::TeamName,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod member;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod team;

/// Offset/limit window applied to a data query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: i64,
    pub limit: i64,
}

impl Window {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }
}

/// Read access to the member LEFT JOIN team projection.
pub trait MemberReader {
    /// Loads the members matching `predicate`, sorted by `ordering`, optionally
    /// restricted to `window`. Members without a team are included.
    fn search_members(
        &self,
        predicate: &Predicate,
        ordering: &[SortOrder],
        window: Option<Window>,
    ) -> RepositoryResult<Vec<MemberRecord>>;

    /// Counts the members matching `predicate` over the same join.
    fn count_members(&self, predicate: &Predicate) -> RepositoryResult<i64>;
}

pub trait MemberWriter {
    fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize>;
}

pub trait TeamReader {
    fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
