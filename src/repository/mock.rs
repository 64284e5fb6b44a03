//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::member::{MemberRecord, NewMember};
use crate::domain::search::{Predicate, SortOrder};
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::TeamName;
use crate::repository::errors::RepositoryResult;
use crate::repository::{MemberReader, MemberWriter, TeamReader, TeamWriter, Window};

mock! {
    pub Repository {}

    impl MemberReader for Repository {
        fn search_members(
            &self,
            predicate: &Predicate,
            ordering: &[SortOrder],
            window: Option<Window>,
        ) -> RepositoryResult<Vec<MemberRecord>>;
        fn count_members(&self, predicate: &Predicate) -> RepositoryResult<i64>;
    }

    impl MemberWriter for Repository {
        fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize>;
    }

    impl TeamReader for Repository {
        fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }
}
