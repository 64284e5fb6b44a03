//! Repository implementation for members joined with their teams.

use diesel::dsl::{IntoBoxed, LeftJoin};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        member::{MemberRecord, NewMember},
        search::{
            Clause, NullsPlacement, Predicate, SortDirection, SortField, SortOrder,
            with_tie_breaker,
        },
    },
    models::member::{MemberTeamRow, NewMember as DbNewMember},
    repository::{
        DieselRepository, MemberReader, MemberWriter, Window,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{members, teams},
};

type MemberTeamQuery<'a> = IntoBoxed<'a, LeftJoin<members::table, teams::table>, Sqlite>;

/// Member LEFT JOIN team with every clause of `predicate` applied as a filter.
///
/// Absent filters add nothing to the WHERE clause.
fn filtered_query(predicate: &Predicate) -> MemberTeamQuery<'static> {
    let mut query = members::table
        .left_join(teams::table)
        .into_boxed::<Sqlite>();

    for clause in predicate.clauses() {
        query = match clause {
            Clause::NameEq(name) => query.filter(members::name.eq(name.as_str().to_owned())),
            Clause::TeamNameEq(team_name) => {
                query.filter(teams::name.nullable().eq(team_name.as_str().to_owned()))
            }
            Clause::AgeGoe(age) => query.filter(members::age.ge(age.get())),
            Clause::AgeLoe(age) => query.filter(members::age.le(age.get())),
        };
    }

    query
}

/// Appends one ORDER BY term, preceded by an `IS NULL` term for nullable
/// columns. SQLite sorts NULL first on ascending order, so placement is made
/// explicit.
fn then_order(query: MemberTeamQuery<'static>, order: SortOrder) -> MemberTeamQuery<'static> {
    let query = match (order.field, order.effective_nulls()) {
        (SortField::Name, Some(NullsPlacement::Last)) => {
            query.then_order_by(members::name.is_null().asc())
        }
        (SortField::Name, Some(NullsPlacement::First)) => {
            query.then_order_by(members::name.is_null().desc())
        }
        (SortField::TeamName, Some(NullsPlacement::Last)) => {
            query.then_order_by(teams::name.nullable().is_null().asc())
        }
        (SortField::TeamName, Some(NullsPlacement::First)) => {
            query.then_order_by(teams::name.nullable().is_null().desc())
        }
        _ => query,
    };

    match (order.field, order.direction) {
        (SortField::Id, SortDirection::Asc) => query.then_order_by(members::id.asc()),
        (SortField::Id, SortDirection::Desc) => query.then_order_by(members::id.desc()),
        (SortField::Name, SortDirection::Asc) => query.then_order_by(members::name.asc()),
        (SortField::Name, SortDirection::Desc) => query.then_order_by(members::name.desc()),
        (SortField::Age, SortDirection::Asc) => query.then_order_by(members::age.asc()),
        (SortField::Age, SortDirection::Desc) => query.then_order_by(members::age.desc()),
        (SortField::TeamName, SortDirection::Asc) => {
            query.then_order_by(teams::name.nullable().asc())
        }
        (SortField::TeamName, SortDirection::Desc) => {
            query.then_order_by(teams::name.nullable().desc())
        }
    }
}

impl MemberReader for DieselRepository {
    fn search_members(
        &self,
        predicate: &Predicate,
        ordering: &[SortOrder],
        window: Option<Window>,
    ) -> RepositoryResult<Vec<MemberRecord>> {
        let mut conn = self.conn()?;

        let mut items = filtered_query(predicate);
        for order in with_tie_breaker(ordering) {
            items = then_order(items, order);
        }

        if let Some(window) = window {
            items = items.offset(window.offset).limit(window.limit);
        }

        log::debug!(
            "Loading members with {} clause(s), window {window:?}",
            predicate.len()
        );

        let rows = items
            .select((
                members::id,
                members::name,
                members::age,
                members::team_id,
                teams::name.nullable(),
            ))
            .load::<MemberTeamRow>(&mut conn)?;

        rows.into_iter()
            .map(|row| MemberRecord::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn count_members(&self, predicate: &Predicate) -> RepositoryResult<i64> {
        let mut conn = self.conn()?;

        let total = filtered_query(predicate)
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total)
    }
}

impl MemberWriter for DieselRepository {
    fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let insertables: Vec<DbNewMember> = new_members.iter().map(Into::into).collect();
        let affected = diesel::insert_into(members::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
