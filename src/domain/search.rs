//! Search criteria, predicates and ordering for member lookups.
//!
//! A [`MemberSearchCondition`] is the sparse set of filters supplied by the
//! caller. [`Predicate::from_condition`] turns it into a conjunction of
//! [`Clause`]s, emitting one clause per present field and nothing for absent
//! ones. Ordering is expressed as a list of [`SortOrder`]s which storage
//! backends translate into their own ORDER BY.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::types::{Age, MemberName, TeamName, TypeConstraintError};

/// Optional search criteria for members.
///
/// Every field is independent; `None` means "do not filter on this column".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberSearchCondition {
    pub name: Option<MemberName>,
    pub team_name: Option<TeamName>,
    pub age_from: Option<Age>,
    pub age_to: Option<Age>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: MemberName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn team_name(mut self, team_name: TeamName) -> Self {
        self.team_name = Some(team_name);
        self
    }

    pub fn age_from(mut self, age: Age) -> Self {
        self.age_from = Some(age);
        self
    }

    pub fn age_to(mut self, age: Age) -> Self {
        self.age_to = Some(age);
        self
    }

    /// Builds the conjunction predicate for this condition.
    pub fn to_predicate(&self) -> Predicate {
        Predicate::from_condition(self)
    }
}

/// Single filter applied to the member/team join.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Clause {
    /// `member.name = value`
    NameEq(MemberName),
    /// `team.name = value`
    TeamNameEq(TeamName),
    /// `member.age >= value`
    AgeGoe(Age),
    /// `member.age <= value`
    AgeLoe(Age),
}

/// Logical AND over zero or more clauses. An empty predicate matches every
/// member.
///
/// Clauses are kept in a set, so two predicates built from the same condition
/// compare equal regardless of the order the clauses were added in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Predicate {
    clauses: BTreeSet<Clause>,
}

impl Predicate {
    /// Predicate matching every member.
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn from_condition(condition: &MemberSearchCondition) -> Self {
        let clauses = [
            condition.name.clone().map(Clause::NameEq),
            condition.team_name.clone().map(Clause::TeamNameEq),
            condition.age_from.map(Clause::AgeGoe),
            condition.age_to.map(Clause::AgeLoe),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self { clauses }
    }

    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.insert(clause);
        self
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Column of the member/team join that results can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SortField {
    Id,
    Name,
    Age,
    TeamName,
}

impl SortField {
    /// Whether the column can hold NULL in the joined result.
    pub fn is_nullable(self) -> bool {
        matches!(self, SortField::Name | SortField::TeamName)
    }
}

impl FromStr for SortField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(SortField::Id),
            "name" | "username" => Ok(SortField::Name),
            "age" => Ok(SortField::Age),
            "teamName" | "team_name" => Ok(SortField::TeamName),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort field `{other}`"
            ))),
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Age => "age",
            SortField::TeamName => "teamName",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort direction `{other}`"
            ))),
        }
    }
}

/// Where NULL values of a nullable column are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum NullsPlacement {
    /// Last when ascending, first when descending.
    #[default]
    Default,
    First,
    Last,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
    pub nulls: NullsPlacement,
}

impl SortOrder {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
            nulls: NullsPlacement::Default,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
            nulls: NullsPlacement::Default,
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = NullsPlacement::First;
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = NullsPlacement::Last;
        self
    }

    /// Resolves [`NullsPlacement::Default`] against the sort direction.
    ///
    /// Returns `None` for columns that can never be NULL.
    pub fn effective_nulls(&self) -> Option<NullsPlacement> {
        if !self.field.is_nullable() {
            return None;
        }
        Some(match (self.nulls, self.direction) {
            (NullsPlacement::Default, SortDirection::Asc) => NullsPlacement::Last,
            (NullsPlacement::Default, SortDirection::Desc) => NullsPlacement::First,
            (explicit, _) => explicit,
        })
    }
}

impl FromStr for SortOrder {
    type Err = TypeConstraintError;

    /// Parses `field` or `field,direction`, e.g. `name,desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let field = parts.next().unwrap_or_default().parse::<SortField>()?;
        let direction = match parts.next() {
            Some(direction) => direction.parse::<SortDirection>()?,
            None => SortDirection::Asc,
        };
        Ok(Self {
            field,
            direction,
            nulls: NullsPlacement::Default,
        })
    }
}

/// Appends `id ASC` unless the ordering already sorts by id, making the order
/// total so offset paging never skips or repeats rows.
pub fn with_tie_breaker(ordering: &[SortOrder]) -> Vec<SortOrder> {
    let mut total = ordering.to_vec();
    if !total.iter().any(|order| order.field == SortField::Id) {
        total.push(SortOrder::asc(SortField::Id));
    }
    total
}
