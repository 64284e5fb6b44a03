//! Query parameters of the member search endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::{
    domain::{
        search::{MemberSearchCondition, SortField, SortOrder},
        types::{Age, MemberName, TeamName},
    },
    forms::FormError,
    pagination::{PageLimits, PageRequest},
    services::ServiceResult,
};

/// Raw query string of `/api/v*/members`.
///
/// Blank text values are treated as absent filters.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchMembersForm {
    #[serde(default, alias = "username")]
    pub name: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default, alias = "ageGoe")]
    #[validate(range(min = 0))]
    pub age_from: Option<i32>,
    #[serde(default, alias = "ageLoe")]
    #[validate(range(min = 0))]
    pub age_to: Option<i32>,
    /// Zero-based page number.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub page: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub size: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<i64>,
    /// Repeated `sort=field[,asc|desc]` values.
    #[serde(default)]
    pub sort: Vec<String>,
}

/// Validated filter and ordering extracted from [`SearchMembersForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSearchPayload {
    pub condition: MemberSearchCondition,
    pub ordering: Vec<SortOrder>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl SearchMembersForm {
    /// Parses a raw query string such as `teamName=teamA&sort=age,desc`.
    pub fn parse(query_string: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query_string).map_err(|e| FormError::Malformed(e.to_string()))
    }

    /// Resolves `page`/`size` or `offset`/`limit` into a [`PageRequest`].
    pub fn page_request(&self, limits: &PageLimits) -> ServiceResult<PageRequest> {
        let size = match (self.size, self.limit) {
            (Some(_), Some(_)) => return Err(FormError::ConflictingPaging.into()),
            (size, limit) => size.or(limit).unwrap_or(limits.default_size),
        };

        if size > limits.max_size {
            return Err(FormError::PageSizeTooLarge {
                requested: size,
                max: limits.max_size,
            }
            .into());
        }

        match (self.page, self.offset) {
            (Some(_), Some(_)) => Err(FormError::ConflictingPaging.into()),
            (Some(page), None) => PageRequest::of_page(page, size),
            (None, offset) => PageRequest::new(offset.unwrap_or(0), size),
        }
    }
}

impl TryFrom<&SearchMembersForm> for MemberSearchPayload {
    type Error = FormError;

    fn try_from(form: &SearchMembersForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let mut condition = MemberSearchCondition::new();

        if let Some(name) = non_blank(&form.name) {
            condition = condition.name(MemberName::new(name).map_err(|_| FormError::InvalidName)?);
        }
        if let Some(team_name) = non_blank(&form.team_name) {
            condition = condition
                .team_name(TeamName::new(team_name).map_err(|_| FormError::InvalidTeamName)?);
        }
        if let Some(age_from) = form.age_from {
            condition = condition.age_from(
                Age::new(age_from).map_err(|e| FormError::Malformed(e.to_string()))?,
            );
        }
        if let Some(age_to) = form.age_to {
            condition = condition
                .age_to(Age::new(age_to).map_err(|e| FormError::Malformed(e.to_string()))?);
        }

        let mut ordering = form
            .sort
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(|value| {
                value
                    .parse::<SortOrder>()
                    .map_err(|e| FormError::InvalidSort(e.to_string()))
            })
            .collect::<Result<Vec<SortOrder>, FormError>>()?;

        if ordering.is_empty() {
            ordering.push(SortOrder::asc(SortField::Id));
        }

        Ok(Self {
            condition,
            ordering,
        })
    }
}
