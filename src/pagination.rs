//! Offset/limit pagination over member searches.
//!
//! [`paginate`] runs the data query first and, depending on
//! [`PaginationMode`], either always follows up with a count query or only
//! when the page size alone cannot prove the page is the last one.

use serde::Serialize;

use crate::domain::member::MemberRecord;
use crate::domain::search::{Predicate, SortOrder};
use crate::repository::{MemberReader, Window};
use crate::services::{ServiceError, ServiceResult};

/// Validated offset/limit pair. `limit` is always positive, `offset` never
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: i64,
    limit: i64,
}

impl PageRequest {
    pub fn new(offset: i64, limit: i64) -> ServiceResult<Self> {
        if offset < 0 {
            return Err(ServiceError::InvalidParameter(format!(
                "offset must not be negative, got {offset}"
            )));
        }
        if limit <= 0 {
            return Err(ServiceError::InvalidParameter(format!(
                "limit must be greater than zero, got {limit}"
            )));
        }
        Ok(Self { offset, limit })
    }

    /// Zero-based page number and page size.
    pub fn of_page(page: i64, size: i64) -> ServiceResult<Self> {
        if page < 0 {
            return Err(ServiceError::InvalidParameter(format!(
                "page must not be negative, got {page}"
            )));
        }
        let offset = page.checked_mul(size).ok_or_else(|| {
            ServiceError::InvalidParameter(format!("page {page} of size {size} is out of range"))
        })?;
        Self::new(offset, size)
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn window(&self) -> Window {
        Window::new(self.offset, self.limit)
    }
}

/// Page size bounds applied to incoming requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: i64,
    pub max_size: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 2000,
        }
    }
}

/// How the total number of matching rows is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// Data query plus an unconditional count query.
    Simple,
    /// Count query only when the returned rows do not prove this is the last
    /// page.
    Optimized,
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of rows matching the predicate, counted or derived.
    pub total_count: i64,
    pub offset: i64,
    pub limit: i64,
}

impl<T> Page<T> {
    /// Zero-based page number the offset falls into.
    pub fn number(&self) -> i64 {
        self.offset / self.limit
    }

    pub fn total_pages(&self) -> i64 {
        (self.total_count + self.limit - 1) / self.limit
    }

    pub fn try_map<U, E, F>(self, f: F) -> Result<Page<U>, E>
    where
        F: FnOnce(Vec<T>) -> Result<Vec<U>, E>,
    {
        Ok(Page {
            items: f(self.items)?,
            total_count: self.total_count,
            offset: self.offset,
            limit: self.limit,
        })
    }
}

/// Derives the total from the data query alone when possible.
///
/// A short page proves the end of the result set, but an empty page past the
/// first offset says nothing about where the data ends.
fn derived_total(request: &PageRequest, rows: usize) -> Option<i64> {
    let rows = rows as i64;
    if rows >= request.limit() {
        return None;
    }
    if rows == 0 && request.offset() > 0 {
        return None;
    }
    Some(request.offset() + rows)
}

/// Loads one page of members matching `predicate`.
///
/// The data query always runs first. The count query, when issued, runs
/// afterwards because the decision depends on the number of rows returned.
pub fn paginate<R>(
    repo: &R,
    predicate: &Predicate,
    ordering: &[SortOrder],
    request: PageRequest,
    mode: PaginationMode,
) -> ServiceResult<Page<MemberRecord>>
where
    R: MemberReader + ?Sized,
{
    let items = repo.search_members(predicate, ordering, Some(request.window()))?;

    let total_count = match mode {
        PaginationMode::Simple => repo.count_members(predicate)?,
        PaginationMode::Optimized => match derived_total(&request, items.len()) {
            Some(total) => {
                log::debug!(
                    "Count query elided: {} row(s) at offset {}",
                    items.len(),
                    request.offset()
                );
                total
            }
            None => {
                log::debug!("Full or empty page at offset {}, counting", request.offset());
                repo.count_members(predicate)?
            }
        },
    };

    Ok(Page {
        items,
        total_count,
        offset: request.offset(),
        limit: request.limit(),
    })
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::search::SortField;
    use crate::domain::types::{Age, MemberId, MemberName, TeamId, TeamName};
    use crate::repository::mock::MockRepository;

    fn record(id: i32) -> MemberRecord {
        MemberRecord {
            id: MemberId::new(id).unwrap(),
            name: Some(MemberName::new(format!("member{id}")).unwrap()),
            age: Age::new(id * 10).unwrap(),
            team_id: Some(TeamId::new(1).unwrap()),
            team_name: Some(TeamName::new("teamA").unwrap()),
        }
    }

    fn records(ids: &[i32]) -> Vec<MemberRecord> {
        ids.iter().copied().map(record).collect()
    }

    fn ordering() -> Vec<SortOrder> {
        vec![SortOrder::desc(SortField::Name)]
    }

    #[test]
    fn page_request_rejects_invalid_bounds() {
        assert!(matches!(
            PageRequest::new(0, 0),
            Err(ServiceError::InvalidParameter(_))
        ));
        assert!(matches!(
            PageRequest::new(-1, 10),
            Err(ServiceError::InvalidParameter(_))
        ));
        assert!(matches!(
            PageRequest::new(0, -5),
            Err(ServiceError::InvalidParameter(_))
        ));
        assert!(matches!(
            PageRequest::of_page(i64::MAX, 2),
            Err(ServiceError::InvalidParameter(_))
        ));
        assert_eq!(PageRequest::of_page(3, 20).unwrap().offset(), 60);
    }

    #[test]
    fn simple_mode_always_counts() {
        let mut repo = MockRepository::new();
        repo.expect_search_members()
            .withf(|_, _, window| *window == Some(Window::new(3, 2)))
            .times(1)
            .returning(|_, _, _| Ok(records(&[1])));
        repo.expect_count_members().times(1).returning(|_| Ok(4));

        let page = paginate(
            &repo,
            &Predicate::match_all(),
            &ordering(),
            PageRequest::new(3, 2).unwrap(),
            PaginationMode::Simple,
        )
        .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn optimized_mode_counts_when_page_is_full() {
        let mut repo = MockRepository::new();
        repo.expect_search_members()
            .times(1)
            .returning(|_, _, _| Ok(records(&[4, 3])));
        repo.expect_count_members()
            .with(eq(Predicate::match_all()))
            .times(1)
            .returning(|_| Ok(4));

        let page = paginate(
            &repo,
            &Predicate::match_all(),
            &ordering(),
            PageRequest::new(0, 2).unwrap(),
            PaginationMode::Optimized,
        )
        .unwrap();

        assert_eq!(page.items, records(&[4, 3]));
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn optimized_mode_counts_on_exactly_full_last_page() {
        let mut repo = MockRepository::new();
        repo.expect_search_members()
            .times(1)
            .returning(|_, _, _| Ok(records(&[2, 1])));
        repo.expect_count_members().times(1).returning(|_| Ok(4));

        let page = paginate(
            &repo,
            &Predicate::match_all(),
            &ordering(),
            PageRequest::new(2, 2).unwrap(),
            PaginationMode::Optimized,
        )
        .unwrap();

        assert_eq!(page.items, records(&[2, 1]));
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn optimized_mode_elides_count_on_short_page() {
        let mut repo = MockRepository::new();
        repo.expect_search_members()
            .times(1)
            .returning(|_, _, _| Ok(records(&[1])));
        repo.expect_count_members().times(0);

        let page = paginate(
            &repo,
            &Predicate::match_all(),
            &ordering(),
            PageRequest::new(3, 2).unwrap(),
            PaginationMode::Optimized,
        )
        .unwrap();

        assert_eq!(page.items, records(&[1]));
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn optimized_mode_elides_count_for_empty_first_page() {
        let mut repo = MockRepository::new();
        repo.expect_search_members()
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));
        repo.expect_count_members().times(0);

        let page = paginate(
            &repo,
            &Predicate::match_all(),
            &ordering(),
            PageRequest::new(0, 10).unwrap(),
            PaginationMode::Optimized,
        )
        .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn optimized_mode_counts_when_offset_is_past_the_end() {
        let mut repo = MockRepository::new();
        repo.expect_search_members()
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));
        repo.expect_count_members().times(1).returning(|_| Ok(4));

        let page = paginate(
            &repo,
            &Predicate::match_all(),
            &ordering(),
            PageRequest::new(10, 2).unwrap(),
            PaginationMode::Optimized,
        )
        .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn store_failure_is_propagated_without_count() {
        use crate::repository::errors::RepositoryError;

        let mut repo = MockRepository::new();
        repo.expect_search_members()
            .times(1)
            .returning(|_, _, _| Err(RepositoryError::ConnectionError("down".into())));
        repo.expect_count_members().times(0);

        let result = paginate(
            &repo,
            &Predicate::match_all(),
            &ordering(),
            PageRequest::new(0, 2).unwrap(),
            PaginationMode::Simple,
        );

        assert!(matches!(
            result,
            Err(ServiceError::StoreUnavailable(RepositoryError::ConnectionError(_)))
        ));
    }

    #[test]
    fn page_reports_number_and_total_pages() {
        let page: Page<MemberRecord> = Page {
            items: records(&[1]),
            total_count: 5,
            offset: 4,
            limit: 2,
        };
        assert_eq!(page.number(), 2);
        assert_eq!(page.total_pages(), 3);
    }
}
