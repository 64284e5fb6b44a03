//! Unpaged execution of member searches.

use crate::domain::member::MemberRecord;
use crate::domain::search::{Predicate, SortOrder};
use crate::repository::MemberReader;
use crate::services::ServiceResult;

/// Runs the member LEFT JOIN team query with `predicate` and `ordering` and
/// returns every matching row. Store failures are returned unchanged.
pub fn execute<R>(
    repo: &R,
    predicate: &Predicate,
    ordering: &[SortOrder],
) -> ServiceResult<Vec<MemberRecord>>
where
    R: MemberReader + ?Sized,
{
    let rows = repo.search_members(predicate, ordering, None)?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::SortField;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    #[test]
    fn execute_never_applies_a_window() {
        let mut repo = MockRepository::new();
        repo.expect_search_members()
            .withf(|predicate, ordering, window| {
                predicate.is_match_all()
                    && ordering.to_vec() == vec![SortOrder::asc(SortField::Age)]
                    && window.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));
        repo.expect_count_members().times(0);

        let rows = execute(
            &repo,
            &Predicate::match_all(),
            &[SortOrder::asc(SortField::Age)],
        )
        .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn execute_surfaces_store_errors() {
        let mut repo = MockRepository::new();
        repo.expect_search_members()
            .returning(|_, _, _| Err(RepositoryError::DatabaseError("locked".into())));

        let err = execute(&repo, &Predicate::match_all(), &[]).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::StoreUnavailable(RepositoryError::DatabaseError(_))
        ));
    }
}
