//! Member search workflows behind the `/api/v*/members` endpoints.

use crate::dto::api::{JsonResult, PageDto};
use crate::dto::member::{MemberTeamDto, assemble};
use crate::forms::member::{MemberSearchPayload, SearchMembersForm};
use crate::pagination::{PageLimits, PaginationMode, paginate};
use crate::repository::MemberReader;
use crate::services::{ServiceResult, query};

/// Returns every member matching the form's filters, without paging.
pub fn search_members<R>(
    repo: &R,
    form: &SearchMembersForm,
) -> ServiceResult<JsonResult<Vec<MemberTeamDto>>>
where
    R: MemberReader + ?Sized,
{
    let payload = MemberSearchPayload::try_from(form)?;
    let predicate = payload.condition.to_predicate();

    let rows = query::execute(repo, &predicate, &payload.ordering)?;
    let members = assemble(rows)?;

    Ok(JsonResult {
        count: members.len() as i64,
        data: members,
    })
}

/// Returns one page of members matching the form's filters.
///
/// All parameters are validated before the store is queried.
pub fn search_members_page<R>(
    repo: &R,
    form: &SearchMembersForm,
    limits: &PageLimits,
    mode: PaginationMode,
) -> ServiceResult<JsonResult<PageDto<MemberTeamDto>>>
where
    R: MemberReader + ?Sized,
{
    let payload = MemberSearchPayload::try_from(form)?;
    let request = form.page_request(limits)?;
    let predicate = payload.condition.to_predicate();

    let page = paginate(repo, &predicate, &payload.ordering, request, mode)?;
    let page = page.try_map(assemble)?;

    Ok(JsonResult {
        count: page.limit,
        data: PageDto::from(page),
    })
}
