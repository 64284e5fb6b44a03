use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::forms::member::SearchMembersForm;
use crate::pagination::{PageLimits, PaginationMode};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::{ServiceError, members as members_service};

fn parse_form(req: &HttpRequest) -> Result<SearchMembersForm, HttpResponse> {
    SearchMembersForm::parse(req.query_string())
        .map_err(|err| error_response("Failed to parse query", ServiceError::from(err)))
}

#[get("/v1/members")]
pub async fn search_members_v1(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let form = match parse_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match members_service::search_members(repo.get_ref(), &form) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => error_response("Failed to search members", err),
    }
}

async fn search_members_paged(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    limits: web::Data<PageLimits>,
    mode: PaginationMode,
) -> HttpResponse {
    let form = match parse_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match members_service::search_members_page(repo.get_ref(), &form, limits.get_ref(), mode) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => error_response("Failed to load members page", err),
    }
}

#[get("/v2/members")]
pub async fn search_members_v2(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    limits: web::Data<PageLimits>,
) -> impl Responder {
    search_members_paged(req, repo, limits, PaginationMode::Simple).await
}

#[get("/v3/members")]
pub async fn search_members_v3(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    limits: web::Data<PageLimits>,
) -> impl Responder {
    search_members_paged(req, repo, limits, PaginationMode::Optimized).await
}
