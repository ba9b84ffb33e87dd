use crate::error::ParloError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use parlo_api_structs::get_user_assignments::*;
use parlo_domain::{Assignment, ID};
use parlo_infra::ParloContext;

pub async fn get_user_assignments_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<ParloContext>,
) -> Result<HttpResponse, ParloError> {
    let usecase = GetUserAssignmentsUseCase {
        user_id: path.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.assignments)))
        .map_err(|e| match e {})
}

#[derive(Debug)]
pub struct GetUserAssignmentsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub assignments: Vec<Assignment>,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserAssignmentsUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetUserAssignments";

    async fn execute(&mut self, ctx: &ParloContext) -> Result<Self::Response, Self::Errors> {
        let assignments = ctx.repos.assignments.find_by_user(&self.user_id).await;

        Ok(UseCaseRes { assignments })
    }
}
