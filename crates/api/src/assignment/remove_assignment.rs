use crate::error::ParloError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use parlo_api_structs::remove_assignment::*;
use parlo_domain::{Assignment, ID};
use parlo_infra::ParloContext;

pub async fn remove_assignment_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<ParloContext>,
) -> Result<HttpResponse, ParloError> {
    let usecase = RemoveAssignmentUseCase {
        user_id: path.user_id.clone(),
        bundle_id: path.bundle_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.assignment)))
        .map_err(|e| match e {
            UseCaseErrors::AssignmentNotFound => {
                ParloError::NotFound("The bundle is not assigned to the user.".into())
            }
        })
}

#[derive(Debug)]
pub struct RemoveAssignmentUseCase {
    pub user_id: ID,
    pub bundle_id: ID,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub assignment: Assignment,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    AssignmentNotFound,
}

#[async_trait::async_trait(?Send)]
impl UseCase for RemoveAssignmentUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "RemoveAssignment";

    async fn execute(&mut self, ctx: &ParloContext) -> Result<Self::Response, Self::Errors> {
        match ctx
            .repos
            .assignments
            .delete(&self.user_id, &self.bundle_id)
            .await
        {
            Some(assignment) => Ok(UseCaseRes { assignment }),
            None => Err(UseCaseErrors::AssignmentNotFound),
        }
    }
}
