use crate::error::ParloError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use parlo_api_structs::update_assignment::*;
use parlo_domain::{Assignment, WeekdayTag, ID};
use parlo_infra::ParloContext;

fn handle_error(e: UseCaseErrors) -> ParloError {
    match e {
        UseCaseErrors::AssignmentNotFound => {
            ParloError::NotFound("The bundle is not assigned to the user.".into())
        }
        UseCaseErrors::StorageError => ParloError::InternalError,
    }
}

pub async fn update_assignment_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ParloContext>,
) -> Result<HttpResponse, ParloError> {
    let usecase = UpdateAssignmentUseCase {
        user_id: path.user_id.clone(),
        bundle_id: path.bundle_id.clone(),
        schedule: body.0.schedule,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.assignment)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateAssignmentUseCase {
    pub user_id: ID,
    pub bundle_id: ID,
    pub schedule: Vec<WeekdayTag>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub assignment: Assignment,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    AssignmentNotFound,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateAssignmentUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "UpdateAssignment";

    async fn execute(&mut self, ctx: &ParloContext) -> Result<Self::Response, Self::Errors> {
        let mut assignment = match ctx
            .repos
            .assignments
            .find_by_user_and_bundle(&self.user_id, &self.bundle_id)
            .await
        {
            Some(assignment) => assignment,
            None => return Err(UseCaseErrors::AssignmentNotFound),
        };

        assignment.set_schedule(&self.schedule);

        match ctx.repos.assignments.save(&assignment).await {
            Ok(_) => Ok(UseCaseRes { assignment }),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
