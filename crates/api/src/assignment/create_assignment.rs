use crate::error::ParloError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use parlo_api_structs::create_assignment::*;
use parlo_domain::{Assignment, WeekdayTag, ID};
use parlo_infra::ParloContext;

fn handle_error(e: UseCaseErrors) -> ParloError {
    match e {
        UseCaseErrors::UserNotFound(user_id) => {
            ParloError::NotFound(format!("A user with id: {}, was not found.", user_id))
        }
        UseCaseErrors::AssignmentAlreadyExists => ParloError::Conflict(
            "That bundle is already assigned to the user. Update its schedule instead.".into(),
        ),
        UseCaseErrors::StorageError => ParloError::InternalError,
    }
}

pub async fn create_assignment_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ParloContext>,
) -> Result<HttpResponse, ParloError> {
    let body = body.0;
    let usecase = CreateAssignmentUseCase {
        user_id: path.user_id.clone(),
        bundle_id: path.bundle_id.clone(),
        title: body.title,
        schedule: body.schedule.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Created().json(APIResponse::new(usecase_res.assignment)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateAssignmentUseCase {
    pub user_id: ID,
    pub bundle_id: ID,
    pub title: String,
    pub schedule: Vec<WeekdayTag>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub assignment: Assignment,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    UserNotFound(ID),
    AssignmentAlreadyExists,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAssignmentUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateAssignment";

    async fn execute(&mut self, ctx: &ParloContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.users.find(&self.user_id).await.is_none() {
            return Err(UseCaseErrors::UserNotFound(self.user_id.clone()));
        }

        let existing = ctx
            .repos
            .assignments
            .find_by_user_and_bundle(&self.user_id, &self.bundle_id)
            .await;
        if existing.is_some() {
            return Err(UseCaseErrors::AssignmentAlreadyExists);
        }

        let mut assignment =
            Assignment::new(self.user_id.clone(), self.bundle_id.clone(), &self.title);
        assignment.set_schedule(&self.schedule);

        match ctx.repos.assignments.insert(&assignment).await {
            Ok(_) => Ok(UseCaseRes { assignment }),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
