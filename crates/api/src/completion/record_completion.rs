use crate::error::ParloError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use parlo_api_structs::record_completion::*;
use parlo_domain::{CompletionEvent, CompletionState, ID};
use parlo_infra::ParloContext;

fn handle_error(e: UseCaseErrors) -> ParloError {
    match e {
        UseCaseErrors::UserNotFound(user_id) => {
            ParloError::NotFound(format!("A user with id: {}, was not found.", user_id))
        }
        UseCaseErrors::FutureTimestamp => {
            ParloError::BadClientData("The provided timestamp is in the future".into())
        }
        UseCaseErrors::StorageError => ParloError::InternalError,
    }
}

pub async fn record_completion_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ParloContext>,
) -> Result<HttpResponse, ParloError> {
    let body = body.0;
    let usecase = RecordCompletionUseCase {
        user_id: path.user_id.clone(),
        bundle_id: path.bundle_id.clone(),
        state: body.state,
        step_reached: body.step_reached,
        timestamp: body.timestamp,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Created().json(APIResponse::new(usecase_res.event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct RecordCompletionUseCase {
    pub user_id: ID,
    pub bundle_id: ID,
    pub state: CompletionState,
    pub step_reached: i64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub event: CompletionEvent,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    UserNotFound(ID),
    FutureTimestamp,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for RecordCompletionUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "RecordCompletion";

    async fn execute(&mut self, ctx: &ParloContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.users.find(&self.user_id).await.is_none() {
            return Err(UseCaseErrors::UserNotFound(self.user_id.clone()));
        }

        // Clock-skewed clients could otherwise pre-cover days that have not
        // happened yet
        if self.timestamp > ctx.sys.now() {
            return Err(UseCaseErrors::FutureTimestamp);
        }

        let event = CompletionEvent::new(
            self.user_id.clone(),
            self.bundle_id.clone(),
            self.state,
            self.step_reached,
            self.timestamp,
        );

        match ctx.repos.completion_events.insert(&event).await {
            Ok(_) => Ok(UseCaseRes { event }),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
