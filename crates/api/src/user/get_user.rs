use crate::error::ParloError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use parlo_api_structs::get_user::*;
use parlo_domain::{User, ID};
use parlo_infra::ParloContext;

fn handle_error(e: UseCaseErrors) -> ParloError {
    match e {
        UseCaseErrors::UserNotFound(user_id) => {
            ParloError::NotFound(format!("A user with id: {}, was not found.", user_id))
        }
    }
}

pub async fn get_user_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<ParloContext>,
) -> Result<HttpResponse, ParloError> {
    let usecase = GetUserUseCase {
        user_id: path.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.user)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetUserUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    UserNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetUser";

    async fn execute(&mut self, ctx: &ParloContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.users.find(&self.user_id).await {
            Some(user) => Ok(UseCaseRes { user }),
            None => Err(UseCaseErrors::UserNotFound(self.user_id.clone())),
        }
    }
}
