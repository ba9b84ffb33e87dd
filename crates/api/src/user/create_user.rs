use crate::error::ParloError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use parlo_api_structs::create_user::*;
use parlo_domain::User;
use parlo_infra::ParloContext;

pub async fn create_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ParloContext>,
) -> Result<HttpResponse, ParloError> {
    let usecase = CreateUserUseCase {
        name: body.0.name,
        surname: body.0.surname,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Created().json(APIResponse::new(usecase_res.user)))
        .map_err(ParloError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub name: String,
    pub surname: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

impl From<UseCaseErrors> for ParloError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &ParloContext) -> Result<Self::Response, Self::Errors> {
        let user = User::new(&self.name, &self.surname);

        match ctx.repos.users.insert(&user).await {
            Ok(_) => Ok(UseCaseRes { user }),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
