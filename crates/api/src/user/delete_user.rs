use crate::error::ParloError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use futures::future::join_all;
use parlo_api_structs::delete_user::*;
use parlo_domain::{User, ID};
use parlo_infra::ParloContext;

pub async fn delete_user_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<ParloContext>,
) -> Result<HttpResponse, ParloError> {
    let usecase = DeleteUserUseCase {
        user_id: path.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.user)))
        .map_err(|e| match e {
            UseCaseErrors::UserNotFound => ParloError::NotFound(format!(
                "A user with id: {}, was not found.",
                path.user_id
            )),
        })
}

#[derive(Debug)]
struct DeleteUserUseCase {
    user_id: ID,
}

#[derive(Debug)]
struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
enum UseCaseErrors {
    UserNotFound,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteUserUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "DeleteUser";

    async fn execute(&mut self, ctx: &ParloContext) -> Result<Self::Response, Self::Errors> {
        let user = match ctx.repos.users.delete(&self.user_id).await {
            Some(user) => user,
            None => return Err(UseCaseErrors::UserNotFound),
        };

        // The user's assignments and completion log go with the user
        let _ = join_all(vec![
            ctx.repos.assignments.delete_by_user(&user.id),
            ctx.repos.completion_events.delete_by_user(&user.id),
        ])
        .await;

        Ok(UseCaseRes { user })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use parlo_domain::Assignment;

    #[actix_web::main]
    #[test]
    async fn deleting_a_user_also_deletes_their_assignments() {
        let ctx = parlo_infra::ParloContext::create_inmemory();
        let user = User::new("Ada", "Lovelace");
        ctx.repos.users.insert(&user).await.unwrap();
        let assignment = Assignment::new(user.id.clone(), Default::default(), "Vowel drills");
        ctx.repos.assignments.insert(&assignment).await.unwrap();

        let usecase = DeleteUserUseCase {
            user_id: user.id.clone(),
        };
        assert!(execute(usecase, &ctx).await.is_ok());

        assert!(ctx.repos.users.find(&user.id).await.is_none());
        assert!(ctx.repos.assignments.find_by_user(&user.id).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn deleting_an_unknown_user_is_not_found() {
        let ctx = parlo_infra::ParloContext::create_inmemory();
        let usecase = DeleteUserUseCase {
            user_id: Default::default(),
        };
        assert!(execute(usecase, &ctx).await.is_err());
    }
}
