use crate::error::ParloError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use parlo_api_structs::get_weekly_reminders::*;
use parlo_domain::{due_reminders, week_start, ID};
use parlo_infra::ParloContext;

fn handle_error(e: UseCaseErrors) -> ParloError {
    match e {
        UseCaseErrors::UserNotFound(user_id) => {
            ParloError::NotFound(format!("A user with id: {}, was not found.", user_id))
        }
    }
}

pub async fn get_weekly_reminders_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<ParloContext>,
) -> Result<HttpResponse, ParloError> {
    let usecase = GetWeeklyRemindersUseCase {
        user_id: path.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let response: APIResponse = usecase_res.reminders;
            HttpResponse::Ok().json(response)
        })
        .map_err(handle_error)
}

/// Snapshot query for the bundles a user should be reminded about this week.
/// Pull-based: nothing is stored or scheduled, the due list is recomputed
/// from the assignments and this week's completion log on every call.
#[derive(Debug)]
pub struct GetWeeklyRemindersUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub reminders: Vec<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    UserNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetWeeklyRemindersUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetWeeklyReminders";

    async fn execute(&mut self, ctx: &ParloContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.users.find(&self.user_id).await.is_none() {
            return Err(UseCaseErrors::UserNotFound(self.user_id.clone()));
        }

        let now = ctx.sys.now();
        let assignments = ctx.repos.assignments.find_by_user(&self.user_id).await;
        let events = ctx
            .repos
            .completion_events
            .find_ended_by_user_in_window(&self.user_id, week_start(now), now)
            .await;

        let reminders = due_reminders(now.date_naive(), &assignments, &events);

        Ok(UseCaseRes { reminders })
    }
}
