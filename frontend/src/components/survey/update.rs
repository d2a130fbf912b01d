//! Update function for the survey form component.
//!
//! Elm-style: receives the current `SurveyFormComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Field edits update the state directly; the comment is truncated to 500
//!   characters as it is typed.
//! - `Submit` runs the shared validation first. A failure discards the
//!   partial input, restores the defaults and shows the inline error; no
//!   request is made.
//! - A valid submission POSTs the answers and blocks the form until the
//!   backend answers; the confirmation or error text is surfaced via toast.

use common::model::response::{truncate_comment, ValidationError, MAX_SCORE};
use common::model::sector::Sector;
use common::requests::SubmitResponseRequest;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::SurveyFormComponent;

pub fn update(
    component: &mut SurveyFormComponent,
    ctx: &Context<SurveyFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateName(name) => {
            component.name = name;
            component.error = None;
            true
        }
        Msg::UpdateSector(label) => {
            if let Some(sector) = Sector::from_label(&label) {
                component.sector = sector;
            }
            true
        }
        Msg::UpdateNps(value) => {
            component.nps = value.min(MAX_SCORE);
            true
        }
        Msg::UpdateMetric(metric, value) => {
            component.metrics.set(metric, value.min(MAX_SCORE));
            true
        }
        Msg::UpdateComment(text) => {
            component.comment = truncate_comment(&text).to_string();
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }

            let schema = ctx.props().schema;
            let answers = component.answers(schema);

            if let Err(err) = answers.validate(schema) {
                let message = form_error_message(&err);
                show_toast(&message);
                // Partial input is discarded, the user re-starts from the
                // default values.
                component.reset();
                component.error = Some(message);
                return true;
            }

            component.submitting = true;
            component.error = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = submit_answers(SubmitResponseRequest { answers }).await;
                link.send_message(Msg::SubmitFinished(outcome));
            });
            true
        }
        Msg::SubmitFinished(outcome) => {
            component.submitting = false;
            match outcome {
                Ok(message) => {
                    component.reset();
                    show_toast(&message);
                }
                Err(message) => {
                    show_toast(&format!("Erro ao enviar resposta: {}", message));
                    component.error = Some(message);
                }
            }
            true
        }
    }
}

async fn submit_answers(request: SubmitResponseRequest) -> Result<String, String> {
    let response = Request::post("/api/responses/submit")
        .json(&request)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    let body = response.text().await.unwrap_or_default();
    if response.status() == 200 {
        Ok(body)
    } else {
        Err(body)
    }
}

/// Maps the shared validation error to the message shown on the form.
fn form_error_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingRequiredField { field } if *field == "name" => {
            "Por favor, preencha o campo de identificação (Nome ou Empresa).".to_string()
        }
        other => other.to_string(),
    }
}
