use crate::sheets::appender::{append_response, SubmitError};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::SubmitResponseRequest;
use log::error;

/// HTTP handler wrapper that converts the pipeline result to an `HttpResponse`.
///
/// - Valid submission: `200 OK` with the confirmation message.
/// - Validation failure: `400 Bad Request`, no store call was made.
/// - Store failure: `503 Service Unavailable` with the cause text.
pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<SubmitResponseRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    match append_response(
        state.store.as_ref(),
        &state.worksheet,
        state.schema,
        request.answers,
    ) {
        Ok(record) => HttpResponse::Ok().body(confirmation(record.answers.name.as_deref())),
        Err(SubmitError::Validation(e)) => HttpResponse::BadRequest().body(e.to_string()),
        Err(SubmitError::Append(e)) => {
            error!("falha ao registrar resposta: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Erro técnico: {}", e))
        }
    }
}

fn confirmation(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!(
            "Obrigado, {}! Sua resposta foi registrada com sucesso.",
            name.trim()
        ),
        _ => "Obrigado! Sua resposta foi registrada com sucesso.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::responses::configure_routes;
    use crate::sheets::store::testing::RecordingStore;
    use crate::sheets::store::TableStore;
    use actix_web::{test, App};
    use common::model::response::SurveyAnswers;
    use common::model::schema::SchemaVersion;
    use common::model::sector::Sector;
    use std::sync::Arc;

    fn state_with(store: Arc<RecordingStore>, schema: SchemaVersion) -> AppState {
        AppState {
            store: store as Arc<dyn TableStore>,
            worksheet: "respostas".to_string(),
            schema,
        }
    }

    fn request_body(name: Option<&str>, nps: u8) -> SubmitResponseRequest {
        SubmitResponseRequest {
            answers: SurveyAnswers {
                name: name.map(str::to_string),
                sector: Some(Sector::Fiscal),
                nps,
                metrics: None,
                comment: "Ótimo atendimento".to_string(),
            },
        }
    }

    #[actix_web::test]
    async fn valid_submission_is_confirmed_and_appended() {
        let store = Arc::new(RecordingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(store.clone(), SchemaVersion::V1)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/responses/submit")
            .set_json(request_body(Some("João Silva"), 9))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Obrigado, João Silva!"), "{}", body);

        assert_eq!(store.append_count(), 1);
        let appends = store.appends.lock().unwrap();
        assert_eq!(
            &appends[0].row[1..],
            [
                "João Silva",
                "Fiscal",
                "9",
                "Ótimo atendimento",
                "streamlit_app",
                "v1"
            ]
        );
    }

    #[actix_web::test]
    async fn missing_name_is_rejected_without_touching_the_store() {
        let store = Arc::new(RecordingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(store.clone(), SchemaVersion::V1)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/responses/submit")
            .set_json(request_body(None, 10))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        assert_eq!(store.append_count(), 0);
    }

    #[actix_web::test]
    async fn out_of_range_score_is_rejected() {
        let store = Arc::new(RecordingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(store.clone(), SchemaVersion::V1)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/responses/submit")
            .set_json(request_body(Some("João Silva"), 11))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        assert_eq!(store.append_count(), 0);
    }

    #[actix_web::test]
    async fn store_failure_surfaces_the_cause_text() {
        let store = Arc::new(RecordingStore::failing("worksheet not found"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(store, SchemaVersion::V1)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/responses/submit")
            .set_json(request_body(Some("João Silva"), 9))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 503);
        let body = test::read_body(resp).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Erro técnico"), "{}", body);
        assert!(body.contains("worksheet not found"), "{}", body);
    }

    #[actix_web::test]
    async fn minimal_schema_accepts_anonymous_submissions() {
        let store = Arc::new(RecordingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(
                    store.clone(),
                    SchemaVersion::Minimal,
                )))
                .service(configure_routes()),
        )
        .await;

        let mut body = request_body(None, 7);
        body.answers.sector = None;
        body.answers.comment = String::new();
        let req = test::TestRequest::post()
            .uri("/api/responses/submit")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let appends = store.appends.lock().unwrap();
        assert_eq!(appends[0].row.len(), 5);
        assert_eq!(&appends[0].row[1..], ["7", "", "streamlit_app", "v1"]);
    }

    #[actix_web::test]
    async fn schema_endpoint_reports_the_active_version() {
        let store = Arc::new(RecordingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(store, SchemaVersion::V2)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/responses/schema")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let info: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(info["schema"], "v2");
        assert_eq!(info["columns"].as_array().unwrap().len(), 12);
    }
}
