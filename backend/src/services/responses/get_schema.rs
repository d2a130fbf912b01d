use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::SchemaInfoResponse;

pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(SchemaInfoResponse {
        schema: state.schema,
        columns: state
            .schema
            .columns()
            .iter()
            .map(|c| c.to_string())
            .collect(),
    })
}
