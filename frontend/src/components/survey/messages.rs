use common::model::response::Metric;

pub enum Msg {
    UpdateName(String),
    UpdateSector(String),
    UpdateNps(u8),
    UpdateMetric(Metric, u8),
    UpdateComment(String),
    Submit,
    SubmitFinished(Result<String, String>),
}
