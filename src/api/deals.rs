use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::api::AppState;
use crate::domain::{Deal, DealId};
use crate::error::AppError;
use crate::orchestration::{DealSummary, DealView};
use crate::report::export_csv;

fn parse_deal_id(raw: &str) -> Result<DealId, AppError> {
    let id = DealId::new(raw.trim());
    if id.is_blank() {
        return Err(AppError::BadRequest("Invalid deal id".to_string()));
    }
    Ok(id)
}

/// Attachment name for a deal report. Only `[A-Za-z0-9_-]` from the id are
/// kept so the header stays a valid quoted string.
fn report_filename(id: &DealId) -> String {
    let safe: String = id
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if safe.is_empty() {
        "relatorio.csv".to_string()
    } else {
        format!("relatorio_{}.csv", safe)
    }
}

pub async fn list_deals(State(state): State<AppState>) -> Result<Json<Vec<DealSummary>>, AppError> {
    Ok(Json(state.orchestrator.summaries().await?))
}

/// Save a deal and return it recomputed.
pub async fn save_deal(
    State(state): State<AppState>,
    Json(deal): Json<Deal>,
) -> Result<Json<DealView>, AppError> {
    Ok(Json(state.orchestrator.save_deal(deal).await?))
}

pub async fn get_deal(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Deal>, AppError> {
    let id = parse_deal_id(&id)?;
    Ok(Json(state.orchestrator.get_deal(&id).await?))
}

pub async fn delete_deal(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_deal_id(&id)?;
    state.orchestrator.delete_deal(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_projection(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DealView>, AppError> {
    let id = parse_deal_id(&id)?;
    Ok(Json(state.orchestrator.project_deal(&id).await?))
}

pub async fn get_report_csv(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_deal_id(&id)?;
    let view = state.orchestrator.project_deal(&id).await?;
    let body = export_csv(&view.deal, &view.projection)?;

    let disposition = format!("attachment; filename=\"{}\"", report_filename(&id));
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_filename_keeps_uuid_form() {
        let id = DealId::new("3f2b9c1e-8d4a-4f6b-9a51-0c2e7d1b5a90");
        assert_eq!(
            report_filename(&id),
            "relatorio_3f2b9c1e-8d4a-4f6b-9a51-0c2e7d1b5a90.csv"
        );
    }

    #[test]
    fn test_report_filename_strips_quotes_and_control_chars() {
        let id = DealId::new("a\"b\r\nc");
        assert_eq!(report_filename(&id), "relatorio_abc.csv");
        assert_eq!(report_filename(&DealId::new("\"\"")), "relatorio.csv");
    }

    #[test]
    fn test_parse_deal_id_trims_and_rejects_blank() {
        assert_eq!(parse_deal_id(" a1 ").unwrap(), DealId::new("a1"));
        assert!(matches!(parse_deal_id("  "), Err(AppError::BadRequest(_))));
    }
}
