//! HTTP endpoint handlers

use std::{collections::HashMap, sync::Arc};
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    error::{AppError, ExamError, TimerError},
    exam::Choice,
    state::AppState,
};
use super::responses::{
    AnswersRequest, ApiResponse, ErrorResponse, HealthResponse, QuestionsResponse,
    ResultResponse, StatusResponse, TimerResponse,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map an application error onto a status code and log it
fn api_error(e: AppError) -> ApiError {
    let status = match &e {
        AppError::Timer(TimerError::AlreadyStarted)
        | AppError::Exam(ExamError::NotStarted)
        | AppError::Exam(ExamError::AlreadyStarted)
        | AppError::Exam(ExamError::AlreadySubmitted) => StatusCode::CONFLICT,
        AppError::Exam(ExamError::UnknownQuestion(_)) => StatusCode::BAD_REQUEST,
        AppError::Timer(_) | AppError::Exam(ExamError::Lock(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Request failed: {}", e);
    } else {
        warn!("Request rejected: {}", e);
    }
    (status, Json(ErrorResponse::new(e.to_string())))
}

/// Handle POST /exam/start - Start the exam and its countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, ApiError> {
    let exam = state.start_exam().map_err(api_error)?;
    info!("Start endpoint called - countdown running");
    Ok(Json(ApiResponse::ok("Exam started".to_string(), exam)))
}

/// Handle GET /exam/questions - Questions without their answers
pub async fn questions_handler(State(state): State<Arc<AppState>>) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: state.bank.views(),
    })
}

/// Handle POST /exam/answers - Save draft answers
pub async fn answers_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnswersRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let exam = state.record_answers(&request.answers).map_err(api_error)?;
    Ok(Json(ApiResponse::ok(
        format!("Saved {} answers", request.answers.len()),
        exam,
    )))
}

/// Final answers sent along with a submission
///
/// An empty body submits the saved draft as is. Anything else must be a
/// valid JSON answers object, otherwise nothing is submitted.
fn final_answers(headers: &HeaderMap, body: &[u8]) -> Result<Option<HashMap<u32, Choice>>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with("application/json"));
    if !is_json {
        warn!("Submission rejected: body without a JSON content type");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Expected request with `Content-Type: application/json`".to_string())),
        ));
    }

    match Json::<AnswersRequest>::from_bytes(body) {
        Ok(Json(request)) => Ok(Some(request.answers)),
        Err(rejection) => {
            warn!("Submission rejected: {}", rejection.body_text());
            Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(rejection.body_text()))))
        }
    }
}

/// Handle POST /exam/submit - Submit the exam and stop the countdown
pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ResultResponse>, ApiError> {
    let answers = final_answers(&headers, &body)?;
    state.submit_exam(answers.as_ref()).map_err(api_error)?;
    info!("Submit endpoint called - exam submitted");
    result_handler(State(state)).await
}

/// Handle GET /exam/timer - Current countdown display
pub async fn timer_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerResponse>, ApiError> {
    let timer = state.get_timer_state().map_err(api_error)?;
    Ok(Json(TimerResponse {
        display: state.get_display(),
        timer,
        notice: state.get_notice(),
    }))
}

/// Handle GET /exam/result - Result of the submitted exam
pub async fn result_handler(State(state): State<Arc<AppState>>) -> Result<Json<ResultResponse>, ApiError> {
    let exam = state.get_exam_state().map_err(api_error)?;
    match exam.result {
        Some(result) => Ok(Json(ResultResponse {
            result,
            submitted_by: exam.submitted_by,
            submitted_at: exam.submitted_at,
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("No result available yet".to_string())),
        )),
    }
}

/// Handle GET /status - Return current server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, ApiError> {
    let exam = state.get_exam_state().map_err(api_error)?;
    let timer = state.get_timer_state().map_err(api_error)?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        exam_status: exam.status,
        question_count: state.bank.len(),
        timer,
        display: state.get_display(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
