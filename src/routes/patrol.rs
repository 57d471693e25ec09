//! Dashboard page and patrol submit routes.
//!
//! DESIGN
//! ======
//! The submit handler is the only place UI input turns into a broker message.
//! It validates the shape and sensitivity, builds the one wire payload, and
//! hands it to the publisher seam. Failures become status text for the UI
//! instead of propagating uncaught — broker and validation errors both come
//! back as a status string the page drops into its status line.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::{Deserialize, Serialize};

use crate::command::{CommandError, PatrolCommand, Sensitivity};
use crate::geometry::ShapeKind;
use crate::page;
use crate::publish::PublishError;
use crate::state::AppState;

/// Status line shown before any submit has happened.
pub const PROMPT_STATUS: &str = "Select a shape, set sensitivity, and click 'Submit Shape'";

/// Status line shown after a successful publish.
pub const SECURED_STATUS: &str = "Your area has been secured.";

// =============================================================================
// REQUEST / RESPONSE BODIES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SubmitPatrolBody {
    /// Shape name as the dropdown submitted it; validated here, not by serde,
    /// so an unknown name gets a typed error instead of a bare 422.
    pub shape: String,
    pub sensitivity: f64,
    /// Submit-button click count. Zero means the handler fired without a real
    /// click; nothing is published.
    #[serde(default)]
    pub clicks: u64,
}

#[derive(Debug, Serialize)]
pub struct SubmitPatrolResponse {
    pub status: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /` — the dashboard page.
pub async fn dashboard() -> Html<String> {
    Html(page::render_dashboard())
}

/// `POST /api/patrol` — validate the selection and publish one patrol command.
pub async fn submit_patrol(
    State(state): State<AppState>,
    Json(body): Json<SubmitPatrolBody>,
) -> Result<Json<SubmitPatrolResponse>, (StatusCode, Json<SubmitPatrolResponse>)> {
    if body.clicks == 0 {
        return Ok(Json(SubmitPatrolResponse { status: PROMPT_STATUS.into() }));
    }

    let Some(shape) = ShapeKind::parse(&body.shape) else {
        return Err(command_error_response(&CommandError::InvalidSelection(body.shape)));
    };
    let sensitivity = Sensitivity::new(body.sensitivity).map_err(|e| command_error_response(&e))?;

    let command = PatrolCommand::new(shape, sensitivity);
    let payload = command.to_json().map_err(|e| command_error_response(&e))?;

    tracing::info!(
        shape = shape.as_str(),
        sensitivity = sensitivity.value(),
        topic = %state.broker.topic,
        "publishing patrol command"
    );

    state
        .publisher
        .publish(&state.broker.topic, payload)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "patrol publish failed");
            publish_error_response(&e)
        })?;

    Ok(Json(SubmitPatrolResponse { status: SECURED_STATUS.into() }))
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

fn command_error_to_status(err: &CommandError) -> StatusCode {
    match err {
        CommandError::InvalidSelection(_)
        | CommandError::SensitivityOutOfRange(_)
        | CommandError::SensitivityOffStep(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CommandError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn command_error_response(err: &CommandError) -> (StatusCode, Json<SubmitPatrolResponse>) {
    (command_error_to_status(err), Json(SubmitPatrolResponse { status: err.to_string() }))
}

fn publish_error_response(err: &PublishError) -> (StatusCode, Json<SubmitPatrolResponse>) {
    (StatusCode::BAD_GATEWAY, Json(SubmitPatrolResponse { status: err.to_string() }))
}

#[cfg(test)]
#[path = "patrol_test.rs"]
mod tests;
