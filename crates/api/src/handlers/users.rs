use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tabletop_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::response::UsersResponse;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_all(&state.pool).await?;

    Ok(Json(UsersResponse { users }))
}
