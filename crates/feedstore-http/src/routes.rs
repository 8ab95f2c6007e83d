//! Route table and handlers.
//!
//! | Method   | Path                  | Caller        | Store call           |
//! |----------|-----------------------|---------------|----------------------|
//! | `GET`    | `/health`             | -             | -                    |
//! | `GET`    | `/feed`               | -             | `feed`               |
//! | `GET`    | `/posts/count`        | -             | `num_posts`          |
//! | `GET`    | `/posts/{id}`         | -             | `get_post`           |
//! | `POST`   | `/posts`              | editor        | `post`               |
//! | `DELETE` | `/posts/{id}`         | editor        | `remove_post`        |
//! | `GET`    | `/editors/{identity}` | -             | `is_editor`          |
//! | `POST`   | `/editors`            | owner         | `add_editor`         |
//! | `DELETE` | `/editors/{identity}` | owner or self | `remove_editor`      |
//! | `GET`    | `/owner`              | -             | `owner`              |
//! | `PUT`    | `/owner`              | owner         | `transfer_ownership` |
//! | `GET`    | `/events`             | -             | `events_since`       |

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::{AppState, Caller};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use feedstore_core::{EventRecord, FeedError, FeedPage, Identity, PostId, PostView};
use serde::{Deserialize, Serialize};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/feed", get(feed))
        .route("/posts", post(create_post))
        .route("/posts/count", get(count))
        .route("/posts/{id}", get(get_post).delete(remove_post))
        .route("/editors", post(add_editor))
        .route("/editors/{identity}", get(is_editor).delete(remove_editor))
        .route("/owner", get(owner).put(transfer_owner))
        .route("/events", get(events))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    #[serde(default)]
    pub offset: u64,
    /// 0 means "everything from `offset` to the oldest post".
    #[serde(default)]
    pub depth: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub uri: String,
    #[serde(default)]
    pub metadata: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedPost {
    pub id: PostId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostCount {
    pub num_posts: u64,
    pub next_id: u64,
    pub num_deleted: u64,
}

/// `identity` is trimmed on the way in; a blank one fails the body.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityRequest {
    pub identity: Identity,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EditorStatus {
    pub identity: Identity,
    pub is_editor: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub owner: Identity,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventParams {
    /// Last sequence the client has already seen.
    #[serde(default)]
    pub since: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventsResponse {
    pub last_sequence: u64,
    pub events: Vec<EventRecord<Identity>>,
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn feed(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<FeedParams>,
) -> Result<Json<FeedPage>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.feed(params.offset, params.depth)?))
}

async fn count(State(state): State<AppState>) -> Json<PostCount> {
    let store = state.store.read().await;
    Json(PostCount {
        num_posts: store.num_posts(),
        next_id: store.next_id(),
        num_deleted: store.num_deleted(),
    })
}

async fn get_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<PostId>,
) -> Result<Json<PostView>, ApiError> {
    let store = state.store.read().await;
    store
        .get_post(id)
        .map(Json)
        .ok_or(ApiError::Feed(FeedError::PostNotFound { id }))
}

async fn is_editor(
    State(state): State<AppState>,
    ApiPath(identity): ApiPath<String>,
) -> Result<Json<EditorStatus>, ApiError> {
    let identity = Identity::parse(&identity)?;
    let is_editor = state.store.read().await.is_editor(&identity);
    Ok(Json(EditorStatus {
        identity,
        is_editor,
    }))
}

async fn owner(State(state): State<AppState>) -> Json<OwnerResponse> {
    let owner = state.store.read().await.owner().clone();
    Json(OwnerResponse { owner })
}

async fn events(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<EventParams>,
) -> Json<EventsResponse> {
    let store = state.store.read().await;
    Json(EventsResponse {
        last_sequence: store.events().last_sequence(),
        events: store.events_since(params.since).to_vec(),
    })
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

async fn create_post(
    State(state): State<AppState>,
    Caller(caller): Caller,
    ApiJson(body): ApiJson<CreatePost>,
) -> Result<(StatusCode, Json<CreatedPost>), ApiError> {
    let id = state
        .store
        .write()
        .await
        .post(&caller, body.uri, body.metadata)?;
    Ok((StatusCode::CREATED, Json(CreatedPost { id })))
}

async fn remove_post(
    State(state): State<AppState>,
    Caller(caller): Caller,
    ApiPath(id): ApiPath<PostId>,
) -> Result<StatusCode, ApiError> {
    state.store.write().await.remove_post(&caller, id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_editor(
    State(state): State<AppState>,
    Caller(caller): Caller,
    ApiJson(body): ApiJson<IdentityRequest>,
) -> Result<(StatusCode, Json<EditorStatus>), ApiError> {
    state
        .store
        .write()
        .await
        .add_editor(&caller, body.identity.clone())?;
    Ok((
        StatusCode::CREATED,
        Json(EditorStatus {
            identity: body.identity,
            is_editor: true,
        }),
    ))
}

async fn remove_editor(
    State(state): State<AppState>,
    Caller(caller): Caller,
    ApiPath(identity): ApiPath<String>,
) -> Result<StatusCode, ApiError> {
    let identity = Identity::parse(&identity)?;
    state
        .store
        .write()
        .await
        .remove_editor(&caller, &identity)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn transfer_owner(
    State(state): State<AppState>,
    Caller(caller): Caller,
    ApiJson(body): ApiJson<IdentityRequest>,
) -> Result<Json<OwnerResponse>, ApiError> {
    state
        .store
        .write()
        .await
        .transfer_ownership(&caller, body.identity.clone())?;
    Ok(Json(OwnerResponse {
        owner: body.identity,
    }))
}
