/**
 * Thread Handlers
 *
 * HTTP handlers for the `/threads` collection.
 *
 * Every handler performs a single store operation. Bodies are decoded through
 * `JsonBody`, so a malformed body is always a 400 before any lookup runs.
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::threads::store::ThreadStore;
use crate::shared::{CreateThreadRequest, Thread, ThreadPatch};

/// Message returned when no thread has the requested id
pub const THREAD_NOT_FOUND: &str = "Thread not found";

/// Create thread handler
///
/// # Arguments
///
/// * `State(store)` - Thread store
/// * `JsonBody(request)` - `{id?, title, description}`
///
/// # Returns
///
/// 201 Created with the stored thread
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, missing title or description, or an id already in use
pub async fn create_thread(
    State(store): State<Arc<dyn ThreadStore>>,
    JsonBody(request): JsonBody<CreateThreadRequest>,
) -> Result<(StatusCode, Json<Thread>), BackendError> {
    request.validate()?;

    let thread = store.insert(request.into_thread(|| Uuid::new_v4().to_string()))?;
    tracing::info!("Thread created: {}", thread.id);

    Ok((StatusCode::CREATED, Json(thread)))
}

/// List threads handler
///
/// Returns every thread in insertion order.
pub async fn list_threads(State(store): State<Arc<dyn ThreadStore>>) -> Json<Vec<Thread>> {
    let threads = store.list();
    tracing::debug!("Listing {} threads", threads.len());
    Json(threads)
}

/// Get thread handler
///
/// # Errors
///
/// * `404 Not Found` - No thread with this id
pub async fn get_thread(
    State(store): State<Arc<dyn ThreadStore>>,
    Path(id): Path<String>,
) -> Result<Json<Thread>, BackendError> {
    store.get(&id).map(Json).ok_or_else(|| {
        tracing::debug!("Thread not found: {}", id);
        BackendError::not_found(THREAD_NOT_FOUND)
    })
}

/// Update thread handler
///
/// Non-empty fields in the body overwrite the stored ones; empty or absent
/// fields are left unchanged.
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body
/// * `404 Not Found` - No thread with this id
pub async fn update_thread(
    State(store): State<Arc<dyn ThreadStore>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ThreadPatch>,
) -> Result<Json<Thread>, BackendError> {
    let thread = store.update(&id, patch).ok_or_else(|| {
        tracing::debug!("Update for unknown thread: {}", id);
        BackendError::not_found(THREAD_NOT_FOUND)
    })?;

    tracing::info!("Thread updated: {}", thread.id);
    Ok(Json(thread))
}

/// Delete thread handler
///
/// Always answers 204 No Content, whether or not the thread existed.
pub async fn delete_thread(
    State(store): State<Arc<dyn ThreadStore>>,
    Path(id): Path<String>,
) -> StatusCode {
    match store.remove(&id) {
        Some(_) => tracing::info!("Thread deleted: {}", id),
        None => tracing::debug!("Delete for unknown thread: {}", id),
    }
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::threads::store::InMemoryThreadStore;
    use pretty_assertions::assert_eq;

    fn store() -> Arc<dyn ThreadStore> {
        Arc::new(InMemoryThreadStore::new())
    }

    fn create_request(id: &str, title: &str, description: &str) -> CreateThreadRequest {
        CreateThreadRequest {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_echoes_thread() {
        let store = store();
        let (status, Json(thread)) = create_thread(
            State(store.clone()),
            JsonBody(create_request("1", "Hi", "first")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(thread.id, "1");
        assert_eq!(store.get("1"), Some(thread));
    }

    #[tokio::test]
    async fn test_create_generates_missing_id() {
        let store = store();
        let (_, Json(thread)) =
            create_thread(State(store.clone()), JsonBody(create_request("", "Hi", "first")))
                .await
                .unwrap();

        assert!(Uuid::parse_str(&thread.id).is_ok());
    }

    #[tokio::test]
    async fn test_create_requires_title_and_description() {
        let store = store();
        for request in [create_request("1", "", "d"), create_request("1", "t", "")] {
            let err = create_thread(State(store.clone()), JsonBody(request))
                .await
                .unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.message(), "Missing title or description");
        }
        assert!(store.list().is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_id() {
        let store = store();
        create_thread(State(store.clone()), JsonBody(create_request("1", "a", "b")))
            .await
            .unwrap();

        let err = create_thread(State(store.clone()), JsonBody(create_request("1", "c", "d")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(store.get("1").unwrap().title, "a");
    }

    #[tokio::test]
    async fn test_get_missing_thread() {
        let err = get_thread(State(store()), Path("nope".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), THREAD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_with_empty_title_keeps_title() {
        let store = store();
        create_thread(State(store.clone()), JsonBody(create_request("1", "Hi", "first")))
            .await
            .unwrap();

        let Json(updated) = update_thread(
            State(store.clone()),
            Path("1".to_string()),
            JsonBody(ThreadPatch {
                title: Some(String::new()),
                description: Some("edited".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(updated.title, "Hi");
        assert_eq!(updated.description, "edited");
    }

    #[tokio::test]
    async fn test_update_missing_thread() {
        let err = update_thread(
            State(store()),
            Path("1".to_string()),
            JsonBody(ThreadPatch::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = store();
        create_thread(State(store.clone()), JsonBody(create_request("1", "Hi", "first")))
            .await
            .unwrap();

        assert_eq!(
            delete_thread(State(store.clone()), Path("1".to_string())).await,
            StatusCode::NO_CONTENT
        );
        assert_eq!(
            delete_thread(State(store.clone()), Path("1".to_string())).await,
            StatusCode::NO_CONTENT
        );
        assert!(store.list().is_empty());
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let store = store();
        for id in ["b", "a", "c"] {
            create_thread(State(store.clone()), JsonBody(create_request(id, "t", "d")))
                .await
                .unwrap();
        }

        let Json(threads) = list_threads(State(store)).await;
        let ids: Vec<_> = threads.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
