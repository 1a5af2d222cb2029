//! File HTTP Routes
//!
//! - `GET /` lists every stored file
//! - `GET /{prefix}/` answers like any missing path
//! - `GET /{prefix}/*path` returns the first file stored at `path`
//! - `POST /{prefix}/*path` stores the multipart field `datafile` at `path`
//! - `PUT /{prefix}/*path` accepts and ignores the request
//! - `DELETE /{prefix}/*path` removes the first file stored at `path`
//!
//! Mutating routes redirect to `/` with `303 See Other`.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};

use crate::model::{FileItem, Repository};
use crate::observability::{events, Logger};

use super::config::{HttpServerConfig, NotFoundStatus};
use super::errors::{ServiceError, ServiceResult};
use super::views::render_index;

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "datafile";

/// Content type for paths whose extension is unknown
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

// ==================
// Shared State
// ==================

/// File state shared across handlers
pub struct FsState {
    pub files: Repository<FileItem>,
    pub fs_route: String,
    pub not_found_status: NotFoundStatus,
}

impl FsState {
    pub fn new(files: Repository<FileItem>, config: &HttpServerConfig) -> Self {
        Self {
            files,
            fs_route: config.fs_route(),
            not_found_status: config.not_found_status,
        }
    }
}

// ==================
// Routes
// ==================

/// Routes mounted at the root
pub fn index_routes(state: Arc<FsState>) -> Router {
    Router::new()
        .route("/", get(list_files_handler))
        .with_state(state)
}

/// Routes under the file prefix
pub fn fs_routes(state: Arc<FsState>) -> Router {
    Router::new()
        .route(
            &format!("{}/", state.fs_route),
            get(read_empty_path_handler).delete(delete_empty_path_handler),
        )
        .route(
            &format!("{}/*path", state.fs_route),
            get(read_file_handler)
                .post(create_file_handler)
                .put(replace_file_handler)
                .delete(delete_file_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Content type by file extension, `text/html` when unknown
pub fn content_type_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string())
}

fn home() -> Redirect {
    Redirect::to("/")
}

// ==================
// Handlers
// ==================

async fn list_files_handler(State(state): State<Arc<FsState>>) -> ServiceResult<Html<String>> {
    let files = state.files.all()?;
    Ok(Html(render_index(&files, &state.fs_route)?))
}

async fn read_file_handler(
    State(state): State<Arc<FsState>>,
    Path(path): Path<String>,
) -> ServiceResult<Response> {
    let Some(file) = state.files.first_by("path", path.as_str())? else {
        Logger::warn(events::FILE_NOT_FOUND, &[("path", path.as_str())]);
        let not_found = ServiceError::NotFound(path);
        return match state.not_found_status {
            NotFoundStatus::NotFound => Err(not_found),
            NotFoundStatus::Ok => Ok(not_found.to_string().into_response()),
        };
    };

    let data = file.decoded()?;
    Ok(([(header::CONTENT_TYPE, content_type_for(&path))], data).into_response())
}

// A wildcard never captures an empty path
async fn read_empty_path_handler(state: State<Arc<FsState>>) -> ServiceResult<Response> {
    read_file_handler(state, Path(String::new())).await
}

async fn create_file_handler(
    State(state): State<Arc<FsState>>,
    Path(path): Path<String>,
    mut multipart: Multipart,
) -> ServiceResult<Redirect> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::Multipart(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| ServiceError::Multipart(e.to_string()))?;

        let file = state.files.create(FileItem::from_bytes(path.as_str(), &data))?;
        let id = file.id.map(|id| id.to_string()).unwrap_or_default();
        let size = data.len().to_string();
        Logger::info(
            events::FILE_CREATED,
            &[("id", id.as_str()), ("path", path.as_str()), ("size", size.as_str())],
        );

        return Ok(home());
    }

    Err(ServiceError::MissingUpload)
}

async fn replace_file_handler(Path(_path): Path<String>) -> Redirect {
    home()
}

async fn delete_file_handler(
    State(state): State<Arc<FsState>>,
    Path(path): Path<String>,
) -> ServiceResult<Redirect> {
    let Some(file) = state.files.first_by("path", path.as_str())? else {
        Logger::warn(events::FILE_NOT_FOUND, &[("path", path.as_str())]);
        return Err(ServiceError::NotFound(path));
    };

    state.files.destroy(&file)?;
    let id = file.id.map(|id| id.to_string()).unwrap_or_default();
    Logger::info(events::FILE_DELETED, &[("id", id.as_str()), ("path", path.as_str())]);

    Ok(home())
}

async fn delete_empty_path_handler(state: State<Arc<FsState>>) -> ServiceResult<Redirect> {
    delete_file_handler(state, Path(String::new())).await
}
