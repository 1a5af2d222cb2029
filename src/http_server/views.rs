//! HTML views
//!
//! Templates live under `templates/` and are escaped by askama. Paths in
//! links are percent-encoded segment by segment.

use askama::Template;

use crate::model::FileItem;

struct FileRow {
    id: String,
    path: String,
    size: usize,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    files: Vec<FileRow>,
    fs_route: String,
}

/// Listing of every stored file, linking each to its file route
pub fn render_index(files: &[FileItem], fs_route: &str) -> Result<String, askama::Error> {
    let files = files
        .iter()
        .map(|file| FileRow {
            id: file.id.map(|id| id.to_string()).unwrap_or_default(),
            path: file.path.clone(),
            size: file.size_hint(),
        })
        .collect();

    IndexTemplate {
        files,
        fs_route: fs_route.to_string(),
    }
    .render()
}
