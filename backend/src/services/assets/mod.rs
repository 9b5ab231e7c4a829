//! # Embedded Console Assets
//!
//! Serves the compiled frontend bundle (`frontend/dist`, copied into
//! `static/dist` by `build.rs`) straight from the binary.
//!
//! The console is a single-page application: paths such as
//! `/addendums/foreign` have no file behind them, so any path that does not
//! match an embedded file is answered with `index.html` and the frontend
//! picks the page from `window.location`.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::{debug, warn};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// What a request path resolves to inside an asset directory.
#[derive(Debug)]
pub enum Asset<'a> {
    /// An embedded file, with the path used to guess its content type.
    File(&'a str, &'a File<'a>),
    /// No such file; `index.html` is served instead.
    Fallback(&'a File<'a>),
    Missing,
}

pub fn resolve<'a>(dir: &'a Dir<'a>, request_path: &'a str) -> Asset<'a> {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    match dir.get_file(file_path) {
        Some(file) => Asset::File(file_path, file),
        None => match dir.get_file(INDEX) {
            Some(index) => Asset::Fallback(index),
            None => Asset::Missing,
        },
    }
}

/// Default service of the host: every request not matched elsewhere.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve(&STATIC_DIR, req.path()) {
        Asset::File(file_path, file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        Asset::Fallback(index) => {
            debug!("{} served by index.html", req.path());
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec())
        }
        Asset::Missing => {
            warn!("frontend bundle missing, build it with `trunk build` in frontend/");
            HttpResponse::NotFound().body("Not Found")
        }
    }
}
