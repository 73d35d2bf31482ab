use std::path::PathBuf;

use actix_files::Files;
use actix_web::web;

/// Mount path for card images.
pub const IMG_MOUNT: &str = "/img";

/// Serve `img_dir` byte-for-byte under `/img`.
pub fn configure_routes(img_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(Files::new(IMG_MOUNT, img_dir));
    }
}
