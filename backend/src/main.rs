mod config;
mod services;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::io;
use std::thread;
use std::time::Duration;

use crate::config::HostConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env().map_err(|e| {
        error!("invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                log::warn!("could not open browser: {}", e);
            }
        });
    }

    info!("Addendum console running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(services::assets::serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
