//! Catalog Web Server

use std::process;

use catalog_app::context::AppContext;
use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};
use tracing::{error, info};

use crate::{config::ServerConfig, state::State};

mod auth;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

fn router(app: AppContext) -> Router {
    Router::new()
        .hoop(observability::request_logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::new(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .hoop(auth::middleware::handler)
                .get(products::index::handler)
                .post(products::store::handler)
                .push(Router::with_path("create").get(products::create::handler))
                .push(
                    Router::with_path("{id}")
                        .post(products::update::handler)
                        .push(Router::with_path("edit").get(products::edit::handler))
                        .push(
                            Router::with_path("delete")
                                .get(products::confirm_delete::handler)
                                .post(products::delete::handler),
                        ),
                ),
        )
}

#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|error| {
        #[expect(
            clippy::print_stderr,
            reason = "logging is not initialised until the config is loaded"
        )]
        {
            eprintln!("Configuration error: {error}");
        }

        process::exit(1);
    });

    if let Err(error) = observability::init(&config) {
        #[expect(clippy::print_stderr, reason = "the subscriber failed to install")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    let app = match AppContext::from_database_url(&config.database.database_url).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialise app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("starting server on {addr}");

    let server = Server::new(TcpListener::new(addr).bind().await);
    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router(app)).await;
}
