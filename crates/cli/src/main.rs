//! Storefront cart CLI

use std::{process, sync::Arc};

use thiserror::Error;
use tracing::{error, info};

use storefront::{
    cart::CartDispatcher,
    csrf::{CsrfError, CsrfToken},
    notifications::NotificationPresenter,
    transport::{HttpTransport, HttpTransportConfig, TransportError},
};

use crate::{
    config::{CliConfig, Command},
    console::{ConsoleBadge, ConsoleNotifications},
};

mod config;
mod console;
mod logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to reach storefront: {0}")]
    Transport(#[from] TransportError),

    #[error("invalid csrf token: {0}")]
    Csrf(#[from] CsrfError),
}

/// Storefront CLI entry point
#[tokio::main]
pub async fn main() {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(parse_error) => parse_error.exit(),
    };

    if let Err(init_error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for subscriber errors"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    if let Err(run_error) = run(config).await {
        error!("{run_error}");

        process::exit(1);
    }
}

async fn run(config: CliConfig) -> Result<(), CliError> {
    let transport = HttpTransport::new(HttpTransportConfig {
        base_url: config.store.base_url.clone(),
        timeout: config.store.request_timeout(),
    })?;

    let csrf_token = match &config.store.csrf_token {
        Some(raw) => CsrfToken::new(raw.as_str())?,
        None => {
            transport
                .fetch_csrf_token(&config.store.token_page, &config.store.csrf_cookie)
                .await?
        }
    };

    let presenter = NotificationPresenter::new(Arc::new(ConsoleNotifications::default()))
        .with_dismiss_after(config.store.notification_timeout());

    let dispatcher = CartDispatcher::new(
        Arc::new(transport),
        Arc::new(ConsoleBadge::default()),
        presenter.clone(),
        csrf_token,
    );

    match config.command {
        Command::Add(args) => {
            info!(
                product_id = %args.product_id,
                quantity = args.quantity,
                base_url = %config.store.base_url,
                "adding to cart"
            );

            dispatcher.add_to_cart(args.product_id, args.quantity).await;
        }
    }

    presenter.settled().await;

    Ok(())
}
