pub mod api;

use crate::agent::ChatAgent;
use crate::cli::Args;
use self::api::AppState;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use log::{ info, warn };

pub struct Server {
    addr: String,
    state: AppState,
    args: Args,
}

impl Server {
    pub fn new(addr: String, agent: Option<Arc<ChatAgent>>, args: Args) -> Self {
        if agent.is_none() {
            warn!("Server starting WITHOUT a chat model. Chat requests will return 503.");
        }

        Self { addr, state: AppState::new(agent), args }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let addr = self.addr.parse::<SocketAddr>()?;
        let app = api::router(self.state.clone());

        match self.tls_paths()? {
            Some((cert_path, key_path)) => {
                info!(
                    "TLS enabled. Loading certificate from '{}' and key from '{}'",
                    cert_path,
                    key_path
                );
                let tls_config = axum_server::tls_rustls::RustlsConfig
                    ::from_pem_file(cert_path, key_path).await?;

                info!("Starting HTTPS server on: https://{}", addr);
                axum_server::bind_rustls(addr, tls_config).serve(app.into_make_service()).await?;
            }
            None => {
                let listener = tokio::net::TcpListener
                    ::bind(addr).await
                    .map_err(|e| format!("Failed to bind HTTP server to {}: {}", addr, e))?;

                info!("Starting HTTP server on: http://{}", addr);
                axum::serve(listener, app.into_make_service()).await?;
            }
        }

        Ok(())
    }

    fn tls_paths(&self) -> Result<Option<(&str, &str)>, Box<dyn Error + Send + Sync>> {
        if !self.args.enable_tls {
            return Ok(None);
        }
        match (&self.args.tls_cert_path, &self.args.tls_key_path) {
            (Some(cert), Some(key)) => Ok(Some((cert.as_str(), key.as_str()))),
            (Some(_), None) | (None, Some(_)) => {
                Err("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.".into())
            }
            (None, None) => Err("--enable-tls was set but no certificate/key paths provided.".into()),
        }
    }
}
