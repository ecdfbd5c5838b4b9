pub mod env;
pub mod error;
pub mod route;

use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;

use crate::env::Env;

pub async fn serve(env: Env) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();
    let listener = bind(&env).await?;
    let app = route::app();

    tracing::info!("start app on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    tracing::info!("stop app");

    Ok(())
}

pub async fn bind(env: &Env) -> Result<TcpListener, Box<dyn std::error::Error + Send + Sync>> {
    let addr = env.bind();
    TcpListener::bind(&addr).await.map_err(|e| format!("failed to bind {addr}: {e}").into())
}
