//! 画像バッチのサムネイル化サービス
//!
//! `POST /api/process-images` でクエリ文字列と最大4枚の画像を受け取り、
//! 各画像を 300x300 の JPEG に変換したサイズを返す。

pub mod config;
pub mod handler;
pub mod pipeline;
pub mod telemetry;
pub mod upload;

#[cfg(test)]
mod test_utils;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use thumb_core::{ImageTransformer, Thumbnailer};

pub use config::Config;

/// ハンドラ間で共有する読み取り専用の状態
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub transformer: Arc<dyn ImageTransformer>,
}

impl AppState {
    pub fn new(config: Config, transformer: Arc<dyn ImageTransformer>) -> Self {
        Self {
            config: Arc::new(config),
            transformer,
        }
    }
}

/// ルーターを構築する
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.limits.max_request_bytes();

    Router::new()
        .route("/health", get(handler::health))
        .route("/api/process-images", post(handler::process_images))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 起動済みのサーバー
///
/// リスナーとルーターを保持し、`serve` で処理を開始する。
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// 設定からアプリケーションを構築し、ポートにバインドする
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let thumbnailer = Thumbnailer::new(config.transform)?;
        let listener = TcpListener::bind(config.bind_address()).await?;

        tracing::info!(
            address = %listener.local_addr()?,
            max_items = config.limits.max_items,
            max_item_bytes = config.limits.max_item_bytes,
            width = thumbnailer.params().width,
            height = thumbnailer.params().height,
            fit = ?thumbnailer.params().fit,
            "server listening"
        );

        let state = AppState::new(config, Arc::new(thumbnailer));
        Ok(Self {
            listener,
            router: build_router(state),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// shutdown が完了するまでリクエストを処理する
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}
