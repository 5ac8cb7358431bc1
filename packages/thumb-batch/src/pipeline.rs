//! バッチ処理のオーケストレーション
//!
//! 検証済みの [`ProcessRequest`] を受け取り、各画像の変換をブロッキングワーカー上で
//! 並行に実行して、入力順の [`ProcessedResult`] を組み立てる。
//! 1枚でも変換に失敗した場合はバッチ全体を失敗とし、部分的な結果は返さない。

use std::sync::Arc;
use std::time::Duration;

use thumb_core::{ImageTransformer, ItemError, ProcessRequest, ProcessedResult, TransformError};
use tokio::task::JoinSet;

/// バッチ処理の失敗
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("image {index} failed: {item}")]
    ItemFailed {
        index: usize,
        item: ItemError,
        #[source]
        source: TransformError,
    },

    #[error("batch did not finish within {0:?}")]
    TimedOut(Duration),

    #[error("worker task failed: {0}")]
    Worker(String),
}

/// 全画像を並行に変換し、入力順の結果を返す
pub async fn process_batch(
    request: ProcessRequest,
    transformer: Arc<dyn ImageTransformer>,
    timeout: Duration,
) -> Result<Vec<ProcessedResult>, BatchError> {
    let item_count = request.items().len();

    match tokio::time::timeout(timeout, run_batch(request, transformer)).await {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(items = item_count, timeout = ?timeout, "batch timed out");
            Err(BatchError::TimedOut(timeout))
        }
    }
}

async fn run_batch(
    request: ProcessRequest,
    transformer: Arc<dyn ImageTransformer>,
) -> Result<Vec<ProcessedResult>, BatchError> {
    let (query, items) = request.into_parts();

    // 完了順ではなく元の位置に書き込むため、事前に枠を確保する
    let mut slots: Vec<Option<ProcessedResult>> = vec![None; items.len()];
    let mut filenames = Vec::with_capacity(items.len());
    let mut tasks = JoinSet::new();

    for (index, item) in items.into_iter().enumerate() {
        let transformer = Arc::clone(&transformer);
        let bytes = item.raw_bytes().clone();
        filenames.push(item.original_name().to_string());

        tracing::debug!(
            index,
            filename = %item.original_name(),
            mime_type = %item.mime_type(),
            size = item.byte_len(),
            "dispatching transform"
        );
        tasks.spawn_blocking(move || (index, transformer.transform(&bytes)));
    }

    while let Some(joined) = tasks.join_next().await {
        let (index, outcome) = joined.map_err(|e| {
            tracing::error!(error = %e, "transform worker panicked");
            BatchError::Worker(e.to_string())
        })?;

        match outcome {
            Ok(encoded) => {
                tracing::debug!(index, filename = %filenames[index], size = encoded.len(), "transform done");
                // 変換後のバイト列はサイズだけ使って破棄する
                slots[index] = Some(ProcessedResult::new(
                    filenames[index].clone(),
                    &query,
                    index,
                    encoded.len() as u64,
                ));
            }
            Err(source) => {
                let item = ItemError {
                    filename: filenames[index].clone(),
                    reason: source.to_string(),
                };
                tracing::error!(index, filename = %item.filename, error = %source, "transform failed, aborting batch");
                // 残りのタスクは JoinSet の drop で破棄される
                return Err(BatchError::ItemFailed {
                    index,
                    item,
                    source,
                });
            }
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| BatchError::Worker(format!("missing result for image {index}")))
        })
        .collect()
}
