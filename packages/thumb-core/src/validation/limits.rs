use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BATCH_ITEMS, MAX_ITEM_BYTES};

/// マルチパートの境界・ヘッダ分として見込む余裕（1MiB）
const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;

/// アップロードの上限値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// 1リクエストあたりの最大画像数
    pub max_items: usize,
    /// 1ファイルあたりの最大バイト数
    pub max_item_bytes: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_items: MAX_BATCH_ITEMS,
            max_item_bytes: MAX_ITEM_BYTES,
        }
    }
}

impl Limits {
    /// リクエストボディ全体の上限
    ///
    /// 全ファイルが上限サイズでも受け付けられる値にし、
    /// サイズ超過はファイル単位の検証で検出させる。
    pub fn max_request_bytes(&self) -> usize {
        let total = (self.max_items as u64)
            .saturating_mul(self.max_item_bytes)
            .saturating_add(MULTIPART_OVERHEAD_BYTES);
        usize::try_from(total).unwrap_or(usize::MAX)
    }
}
