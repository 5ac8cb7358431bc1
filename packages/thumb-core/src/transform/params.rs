use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_QUALITY, TARGET_HEIGHT, TARGET_WIDTH};

/// 目標サイズへの合わせ方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFit {
    /// 縦横を個別に伸縮して目標サイズにする（アスペクト比は維持しない）
    #[default]
    #[serde(alias = "stretch")]
    Fill,
    /// 目標のアスペクト比で中央を切り出してから縮小する
    Cover,
}

/// 変換パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformParams {
    pub width: u32,
    pub height: u32,
    pub fit: ResizeFit,
    pub quality: u8,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
            fit: ResizeFit::Fill,
            quality: DEFAULT_QUALITY,
        }
    }
}
