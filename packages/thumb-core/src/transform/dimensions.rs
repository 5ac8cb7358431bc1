/// ソース画像から切り出す領域（ピクセル座標）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CropBox {
    /// 画像全体
    pub fn full(src_w: u32, src_h: u32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: src_w as f64,
            height: src_h as f64,
        }
    }
}

/// Cover モードの切り出し領域を計算する
///
/// 目標のアスペクト比に合わせて、ソース画像の中央から
/// 収まる最大の領域を返す。縮小後は目標サイズを隙間なく覆う。
pub fn calculate_cover_crop(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> CropBox {
    let src_ratio = src_w as f64 / src_h as f64;
    let target_ratio = target_w as f64 / target_h as f64;

    if src_ratio > target_ratio {
        // 横長: 左右を削る
        let width = src_h as f64 * target_ratio;
        CropBox {
            left: (src_w as f64 - width) / 2.0,
            top: 0.0,
            width,
            height: src_h as f64,
        }
    } else if src_ratio < target_ratio {
        // 縦長: 上下を削る
        let height = src_w as f64 / target_ratio;
        CropBox {
            left: 0.0,
            top: (src_h as f64 - height) / 2.0,
            width: src_w as f64,
            height,
        }
    } else {
        CropBox::full(src_w, src_h)
    }
}
