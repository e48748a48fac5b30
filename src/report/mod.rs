/// 경매 통계 집계
// region:    --- Imports
use crate::store::AuctionStore;
use serde::Serialize;
use tracing::info;

// endregion: --- Imports

// region:    --- Statistics

/// 경매 통계
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_items: usize,
    pub total_bids: usize,
    pub avg_bids_per_item: f64,
}

/// 통계 집계 (상품이 없으면 평균은 0)
pub fn statistics(store: &AuctionStore) -> Statistics {
    info!("{:<12} --> 경매 통계 집계", "Report");
    let total_items = store.items().len();
    let total_bids: usize = store.items().iter().map(|item| item.bids.len()).sum();
    let avg_bids_per_item = if total_items > 0 {
        total_bids as f64 / total_items as f64
    } else {
        0.0
    };

    Statistics {
        total_items,
        total_bids,
        avg_bids_per_item,
    }
}

// endregion: --- Statistics
