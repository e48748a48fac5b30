use crate::bidding::model::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 경매 종료 결과
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// 낙찰
    Won { winner: String, amount: i64 },
    /// 입찰 없이 종료
    NoBids,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum AuctionEvent {
    // 상품 등록 이벤트
    ItemListed {
        item_id: ItemId,
        name: String,
        seller: String,
        floor_price: i64,
        end_time: DateTime<Utc>,
    },
    // 입찰 이벤트
    BidPlaced {
        item_id: ItemId,
        bidder: String,
        amount: i64,
        timestamp: DateTime<Utc>,
    },
    // 상품 삭제 이벤트
    ItemDeleted {
        item_id: ItemId,
        name: String,
    },
    // 최소 가격 변경 이벤트
    FloorPriceUpdated {
        item_id: ItemId,
        name: String,
        new_price: i64,
    },
    // 경매 종료 이벤트 (만료 스윕이 상품별로 정확히 한 번 발행)
    AuctionClosed {
        item_id: ItemId,
        name: String,
        outcome: CloseOutcome,
    },
}
