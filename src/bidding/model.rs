use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 상품 식별자 (등록 순서대로 부여되는 고유 id)
pub type ItemId = u64;

// 상품 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub floor_price: i64,
    pub end_time: DateTime<Utc>,
    pub seller: String,
    pub highest_bid: Option<Bid>,
    pub bids: Vec<Bid>,
    pub closed: bool,
}

impl Item {
    /// 현재 시간 기준으로 경매가 진행 중인지 여부
    /// `closed` 플래그는 종료 알림 중복 방지용일 뿐, 진행 여부 판단에는 쓰지 않는다.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.end_time
    }

    /// 현재 시간 기준으로 경매가 끝났는지 여부
    pub fn is_ended(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_time
    }
}

// 입찰 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub bidder: String,
    pub amount: i64,
    pub placed_at: DateTime<Utc>,
}
