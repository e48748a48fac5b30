// region:    --- Imports
use crate::auction::events::CloseOutcome;
use crate::bidding::model::{Bid, Item, ItemId};
use crate::error::AuctionError;
use crate::identity::{require_session, Session};
use crate::store::AuctionStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

// endregion: --- Imports

// region:    --- Models

/// 종료된 경매의 결과 항목
#[derive(Debug, Clone, Serialize)]
pub struct WinnerEntry {
    pub item_id: ItemId,
    pub name: String,
    pub outcome: CloseOutcome,
}

/// 프로필 조회 결과
#[derive(Debug, Serialize)]
pub struct Profile {
    pub username: String,
    pub listed_items: Vec<ListedItem>,
    pub placed_bids: Vec<BidSummary>,
}

/// 프로필 내 등록 상품 요약
#[derive(Debug, Serialize)]
pub struct ListedItem {
    pub item_id: ItemId,
    pub name: String,
    pub floor_price: i64,
    pub end_time: DateTime<Utc>,
    pub highest_bid: Option<i64>,
}

/// 프로필 내 입찰 요약
#[derive(Debug, Serialize)]
pub struct BidSummary {
    pub item_id: ItemId,
    pub item_name: String,
    pub amount: i64,
}

// endregion: --- Models

// region:    --- Query Handlers

/// 진행 중인 경매 조회
/// "진행 중" 판정은 `closed` 플래그가 아니라 현재 시간과 종료 시간의 비교로만 한다.
pub fn active_auctions(store: &AuctionStore, now: DateTime<Utc>) -> Vec<&Item> {
    info!("{:<12} --> 진행 중인 경매 조회", "Query");
    store
        .items()
        .iter()
        .filter(|item| item.is_active(now))
        .collect()
}

/// 상품 이름 검색 (대소문자 무시 부분 일치)
pub fn search_items<'a>(store: &'a AuctionStore, keyword: &str) -> Vec<&'a Item> {
    info!("{:<12} --> 상품 검색: keyword={}", "Query", keyword);
    let keyword = keyword.to_lowercase();
    store
        .items()
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&keyword))
        .collect()
}

/// 종료된 경매의 낙찰 결과 조회
/// 스윕 실행 여부와 무관하게 종료 시간이 지난 모든 상품을 보고한다.
pub fn winners(store: &AuctionStore, now: DateTime<Utc>) -> Vec<WinnerEntry> {
    info!("{:<12} --> 낙찰 결과 조회", "Query");
    store
        .items()
        .iter()
        .filter(|item| item.is_ended(now))
        .map(|item| WinnerEntry {
            item_id: item.id,
            name: item.name.clone(),
            outcome: match &item.highest_bid {
                Some(bid) => CloseOutcome::Won {
                    winner: bid.bidder.clone(),
                    amount: bid.amount,
                },
                None => CloseOutcome::NoBids,
            },
        })
        .collect()
}

/// 입찰 이력 조회 (이름이 일치하는 첫 번째 상품, 입찰 순서대로)
pub fn bid_history<'a>(
    store: &'a AuctionStore,
    item_name: &str,
) -> Result<&'a [Bid], AuctionError> {
    info!("{:<12} --> 입찰 이력 조회: name={}", "Query", item_name);
    store
        .find_by_name(item_name)
        .map(|item| item.bids.as_slice())
        .ok_or(AuctionError::ItemNotFound)
}

/// 최고 입찰가 조회
pub fn highest_bid<'a>(
    store: &'a AuctionStore,
    item_name: &str,
) -> Result<Option<&'a Bid>, AuctionError> {
    info!("{:<12} --> 최고 입찰가 조회: name={}", "Query", item_name);
    store
        .find_by_name(item_name)
        .map(|item| item.highest_bid.as_ref())
        .ok_or(AuctionError::ItemNotFound)
}

/// 프로필 조회 (본인이 등록한 상품과 넣은 입찰)
pub fn profile(
    store: &AuctionStore,
    session: Option<&Session>,
) -> Result<Profile, AuctionError> {
    let session = require_session(session)?;
    info!("{:<12} --> 프로필 조회: {}", "Query", session.username);

    let account = store
        .account(&session.username)
        .ok_or(AuctionError::NotAuthenticated)?;

    let listed_items = account
        .item_ids
        .iter()
        .filter_map(|&id| store.item(id))
        .map(|item| ListedItem {
            item_id: item.id,
            name: item.name.clone(),
            floor_price: item.floor_price,
            end_time: item.end_time,
            highest_bid: item.highest_bid.as_ref().map(|bid| bid.amount),
        })
        .collect();

    // 입찰이 존재하는 상품은 삭제될 수 없으므로 상품 조회는 항상 성공한다
    let placed_bids = account
        .placed_bids
        .iter()
        .filter_map(|placed| {
            store.item(placed.item_id).map(|item| BidSummary {
                item_id: placed.item_id,
                item_name: item.name.clone(),
                amount: placed.amount,
            })
        })
        .collect();

    Ok(Profile {
        username: session.username.clone(),
        listed_items,
        placed_bids,
    })
}

// endregion: --- Query Handlers
