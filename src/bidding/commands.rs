/// 상품 등록 및 입찰 관련 커맨드 처리
/// 1. 상품 등록
/// 2. 입찰
/// 3. 상품 삭제
/// 4. 최소 가격 변경
// region:    --- Imports
use crate::auction::events::AuctionEvent;
use crate::bidding::model::{Bid, Item, ItemId};
use crate::error::AuctionError;
use crate::identity::{require_session, PlacedBid, Session};
use crate::store::AuctionStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

// endregion: --- Imports

// region:    --- Commands

/// 상품 등록 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListItemCommand {
    pub name: String,
    pub description: String,
    pub floor_price: i64,
    pub end_time: DateTime<Utc>,
}

/// 입찰 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    pub item_name: String,
    pub amount: i64,
}

/// 상품 삭제 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeleteItemCommand {
    pub item_name: String,
}

/// 최소 가격 변경 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdateFloorPriceCommand {
    pub item_name: String,
    pub new_price: i64,
}

// endregion: --- Commands

// region:    --- Command Handlers

/// 1. 상품 등록
/// 종료 시간이 현재 시간 이후인 경우에만 등록을 허용하고,
/// 전체 카탈로그와 판매자 계정 양쪽에 상품을 추가한다.
pub fn handle_list_item(
    cmd: ListItemCommand,
    session: Option<&Session>,
    store: &mut AuctionStore,
    now: DateTime<Utc>,
) -> Result<AuctionEvent, AuctionError> {
    info!("{:<12} --> 상품 등록 요청 처리 시작: {:?}", "Command", cmd);
    let session = require_session(session)?;

    // 종료 시간 검증
    if cmd.end_time <= now {
        return Err(AuctionError::InvalidEndTime);
    }

    let item_id = store.allocate_item_id();
    let item = Item {
        id: item_id,
        name: cmd.name.clone(),
        description: cmd.description,
        floor_price: cmd.floor_price,
        end_time: cmd.end_time,
        seller: session.username.clone(),
        highest_bid: None,
        bids: Vec::new(),
        closed: false,
    };
    store.push_item(item);
    store
        .account_mut(&session.username)
        .ok_or(AuctionError::NotAuthenticated)?
        .item_ids
        .push(item_id);

    info!(
        "{:<12} --> 상품 등록 완료: id={}, name={}",
        "Command", item_id, cmd.name
    );
    Ok(AuctionEvent::ItemListed {
        item_id,
        name: cmd.name,
        seller: session.username.clone(),
        floor_price: cmd.floor_price,
        end_time: cmd.end_time,
    })
}

/// 2. 입찰
/// 이름이 일치하는 첫 번째 상품을 대상으로 한다 (상품 이름은 고유하지 않음).
/// 입찰 금액은 최소 가격과 현재 최고 입찰가 양쪽보다 커야 한다.
pub fn handle_place_bid(
    cmd: PlaceBidCommand,
    session: Option<&Session>,
    store: &mut AuctionStore,
    now: DateTime<Utc>,
) -> Result<AuctionEvent, AuctionError> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);
    let session = require_session(session)?;

    // 대상 상품 조회 및 입찰 검증
    let item = store
        .find_by_name(&cmd.item_name)
        .ok_or(AuctionError::ItemNotFound)?;

    if now > item.end_time {
        return Err(AuctionError::AuctionEnded);
    }
    if cmd.amount <= item.floor_price {
        return Err(AuctionError::BidTooLow {
            min: item.floor_price,
        });
    }
    if let Some(highest) = &item.highest_bid {
        if cmd.amount <= highest.amount {
            return Err(AuctionError::BidTooLow {
                min: highest.amount,
            });
        }
    }
    let item_id = item.id;

    // 입찰 기록 (상품과 입찰자 계정 양쪽에 반영)
    let bid = Bid {
        bidder: session.username.clone(),
        amount: cmd.amount,
        placed_at: now,
    };
    let item = store
        .item_mut(item_id)
        .ok_or(AuctionError::ItemNotFound)?;
    item.bids.push(bid.clone());
    item.highest_bid = Some(bid);

    store
        .account_mut(&session.username)
        .ok_or(AuctionError::NotAuthenticated)?
        .placed_bids
        .push(PlacedBid {
            item_id,
            amount: cmd.amount,
        });

    info!(
        "{:<12} --> 입찰 완료: item_id={}, amount={}",
        "Command", item_id, cmd.amount
    );
    Ok(AuctionEvent::BidPlaced {
        item_id,
        bidder: session.username.clone(),
        amount: cmd.amount,
        timestamp: now,
    })
}

/// 3. 상품 삭제
/// 본인이 등록한 상품만 대상으로 하며, 입찰이 하나라도 존재하면 거부한다.
pub fn handle_delete_item(
    cmd: DeleteItemCommand,
    session: Option<&Session>,
    store: &mut AuctionStore,
) -> Result<AuctionEvent, AuctionError> {
    info!("{:<12} --> 상품 삭제 요청 처리 시작: {:?}", "Command", cmd);
    let session = require_session(session)?;

    let item_id = owned_item_id(store, &session.username, &cmd.item_name)
        .ok_or(AuctionError::ItemNotFound)?;
    ensure_no_bids(store, item_id)?;

    // 카탈로그와 판매자 계정 양쪽에서 제거
    let removed = store
        .remove_item(item_id)
        .ok_or(AuctionError::ItemNotFound)?;
    store
        .account_mut(&session.username)
        .ok_or(AuctionError::NotAuthenticated)?
        .item_ids
        .retain(|&id| id != item_id);

    info!(
        "{:<12} --> 상품 삭제 완료: id={}, name={}",
        "Command", item_id, removed.name
    );
    Ok(AuctionEvent::ItemDeleted {
        item_id,
        name: removed.name,
    })
}

/// 4. 최소 가격 변경
/// 삭제와 동일한 범위(본인 상품, 입찰 없음)에서만 허용한다.
pub fn handle_update_floor_price(
    cmd: UpdateFloorPriceCommand,
    session: Option<&Session>,
    store: &mut AuctionStore,
) -> Result<AuctionEvent, AuctionError> {
    info!(
        "{:<12} --> 최소 가격 변경 요청 처리 시작: {:?}",
        "Command", cmd
    );
    let session = require_session(session)?;

    let item_id = owned_item_id(store, &session.username, &cmd.item_name)
        .ok_or(AuctionError::ItemNotFound)?;
    ensure_no_bids(store, item_id)?;

    let item = store
        .item_mut(item_id)
        .ok_or(AuctionError::ItemNotFound)?;
    item.floor_price = cmd.new_price;
    let name = item.name.clone();

    info!(
        "{:<12} --> 최소 가격 변경 완료: id={}, new_price={}",
        "Command", item_id, cmd.new_price
    );
    Ok(AuctionEvent::FloorPriceUpdated {
        item_id,
        name,
        new_price: cmd.new_price,
    })
}

// endregion: --- Command Handlers

// region:    --- Helpers

/// 판매자 본인 상품 중 이름이 일치하는 첫 번째 상품의 id 조회
fn owned_item_id(store: &AuctionStore, username: &str, item_name: &str) -> Option<ItemId> {
    let account = store.account(username)?;
    account
        .item_ids
        .iter()
        .copied()
        .find(|&id| store.item(id).is_some_and(|item| item.name == item_name))
}

/// 입찰 존재 여부 검증 (입찰이 있으면 수정/삭제 불가)
fn ensure_no_bids(store: &AuctionStore, item_id: ItemId) -> Result<(), AuctionError> {
    let item = store.item(item_id).ok_or(AuctionError::ItemNotFound)?;
    if !item.bids.is_empty() {
        return Err(AuctionError::HasBids);
    }
    Ok(())
}

// endregion: --- Helpers
