/// 경매 만료 스윕
/// 종료 시간이 지난 상품을 닫힘 상태로 전환하고 결과를 한 번만 보고한다.
/// `closed` 플래그는 보고 중복 방지용 래치이며, 조회 쿼리에는 관여하지 않는다.
// region:    --- Imports
use crate::auction::events::{AuctionEvent, CloseOutcome};
use crate::store::AuctionStore;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- Expiry Sweep

/// 만료된 경매 일괄 종료
/// 종료 시간이 지났고 아직 닫히지 않은 모든 상품에 대해 `closed`를 설정하고
/// 낙찰자 또는 무입찰 결과를 발행한다. 반복 호출해도 같은 상품을 다시 보고하지 않는다.
pub fn close_expired(store: &mut AuctionStore, now: DateTime<Utc>) -> Vec<AuctionEvent> {
    let mut events = Vec::new();

    for item in store.items_mut() {
        if now > item.end_time && !item.closed {
            item.closed = true;
            let outcome = match &item.highest_bid {
                Some(bid) => CloseOutcome::Won {
                    winner: bid.bidder.clone(),
                    amount: bid.amount,
                },
                None => CloseOutcome::NoBids,
            };
            info!(
                "{:<12} --> 경매 종료: id={}, name={}, outcome={:?}",
                "Scheduler", item.id, item.name, outcome
            );
            events.push(AuctionEvent::AuctionClosed {
                item_id: item.id,
                name: item.name.clone(),
                outcome,
            });
        }
    }

    debug!(
        "{:<12} --> 만료 스윕 완료: {}건 종료",
        "Scheduler",
        events.len()
    );
    events
}

// endregion: --- Expiry Sweep
