/// 사용자 간 메시지
/// 1. 메시지 전송
/// 2. 수신함 조회
// region:    --- Imports
use crate::error::AuctionError;
use crate::identity::{require_session, Session};
use crate::store::AuctionStore;
use serde::{Deserialize, Serialize};
use tracing::info;

// endregion: --- Imports

// region:    --- Models

/// 수신 메시지 (보낸 사람, 본문)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub body: String,
}

// endregion: --- Models

// region:    --- Operations

/// 1. 메시지 전송
pub fn send_message(
    store: &mut AuctionStore,
    session: Option<&Session>,
    recipient: &str,
    body: &str,
) -> Result<(), AuctionError> {
    let session = require_session(session)?;

    let message = Message {
        sender: session.username.clone(),
        body: body.to_string(),
    };
    store
        .account_mut(recipient)
        .ok_or(AuctionError::RecipientNotFound)?
        .inbox
        .push(message);

    info!(
        "{:<12} --> 메시지 전송 완료: {} -> {}",
        "Messaging", session.username, recipient
    );
    Ok(())
}

/// 2. 수신함 조회 (수신 순서)
pub fn inbox<'a>(
    store: &'a AuctionStore,
    session: Option<&Session>,
) -> Result<&'a [Message], AuctionError> {
    let session = require_session(session)?;
    info!("{:<12} --> 수신함 조회: {}", "Messaging", session.username);
    store
        .account(&session.username)
        .map(|account| account.inbox.as_slice())
        .ok_or(AuctionError::NotAuthenticated)
}

// endregion: --- Operations
