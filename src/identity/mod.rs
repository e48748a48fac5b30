/// 사용자 계정 관리
/// 1. 회원 가입
/// 2. 로그인 (세션 발급)
// region:    --- Imports
use crate::bidding::model::ItemId;
use crate::error::AuctionError;
use crate::messaging::Message;
use crate::store::AuctionStore;
use serde::{Deserialize, Serialize};
use tracing::info;

// endregion: --- Imports

// region:    --- Models

/// 사용자 계정
/// 가입 시 생성되며 삭제되지 않는다. 비밀번호는 평문 저장 (시뮬레이터 한정).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
    /// 본인이 등록한 상품 id 목록
    pub item_ids: Vec<ItemId>,
    /// 본인이 넣은 입찰 기록
    pub placed_bids: Vec<PlacedBid>,
    /// 수신 메시지함 (수신 순서)
    pub inbox: Vec<Message>,
}

impl Account {
    fn new(username: String, password: String) -> Self {
        Self {
            username,
            password,
            item_ids: Vec::new(),
            placed_bids: Vec::new(),
            inbox: Vec::new(),
        }
    }
}

/// 계정별 입찰 기록
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedBid {
    pub item_id: ItemId,
    pub amount: i64,
}

/// 인증된 세션
/// `authenticate`가 발급하며, 인증이 필요한 모든 작업에 명시적으로 전달된다.
/// 로그아웃은 이 값을 버리는 것으로 끝난다.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
}

// endregion: --- Models

// region:    --- Operations

/// 회원 가입
pub fn register(
    store: &mut AuctionStore,
    username: &str,
    password: &str,
) -> Result<(), AuctionError> {
    if store.contains_account(username) {
        return Err(AuctionError::AlreadyExists);
    }
    store.insert_account(Account::new(username.to_string(), password.to_string()));
    info!("{:<12} --> 회원 가입 완료: {}", "Identity", username);
    Ok(())
}

/// 로그인
/// 인증 성공 시에만 세션을 발급하며, 실패 시 상태 변화가 없다.
pub fn authenticate(
    store: &AuctionStore,
    username: &str,
    password: &str,
) -> Result<Session, AuctionError> {
    match store.account(username) {
        Some(account) if account.password == password => {
            info!("{:<12} --> 로그인 성공: {}", "Identity", username);
            Ok(Session {
                username: username.to_string(),
            })
        }
        _ => Err(AuctionError::InvalidCredentials),
    }
}

/// 세션 검증
/// 인증이 필요한 핸들러가 다른 모든 검증에 앞서 호출한다.
pub fn require_session(session: Option<&Session>) -> Result<&Session, AuctionError> {
    session.ok_or(AuctionError::NotAuthenticated)
}

// endregion: --- Operations
