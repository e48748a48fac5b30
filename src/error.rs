// region:    --- Imports
use serde::Serialize;
use thiserror::Error;

// endregion: --- Imports

// region:    --- AuctionError

/// 경매 도메인 에러
/// 모든 에러는 호출자에게 반환되는 복구 가능한 결과이며, 프로세스를 중단시키지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum AuctionError {
    /// 이미 등록된 사용자 이름
    #[error("이미 존재하는 사용자 이름입니다.")]
    AlreadyExists,

    /// 사용자 이름 또는 비밀번호 불일치
    #[error("사용자 이름 또는 비밀번호가 올바르지 않습니다.")]
    InvalidCredentials,

    /// 로그인하지 않은 상태에서의 요청
    #[error("로그인이 필요합니다.")]
    NotAuthenticated,

    /// 종료 시간이 현재 시간보다 이전이거나 형식이 잘못됨
    #[error("종료 시간은 미래여야 합니다.")]
    InvalidEndTime,

    /// 상품을 찾을 수 없음
    #[error("상품을 찾을 수 없습니다.")]
    ItemNotFound,

    /// 이미 종료된 경매에 대한 입찰
    #[error("경매가 이미 종료되었습니다.")]
    AuctionEnded,

    /// 최소 가격 또는 현재 최고 입찰가 이하의 입찰
    #[error("입찰 금액은 {min}보다 커야 합니다.")]
    BidTooLow { min: i64 },

    /// 입찰이 존재하는 상품에 대한 수정/삭제
    #[error("이미 입찰이 존재하는 상품입니다.")]
    HasBids,

    /// 수신자를 찾을 수 없음
    #[error("수신자를 찾을 수 없습니다.")]
    RecipientNotFound,
}

impl AuctionError {
    /// 클라이언트 식별용 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AuctionError::AlreadyExists => "ALREADY_EXISTS",
            AuctionError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuctionError::NotAuthenticated => "NOT_AUTHENTICATED",
            AuctionError::InvalidEndTime => "INVALID_END_TIME",
            AuctionError::ItemNotFound => "ITEM_NOT_FOUND",
            AuctionError::AuctionEnded => "ALREADY_ENDED",
            AuctionError::BidTooLow { .. } => "LOW_BID",
            AuctionError::HasBids => "HAS_BIDS",
            AuctionError::RecipientNotFound => "RECIPIENT_NOT_FOUND",
        }
    }
}

// endregion: --- AuctionError
