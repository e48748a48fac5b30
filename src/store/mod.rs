// region:    --- Imports
use crate::bidding::model::{Item, ItemId};
use crate::identity::Account;
use std::collections::HashMap;

// endregion: --- Imports

// region:    --- AuctionStore

/// 인메모리 상태 저장소
/// 모든 커맨드/쿼리 핸들러에 참조로 전달되는 프로세스 전역 상태.
/// 영속화 없이 프로세스 종료 시 모든 데이터가 사라진다.
#[derive(Default)]
pub struct AuctionStore {
    accounts: HashMap<String, Account>,
    items: Vec<Item>,
    next_item_id: ItemId,
}

impl AuctionStore {
    /// 저장소 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 계정 조회
    pub fn account(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    /// 계정 조회 (가변)
    pub fn account_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    /// 사용자 이름 등록 여부
    pub fn contains_account(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// 계정 추가 (중복 검사는 identity 계층에서 수행)
    pub fn insert_account(&mut self, account: Account) {
        self.accounts.insert(account.username.clone(), account);
    }

    /// 전체 상품 목록 (등록 순서)
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// 전체 상품 목록 (가변)
    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// id로 상품 조회
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// id로 상품 조회 (가변)
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// 이름으로 상품 조회 (등록 순서상 첫 번째 일치 항목)
    /// 상품 이름은 고유하지 않으므로 첫 번째 일치 항목을 반환한다.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// 다음 상품 id 발급
    pub fn allocate_item_id(&mut self) -> ItemId {
        self.next_item_id += 1;
        self.next_item_id
    }

    /// 상품 추가
    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// 상품 제거 (등록 순서 유지)
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }
}

// endregion: --- AuctionStore
