/// 대화형 메뉴 루프
/// 원시 입력(문자열, 숫자, 날짜)을 파싱해 코어 연산을 호출하고 결과를 텍스트로 출력하는
/// 글루 계층. 코어는 이 계층의 존재를 알지 못한다.
// region:    --- Imports
use crate::auction::events::{AuctionEvent, CloseOutcome};
use crate::bidding::commands::{
    handle_delete_item, handle_list_item, handle_place_bid, handle_update_floor_price,
    DeleteItemCommand, ListItemCommand, PlaceBidCommand, UpdateFloorPriceCommand,
};
use crate::bidding::model::Item;
use crate::error::AuctionError;
use crate::identity::{self, Session};
use crate::messaging;
use crate::query::handlers as query;
use crate::report;
use crate::scheduler;
use crate::store::AuctionStore;
use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::io::{self, BufRead, Write};
use tracing::info;

// endregion: --- Imports

// region:    --- Shell

/// 메뉴 루프 실행
/// 유일한 세션 보유자. 로그아웃은 보유 중인 세션 값을 버리는 것으로 처리한다.
pub fn run(store: &mut AuctionStore) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut session: Option<Session> = None;

    loop {
        print_menu(session.as_ref());
        let choice = prompt(&mut input, "번호를 입력하세요: ")?;

        match choice.as_str() {
            // 회원 가입
            "1" => {
                let username = prompt(&mut input, "사용자 이름: ")?;
                let password = prompt(&mut input, "비밀번호: ")?;
                match identity::register(store, &username, &password) {
                    Ok(()) => println!("회원 가입이 완료되었습니다."),
                    Err(e) => print_error(&e),
                }
            }
            // 로그인
            "2" => {
                let username = prompt(&mut input, "사용자 이름: ")?;
                let password = prompt(&mut input, "비밀번호: ")?;
                match identity::authenticate(store, &username, &password) {
                    Ok(s) => {
                        println!("{}님, 환영합니다!", s.username);
                        session = Some(s);
                    }
                    Err(e) => print_error(&e),
                }
            }
            // 상품 등록
            "3" => {
                let name = prompt(&mut input, "상품 이름: ")?;
                let description = prompt(&mut input, "상품 설명: ")?;
                let Some(floor_price) = read_amount(&mut input, "최소 가격: ")? else {
                    continue;
                };
                let raw = prompt(&mut input, "종료 시간 (YYYY-MM-DD HH:MM:SS): ")?;
                // 날짜 파싱 실패는 코어에 도달하기 전에 거부로 변환한다
                let end_time = match parse_end_time(&raw) {
                    Ok(t) => t,
                    Err(e) => {
                        print_error(&e);
                        continue;
                    }
                };
                let cmd = ListItemCommand {
                    name,
                    description,
                    floor_price,
                    end_time,
                };
                match handle_list_item(cmd, session.as_ref(), store, Utc::now()) {
                    Ok(event) => print_event(&event),
                    Err(e) => print_error(&e),
                }
            }
            // 입찰
            "4" => {
                let item_name = prompt(&mut input, "상품 이름: ")?;
                let Some(amount) = read_amount(&mut input, "입찰 금액: ")? else {
                    continue;
                };
                let cmd = PlaceBidCommand { item_name, amount };
                match handle_place_bid(cmd, session.as_ref(), store, Utc::now()) {
                    Ok(event) => print_event(&event),
                    Err(e) => print_error(&e),
                }
            }
            // 진행 중인 경매
            "5" => {
                println!("\n진행 중인 경매:");
                for item in query::active_auctions(store, Utc::now()) {
                    print_item(item);
                }
                println!();
            }
            // 낙찰 결과
            "6" => {
                println!("\n낙찰 결과:");
                for entry in query::winners(store, Utc::now()) {
                    match &entry.outcome {
                        CloseOutcome::Won { winner, amount } => println!(
                            " - [{}] {} | 낙찰자: {} | 낙찰가: {}",
                            entry.item_id, entry.name, winner, amount
                        ),
                        CloseOutcome::NoBids => {
                            println!(" - [{}] {} | 입찰 없음", entry.item_id, entry.name)
                        }
                    }
                }
                println!();
            }
            // 상품 검색
            "7" => {
                let keyword = prompt(&mut input, "검색어: ")?;
                let results = query::search_items(store, &keyword);
                if results.is_empty() {
                    println!("검색 결과가 없습니다.");
                } else {
                    println!("\n'{}' 검색 결과:", keyword);
                    for item in results {
                        print_item(item);
                    }
                }
                println!();
            }
            // 상품 삭제
            "8" => {
                let item_name = prompt(&mut input, "삭제할 상품 이름: ")?;
                let cmd = DeleteItemCommand { item_name };
                match handle_delete_item(cmd, session.as_ref(), store) {
                    Ok(event) => print_event(&event),
                    Err(e) => print_error(&e),
                }
            }
            // 최소 가격 변경
            "9" => {
                let item_name = prompt(&mut input, "상품 이름: ")?;
                let Some(new_price) = read_amount(&mut input, "새 최소 가격: ")? else {
                    continue;
                };
                let cmd = UpdateFloorPriceCommand {
                    item_name,
                    new_price,
                };
                match handle_update_floor_price(cmd, session.as_ref(), store) {
                    Ok(event) => print_event(&event),
                    Err(e) => print_error(&e),
                }
            }
            // 프로필
            "10" => match query::profile(store, session.as_ref()) {
                Ok(profile) => {
                    println!("\n{}님의 프로필", profile.username);
                    println!("등록한 상품:");
                    for listed in &profile.listed_items {
                        println!(
                            " - [{}] {} | 최소 가격: {} | 종료: {} | 현재 최고 입찰가: {}",
                            listed.item_id,
                            listed.name,
                            listed.floor_price,
                            listed.end_time,
                            listed
                                .highest_bid
                                .map_or_else(|| "없음".to_string(), |v| v.to_string())
                        );
                    }
                    println!("넣은 입찰:");
                    for bid in &profile.placed_bids {
                        println!(
                            " - 상품: {} | 입찰 금액: {}",
                            bid.item_name, bid.amount
                        );
                    }
                    println!();
                }
                Err(e) => print_error(&e),
            },
            // 통계
            "11" => {
                let stats = report::statistics(store);
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
            // 메시지 전송
            "12" => {
                let recipient = prompt(&mut input, "수신자: ")?;
                let body = prompt(&mut input, "메시지: ")?;
                match messaging::send_message(store, session.as_ref(), &recipient, &body) {
                    Ok(()) => println!("메시지를 전송했습니다."),
                    Err(e) => print_error(&e),
                }
            }
            // 수신함
            "13" => match messaging::inbox(store, session.as_ref()) {
                Ok(messages) if messages.is_empty() => println!("수신한 메시지가 없습니다."),
                Ok(messages) => {
                    println!("\n수신함:");
                    for message in messages {
                        println!(" - {}: {}", message.sender, message.body);
                    }
                    println!();
                }
                Err(e) => print_error(&e),
            },
            // 만료 경매 종료
            "14" => {
                let events = scheduler::close_expired(store, Utc::now());
                if events.is_empty() {
                    println!("새로 종료된 경매가 없습니다.");
                }
                for event in &events {
                    print_event(event);
                }
            }
            // 로그아웃
            "15" => {
                if let Some(s) = session.take() {
                    println!("{}님, 안녕히 가세요!", s.username);
                }
            }
            // 종료
            "16" => {
                info!("{:<12} --> 셸 종료", "Shell");
                println!("온라인 경매 시뮬레이터를 종료합니다.");
                return Ok(());
            }
            _ => println!("잘못된 선택입니다. 다시 시도해주세요."),
        }
    }
}

// endregion: --- Shell

// region:    --- Helpers

/// 메뉴 출력
fn print_menu(session: Option<&Session>) {
    println!("\n=== 온라인 경매 시뮬레이터 ===");
    if let Some(session) = session {
        println!("(로그인: {})", session.username);
    }
    println!("1. 회원 가입");
    println!("2. 로그인");
    println!("3. 상품 등록");
    println!("4. 입찰");
    println!("5. 진행 중인 경매");
    println!("6. 낙찰 결과");
    println!("7. 상품 검색");
    println!("8. 상품 삭제");
    println!("9. 최소 가격 변경");
    println!("10. 프로필");
    println!("11. 통계");
    println!("12. 메시지 전송");
    println!("13. 수신함");
    println!("14. 만료 경매 종료");
    println!("15. 로그아웃");
    println!("16. 종료");
}

/// 프롬프트 출력 후 한 줄 입력
fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("입력 스트림이 종료되었습니다");
    }
    Ok(line.trim().to_string())
}

/// 금액 입력 (파싱 실패 시 경고 출력 후 None)
fn read_amount(input: &mut impl BufRead, label: &str) -> Result<Option<i64>> {
    let raw = prompt(input, label)?;
    match raw.parse::<i64>() {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            println!("잘못된 숫자 형식입니다: {raw}");
            Ok(None)
        }
    }
}

/// 종료 시간 파싱
/// 형식 오류는 코어에 전달하지 않고 `InvalidEndTime` 거부로 변환한다.
fn parse_end_time(raw: &str) -> Result<DateTime<Utc>, AuctionError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| AuctionError::InvalidEndTime)
}

/// 상품 한 줄 출력
fn print_item(item: &Item) {
    println!(
        " - [{}] {} | 설명: {} | 최소 가격: {} | 종료: {} | 현재 최고 입찰가: {}",
        item.id,
        item.name,
        item.description,
        item.floor_price,
        item.end_time,
        item.highest_bid
            .as_ref()
            .map_or_else(|| "없음".to_string(), |bid| bid.amount.to_string())
    );
}

/// 이벤트 결과 출력
fn print_event(event: &AuctionEvent) {
    match event {
        AuctionEvent::ItemListed { item_id, name, .. } => {
            println!("상품이 등록되었습니다: [{item_id}] {name}")
        }
        AuctionEvent::BidPlaced { amount, .. } => {
            println!("입찰이 완료되었습니다: {amount}")
        }
        AuctionEvent::ItemDeleted { item_id, name } => {
            println!("상품이 삭제되었습니다: [{item_id}] {name}")
        }
        AuctionEvent::FloorPriceUpdated { new_price, .. } => {
            println!("최소 가격이 변경되었습니다: {new_price}")
        }
        AuctionEvent::AuctionClosed {
            item_id,
            name,
            outcome,
        } => match outcome {
            CloseOutcome::Won { winner, amount } => println!(
                "경매 종료: [{item_id}] {name} | 낙찰자: {winner} | 낙찰가: {amount}"
            ),
            CloseOutcome::NoBids => println!("경매 종료: [{item_id}] {name} | 입찰 없음"),
        },
    }
}

/// 에러 출력 (코드 포함)
fn print_error(error: &AuctionError) {
    println!("오류: {} (code: {})", error, error.code());
}

// endregion: --- Helpers
