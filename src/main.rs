// region:    --- Imports
use anyhow::Result;
use auction_sim::shell;
use auction_sim::store::AuctionStore;
use tracing::info;
// endregion: --- Imports

// region:    --- Main
fn main() -> Result<()> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 인메모리 상태 저장소 생성 (프로세스 종료 시 모든 데이터 소멸)
    let mut store = AuctionStore::new();
    info!("{:<12} --> 저장소 초기화 성공", "Main");

    // 대화형 셸 실행
    shell::run(&mut store)?;
    Ok(())
}
// endregion: --- Main
