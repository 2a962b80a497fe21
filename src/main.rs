//! # 매운 음식 퀴즈(spicy-quiz) 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행 (스키마 + 매운맛 단계/카테고리 시드)
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작

// ── 모듈 선언 ──
// 각 `mod`는 같은 디렉토리의 `<이름>.rs` 또는 `<이름>/mod.rs`를 불러옵니다.
mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;

// ── 외부 크레이트 및 모듈에서 필요한 항목 가져오기 ──
use anyhow::Result; // main에서는 에러 종류를 구분하지 않으므로 anyhow로 한데 묶습니다
use config::Config; // 환경변수에서 읽은 서버 설정
use routes::AppState; // 핸들러들이 공유하는 상태 (DB 풀)
use sqlx::sqlite::SqlitePoolOptions; // 연결 풀 크기 등을 지정하는 빌더
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // .with() / .init() 확장 메서드

// #[tokio::main]: main을 async로 쓸 수 있게 tokio 런타임을 띄워 주는 매크로
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 spicy_quiz, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spicy_quiz=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!(
        "Starting spicy-quiz server on {}:{} (prefix {})",
        config.host,
        config.port,
        config.api_prefix
    );

    // ── 4단계: SQLite 연결 풀 생성 ──
    // 파일 DB라면 상위 디렉토리가 없을 때 먼저 만듭니다. (예: "sqlite:data/spicy.db" → "data/")
    if let Some(dir) = config.database_dir() {
        if !dir.exists() {
            tokio::fs::create_dir_all(&dir).await?;
            tracing::info!("Created database directory: {}", dir.display());
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // ── 5단계: 데이터베이스 마이그레이션 실행 ──
    // sqlx::migrate!는 컴파일 타임에 ./migrations 폴더의 SQL 파일들을 포함시킵니다.
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // ── 6단계: 라우터 설정 ──
    // SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
    let state = AppState { pool: pool.clone() };
    let app = routes::router(state, &config.api_prefix);

    // ── 7단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // serve()는 종료될 때까지 반환하지 않습니다
    axum::serve(listener, app).await?;

    Ok(())
}
