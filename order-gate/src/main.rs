use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::models::{Order, User};

use order_gate::db::seed::seed_defaults;
use order_gate::{
    CatalogSnapshot, GateState, Preset, ValidationError, print_banner, setup_environment,
    validate_order_transition,
};

const USAGE: &str = "usage: order-gate seed | order-gate validate <request.json>";

/// One order transition to check
#[derive(Debug, Deserialize)]
struct ValidationRequest {
    preset: Preset,
    order: Order,
    owner: User,
    /// Defaults to the owner
    #[serde(default)]
    acting: Option<User>,
    /// Defaults to the order's dispatch date
    #[serde(default)]
    dispatch_date: Option<NaiveDate>,
    /// Business-time clock override
    #[serde(default)]
    now: Option<NaiveDateTime>,
    #[serde(default)]
    snapshot: CatalogSnapshot,
}

#[derive(Debug, Serialize)]
struct Verdict {
    order_id: i64,
    preset: Preset,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // 1. 设置环境 (dotenv, 日志)
    let config = setup_environment()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match args.as_slice() {
        [cmd] if cmd == "seed" => Command::Seed,
        [cmd, path] if cmd == "validate" => Command::Validate(path.clone()),
        _ => {
            eprintln!("{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };

    // 2. 初始化运行时状态 (时区, 数据库)
    let state = GateState::initialize(&config).await?;

    // 3. 执行命令
    match command {
        Command::Seed => {
            print_banner();
            seed_defaults(&state.db).await?;
            tracing::info!("✅ Defaults seeded");
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate(path) => validate(&state, Path::new(&path)).await,
    }
}

enum Command {
    Seed,
    Validate(String),
}

async fn validate(state: &GateState, path: &Path) -> Result<ExitCode> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    let request: ValidationRequest = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid request {}", path.display()))?;

    if !request.snapshot.is_empty() {
        request.snapshot.import(&state.catalog).await?;
    }

    let ctx = match request.now {
        Some(now) => state.context_at(now),
        None => state.context(),
    };
    let acting = request.acting.as_ref().unwrap_or(&request.owner);
    let date = request.dispatch_date.unwrap_or(request.order.dispatch_date);
    let chain = request.preset.chain();

    let outcome =
        validate_order_transition(&ctx, &request.order, acting, &request.owner, date, &chain).await;

    let message = match outcome {
        Ok(()) => None,
        Err(ValidationError::Rejected(message)) => Some(message),
        Err(e) => {
            tracing::error!(order_id = request.order.id, error = %e, "Validation aborted");
            return Err(e.into());
        }
    };

    let verdict = Verdict {
        order_id: request.order.id,
        preset: request.preset,
        accepted: message.is_none(),
        message,
    };
    println!("{}", serde_json::to_string_pretty(&verdict)?);

    Ok(if verdict.accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
