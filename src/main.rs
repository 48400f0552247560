//! Demo server exposing a small users domain over GET-only JSON endpoints.

use anyhow::Result;
use clap::Parser;
use getjson::{serve, Controller, JsonValue, ParamSpec, ParamType, RuntimeConfig, ToJson};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, ToJson)]
struct Address {
    street: String,
    city: String,
}

#[derive(Debug, Clone, Copy, ToJson)]
enum Role {
    Admin,
    Editor,
    Viewer,
}

#[derive(Debug, Clone, ToJson)]
struct User {
    id: i64,
    name: String,
    address: Option<Address>,
    tags: Vec<String>,
    role: Role,
}

fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
            address: Some(Address {
                street: "123 Main St".to_string(),
                city: "Anytown".to_string(),
            }),
            tags: vec!["tag1".to_string(), "tag2".to_string()],
            role: Role::Editor,
        },
        User {
            id: 2,
            name: "Jane Roe".to_string(),
            address: None,
            tags: vec!["tag2".to_string()],
            role: Role::Admin,
        },
        User {
            id: 3,
            name: "Sam Low".to_string(),
            address: Some(Address {
                street: "9 High Rd".to_string(),
                city: "Smallville".to_string(),
            }),
            tags: Vec::new(),
            role: Role::Viewer,
        },
    ]
}

fn users_controller() -> Controller {
    let all = sample_users();
    let by_id = all.clone();
    let by_tag = all.clone();
    // Registration order decides ties: the literal "search" route must come
    // before the "{id}" wildcard.
    Controller::new("users")
        .operation("", vec![], move |_args| Ok(all.clone()))
        .operation(
            "search",
            vec![
                ParamSpec::query("tag", ParamType::String),
                ParamSpec::query("limit", ParamType::Integer).nullable(),
            ],
            move |args| {
                let tag = args.str(0)?.to_string();
                let limit = args
                    .opt_int(1)
                    .and_then(|n| usize::try_from(n).ok())
                    .unwrap_or(50);
                let hits: Vec<User> = by_tag
                    .iter()
                    .filter(|user| user.tags.iter().any(|t| *t == tag))
                    .take(limit)
                    .cloned()
                    .collect();
                Ok(hits)
            },
        )
        .operation(
            "{id}",
            vec![ParamSpec::path("id", ParamType::Integer)],
            move |args| {
                let id = args.int(0)?;
                Ok(by_id.iter().find(|user| user.id == id).cloned())
            },
        )
}

fn status_controller() -> Controller {
    Controller::new("status").operation("", vec![], |_args| {
        Ok(JsonValue::object([(
            "status".to_string(),
            "ok".to_json(),
        )]))
    })
}

#[derive(Parser, Debug)]
#[command(name = "getjson", about = "Demo JSON-over-GET server")]
struct Cli {
    /// Address to bind, host:port.
    #[arg(long, env = "GETJSON_ADDR", default_value = "127.0.0.1:8080")]
    addr: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    RuntimeConfig::from_env().apply();

    let handle = serve(
        vec![users_controller(), status_controller()],
        cli.addr.as_str(),
    )?;
    info!(addr = %cli.addr, "Server started");
    if handle.join().is_err() {
        anyhow::bail!("server coroutine panicked");
    }
    Ok(())
}
