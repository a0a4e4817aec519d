//! # `Hype` demo
//!
//! A small application built with the `hype` library. Every registered
//! command becomes a `--<name> <VALUE>` option and runs once per invocation.
//!
//! ```sh
//! hype --greet World --add 2
//! ```
//!
//! Set `RUST_LOG=debug` to see registration and dispatch events.

use anyhow::Result;
use hype::{App, AppConfig, ArgType, Function, HypeError};
use serde_json::Value;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn build_app() -> Result<App> {
    let mut app = App::with_config(AppConfig {
        program: "hype".to_owned(),
        version: Some(env!("CARGO_PKG_VERSION").to_owned()),
        ..AppConfig::default()
    });
    app.set_banner("Hype demo application")?;

    let greet = Function::unary("greet", "name", |name: Option<String>| {
        if let Some(name) = name {
            println!("Hello {name}!");
        }
        Ok(())
    });
    app.command(&greet)
        .description("Greet someone by name")
        .register()?;

    let add = Function::new("add", |args: Vec<Value>| {
        let total: i64 = args.iter().filter_map(Value::as_i64).sum();
        println!("Sum: {total}");
        Ok(())
    })
    .untyped("a")
    .untyped("b");
    app.command(&add)
        .description("Add numbers")
        .arg_type(ArgType::Integer)
        .value(0)
        .register()?;

    let shout = Function::unary("shout", "text", |text: Option<String>| {
        if let Some(text) = text {
            println!("{}", text.to_uppercase());
        }
        Ok(())
    });
    app.command(&shout)
        .description("Print text in upper case")
        .deprecated(true)
        .register()?;

    Ok(app)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_target(false).with_env_filter(filter).init();

    match build_app().and_then(App::run) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            if let Some(HypeError::HelpRequested { rendered }) = err.downcast_ref::<HypeError>() {
                print!("{rendered}");
                std::process::exit(0);
            }
            error!("{:#}", err);
            std::process::exit(err.downcast_ref::<HypeError>().map_or(1, HypeError::exit_code));
        }
    }
}
