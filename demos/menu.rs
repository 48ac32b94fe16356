//! # Demo: interactive menu
//!
//! A looping menu over three handlers sharing a scoped service. Shows:
//! - Registering handlers with explicit metadata and actions.
//! - Deterministic ordering (Gamma sorts first via its negative order).
//! - Failure isolation: "Flaky" fails, the session keeps running.
//!
//! ## Run
//! ```bash
//! cargo run --example menu
//! ```
//!
//! Select entries by number; press Enter on an empty line to quit.

use std::sync::Arc;

use menuvisor::{
    Action, HandlerError, HandlerSpec, MenuSession, ServiceMap, SessionConfig, Settings,
};

/// Scoped service: one fresh instance per dispatched selection.
struct RequestContext {
    id: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 1. Resolve settings once at startup (env and args over defaults).
    let settings = Settings::builder()
        .with_pairs([("menu.title", "menuvisor demo")])
        .with_env_prefix("MENUVISOR_")
        .with_args(std::env::args().skip(1))
        .build();
    let cfg = SessionConfig::from_settings(&settings);

    // 2. Root provider with one scoped service.
    let provider = Arc::new(ServiceMap::new().scoped(|| RequestContext {
        id: std::process::id(),
    }));

    // 3. Register handlers and build the session (scan happens here).
    let session = MenuSession::builder(cfg)
        .register(
            HandlerSpec::new("greet")
                .with_menu("Greet", 0)
                .with_action(Action::method_sync(|scope| {
                    let ctx: Arc<RequestContext> = scope
                        .service()
                        .ok_or_else(|| HandlerError::fail("context not registered"))?;
                    println!("hello from scope of process {}", ctx.id);
                    Ok(())
                })),
        )
        .register(
            HandlerSpec::new("slow")
                .with_menu("Slow Work", 1)
                .with_action(Action::method_async(|_| async {
                    tokio::time::sleep(std::time::Duration::from_millis(300)).await;
                    println!("done");
                    Ok(())
                })),
        )
        .register(
            HandlerSpec::new("flaky")
                .with_menu("Flaky", -1)
                .with_action(Action::method_sync(|_| {
                    Err(HandlerError::fail("this one always fails"))
                })),
        )
        .build(provider);

    // 4. Run, mapping failures to exit codes.
    let session = match session {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e.render_chain());
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = session.run().await {
        eprintln!("{}", e.render_chain());
        std::process::exit(e.exit_code());
    }
}
