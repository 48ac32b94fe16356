//! # Demo: one-shot bootstrap
//!
//! Runs a single pre-selected handler without a menu. Pass `--fail` to see
//! the failure propagate and the process exit non-zero.
//!
//! ## Run
//! ```bash
//! cargo run --example one_shot
//! cargo run --example one_shot -- --fail
//! ```

use std::sync::Arc;

use menuvisor::{bootstrap, Action, HandlerError, HandlerSpec, ServiceMap};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt().init();

    let fail = std::env::args().any(|a| a == "--fail");
    let provider = Arc::new(ServiceMap::new().scoped(|| String::from("migration db handle")));

    let spec = HandlerSpec::new("migrate").with_action(Action::method_sync(move |scope| {
        if fail {
            return Err(HandlerError::fail("migration step 3 refused"));
        }
        let db: Arc<String> = scope
            .service()
            .ok_or_else(|| HandlerError::fail("db handle not registered"))?;
        println!("migrated using {db}");
        Ok(())
    }));

    if let Err(e) = bootstrap::run_spec(provider.as_ref(), &spec).await {
        eprintln!("{}", e.render_chain());
        std::process::exit(e.exit_code());
    }
}
