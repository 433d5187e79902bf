//! Example: Classify files
//!
//! Prints the file type, icon and open decision for each path given on the
//! command line. Set `RUST_LOG=ftreg=debug` to see how each file was resolved.

use std::sync::Arc;

use ftreg::{default_registry, FileItem, FileOpener, LocalTextProbe, StaticPolicy};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = default_registry();
    let opener = FileOpener::new(
        registry.clone(),
        Arc::new(LocalTextProbe::new()),
        Arc::new(StaticPolicy::new(false)),
    );
    let mut events = opener.subscribe();

    for arg in std::env::args().skip(1) {
        let item = match FileItem::from_path(&arg).await {
            Ok(item) => item,
            Err(e) => {
                eprintln!("{}: {}", arg, e);
                continue;
            }
        };

        let icon = registry.resolve_icon(&item);
        let file_type = registry
            .resolve(item.name())
            .map(|t| t.label())
            .unwrap_or("(unregistered)");
        println!("{}", arg);
        println!("  type: {}", file_type);
        println!("  icon: {} ({})", icon.name(), icon.description());

        if item.is_directory() {
            continue;
        }

        let decision = opener.classify_for_open(&item, true).await;
        println!("  open: {:?}", decision);
        while let Ok(event) = events.try_recv() {
            println!("  event: {:?}", event);
        }
    }
}
