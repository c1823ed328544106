//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `examplekit_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use examplekit_core::{ExampleParams, ExtendedExampleParams};

fn main() {
    println!("examplekit_core version={}", examplekit_core::core_version());

    let log_dir = std::env::temp_dir().join("examplekit-cli-logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = examplekit_core::init_logging(examplekit_core::default_log_level(), dir)
            {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: temp dir is not valid UTF-8"),
    }

    if let Some(err) = examplekit_core::do_example(&ExampleParams::default()).err() {
        println!("do_example error domain={} message={err}", err.is_domain());
    }

    examplekit_core::do_example2(&ExtendedExampleParams {
        a: Some("x".to_string()),
        b: Some(1),
        c: Some(2),
        d: Some(3),
        e: Some(4),
        f: Some(5),
    });
    println!("do_example2 ok");

    if let Some(err) = examplekit_core::do_example3(&ExampleParams::with_text("y")).err() {
        println!("do_example3 error domain={} message={err}", err.is_domain());
    }

    log::info!("event=cli_exit module=cli status=ok");
    examplekit_core::flush_logging();
}
