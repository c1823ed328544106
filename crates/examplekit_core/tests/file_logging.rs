use examplekit_core::{
    do_example2, flush_logging, init_logging, logging_status, ExtendedExampleParams,
};
use std::fs;

#[test]
fn operation_records_reach_the_log_file() {
    let log_dir = tempfile::tempdir().expect("create temp log dir");
    let log_dir_str = log_dir
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();

    init_logging("info", &log_dir_str).expect("logging init");
    assert_eq!(
        logging_status().map(|(level, _)| level),
        Some("info")
    );

    do_example2(&ExtendedExampleParams {
        a: Some("file-marker".to_string()),
        b: Some(9),
        ..ExtendedExampleParams::default()
    });
    flush_logging();

    let contents: String = fs::read_dir(log_dir.path())
        .expect("read log dir")
        .map(|entry| entry.expect("log dir entry").path())
        .filter(|path| path.is_file())
        .map(|path| fs::read_to_string(path).expect("read log file"))
        .collect();

    assert!(contents.contains("event=core_init module=core status=ok level=info"));
    assert!(contents.contains(
        r#"event=do_example2 module=core a="file-marker" b=9 c=null d=null e=null f=null"#
    ));
}

#[test]
fn init_logging_rejects_relative_directory() {
    let err = init_logging("info", "relative/logs").expect_err("relative dir must fail");
    assert!(err.contains("absolute"));
}
