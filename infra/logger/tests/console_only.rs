use dtc_logger::{LevelFilter, Logger};

#[test]
fn console_only_init_has_no_file_guard() {
    let logger = Logger::builder()
        .name("console-only")
        .console(true)
        .level(LevelFilter::DEBUG)
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "no worker guard expected without a file layer");
}
