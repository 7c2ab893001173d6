use std::path::PathBuf;

#[test]
fn uncreatable_log_path_falls_back_to_stderr() {
    let path = PathBuf::from("/proc/definitely_missing/dir/log.txt");

    debug_overlay::logging::init(true, Some(path.clone()));
    tracing::info!("still logging");

    assert!(!path.exists());
}
