use std::path::Path;
use std::process::Command;

use fbcheck::config::video::DEFAULT_DEVICE_PATH;

#[test]
fn test_missing_framebuffer_exits_with_one() {
    if Path::new(DEFAULT_DEVICE_PATH).exists() {
        eprintln!("{} present, skipping", DEFAULT_DEVICE_PATH);
        return;
    }

    let output = Command::new(env!("CARGO_BIN_EXE_fbcheck"))
        .output()
        .expect("cannot run fbcheck");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr
            .lines()
            .any(|line| line.starts_with("Cannot open framebuffer: cannot open /dev/fb0")),
        "stderr: {stderr}"
    );
}
