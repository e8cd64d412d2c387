//! `serve` end to end: watcher feeding the HTTP endpoint

use crate::common::http::{free_port, get, wait_until};
use crate::wall;
use anyhow::Result;
use std::time::Duration;
use tempfile::TempDir;

/// Kills the server when the test ends, pass or fail
struct ServerGuard(std::process::Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

#[test]
fn test_serve_reports_new_images() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("imagewall.toml"), "[folders]\ncount = 2\n")?;
    let port = free_port()?;
    let port_arg = port.to_string();

    let _server = ServerGuard(wall!(dir.path(), "serve", "--port", port_arg.as_str()).spawn()?);

    assert!(
        wait_until(Duration::from_secs(10), || get(port, "/health").is_ok()),
        "server did not come up"
    );

    let (status, body) = get(port, "/latest-images")?;
    assert_eq!(status, 200);
    assert!(body.contains("/static/image1/Place1.jpg"));
    assert!(body.contains("/static/image2/Place2.jpg"));

    std::fs::write(dir.path().join("static/image2/fresh.PNG"), b"png")?;
    assert!(wait_until(Duration::from_secs(5), || {
        get(port, "/latest-images")
            .map(|(_, body)| body.contains("/static/image2/fresh.PNG"))
            .unwrap_or(false)
    }));

    let (status, body) = get(port, "/static/image2/fresh.PNG")?;
    assert_eq!(status, 200);
    assert!(body.contains("png"));

    let (status, _) = get(port, "/latest-images/image3")?;
    assert_eq!(status, 404);

    // Reserved characters in file names come back escaped and still resolve
    std::fs::write(dir.path().join("static/image1/shot #1.jpg"), b"jpg")?;
    let encoded = "/static/image1/shot%20%231.jpg";
    assert!(wait_until(Duration::from_secs(5), || {
        get(port, "/latest-images/image1")
            .map(|(_, body)| body.contains(encoded))
            .unwrap_or(false)
    }));

    let (status, body) = get(port, encoded)?;
    assert_eq!(status, 200);
    assert!(body.contains("jpg"));

    Ok(())
}
