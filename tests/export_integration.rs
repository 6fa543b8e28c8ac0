// SPDX-License-Identifier: MPL-2.0
use image_preview::error::ExportError;
use image_preview::media::{DownloadExporter, ExportRequest, ResourceExporter};
use std::fs;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves a single HTTP response on a local port and returns its base URL.
async fn serve_once(status_line: &'static str, body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let address = listener.local_addr().expect("Failed to read address");

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0_u8; 1024];
            let _ = socket.read(&mut request).await;
            let header = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = socket.write_all(header.as_bytes()).await;
            let _ = socket.write_all(body).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{address}")
}

#[tokio::test]
async fn local_file_is_copied_without_overwriting() {
    let source_dir = tempdir().expect("Failed to create source dir");
    let target_dir = tempdir().expect("Failed to create target dir");
    let source = source_dir.path().join("photo.png");
    fs::write(&source, b"first").expect("Failed to write source");
    fs::write(target_dir.path().join("photo.png"), b"existing").expect("Failed to write");

    let exporter = DownloadExporter::new(target_dir.path());
    let location = source.to_string_lossy().to_string();
    let saved = exporter
        .export(ExportRequest::for_location(&location))
        .await
        .expect("Export should succeed");

    assert_eq!(saved, target_dir.path().join("photo (1).png"));
    assert_eq!(fs::read(&saved).expect("read copy"), b"first");
    assert_eq!(
        fs::read(target_dir.path().join("photo.png")).expect("read original"),
        b"existing"
    );
}

#[tokio::test]
async fn file_url_is_accepted() {
    let source_dir = tempdir().expect("Failed to create source dir");
    let target_dir = tempdir().expect("Failed to create target dir");
    let source = source_dir.path().join("scan.tiff");
    fs::write(&source, b"tiff").expect("Failed to write source");

    let location = format!("file://{}", source.display());
    let saved = DownloadExporter::new(target_dir.path())
        .export(ExportRequest::for_location(&location))
        .await
        .expect("Export should succeed");

    assert_eq!(saved, target_dir.path().join("scan.tiff"));
}

#[tokio::test]
async fn missing_local_source_is_invalid_location() {
    let target_dir = tempdir().expect("Failed to create target dir");
    let location = target_dir.path().join("nope.png").to_string_lossy().to_string();

    let result = DownloadExporter::new(target_dir.path().join("out"))
        .export(ExportRequest::for_location(&location))
        .await;

    assert!(matches!(result, Err(ExportError::InvalidLocation(_))));
}

#[tokio::test]
async fn remote_image_is_streamed_to_disk() {
    let base = serve_once("200 OK", b"remote-bytes").await;
    let target_dir = tempdir().expect("Failed to create target dir");

    let saved = DownloadExporter::new(target_dir.path())
        .export(ExportRequest::for_location(&format!(
            "{base}/gallery/sunset.jpg?size=large"
        )))
        .await
        .expect("Download should succeed");

    assert_eq!(saved, target_dir.path().join("sunset.jpg"));
    assert_eq!(fs::read(&saved).expect("read download"), b"remote-bytes");
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let base = serve_once("404 Not Found", b"").await;
    let target_dir = tempdir().expect("Failed to create target dir");

    let result = DownloadExporter::new(target_dir.path())
        .export(ExportRequest::for_location(&format!("{base}/missing.png")))
        .await;

    assert_eq!(result, Err(ExportError::HttpStatus(404)));
    assert!(!target_dir.path().join("missing.png").exists());
}
