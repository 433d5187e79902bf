use std::sync::Arc;

use ftreg::{FileIcon, FileItem, FileOpener, FileTypeEvent, FileTypeRegistry, LocalTextProbe, OpenDecision, StaticPolicy, TEXT_TYPE_ID};

#[tokio::test]
async fn test_local_probe_lifecycle() {
    // 1. Create files without registered extensions
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let text_path = dir.path().join("results.out123");
    let binary_path = dir.path().join("results.bin123");
    tokio::fs::write(&text_path, "iteration 1: ok\niteration 2: ok\n").await.expect("Failed to write");
    tokio::fs::write(&binary_path, [0x7f, b'E', b'L', b'F', 2, 1, 1, 0, 0, 0]).await.expect("Failed to write");

    // 2. Build opener over the local probe
    let opener = FileOpener::new(
        Arc::new(FileTypeRegistry::builtin()),
        Arc::new(LocalTextProbe::new()),
        Arc::new(StaticPolicy::new(false)),
    );
    let mut rx = opener.subscribe();

    // 3. Text content opens as plain text
    let text_item = FileItem::from_path(&text_path).await.expect("Failed to stat");
    assert_eq!(opener.classify_for_open(&text_item, true).await, OpenDecision::ProbedText);
    match rx.recv().await.expect("event") {
        FileTypeEvent::Open { type_id, path, .. } => {
            assert_eq!(type_id, TEXT_TYPE_ID);
            assert_eq!(path, text_path);
        }
        other => panic!("unexpected event {:?}", other),
    }

    // 4. Binary content hits the download policy
    let binary_item = FileItem::from_path(&binary_path).await.expect("Failed to stat");
    assert_eq!(opener.classify_for_open(&binary_item, true).await, OpenDecision::DownloadNotPermitted);
    assert!(matches!(rx.recv().await, Ok(FileTypeEvent::DownloadNotPermitted { .. })));

    // 5. A file that disappeared is handled like binary content
    tokio::fs::remove_file(&text_path).await.expect("Failed to delete");
    assert_eq!(opener.classify_for_open(&text_item, true).await, OpenDecision::DownloadNotPermitted);
}

#[tokio::test]
async fn test_from_path_detects_directories() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let sub = dir.path().join("R");
    tokio::fs::create_dir(&sub).await.expect("Failed to create dir");

    let item = FileItem::from_path(&sub).await.expect("Failed to stat");
    assert!(item.is_directory());
    assert!(!item.is_public_folder());
    assert_eq!(FileTypeRegistry::builtin().resolve_icon(&item), FileIcon::FOLDER);

    let missing = FileItem::from_path(dir.path().join("missing")).await.unwrap_err();
    assert_eq!(missing.kind(), ftreg::ErrorKind::NotFound);
}
