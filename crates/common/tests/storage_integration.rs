//! Integration tests: token store over the file-backed store.

use std::sync::Arc;

use gatescan_common::auth::TokenStore;
use gatescan_common::storage::{FileStore, KeyValueStore};

fn unique_store(dir: &tempfile::TempDir) -> Arc<FileStore> {
    Arc::new(FileStore::new(dir.path().join(format!("{}.json", uuid::Uuid::new_v4()))))
}

#[tokio::test]
async fn tokens_survive_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let tokens = TokenStore::new(Arc::new(FileStore::new(&path)));
        tokens.set_tokens("T1", Some("R1")).await;
    }

    // A fresh store over the same file stands in for a relaunched process.
    let tokens = TokenStore::new(Arc::new(FileStore::new(&path)));
    assert_eq!(tokens.access_token().await, Some("T1".to_string()));
    assert_eq!(tokens.refresh_token().await, Some("R1".to_string()));
    assert!(tokens.has_valid_token().await);
}

#[tokio::test]
async fn clear_tokens_removes_keys_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = unique_store(&dir);
    let tokens = TokenStore::new(store.clone());

    tokens.set_tokens("T1", Some("R1")).await;
    tokens.clear_tokens().await;

    assert_eq!(store.get("auth.access_token").await.unwrap(), None);
    assert_eq!(store.get("auth.refresh_token").await.unwrap(), None);
    assert_eq!(store.get("auth.token_timestamp").await.unwrap(), None);
}

#[tokio::test]
async fn concurrent_writes_do_not_lose_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = unique_store(&dir);

    let writes = (0..8).map(|i| {
        let store = store.clone();
        async move { store.set(&format!("key.{i}"), &i.to_string()).await }
    });
    for result in futures::future::join_all(writes).await {
        result.unwrap();
    }

    for i in 0..8 {
        assert_eq!(store.get(&format!("key.{i}")).await.unwrap(), Some(i.to_string()));
    }
}
