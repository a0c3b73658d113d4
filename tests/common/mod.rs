#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

use std::time::Duration;

/// 描画タスクなどバックグラウンド処理が追いつくまで待つ
pub async fn settle(mut done: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !done() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("background task did not catch up");
}
