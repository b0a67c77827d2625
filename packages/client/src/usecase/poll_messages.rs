//! UseCase: メッセージの定期ポーリング
//!
//! 一定間隔でメッセージ一覧を取得し、MessageSink に渡します。
//! 各取得は独立したタスクとして実行され、互いに待ち合わせません。
//! そのため遅い応答が新しい応答の後に描画されることがあります。
//!
//! ### どのような状況を想定しているか
//! - 正常系：指定間隔ごとに取得と描画が行われる
//! - 異常系：取得に失敗してもポーリングは止まらない

use std::{sync::Arc, time::Duration};

use tokio::time::{self, Instant, MissedTickBehavior};

use crate::domain::{ChatApi, Message, RoomId};

use super::fetch_messages::FetchMessagesUseCase;

/// Default polling period
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Receives each freshly fetched message list.
pub trait MessageSink: Send + Sync {
    /// Render the full list of messages of the room.
    fn render(&self, messages: &[Message]);
}

/// メッセージ一覧を定期的に取得するポーラー
pub struct MessagePoller {
    api: Arc<dyn ChatApi>,
    sink: Arc<dyn MessageSink>,
    room_id: RoomId,
    interval: Duration,
}

impl MessagePoller {
    /// 新しい MessagePoller を作成（間隔はデフォルトの 1 秒）
    pub fn new(api: Arc<dyn ChatApi>, sink: Arc<dyn MessageSink>, room_id: RoomId) -> Self {
        Self {
            api,
            sink,
            room_id,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// ポーリング間隔を変更
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_POLL_INTERVAL);
        self
    }

    /// ポーリング間隔
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 一度だけ取得して描画する
    pub async fn refresh(&self) {
        refresh(self.api.clone(), self.sink.clone(), self.room_id).await;
    }

    /// ポーリングを開始
    ///
    /// 最初の取得は 1 間隔後に行われます。この future は自分からは終了せず、
    /// 呼び出し側が drop したときに停止します。
    pub async fn run(&self) {
        tracing::info!(
            "Polling room {} every {} ms",
            self.room_id,
            self.interval.as_millis()
        );

        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            tokio::spawn(refresh(self.api.clone(), self.sink.clone(), self.room_id));
        }
    }
}

async fn refresh(api: Arc<dyn ChatApi>, sink: Arc<dyn MessageSink>, room_id: RoomId) {
    match FetchMessagesUseCase::new(api).execute(room_id).await {
        Ok(messages) => sink.render(&messages),
        Err(e) => tracing::error!("Error fetching messages: {}", e),
    }
}
