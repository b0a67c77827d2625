//! UseCase: メッセージ一覧取得処理
//!
//! ### 何をテストしているか
//! - FetchMessagesUseCase::execute() メソッド
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ一覧の取得
//! - 異常系：API エラーがそのまま返される

use std::sync::Arc;

use crate::domain::{ChatApi, Message, RoomId};

use super::error::UseCaseError;

/// メッセージ一覧取得のユースケース
pub struct FetchMessagesUseCase {
    api: Arc<dyn ChatApi>,
}

impl FetchMessagesUseCase {
    /// 新しい FetchMessagesUseCase を作成
    pub fn new(api: Arc<dyn ChatApi>) -> Self {
        Self { api }
    }

    /// ルームのメッセージ一覧を取得
    pub async fn execute(&self, room_id: RoomId) -> Result<Vec<Message>, UseCaseError> {
        let messages = self.api.get_messages(room_id).await?;
        tracing::debug!("Fetched {} messages from room {}", messages.len(), room_id);
        Ok(messages)
    }
}
