//! UseCase: メッセージ投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - 投稿成功後にメッセージ一覧を再取得すること
//!
//! ### どのような状況を想定しているか
//! - 正常系：投稿と一覧の再取得
//! - 異常系：API が失敗を報告した場合は再取得しない
//! - 異常系：投稿は成功したが再取得に失敗した場合も投稿は成功扱い
//! - エッジケース：空の本文はリクエストを送らずにエラー

use std::sync::Arc;

use crate::domain::{ChatApi, Message, MessageBody, RoomId};

use super::error::UseCaseError;

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    api: Arc<dyn ChatApi>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(api: Arc<dyn ChatApi>) -> Self {
        Self { api }
    }

    /// メッセージ投稿を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Vec<Message>))` - 投稿後に再取得したメッセージ一覧
    /// * `Ok(None)` - 投稿は成功したが再取得に失敗（ログのみ）
    /// * `Err(UseCaseError)` - 入力不正、または投稿の失敗
    pub async fn execute(
        &self,
        room_id: RoomId,
        text: String,
    ) -> Result<Option<Vec<Message>>, UseCaseError> {
        // 1. 本文の検証
        let body = MessageBody::new(text)?;

        // 2. 投稿
        self.api.post_message(room_id, body).await?;
        tracing::info!("Posted message to room {}", room_id);

        // 3. 一覧を再取得（失敗しても投稿自体は成功している）
        match self.api.get_messages(room_id).await {
            Ok(messages) => Ok(Some(messages)),
            Err(e) => {
                tracing::error!("Error fetching messages: {}", e);
                Ok(None)
            }
        }
    }
}
