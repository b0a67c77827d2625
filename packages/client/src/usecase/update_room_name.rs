//! UseCase: ルーム名変更処理

use std::sync::Arc;

use crate::domain::{ChatApi, RoomId, RoomName};

use super::error::UseCaseError;

/// ルーム名変更のユースケース
pub struct UpdateRoomNameUseCase {
    api: Arc<dyn ChatApi>,
}

impl UpdateRoomNameUseCase {
    /// 新しい UpdateRoomNameUseCase を作成
    pub fn new(api: Arc<dyn ChatApi>) -> Self {
        Self { api }
    }

    /// ルーム名を変更
    pub async fn execute(&self, room_id: RoomId, name: String) -> Result<(), UseCaseError> {
        let name = RoomName::new(name)?;
        tracing::debug!("Renaming room {} to '{}'", room_id, name);
        self.api.update_room_name(room_id, name).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, MockChatApi, ValueObjectError};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_update_room_name_success() {
        // テスト項目: ルーム ID と新しい名前で API が呼ばれる
        // given (前提条件):
        let room_id = RoomId::new(5).unwrap();
        let mut api = MockChatApi::new();
        api.expect_update_room_name()
            .with(eq(room_id), eq(RoomName::new("Movie night".to_string()).unwrap()))
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = UpdateRoomNameUseCase::new(Arc::new(api));

        // when (操作):
        let result = usecase.execute(room_id, "Movie night".to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_update_room_name_rejected() {
        // テスト項目: API が失敗を報告した場合はエラーが返される
        // given (前提条件):
        let mut api = MockChatApi::new();
        api.expect_update_room_name().returning(|_, _| {
            Err(ApiError::Rejected {
                status: 400,
                reason: "Room ID and new name required.".to_string(),
            })
        });
        let usecase = UpdateRoomNameUseCase::new(Arc::new(api));

        // when (操作):
        let result = usecase
            .execute(RoomId::new(1).unwrap(), "Lobby".to_string())
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(UseCaseError::Api(ApiError::Rejected { status: 400, .. }))));
    }

    #[tokio::test]
    async fn test_update_room_name_empty_sends_nothing() {
        // テスト項目: 空のルーム名ではリクエストを送らない
        // given (前提条件):
        let mut api = MockChatApi::new();
        api.expect_update_room_name().times(0);
        let usecase = UpdateRoomNameUseCase::new(Arc::new(api));

        // when (操作):
        let result = usecase.execute(RoomId::new(1).unwrap(), String::new()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UseCaseError::InvalidInput(ValueObjectError::RoomNameEmpty))
        );
    }
}
