//! UseCase: ユーザー名変更処理

use std::sync::Arc;

use crate::domain::{ChatApi, UserName};

use super::error::UseCaseError;

/// ユーザー名変更のユースケース
pub struct UpdateUsernameUseCase {
    api: Arc<dyn ChatApi>,
}

impl UpdateUsernameUseCase {
    /// 新しい UpdateUsernameUseCase を作成
    pub fn new(api: Arc<dyn ChatApi>) -> Self {
        Self { api }
    }

    /// ユーザー名を変更
    pub async fn execute(&self, name: String) -> Result<(), UseCaseError> {
        let name = UserName::new(name)?;
        self.api.update_username(name).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, MockChatApi, ValueObjectError};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_update_username_success() {
        // テスト項目: 新しいユーザー名で API が呼ばれる
        // given (前提条件):
        let mut api = MockChatApi::new();
        api.expect_update_username()
            .with(eq(UserName::new("alice".to_string()).unwrap()))
            .times(1)
            .returning(|_| Ok(()));
        let usecase = UpdateUsernameUseCase::new(Arc::new(api));

        // when (操作):
        let result = usecase.execute("alice".to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_update_username_transport_error() {
        // テスト項目: 通信エラーがそのまま返される
        // given (前提条件):
        let mut api = MockChatApi::new();
        api.expect_update_username()
            .returning(|_| Err(ApiError::Transport("timed out".to_string())));
        let usecase = UpdateUsernameUseCase::new(Arc::new(api));

        // when (操作):
        let result = usecase.execute("alice".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UseCaseError::Api(ApiError::Transport("timed out".to_string())))
        );
    }

    #[tokio::test]
    async fn test_update_username_empty_sends_nothing() {
        // テスト項目: 空のユーザー名ではリクエストを送らない
        // given (前提条件):
        let mut api = MockChatApi::new();
        api.expect_update_username().times(0);
        let usecase = UpdateUsernameUseCase::new(Arc::new(api));

        // when (操作):
        let result = usecase.execute(String::new()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UseCaseError::InvalidInput(ValueObjectError::UserNameEmpty))
        );
    }
}
