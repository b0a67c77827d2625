//! UseCase: パスワード変更処理

use std::sync::Arc;

use crate::domain::{ChatApi, Password};

use super::error::UseCaseError;

/// パスワード変更のユースケース
pub struct UpdatePasswordUseCase {
    api: Arc<dyn ChatApi>,
}

impl UpdatePasswordUseCase {
    /// 新しい UpdatePasswordUseCase を作成
    pub fn new(api: Arc<dyn ChatApi>) -> Self {
        Self { api }
    }

    /// パスワードを変更
    pub async fn execute(&self, password: String) -> Result<(), UseCaseError> {
        let password = Password::new(password)?;
        self.api.update_password(password).await?;
        Ok(())
    }
}
