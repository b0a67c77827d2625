//! UseCase 層
//!
//! チャット API に対する操作を実装するレイヤー。
//! UI 層から呼び出され、Domain 層の ChatApi を操作します。

pub mod error;
pub mod fetch_messages;
pub mod poll_messages;
pub mod post_message;
pub mod update_password;
pub mod update_room_name;
pub mod update_username;

pub use error::UseCaseError;
pub use fetch_messages::FetchMessagesUseCase;
pub use poll_messages::{DEFAULT_POLL_INTERVAL, MessagePoller, MessageSink};
pub use post_message::PostMessageUseCase;
pub use update_password::UpdatePasswordUseCase;
pub use update_room_name::UpdateRoomNameUseCase;
pub use update_username::UpdateUsernameUseCase;
