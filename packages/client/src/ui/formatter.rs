//! Message formatting for terminal output.

use watchparty_shared::time::timestamp_to_jst_clock;

use crate::domain::{Message, RoomId};

/// Stand-in for control characters that must not reach the terminal
const REPLACEMENT: char = '\u{FFFD}';

/// Format a single message line.
///
/// Message bodies come from other users, so control characters other than
/// `\n` and `\t` (escape sequences, BEL, ...) are replaced and the text is
/// shown as plain text only.
pub fn format_message(message: &Message) -> String {
    sanitize(&message.body)
}

fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() && c != '\n' && c != '\t' {
                REPLACEMENT
            } else {
                c
            }
        })
        .collect()
}

/// Format a message list, one message per line.
pub fn format_messages(messages: &[Message]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(&format_message(message));
        out.push('\n');
    }
    out
}

/// Status line shown above a redrawn message list.
pub fn format_header(room_id: RoomId, count: usize, synced_at: i64) -> String {
    let noun = if count == 1 { "message" } else { "messages" };
    format!(
        "== room {} | {} {} | synced {} ==",
        room_id,
        count,
        noun,
        timestamp_to_jst_clock(synced_at)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_messages() {
        // テスト項目: メッセージが 1 行ずつ本文のみで出力される
        // given (前提条件):
        let messages = vec![Message::new(Some(1), "hello"), Message::new(None, "world")];

        // when (操作):
        let out = format_messages(&messages);

        // then (期待する結果):
        assert_eq!(out, "hello\nworld\n");
    }

    #[test]
    fn test_format_messages_neutralizes_escape_sequences() {
        // テスト項目: 本文中のエスケープシーケンスや BEL は端末に出力されない
        // given (前提条件): 画面クリアとウィンドウタイトル変更を含む本文
        let messages = vec![Message::new(Some(1), "hi\x1b[2J\x1b]0;pwned\x07")];

        // when (操作):
        let out = format_messages(&messages);

        // then (期待する結果):
        assert!(!out.contains('\x1b'));
        assert!(!out.contains('\x07'));
        assert_eq!(out, "hi\u{FFFD}[2J\u{FFFD}]0;pwned\u{FFFD}\n");
    }

    #[test]
    fn test_format_message_keeps_newline_and_tab() {
        // テスト項目: 改行とタブはそのまま残り、CR は置き換えられる
        // given (前提条件):
        let message = Message::new(None, "a\tb\nc\rd");

        // when (操作):
        let out = format_message(&message);

        // then (期待する結果):
        assert_eq!(out, "a\tb\nc\u{FFFD}d");
    }

    #[test]
    fn test_format_messages_empty() {
        // テスト項目: メッセージがない場合は空文字列
        // then (期待する結果):
        assert_eq!(format_messages(&[]), "");
    }

    #[test]
    fn test_format_header() {
        // テスト項目: ヘッダーにルーム ID・件数・同期時刻が含まれる
        // given (前提条件): 2023-01-01T12:34:56+09:00
        let room_id = RoomId::new(3).unwrap();

        // when (操作):
        let one = format_header(room_id, 1, 1672544096000);
        let many = format_header(room_id, 2, 1672544096000);

        // then (期待する結果):
        assert_eq!(one, "== room 3 | 1 message | synced 12:34:56 ==");
        assert_eq!(many, "== room 3 | 2 messages | synced 12:34:56 ==");
    }
}
