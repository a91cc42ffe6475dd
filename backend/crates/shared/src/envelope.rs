//! Response Envelope
//!
//! 全エンドポイント共通のレスポンス形式
//! `{"status": "success"|"failed", "message": string, "data": object|array|null}`
//! を定義します。成功・失敗を問わず、すべての結果はこの形で返されます。

use serde::Serialize;
use std::borrow::Cow;

/// エンベロープの `status` フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// 操作成功
    Success,
    /// 操作失敗（バリデーション失敗、認証失敗、対象なし等）
    Failed,
}

/// 統一レスポンスエンベロープ
///
/// `data` は常にシリアライズされます（未設定時は `null`）。
///
/// ## Examples
/// ```rust
/// use kernel::envelope::Envelope;
///
/// let ok = Envelope::success("User is created successfully.")
///     .with_data(&serde_json::json!({"token": "..."}));
/// let ng = Envelope::failed("Invalid credentials");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    status: Status,
    message: Cow<'static, str>,
    data: Option<serde_json::Value>,
}

impl Envelope {
    /// 成功エンベロープを作成（`data` なし）
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: None,
        }
    }

    /// 失敗エンベロープを作成（`data` なし）
    pub fn failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: Status::Failed,
            message: message.into(),
            data: None,
        }
    }

    /// `data` をシリアライズ可能な値から設定
    ///
    /// シリアライズに失敗した場合は `null` のままとなります（DTO は
    /// 失敗しない型のみを使う前提）。
    pub fn with_data<T: Serialize>(mut self, data: &T) -> Self {
        self.data = Some(serde_json::to_value(data).unwrap_or(serde_json::Value::Null));
        self
    }

    /// `data` を JSON 値から直接設定
    pub fn with_data_value(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// ステータスを取得
    pub fn status(&self) -> Status {
        self.status
    }

    /// メッセージを取得
    pub fn message(&self) -> &str {
        &self.message
    }

    /// データを取得
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Envelope {
    fn into_response(self) -> axum::response::Response {
        // デフォルトは 200 OK。他のステータスはハンドラ側で
        // `(StatusCode, Envelope)` のタプルとして返す。
        axum::Json(self).into_response()
    }
}
