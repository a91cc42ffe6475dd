//! Typed Validation Rules
//!
//! フィールド → 制約セットを型付きで宣言し、専用のチェッカーが
//! フィールド単位のエラーマップ（[`ErrorBag`]）を返します。
//! 文字列ベースのルール宣言は使いません。
//!
//! ルールはすべて評価され、最初の違反で打ち切られることはありません。
//! 返されるエラーマップは常に完全な集合です。
//!
//! ## Examples
//! ```rust
//! use kernel::validation::{FieldRules, Rule, RuleSet, FieldSource};
//!
//! static RULES: RuleSet = RuleSet::new(&[
//!     FieldRules { field: "title", rules: &[Rule::Required, Rule::MaxChars(250)] },
//! ]);
//!
//! struct Input { title: Option<String> }
//! impl FieldSource for Input {
//!     fn field(&self, name: &str) -> Option<&str> {
//!         match name {
//!             "title" => self.title.as_deref(),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let errors = RULES.check(&Input { title: None });
//! assert!(!errors.is_empty());
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// Rules
// ============================================================================

/// 単一フィールドに適用できる制約
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 値が存在し、空白のみでないこと
    Required,
    /// 文字数（コードポイント数）の下限
    MinChars(usize),
    /// 文字数（コードポイント数）の上限
    MaxChars(usize),
    /// メールアドレス形式であること
    Email,
    /// `{field}_confirmation` フィールドと一致すること
    Confirmed,
}

/// フィールド名とそのフィールドに適用する制約の組
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// 1 操作分のルール宣言
///
/// `static` として宣言し、入力ごとに [`RuleSet::check`] を呼びます。
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    fields: &'static [FieldRules],
}

/// バリデーション対象の入力からフィールド値を取り出すビュー
pub trait FieldSource {
    /// Get the raw value of a named field, if it was supplied
    fn field(&self, name: &str) -> Option<&str>;
}

impl RuleSet {
    /// Create a rule set from static field declarations
    pub const fn new(fields: &'static [FieldRules]) -> Self {
        Self { fields }
    }

    /// Evaluate every rule against the input and collect all violations
    pub fn check(&self, source: &dyn FieldSource) -> ErrorBag {
        let mut bag = ErrorBag::new();

        for field_rules in self.fields {
            let field = field_rules.field;
            let value = source.field(field);
            let present = value.is_some_and(|v| !v.trim().is_empty());

            for rule in field_rules.rules {
                match rule {
                    Rule::Required => {
                        if !present {
                            bag.add(field, format!("The {} field is required.", field));
                        }
                    }
                    // 値が無いフィールドには Required 以外のルールを適用しない
                    // （不在は Required が報告する）
                    Rule::MinChars(min) => {
                        if let Some(v) = value {
                            if present && v.chars().count() < *min {
                                bag.add(
                                    field,
                                    format!("The {} must be at least {} characters.", field, min),
                                );
                            }
                        }
                    }
                    Rule::MaxChars(max) => {
                        if let Some(v) = value {
                            if present && v.chars().count() > *max {
                                bag.add(
                                    field,
                                    format!(
                                        "The {} must not be greater than {} characters.",
                                        field, max
                                    ),
                                );
                            }
                        }
                    }
                    Rule::Email => {
                        if let Some(v) = value {
                            if present && !is_valid_email(v.trim()) {
                                bag.add(
                                    field,
                                    format!("The {} must be a valid email address.", field),
                                );
                            }
                        }
                    }
                    Rule::Confirmed => {
                        if present {
                            let confirmation_field = format!("{}_confirmation", field);
                            let confirmation = source.field(&confirmation_field);
                            if value != confirmation {
                                bag.add(
                                    field,
                                    format!("The {} confirmation does not match.", field),
                                );
                            }
                        }
                    }
                }
            }
        }

        bag
    }
}

// ============================================================================
// Error Bag
// ============================================================================

/// フィールド単位のエラーマップ
///
/// キーはフィールド名、値はそのフィールドに対するメッセージの列。
/// そのままエンベロープの `data` としてシリアライズされます。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorBag(BTreeMap<&'static str, Vec<String>>);

impl ErrorBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message for a field
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// True when no violations were recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with violations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for a field
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Serialize into a JSON value for the envelope `data`
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

// ============================================================================
// Email format check
// ============================================================================

/// Basic email format validation
///
/// Shared between the `Email` rule and domain value objects so there is a
/// single notion of "valid email" in the system.
pub fn is_valid_email(email: &str) -> bool {
    // Must contain exactly one @
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    // Local part checks
    if local.is_empty() || local.len() > 64 {
        return false;
    }

    // Domain checks
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    // Domain shouldn't start or end with dot or hyphen
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    true
}
