//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 持久层错误在 `From<sea_orm::DbErr>` 中一次性归类为类型化变体，
//! 上层不做任何基于错误文本的匹配。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_schoolsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolSystemError {
            $($variant(String),)*
        }

        impl SchoolSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_schoolsystem_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    UniqueViolation("E004", "Unique Constraint Violation"),
    ForeignKeyViolation("E005", "Foreign Key Constraint Violation"),
    NotFound("E006", "Resource Not Found"),
    Validation("E007", "Validation Error"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    SubmissionPastDue("E010", "Submission Past Due"),
}

impl SchoolSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SchoolSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolSystemError {}

// 为常见的错误类型实现 From trait
//
// 数据库错误只在这里归类一次：唯一约束、外键约束映射为各自的
// 类型化变体，未命中记录映射为 NotFound，其余归入 DatabaseOperation。
impl From<sea_orm::DbErr> for SchoolSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                SchoolSystemError::UniqueViolation(msg)
            }
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(msg)) => {
                SchoolSystemError::ForeignKeyViolation(msg)
            }
            _ => match err {
                sea_orm::DbErr::RecordNotFound(msg) => SchoolSystemError::NotFound(msg),
                other => SchoolSystemError::DatabaseOperation(other.to_string()),
            },
        }
    }
}

impl From<serde_json::Error> for SchoolSystemError {
    fn from(err: serde_json::Error) -> Self {
        SchoolSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolSystemError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolSystemError::database_config("test").code(), "E001");
        assert_eq!(SchoolSystemError::unique_violation("test").code(), "E004");
        assert_eq!(SchoolSystemError::not_found("test").code(), "E006");
        assert_eq!(
            SchoolSystemError::submission_past_due("test").code(),
            "E010"
        );
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolSystemError::foreign_key_violation("test").error_type(),
            "Foreign Key Constraint Violation"
        );
        assert_eq!(
            SchoolSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SchoolSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolSystemError::submission_past_due("deadline passed");
        let formatted = err.format_simple();
        assert!(formatted.contains("Submission Past Due"));
        assert!(formatted.contains("deadline passed"));
    }

    #[test]
    fn test_db_err_record_not_found() {
        let err: SchoolSystemError =
            sea_orm::DbErr::RecordNotFound("submission".to_string()).into();
        assert_eq!(err.code(), "E006");
    }
}
