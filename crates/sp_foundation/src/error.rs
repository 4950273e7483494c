// crates/sp_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `SpError` 枚举和 `SpResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **层次化**: 基础层只定义核心错误，物理相关错误在 sp_physics 中定义
//! 2. **易用性**: 提供便捷的构造方法
//! 3. **快速失败**: 配置与参数问题在构造时报告，而不是首次使用时

use thiserror::Error;

/// 统一结果类型
pub type SpResult<T> = Result<T, SpError>;

/// SeisPetro 基础错误类型
///
/// 核心错误类型，用于整个项目。物理计算相关的错误应在 `sp_physics` 中扩展。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpError {
    /// 缺少必需的参数
    #[error("缺少必需的参数: {key}")]
    MissingParameter {
        /// 参数键名
        key: String,
    },

    /// 数据超出范围
    #[error("数据超出范围: {field}={value}, 期望范围=[{min}, {max}]")]
    OutOfRange {
        /// 字段名
        field: &'static str,
        /// 实际值
        value: f64,
        /// 最小允许值
        min: f64,
        /// 最大允许值
        max: f64,
    },

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },

    /// 验证失败
    #[error("验证失败: {0}")]
    Validation(String),
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl SpError {
    /// 缺少参数
    pub fn missing_parameter(key: impl Into<String>) -> Self {
        Self::MissingParameter { key: key.into() }
    }

    /// 数据超出范围
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// 验证失败
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ========================================================================
// 验证辅助方法
// ========================================================================

impl SpError {
    /// 检查值是否在范围内
    #[inline]
    pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> SpResult<()> {
        if value < min || value > max {
            Err(Self::out_of_range(field, value, min, max))
        } else {
            Ok(())
        }
    }

    /// 检查值是否严格为正
    #[inline]
    pub fn check_positive(field: &'static str, value: f64) -> SpResult<()> {
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(Self::out_of_range(field, value, f64::MIN_POSITIVE, f64::MAX))
        }
    }
}

/// 条件不满足时提前返回错误
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Option 为 None 时提前返回错误
#[macro_export]
macro_rules! require {
    ($opt:expr, $err:expr) => {
        match $opt {
            Some(v) => v,
            None => return Err($err),
        }
    };
}

// ========================================================================
// 测试
// ========================================================================
