// crates/sp_physics/src/error.rs

//! 物理层错误类型
//!
//! 在 `sp_foundation` 基础错误之上扩展物理计算相关的错误：
//! 模型分发、场形状一致性、数值域（除零与负数开方）。
//!
//! # 设计原则
//!
//! 1. **分发期失败**: 未知模型名在选择时报告，而不是首次调用时
//! 2. **数值域显式化**: 除零与负数开方转换为带字段名的错误，不静默容忍

use sp_foundation::SpError;
use thiserror::Error;

/// 物理层结果类型
pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// 物理层错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// 未知岩石物理模型
    #[error("未知岩石物理模型: '{name}' (支持的模型: {supported:?})")]
    UnknownModel {
        /// 输入的模型名
        name: String,
        /// 支持的模型名列表
        supported: &'static [&'static str],
    },

    /// 场形状不匹配
    #[error("场形状不匹配: {name} 期望{expected:?}, 实际{actual:?}")]
    ShapeMismatch {
        /// 场名称
        name: &'static str,
        /// 期望形状
        expected: (usize, usize),
        /// 实际形状
        actual: (usize, usize),
    },

    /// 数值域错误（除零、负数开方等）
    #[error("数值域错误: {field} 在 {operation} 中取值 {value}")]
    NumericDomain {
        /// 出错的物理量名
        field: &'static str,
        /// 出错的运算
        operation: &'static str,
        /// 非法值
        value: f64,
    },

    /// 岩石属性错误（来自基础层）
    #[error("岩石属性错误: {0}")]
    Property(#[from] SpError),
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl PhysicsError {
    /// 未知模型
    pub fn unknown_model(name: impl Into<String>, supported: &'static [&'static str]) -> Self {
        Self::UnknownModel {
            name: name.into(),
            supported,
        }
    }

    /// 形状不匹配
    pub fn shape_mismatch(
        name: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::ShapeMismatch {
            name,
            expected,
            actual,
        }
    }

    /// 数值域错误
    pub fn numeric_domain(field: &'static str, operation: &'static str, value: f64) -> Self {
        Self::NumericDomain {
            field,
            operation,
            value,
        }
    }
}

// ========================================================================
// 验证辅助方法
// ========================================================================

impl PhysicsError {
    /// 检查两个形状是否一致
    #[inline]
    pub fn check_shape(
        name: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> PhysicsResult<()> {
        if expected != actual {
            Err(Self::shape_mismatch(name, expected, actual))
        } else {
            Ok(())
        }
    }
}

// ========================================================================
// 测试
// ========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_display() {
        let err = PhysicsError::unknown_model("bogus", &["gassmann", "han", "vrh"]);
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("gassmann"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = PhysicsError::shape_mismatch("vp", (3, 4), (4, 3));
        assert!(err.to_string().contains("vp"));
    }

    #[test]
    fn test_check_shape() {
        assert!(PhysicsError::check_shape("vp", (3, 4), (3, 4)).is_ok());
        assert!(PhysicsError::check_shape("vp", (3, 4), (3, 5)).is_err());
    }

    #[test]
    fn test_property_conversion() {
        let base = SpError::missing_parameter("k_q");
        let err: PhysicsError = base.into();
        assert!(matches!(err, PhysicsError::Property(_)));
        assert!(err.to_string().contains("k_q"));
    }
}
