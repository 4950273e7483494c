// crates/sp_physics/src/types.rs

//! 物理计算核心类型定义
//!
//! 本模块提供梯度参数化切换所需的类型系统：
//! - **场类型别名**: [`Field`] (f64) 与 [`Field32`] (f32)
//! - **场束**: PCS 状态、弹性模型、Lamé 模型及各自的梯度三元组
//!
//! 所有场均为同一空间网格上的二维数组，单次调用内形状必须一致，
//! 构造函数负责形状校验。输出场总是新分配，不与输入产生别名。
//!
//! # 精度约定
//!
//! 内部计算与 PCS 梯度输出使用 f64；速度⇄Lamé 切换器的输出按约定
//! 截断为单精度，由 [`ElasticGradient32`] / [`LameGradient32`] 在类型层面表达。

use ndarray::Array2;
use sp_foundation::float::is_valid_f64;

use crate::error::{PhysicsError, PhysicsResult};

/// 双精度标量场（逐网格点）
pub type Field = Array2<f64>;

/// 单精度标量场（切换器输出的精度约定）
pub type Field32 = Array2<f32>;

/// 校验三个场形状一致（以第一个场为基准）
fn check_bundle(
    second: &'static str,
    third: &'static str,
    a: &Field,
    b: &Field,
    c: &Field,
) -> PhysicsResult<(usize, usize)> {
    let dim = a.dim();
    PhysicsError::check_shape(second, dim, b.dim())?;
    PhysicsError::check_shape(third, dim, c.dim())?;
    Ok(dim)
}

/// 校验场逐点严格为正且有限（用作除数或开方前提的物理量）
pub(crate) fn check_positive_field(
    field: &'static str,
    operation: &'static str,
    f: &Field,
) -> PhysicsResult<()> {
    for &v in f.iter() {
        if !(is_valid_f64(v) && v > 0.0) {
            return Err(PhysicsError::numeric_domain(field, operation, v));
        }
    }
    Ok(())
}

// ============================================================
// PCS 状态与梯度
// ============================================================

/// PCS 参数化状态（当前模型迭代）
///
/// 孔隙度 φ、黏土含量 cc、含水饱和度 sw，物理上均应位于 [0, 1]，
/// 但本层不强制（见 [`PcsState::log_range_warnings`]）。
#[derive(Debug, Clone)]
pub struct PcsState {
    /// 孔隙度 φ [-]
    pub phi: Field,
    /// 黏土含量 cc [-]
    pub cc: Field,
    /// 含水饱和度 sw [-]
    pub sw: Field,
}

impl PcsState {
    /// 创建新状态，校验三个场形状一致
    pub fn new(phi: Field, cc: Field, sw: Field) -> PhysicsResult<Self> {
        check_bundle("cc", "sw", &phi, &cc, &sw)?;
        Ok(Self { phi, cc, sw })
    }

    /// 创建均匀状态
    pub fn uniform(dim: (usize, usize), phi: f64, cc: f64, sw: f64) -> Self {
        Self {
            phi: Field::from_elem(dim, phi),
            cc: Field::from_elem(dim, cc),
            sw: Field::from_elem(dim, sw),
        }
    }

    /// 场形状
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.phi.dim()
    }

    /// 重新校验内部场形状一致（字段为 pub，可能被调用方替换过）
    pub fn check_consistent(&self) -> PhysicsResult<()> {
        check_bundle("cc", "sw", &self.phi, &self.cc, &self.sw).map(|_| ())
    }

    /// 统计超出 [0, 1] 的网格点数
    pub fn count_outside_unit(&self) -> usize {
        [&self.phi, &self.cc, &self.sw]
            .iter()
            .map(|f| f.iter().filter(|&&v| !(0.0..=1.0).contains(&v)).count())
            .sum()
    }

    /// 物理范围提示
    ///
    /// PCS 参数超出 [0, 1] 只提示不拒绝，合理性校验不属于本层职责。
    pub fn log_range_warnings(&self) {
        let n = self.count_outside_unit();
        if n > 0 {
            log::warn!("PCS 状态有 {} 个网格点超出 [0, 1] 物理范围", n);
        }
    }
}

/// PCS 参数化域梯度（本层输出）
#[derive(Debug, Clone)]
pub struct PcsGradient {
    /// ∂J/∂φ
    pub phi: Field,
    /// ∂J/∂cc
    pub cc: Field,
    /// ∂J/∂sw
    pub sw: Field,
}

impl PcsGradient {
    /// 场形状
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.phi.dim()
    }
}

// ============================================================
// 弹性域模型与梯度
// ============================================================

/// 速度/密度参数化的弹性模型
#[derive(Debug, Clone)]
pub struct ElasticModel {
    /// 纵波速度 vp [m/s]
    pub vp: Field,
    /// 横波速度 vs [m/s]
    pub vs: Field,
    /// 密度 ρ [kg/m³]
    pub rho: Field,
}

impl ElasticModel {
    /// 创建新模型，校验三个场形状一致
    pub fn new(vp: Field, vs: Field, rho: Field) -> PhysicsResult<Self> {
        check_bundle("vs", "rho", &vp, &vs, &rho)?;
        Ok(Self { vp, vs, rho })
    }

    /// 创建均匀模型
    pub fn uniform(dim: (usize, usize), vp: f64, vs: f64, rho: f64) -> Self {
        Self {
            vp: Field::from_elem(dim, vp),
            vs: Field::from_elem(dim, vs),
            rho: Field::from_elem(dim, rho),
        }
    }

    /// 场形状
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.vp.dim()
    }

    /// 重新校验内部场形状一致
    pub fn check_consistent(&self) -> PhysicsResult<()> {
        check_bundle("vs", "rho", &self.vp, &self.vs, &self.rho).map(|_| ())
    }
}

/// 速度/密度域梯度（上游波动方程求解器的输出）
#[derive(Debug, Clone)]
pub struct ElasticGradient {
    /// ∂J/∂vp
    pub vp: Field,
    /// ∂J/∂vs
    pub vs: Field,
    /// ∂J/∂ρ
    pub rho: Field,
}

impl ElasticGradient {
    /// 创建新梯度，校验三个场形状一致
    pub fn new(vp: Field, vs: Field, rho: Field) -> PhysicsResult<Self> {
        check_bundle("vs", "rho", &vp, &vs, &rho)?;
        Ok(Self { vp, vs, rho })
    }

    /// 创建均匀梯度
    pub fn uniform(dim: (usize, usize), vp: f64, vs: f64, rho: f64) -> Self {
        Self {
            vp: Field::from_elem(dim, vp),
            vs: Field::from_elem(dim, vs),
            rho: Field::from_elem(dim, rho),
        }
    }

    /// 场形状
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.vp.dim()
    }

    /// 重新校验内部场形状一致
    pub fn check_consistent(&self) -> PhysicsResult<()> {
        check_bundle("vs", "rho", &self.vp, &self.vs, &self.rho).map(|_| ())
    }
}

/// 速度/密度域梯度，单精度输出
#[derive(Debug, Clone)]
pub struct ElasticGradient32 {
    /// ∂J/∂vp
    pub vp: Field32,
    /// ∂J/∂vs
    pub vs: Field32,
    /// ∂J/∂ρ
    pub rho: Field32,
}

impl ElasticGradient32 {
    /// 场形状
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.vp.dim()
    }
}

// ============================================================
// Lamé 域模型与梯度
// ============================================================

/// Lamé/密度参数化的弹性模型
#[derive(Debug, Clone)]
pub struct LameModel {
    /// 第一 Lamé 参数 λ [Pa]
    pub lam: Field,
    /// 剪切模量 μ [Pa]
    pub mu: Field,
    /// 密度 ρ [kg/m³]
    pub rho: Field,
}

impl LameModel {
    /// 创建新模型，校验三个场形状一致
    pub fn new(lam: Field, mu: Field, rho: Field) -> PhysicsResult<Self> {
        check_bundle("mu", "rho", &lam, &mu, &rho)?;
        Ok(Self { lam, mu, rho })
    }

    /// 创建均匀模型
    pub fn uniform(dim: (usize, usize), lam: f64, mu: f64, rho: f64) -> Self {
        Self {
            lam: Field::from_elem(dim, lam),
            mu: Field::from_elem(dim, mu),
            rho: Field::from_elem(dim, rho),
        }
    }

    /// 场形状
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.lam.dim()
    }

    /// 重新校验内部场形状一致
    pub fn check_consistent(&self) -> PhysicsResult<()> {
        check_bundle("mu", "rho", &self.lam, &self.mu, &self.rho).map(|_| ())
    }
}

/// Lamé/密度域梯度
#[derive(Debug, Clone)]
pub struct LameGradient {
    /// ∂J/∂λ
    pub lam: Field,
    /// ∂J/∂μ
    pub mu: Field,
    /// ∂J/∂ρ
    pub rho: Field,
}

impl LameGradient {
    /// 创建新梯度，校验三个场形状一致
    pub fn new(lam: Field, mu: Field, rho: Field) -> PhysicsResult<Self> {
        check_bundle("mu", "rho", &lam, &mu, &rho)?;
        Ok(Self { lam, mu, rho })
    }

    /// 场形状
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.lam.dim()
    }

    /// 重新校验内部场形状一致
    pub fn check_consistent(&self) -> PhysicsResult<()> {
        check_bundle("mu", "rho", &self.lam, &self.mu, &self.rho).map(|_| ())
    }
}

/// Lamé/密度域梯度，单精度输出
#[derive(Debug, Clone)]
pub struct LameGradient32 {
    /// ∂J/∂λ
    pub lam: Field32,
    /// ∂J/∂μ
    pub mu: Field32,
    /// ∂J/∂ρ
    pub rho: Field32,
}

impl LameGradient32 {
    /// 场形状
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.lam.dim()
    }
}

// ============================================================
// 中间量
// ============================================================

/// (K, μ, ρ) 模量域中间梯度
///
/// 由弹性适配器产生，供三个逐参数导数块消费，不持久化。
#[derive(Debug, Clone)]
pub struct ModulusGradient {
    /// ∂J/∂K
    pub k: Field,
    /// ∂J/∂μ
    pub mu: Field,
    /// ∂J/∂ρ
    pub rho: Field,
}

impl ModulusGradient {
    /// 场形状
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.k.dim()
    }
}

// ============================================================
// 测试
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcs_state_shape_check() {
        let ok = PcsState::new(
            Field::zeros((2, 3)),
            Field::zeros((2, 3)),
            Field::zeros((2, 3)),
        );
        assert!(ok.is_ok());

        let bad = PcsState::new(
            Field::zeros((2, 3)),
            Field::zeros((3, 2)),
            Field::zeros((2, 3)),
        );
        assert!(matches!(
            bad,
            Err(PhysicsError::ShapeMismatch { name: "cc", .. })
        ));
    }

    #[test]
    fn test_uniform_state() {
        let state = PcsState::uniform((4, 5), 0.2, 0.3, 0.6);
        assert_eq!(state.dim(), (4, 5));
        assert_eq!(state.phi[[2, 2]], 0.2);
        assert_eq!(state.cc[[0, 4]], 0.3);
        assert_eq!(state.sw[[3, 0]], 0.6);
    }

    #[test]
    fn test_count_outside_unit() {
        let mut state = PcsState::uniform((2, 2), 0.2, 0.3, 0.6);
        assert_eq!(state.count_outside_unit(), 0);

        state.phi[[0, 0]] = 1.2;
        state.sw[[1, 1]] = -0.1;
        assert_eq!(state.count_outside_unit(), 2);
    }

    #[test]
    fn test_elastic_model_shape_check() {
        let bad = ElasticModel::new(
            Field::zeros((2, 2)),
            Field::zeros((2, 2)),
            Field::zeros((1, 2)),
        );
        assert!(matches!(
            bad,
            Err(PhysicsError::ShapeMismatch { name: "rho", .. })
        ));
    }

    #[test]
    fn test_elastic_gradient_uniform() {
        let grad = ElasticGradient::uniform((3, 3), 1.0, 0.0, 0.0);
        assert_eq!(grad.dim(), (3, 3));
        assert_eq!(grad.vp[[1, 1]], 1.0);
        assert_eq!(grad.vs[[1, 1]], 0.0);
    }

    #[test]
    fn test_lame_model_uniform() {
        let model = LameModel::uniform((2, 2), 7.414e9, 3.168e9, 2200.0);
        assert_eq!(model.dim(), (2, 2));
        assert_eq!(model.mu[[0, 1]], 3.168e9);
    }
}
