// crates/sp_physics/src/gradient/adapter.rs

//! 弹性梯度 → (K, μ, ρ) 模量域梯度适配器
//!
//! (vp, vs) 关于 (K, μ, ρ) 的标准链式法则雅可比（vp = √((K+4μ/3)/ρ)、
//! vs = √(μ/ρ)），ρ 行额外携带直接项 ∂ρ/∂ρ = 1：
//!
//! ```text
//! gK = gvp·(1/(2ρvp))
//! gμ = gvp·(2/(3ρvp)) + gvs·(1/(2ρvs))
//! gρ = gvp·(−vp/(2ρ)) + gvs·(−vs/(2ρ)) + gρ
//! ```
//!
//! Gassmann 与 VRH 引擎共用本适配器，Han 引擎直接在速度空间工作。

use crate::error::{PhysicsError, PhysicsResult};
use crate::types::{check_positive_field, ElasticGradient, ElasticModel, Field, ModulusGradient};

/// 单点适配（供引擎内层循环使用）
#[inline]
pub(crate) fn kmr_point(
    gvp: f64,
    gvs: f64,
    grho: f64,
    vp: f64,
    vs: f64,
    rho: f64,
) -> (f64, f64, f64) {
    let gk = gvp / (2.0 * rho * vp);
    let gmu = gvp * 2.0 / (3.0 * rho * vp) + gvs / (2.0 * rho * vs);
    let gr = gvp * (-vp / (2.0 * rho)) + gvs * (-vs / (2.0 * rho)) + grho;
    (gk, gmu, gr)
}

/// 弹性域梯度适配到 (K, μ, ρ) 模量域
///
/// vp、vs、ρ 必须逐点严格为正，否则返回 [`PhysicsError::NumericDomain`]。
/// 输出为新分配的中间梯度，不持久化。
pub fn to_bulk_shear_density_grad(
    grad: &ElasticGradient,
    model: &ElasticModel,
) -> PhysicsResult<ModulusGradient> {
    grad.check_consistent()?;
    model.check_consistent()?;
    let dim = grad.dim();
    PhysicsError::check_shape("model.vp", dim, model.dim())?;

    check_positive_field("vp", "divide", &model.vp)?;
    check_positive_field("vs", "divide", &model.vs)?;
    check_positive_field("rho", "divide", &model.rho)?;

    let mut gk = Field::zeros(dim);
    let mut gmu = Field::zeros(dim);
    let mut grho = Field::zeros(dim);

    for ((i, j), &gvp) in grad.vp.indexed_iter() {
        let (k, mu, r) = kmr_point(
            gvp,
            grad.vs[[i, j]],
            grad.rho[[i, j]],
            model.vp[[i, j]],
            model.vs[[i, j]],
            model.rho[[i, j]],
        );
        gk[[i, j]] = k;
        gmu[[i, j]] = mu;
        grho[[i, j]] = r;
    }

    Ok(ModulusGradient {
        k: gk,
        mu: gmu,
        rho: grho,
    })
}

// ============================================================
// 测试
// ============================================================
