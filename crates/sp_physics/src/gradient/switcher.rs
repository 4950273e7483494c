// crates/sp_physics/src/gradient/switcher.rs

//! 速度/密度 ⇄ Lamé/密度 梯度切换器
//!
//! 通过闭式关系 vp = √((λ+2μ)/ρ)、vs = √(μ/ρ) 的链式法则在两种弹性
//! 参数化之间切换梯度。两个方向都是精确的转置雅可比：λ 行没有 μ 项、
//! μ 行没有 λ 项是三角形雅可比结构，并非不对称缺陷，往返在实数运算下
//! 精确互逆（见往返测试）。
//!
//! # 精度约定
//!
//! 输出显式截断为单精度（[`LameGradient32`] / [`ElasticGradient32`]），
//! 与输入精度无关。
//!
//! 参考文献:
//! 1. Hu et al., 2021, Direct updating of rock-physics properties using
//!    elastic full-waveform inversion
//! 2. Zhou and Lumley, 2021, Central-difference time-lapse 4D seismic
//!    full-waveform inversion

use crate::error::{PhysicsError, PhysicsResult};
use crate::types::{
    check_positive_field, ElasticGradient, ElasticGradient32, ElasticModel, Field32, LameGradient,
    LameGradient32, LameModel,
};

/// 速度/密度域梯度切换到 Lamé/密度域
///
/// glam = gvp/(2ρvp)；gμ = gvp/(ρvp) + gvs/(2ρvs)；
/// gρ = −gvp·vp/(2ρ) − gvs·vs/(2ρ) + gρ。
///
/// vp、vs、ρ 必须逐点严格为正（链式法则的除数），否则返回
/// [`PhysicsError::NumericDomain`]。
pub fn to_elastic_moduli(
    grad: &ElasticGradient,
    model: &ElasticModel,
) -> PhysicsResult<LameGradient32> {
    grad.check_consistent()?;
    model.check_consistent()?;
    let dim = grad.dim();
    PhysicsError::check_shape("model.vp", dim, model.dim())?;

    check_positive_field("vp", "divide", &model.vp)?;
    check_positive_field("vs", "divide", &model.vs)?;
    check_positive_field("rho", "divide", &model.rho)?;

    let mut glam = Field32::zeros(dim);
    let mut gmu = Field32::zeros(dim);
    let mut grho = Field32::zeros(dim);

    for ((i, j), &gvp) in grad.vp.indexed_iter() {
        let gvs = grad.vs[[i, j]];
        let grho_in = grad.rho[[i, j]];
        let vp = model.vp[[i, j]];
        let vs = model.vs[[i, j]];
        let rho = model.rho[[i, j]];

        glam[[i, j]] = (gvp / (2.0 * rho * vp)) as f32;
        gmu[[i, j]] = (gvp / (rho * vp) + gvs / (2.0 * rho * vs)) as f32;
        grho[[i, j]] = (gvp * (-vp / (2.0 * rho)) + gvs * (-vs / (2.0 * rho)) + grho_in) as f32;
    }

    Ok(LameGradient32 {
        lam: glam,
        mu: gmu,
        rho: grho,
    })
}

/// Lamé/密度域梯度切换到速度/密度域
///
/// 内部由 (λ, μ, ρ) 重建 vp、vs，再按 λ = ρ(vp²−2vs²)、μ = ρvs² 的
/// 转置雅可比重组：gvp = glam·2vpρ；gvs = −glam·4ρvs + gμ·2vsρ；
/// gρ = glam·(vp²−2vs²) + gμ·vs² + gρ。
pub fn to_velocity_density(
    grad: &LameGradient,
    model: &LameModel,
) -> PhysicsResult<ElasticGradient32> {
    grad.check_consistent()?;
    model.check_consistent()?;
    let dim = grad.dim();
    PhysicsError::check_shape("model.lam", dim, model.dim())?;

    check_positive_field("rho", "divide", &model.rho)?;

    let mut gvp = Field32::zeros(dim);
    let mut gvs = Field32::zeros(dim);
    let mut grho = Field32::zeros(dim);

    for ((i, j), &glam) in grad.lam.indexed_iter() {
        let gmu = grad.mu[[i, j]];
        let grho_in = grad.rho[[i, j]];
        let lam = model.lam[[i, j]];
        let mu = model.mu[[i, j]];
        let rho = model.rho[[i, j]];

        if mu < 0.0 {
            return Err(PhysicsError::numeric_domain("mu", "sqrt", mu));
        }
        let m = lam + 2.0 * mu;
        if m < 0.0 {
            return Err(PhysicsError::numeric_domain("lam", "sqrt", m));
        }
        let vp = (m / rho).sqrt();
        let vs = (mu / rho).sqrt();
        let vs2 = vs * vs;
        let vpvs = vp * vp - 2.0 * vs2;

        gvp[[i, j]] = (glam * 2.0 * vp * rho) as f32;
        gvs[[i, j]] = (glam * (-4.0 * rho * vs) + gmu * 2.0 * vs * rho) as f32;
        grho[[i, j]] = (glam * vpvs + gmu * vs2 + grho_in) as f32;
    }

    Ok(ElasticGradient32 {
        vp: gvp,
        vs: gvs,
        rho: grho,
    })
}

// ============================================================
// 测试
// ============================================================
