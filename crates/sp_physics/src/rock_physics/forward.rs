// crates/sp_physics/src/rock_physics/forward.rs

//! PCS → 弹性参数正演映射
//!
//! 三种岩石物理模型的逐点正演：
//! - Gassmann 流体替换（饱和体积模量经 Biot delta 修正）
//! - Voigt-Reuss-Hill 混合（上下界算术平均）
//! - Han 经验回归（速度单位 km/s，密度通道与前两者一致）
//!
//! 逐点中间量结构体（[`GassmannCell`] / [`VrhCell`]）同时供梯度引擎使用：
//! 正演与导数块读取同一份固相/流体混合量与排水模量，一致性由结构保证。
//!
//! 数值域约定：除零与负数开方在此转换为 [`PhysicsError::NumericDomain`]，
//! 不静默产生 NaN。

use sp_foundation::float::is_safe_divisor;

use crate::error::{PhysicsError, PhysicsResult};
use crate::properties::{GassmannProperties, HanProperties, VrhProperties};
use crate::rock_physics::mixing::{biot_delta, drained_moduli, weighted_average};
use crate::types::{ElasticModel, Field, PcsState};

/// 由 (K, μ, ρ) 计算速度对 (vp, vs)
///
/// vp = √((K + 4μ/3)/ρ)，vs = √(μ/ρ)。
#[inline]
pub(crate) fn velocity_from_moduli(k: f64, mu: f64, rho: f64) -> PhysicsResult<(f64, f64)> {
    if !(is_safe_divisor(rho) && rho > 0.0) {
        return Err(PhysicsError::numeric_domain("rho", "divide", rho));
    }
    let m = k + 4.0 * mu / 3.0;
    if m < 0.0 {
        return Err(PhysicsError::numeric_domain("k", "sqrt", m));
    }
    if mu < 0.0 {
        return Err(PhysicsError::numeric_domain("mu", "sqrt", mu));
    }
    Ok(((m / rho).sqrt(), (mu / rho).sqrt()))
}

// ============================================================
// Gassmann
// ============================================================

/// Gassmann 模型单点正演状态
///
/// 一次计算、三处消费：正演速度、梯度引擎的三个逐参数导数块
/// 都从这里读取混合量与排水模量。
#[derive(Debug, Clone, Copy)]
pub(crate) struct GassmannCell {
    /// 固相体积模量 Ks [Pa]
    pub ks: f64,
    /// 固相剪切模量 μs [Pa]
    pub mus: f64,
    /// 固相密度 ρs [kg/m³]
    pub rhos: f64,
    /// 流体体积模量 Kf [Pa]
    pub kf: f64,
    /// 流体密度 ρf [kg/m³]
    pub rhof: f64,
    /// 排水体积模量 Kd [Pa]
    pub kd: f64,
    /// 排水剪切模量 μd [Pa]
    pub mud: f64,
    /// Biot delta 修正项 [-]
    pub delta: f64,
    /// 饱和体积模量 K_sat [Pa]
    pub k_sat: f64,
    /// 总密度 ρ [kg/m³]
    pub rho: f64,
}

/// 计算 Gassmann 单点正演状态
///
/// 检查 φ ∈ (0, 1)（Biot delta 的两个除法）以及固相/流体模量为正。
pub(crate) fn gassmann_cell(
    phi: f64,
    cc: f64,
    sw: f64,
    p: &GassmannProperties,
) -> PhysicsResult<GassmannCell> {
    if !(phi.is_finite() && phi > 0.0 && phi < 1.0) {
        return Err(PhysicsError::numeric_domain("phi", "biot_delta", phi));
    }

    let ks = weighted_average(p.k_c, p.k_q, cc);
    let mus = weighted_average(p.mu_c, p.mu_q, cc);
    let rhos = weighted_average(p.rho_c, p.rho_q, cc);
    let kf = weighted_average(p.k_w, p.k_h, sw);
    let rhof = weighted_average(p.rho_w, p.rho_h, sw);

    if !(is_safe_divisor(ks) && ks > 0.0) {
        return Err(PhysicsError::numeric_domain("k_s", "divide", ks));
    }
    if !(is_safe_divisor(kf) && kf > 0.0) {
        return Err(PhysicsError::numeric_domain("k_f", "divide", kf));
    }

    let (kd, mud) = drained_moduli(phi, ks, mus, p.cs);
    let delta = biot_delta(phi, kf, ks, kd);

    let k_sat = (phi * kd + kf * (1.0 - (1.0 + phi) * kd / ks)) / (phi * (1.0 + delta));
    let rho = (1.0 - phi) * rhos + phi * rhof;

    Ok(GassmannCell {
        ks,
        mus,
        rhos,
        kf,
        rhof,
        kd,
        mud,
        delta,
        k_sat,
        rho,
    })
}

/// Gassmann 模型场级正演
///
/// 输出 vp/vs [m/s]、ρ [kg/m³]，场与输入同形状、新分配。
pub fn pcs_to_elastic_gassmann(
    state: &PcsState,
    props: &GassmannProperties,
) -> PhysicsResult<ElasticModel> {
    state.check_consistent()?;
    let dim = state.dim();

    let mut vp = Field::zeros(dim);
    let mut vs = Field::zeros(dim);
    let mut rho = Field::zeros(dim);

    for ((i, j), &phi) in state.phi.indexed_iter() {
        let cell = gassmann_cell(phi, state.cc[[i, j]], state.sw[[i, j]], props)?;
        let (vp_ij, vs_ij) = velocity_from_moduli(cell.k_sat, cell.mud, cell.rho)?;
        vp[[i, j]] = vp_ij;
        vs[[i, j]] = vs_ij;
        rho[[i, j]] = cell.rho;
    }

    Ok(ElasticModel { vp, vs, rho })
}

// ============================================================
// Voigt-Reuss-Hill
// ============================================================

/// VRH 模型单点正演状态
#[derive(Debug, Clone, Copy)]
pub(crate) struct VrhCell {
    /// Reuss 下界体积模量 Kr [Pa]
    pub kr: f64,
    /// VRH 体积模量 K [Pa]
    pub k: f64,
    /// VRH 剪切模量 μ [Pa]
    pub mu: f64,
    /// 固相密度 ρs [kg/m³]
    pub rhos: f64,
    /// 流体密度 ρf [kg/m³]
    pub rhof: f64,
    /// 总密度 ρ [kg/m³]
    pub rho: f64,
}

/// 计算 VRH 单点正演状态
///
/// K = ½(K_Voigt + K_Reuss)。剪切的 Reuss 分支因流体零剪切而退化为零，
/// 因此 μ = ½·μ_Voigt。
pub(crate) fn vrh_cell(phi: f64, cc: f64, sw: f64, p: &VrhProperties) -> PhysicsResult<VrhCell> {
    let rhos = weighted_average(p.rho_c, p.rho_q, cc);
    let rhof = weighted_average(p.rho_w, p.rho_h, sw);

    // Reuss 调和平均的分母
    let d = (1.0 - phi) * (cc / p.k_c + (1.0 - cc) / p.k_q)
        + phi * (sw / p.k_w + (1.0 - sw) / p.k_h);
    if !(is_safe_divisor(d) && d > 0.0) {
        return Err(PhysicsError::numeric_domain("k_reuss", "reciprocal", d));
    }
    let kr = 1.0 / d;

    let kv = (1.0 - phi) * (cc * p.k_c + (1.0 - cc) * p.k_q)
        + phi * (sw * p.k_w + (1.0 - sw) * p.k_h);
    let k = 0.5 * (kv + kr);
    let mu = 0.5 * (1.0 - phi) * (cc * p.mu_c + (1.0 - cc) * p.mu_q);
    let rho = (1.0 - phi) * rhos + phi * rhof;

    Ok(VrhCell {
        kr,
        k,
        mu,
        rhos,
        rhof,
        rho,
    })
}

/// VRH 模型场级正演
pub fn pcs_to_elastic_vrh(state: &PcsState, props: &VrhProperties) -> PhysicsResult<ElasticModel> {
    state.check_consistent()?;
    let dim = state.dim();

    let mut vp = Field::zeros(dim);
    let mut vs = Field::zeros(dim);
    let mut rho = Field::zeros(dim);

    for ((i, j), &phi) in state.phi.indexed_iter() {
        let cell = vrh_cell(phi, state.cc[[i, j]], state.sw[[i, j]], props)?;
        let (vp_ij, vs_ij) = velocity_from_moduli(cell.k, cell.mu, cell.rho)?;
        vp[[i, j]] = vp_ij;
        vs[[i, j]] = vs_ij;
        rho[[i, j]] = cell.rho;
    }

    Ok(ElasticModel { vp, vs, rho })
}

// ============================================================
// Han
// ============================================================

/// Han 模型单点正演
///
/// vp = a1 − a2·φ − a3·cc，vs = b1 − b2·φ − b3·cc（单位 km/s），
/// ρ 使用与其他模型相同的密度混合 [kg/m³]。
#[inline]
pub(crate) fn han_point(phi: f64, cc: f64, sw: f64, p: &HanProperties) -> (f64, f64, f64) {
    let r = &p.regression;
    let vp = r.a1 - r.a2 * phi - r.a3 * cc;
    let vs = r.b1 - r.b2 * phi - r.b3 * cc;
    let rhos = weighted_average(p.rho_c, p.rho_q, cc);
    let rhof = weighted_average(p.rho_w, p.rho_h, sw);
    let rho = (1.0 - phi) * rhos + phi * rhof;
    (vp, vs, rho)
}

/// Han 模型场级正演
pub fn pcs_to_elastic_han(state: &PcsState, props: &HanProperties) -> PhysicsResult<ElasticModel> {
    state.check_consistent()?;
    let dim = state.dim();

    let mut vp = Field::zeros(dim);
    let mut vs = Field::zeros(dim);
    let mut rho = Field::zeros(dim);

    for ((i, j), &phi) in state.phi.indexed_iter() {
        let (vp_ij, vs_ij, rho_ij) = han_point(phi, state.cc[[i, j]], state.sw[[i, j]], props);
        vp[[i, j]] = vp_ij;
        vs[[i, j]] = vs_ij;
        rho[[i, j]] = rho_ij;
    }

    Ok(ElasticModel { vp, vs, rho })
}

// ============================================================
// 测试
// ============================================================
