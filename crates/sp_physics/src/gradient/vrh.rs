// crates/sp_physics/src/gradient/vrh.rs

//! Voigt-Reuss-Hill 模型 PCS 梯度引擎
//!
//! 与 Gassmann 引擎同构，但有效体积模量来自 Voigt 上界与 Reuss 下界的
//! 算术平均，不需要排水模量与 Biot delta 中间量。每个逐参数导数块的
//! ∂K/∂p 是 Voigt 分支与 Reuss 分支的 0.5 加权和，Reuss 分支总是携带
//! 对 1/K_Reuss 求导产生的 kr² 因子；剪切导数只有 Voigt 分支
//! （流体零剪切使 Reuss 剪切混合退化）。
//!
//! 正演弹性场经 VRH 自身的正演映射重算，与被微分的混合律一致。

use crate::error::{PhysicsError, PhysicsResult};
use crate::gradient::adapter::kmr_point;
use crate::properties::VrhProperties;
use crate::rock_physics::forward::{velocity_from_moduli, vrh_cell, VrhCell};
use crate::types::{ElasticGradient, Field, PcsGradient, PcsState};

/// φ 导数块: (∂K/∂φ, ∂μ/∂φ, ∂ρ/∂φ)
fn phi_block(cc: f64, sw: f64, p: &VrhProperties, cell: &VrhCell) -> (f64, f64, f64) {
    // Voigt 分支
    let gkv_phi = -p.k_c * cc - p.k_q * (1.0 - cc) + p.k_w * sw + p.k_h * (1.0 - sw);
    // Reuss 分支
    let gkr_phi = cell.kr.powi(2)
        * (cc / p.k_c + (1.0 - cc) / p.k_q - sw / p.k_w - (1.0 - sw) / p.k_h);
    let gk_phi = 0.5 * (gkv_phi + gkr_phi);

    let gmu_phi = 0.5 * (-p.mu_c * cc - p.mu_q * (1.0 - cc));

    (gk_phi, gmu_phi, cell.rhof - cell.rhos)
}

/// cc 导数块: (∂K/∂cc, ∂μ/∂cc, ∂ρ/∂cc)
fn cc_block(phi: f64, p: &VrhProperties, cell: &VrhCell) -> (f64, f64, f64) {
    let gkv_c = (1.0 - phi) * (p.k_c - p.k_q);
    let gkr_c = (1.0 - phi) * cell.kr.powi(2) * (1.0 / p.k_q - 1.0 / p.k_c);
    let gk_c = 0.5 * (gkv_c + gkr_c);

    let gmu_c = 0.5 * (1.0 - phi) * (p.mu_c - p.mu_q);

    (gk_c, gmu_c, (1.0 - phi) * (p.rho_c - p.rho_q))
}

/// sw 导数块: (∂K/∂sw, ∂μ/∂sw, ∂ρ/∂sw)
fn sw_block(phi: f64, p: &VrhProperties, cell: &VrhCell) -> (f64, f64, f64) {
    let gkv_sw = phi * (p.k_w - p.k_h);
    let gkr_sw = phi * cell.kr.powi(2) * (1.0 / p.k_h - 1.0 / p.k_w);
    let gk_sw = 0.5 * (gkv_sw + gkr_sw);

    (gk_sw, 0.0, phi * (p.rho_w - p.rho_h))
}

/// VRH 弹性域梯度 → PCS 域梯度
pub fn grad_elastic_to_pcs(
    grad: &ElasticGradient,
    props: &VrhProperties,
    state: &PcsState,
) -> PhysicsResult<PcsGradient> {
    grad.check_consistent()?;
    state.check_consistent()?;
    let dim = state.dim();
    PhysicsError::check_shape("grad.vp", dim, grad.dim())?;
    state.log_range_warnings();
    log::debug!("VRH 梯度切换: 场形状 {:?}", dim);

    let mut g_phi = Field::zeros(dim);
    let mut g_cc = Field::zeros(dim);
    let mut g_sw = Field::zeros(dim);

    for ((i, j), &phi) in state.phi.indexed_iter() {
        let cc = state.cc[[i, j]];
        let sw = state.sw[[i, j]];

        let cell = vrh_cell(phi, cc, sw, props)?;
        let (vp, vs) = velocity_from_moduli(cell.k, cell.mu, cell.rho)?;
        if vp <= 0.0 {
            return Err(PhysicsError::numeric_domain("vp", "divide", vp));
        }
        if vs <= 0.0 {
            return Err(PhysicsError::numeric_domain("vs", "divide", vs));
        }

        let (gk, gmu, gr) = kmr_point(
            grad.vp[[i, j]],
            grad.vs[[i, j]],
            grad.rho[[i, j]],
            vp,
            vs,
            cell.rho,
        );

        let (kp, mp, rp) = phi_block(cc, sw, props, &cell);
        g_phi[[i, j]] = gk * kp + gmu * mp + gr * rp;

        let (kc, mc, rc) = cc_block(phi, props, &cell);
        g_cc[[i, j]] = gk * kc + gmu * mc + gr * rc;

        let (ks, ms, rs) = sw_block(phi, props, &cell);
        g_sw[[i, j]] = gk * ks + gmu * ms + gr * rs;
    }

    Ok(PcsGradient {
        phi: g_phi,
        cc: g_cc,
        sw: g_sw,
    })
}

// ============================================================
// 测试
// ============================================================
