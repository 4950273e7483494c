// crates/sp_physics/src/gradient/gassmann.rs

//! Gassmann 模型 PCS 梯度引擎
//!
//! 将弹性域梯度 (gvp, gvs, gρ) 切换为 PCS 域梯度 (gφ, gcc, gsw)。
//!
//! 流程：
//! 1. 经内部 Gassmann 正演重算当前弹性场（与梯度公式共享同一份
//!    单点中间量 [`GassmannCell`]，一致性由结构保证）
//! 2. 适配器得到 (gK, gμ, gρ)
//! 3. 三个逐参数导数块给出 ∂K/∂p、∂μ/∂p、∂ρ/∂p
//! 4. 重组 g_p = gK·∂K/∂p + gμ·∂μ/∂p + gρ·∂ρ/∂p
//!
//! 三个导数块对 Gassmann 分数
//! `(φ·Kd + Kf·(1−(1+φ)Kd/Ks)) / (φ·(1+δ))`
//! 做不同的积/商法则展开，结构必须与正演公式逐项对应，
//! 任何偏差都是静默的正确性缺陷而非崩溃。

use crate::error::{PhysicsError, PhysicsResult};
use crate::gradient::adapter::kmr_point;
use crate::properties::GassmannProperties;
use crate::rock_physics::forward::{gassmann_cell, velocity_from_moduli, GassmannCell};
use crate::types::{ElasticGradient, Field, PcsGradient, PcsState};

/// φ 导数块: (∂K/∂φ, ∂μ/∂φ, ∂ρ/∂φ)
fn phi_block(phi: f64, cs: f64, cell: &GassmannCell) -> (f64, f64, f64) {
    let gkd_phi = -cell.ks * (1.0 + cs) / (1.0 + cs * phi).powi(2);
    let gmud_phi = -cell.mus * (1.0 + 1.5 * cs) / (1.0 + 1.5 * cs * phi).powi(2);

    let gdelta_phi = -(cell.kf / (cell.ks * phi * phi)) * (1.0 - 1.0 / (1.0 + cs * phi))
        + (cell.kf * (1.0 - phi) / (cell.ks * phi)) * (cs / (1.0 + cs * phi).powi(2));

    let kfks = cell.kf / cell.ks;
    let phi_p = 1.0 + phi;
    let phi_delta = phi * (1.0 + cell.delta);

    let gk_phi = (cell.kd + phi * gkd_phi - kfks * (cell.kd + phi_p * gkd_phi)) / phi_delta
        - (phi * cell.kd + cell.kf - kfks * phi_p * cell.kd)
            * (1.0 + cell.delta + phi * gdelta_phi)
            / phi_delta.powi(2);

    (gk_phi, gmud_phi, cell.rhof - cell.rhos)
}

/// cc 导数块: (∂K/∂cc, ∂μ/∂cc, ∂ρ/∂cc)
///
/// Ks、μs 经线性混合依赖 cc，Kd、μd、δ 随之变化。
fn cc_block(phi: f64, p: &GassmannProperties, cell: &GassmannCell) -> (f64, f64, f64) {
    let gks_c = p.k_c - p.k_q;
    let gmus_c = p.mu_c - p.mu_q;

    let gkd_c = gks_c * (1.0 - phi) / (1.0 + p.cs * phi);
    let gmud_c = gmus_c * (1.0 - phi) / (1.0 + 1.5 * p.cs * phi);

    let kfks2 = cell.kf / (cell.ks * cell.ks);
    let gdelta_c = ((phi - 1.0) * kfks2 / phi) * (1.0 - 1.0 / (1.0 + p.cs * phi)) * gks_c;

    let kfks = cell.kf / cell.ks;
    let phi_p = 1.0 + phi;
    let phi_delta = phi * (1.0 + cell.delta);

    let gk_c = (phi * gkd_c + kfks2 * phi_p * (gks_c * cell.kd - gkd_c * cell.ks)) / phi_delta
        - (phi * cell.kd + cell.kf - kfks * phi_p * cell.kd) * (phi * gdelta_c)
            / phi_delta.powi(2);

    (gk_c, gmud_c, (1.0 - phi) * (p.rho_c - p.rho_q))
}

/// sw 导数块: (∂K/∂sw, ∂μ/∂sw, ∂ρ/∂sw)
///
/// 只有流体混合依赖 sw；δ 与 Kf 成正比，故 ∂δ/∂sw = ∂Kf/∂sw·δ/Kf。
/// 剪切通道不含流体贡献。
fn sw_block(phi: f64, p: &GassmannProperties, cell: &GassmannCell) -> (f64, f64, f64) {
    let gkf_sw = p.k_w - p.k_h;
    let gdelta_sw = gkf_sw * cell.delta / cell.kf;

    let phi_p = 1.0 + phi;
    let phi_delta = phi * (1.0 + cell.delta);
    let num = 1.0 - phi_p * cell.kd / cell.ks;

    let gk_sw = num * gkf_sw / phi_delta
        - (phi * cell.kd + cell.kf * num) * phi * gdelta_sw / phi_delta.powi(2);

    (gk_sw, 0.0, phi * (p.rho_w - p.rho_h))
}

/// Gassmann 弹性域梯度 → PCS 域梯度
///
/// 输出场与输入同形状、新分配。φ 必须位于 (0, 1)（Biot delta 的除法），
/// 其余数值域违例同样以 [`PhysicsError::NumericDomain`] 报告。
pub fn grad_elastic_to_pcs(
    grad: &ElasticGradient,
    props: &GassmannProperties,
    state: &PcsState,
) -> PhysicsResult<PcsGradient> {
    grad.check_consistent()?;
    state.check_consistent()?;
    let dim = state.dim();
    PhysicsError::check_shape("grad.vp", dim, grad.dim())?;
    state.log_range_warnings();
    log::debug!("Gassmann 梯度切换: 场形状 {:?}", dim);

    let mut g_phi = Field::zeros(dim);
    let mut g_cc = Field::zeros(dim);
    let mut g_sw = Field::zeros(dim);

    for ((i, j), &phi) in state.phi.indexed_iter() {
        let cc = state.cc[[i, j]];
        let sw = state.sw[[i, j]];

        let cell = gassmann_cell(phi, cc, sw, props)?;
        let (vp, vs) = velocity_from_moduli(cell.k_sat, cell.mud, cell.rho)?;
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

        let (kp, mp, rp) = phi_block(phi, props.cs, &cell);
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
