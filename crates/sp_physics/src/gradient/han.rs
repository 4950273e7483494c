// crates/sp_physics/src/gradient/han.rs

//! Han 模型 PCS 梯度引擎
//!
//! Han 的模型是经验回归 vp, vs = f(φ, cc)（km/s）加密度混合，不是
//! 物理的模量混合律，因此引擎直接在速度空间重组，不经过 (K, μ, ρ)
//! 适配器：
//!
//! ```text
//! g_p = gvp·∂vp/∂p + gvs·∂vs/∂p + gρ·∂ρ/∂p
//! ```
//!
//! 速度通道的导数是回归斜率常数（φ 用 a2/b2，cc 用 a3/b3，sw 为零），
//! 只有密度通道随空间变化（混合密度的加权差）。

use crate::error::{PhysicsError, PhysicsResult};
use crate::properties::HanProperties;
use crate::rock_physics::mixing::weighted_average;
use crate::types::{ElasticGradient, Field, PcsGradient, PcsState};

/// Han 弹性域梯度 → PCS 域梯度
pub fn grad_elastic_to_pcs(
    grad: &ElasticGradient,
    props: &HanProperties,
    state: &PcsState,
) -> PhysicsResult<PcsGradient> {
    grad.check_consistent()?;
    state.check_consistent()?;
    let dim = state.dim();
    PhysicsError::check_shape("grad.vp", dim, grad.dim())?;
    state.log_range_warnings();
    log::debug!("Han 梯度切换: 场形状 {:?}", dim);

    let r = &props.regression;

    let mut g_phi = Field::zeros(dim);
    let mut g_cc = Field::zeros(dim);
    let mut g_sw = Field::zeros(dim);

    for ((i, j), &phi) in state.phi.indexed_iter() {
        let cc = state.cc[[i, j]];
        let sw = state.sw[[i, j]];

        let rhos = weighted_average(props.rho_c, props.rho_q, cc);
        let rhof = weighted_average(props.rho_w, props.rho_h, sw);

        let gvp = grad.vp[[i, j]];
        let gvs = grad.vs[[i, j]];
        let grho = grad.rho[[i, j]];

        g_phi[[i, j]] = gvp * (-r.a2) + gvs * (-r.b2) + grho * (rhof - rhos);
        g_cc[[i, j]] = gvp * (-r.a3) + gvs * (-r.b3) + grho * (1.0 - phi) * (props.rho_c - props.rho_q);
        g_sw[[i, j]] = grho * phi * (props.rho_w - props.rho_h);
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

#[cfg(test)]
mod tests {
    use super::*;

    const DIM: (usize, usize) = (2, 3);

    #[test]
    fn test_han_reference() {
        // gvp=0.5, gvs=-0.25, gρ=1.5e-3 @ φ=0.2, cc=0.3, sw=0.6
        let grad = ElasticGradient::uniform(DIM, 0.5, -0.25, 1.5e-3);
        let props = HanProperties::default();
        let state = PcsState::uniform(DIM, 0.2, 0.3, 0.6);
        let out = grad_elastic_to_pcs(&grad, &props, &state).unwrap();

        assert!((out.phi[[0, 0]] - (-5.245)).abs() < 1e-12);
        assert!((out.cc[[1, 2]] - (-0.77)).abs() < 1e-12);
        assert!((out.sw[[0, 1]] - 0.27).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_derivatives_are_constant_slopes() {
        // 纯速度梯度（gρ=0）时输出与 PCS 状态无关
        let grad = ElasticGradient::uniform(DIM, 1.0, 1.0, 0.0);
        let props = HanProperties::default();
        let s1 = PcsState::uniform(DIM, 0.1, 0.2, 0.3);
        let s2 = PcsState::uniform(DIM, 0.7, 0.8, 0.9);
        let o1 = grad_elastic_to_pcs(&grad, &props, &s1).unwrap();
        let o2 = grad_elastic_to_pcs(&grad, &props, &s2).unwrap();

        assert_eq!(o1.phi[[0, 0]], o2.phi[[0, 0]]);
        assert_eq!(o1.cc[[0, 0]], o2.cc[[0, 0]]);
        // sw 通道在 gρ=0 时恒为零
        assert_eq!(o1.sw[[1, 1]], 0.0);
        assert_eq!(o2.sw[[1, 1]], 0.0);
    }

    #[test]
    fn test_overridden_slopes_flow_through() {
        let grad = ElasticGradient::uniform(DIM, 1.0, 0.0, 0.0);
        let mut props = HanProperties::default();
        props.regression = props.regression.with_vp(5.77, 6.94, 1.73);
        let state = PcsState::uniform(DIM, 0.2, 0.3, 0.6);
        let out = grad_elastic_to_pcs(&grad, &props, &state).unwrap();

        assert!((out.phi[[0, 0]] - (-6.94)).abs() < 1e-12);
        assert!((out.cc[[0, 0]] - (-1.73)).abs() < 1e-12);
    }

    #[test]
    fn test_density_channel_spatially_varying() {
        let grad = ElasticGradient::uniform(DIM, 0.0, 0.0, 1.0);
        let props = HanProperties::default();
        let mut state = PcsState::uniform(DIM, 0.2, 0.3, 0.6);
        state.phi[[0, 0]] = 0.4;
        let out = grad_elastic_to_pcs(&grad, &props, &state).unwrap();

        // g_sw = φ(ρw − ρh)
        assert!((out.sw[[0, 0]] - 0.4 * 900.0).abs() < 1e-12);
        assert!((out.sw[[0, 1]] - 0.2 * 900.0).abs() < 1e-12);
    }

    #[test]
    fn test_shape_invariance() {
        let grad = ElasticGradient::uniform((4, 1), 1.0, 1.0, 1.0);
        let props = HanProperties::default();
        let state = PcsState::uniform((4, 1), 0.2, 0.3, 0.6);
        let out = grad_elastic_to_pcs(&grad, &props, &state).unwrap();
        assert_eq!(out.dim(), (4, 1));
    }
}
