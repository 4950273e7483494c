// crates/sp_physics/tests/golden_fixture.rs
//!
//! 黄金回归场景
//!
//! 固定场景：φ=0.2, cc=0.3, sw=0.6，石英/黏土/水/烃端元参数与 cs=15，
//! 弹性梯度 gvp=1, gvs=0, gρ=0。期望值一次计算后锁定，
//! 用于防止公式结构的静默回归。

use std::collections::HashMap;

use sp_physics::selector::PcsParameterization;
use sp_physics::types::{ElasticGradient, ElasticModel, PcsState};
use sp_physics::{to_bulk_shear_density_grad, to_elastic_moduli};

const DIM: (usize, usize) = (2, 3);

fn rock_properties() -> HashMap<String, f64> {
    [
        ("k_q", 37e9),
        ("k_c", 21e9),
        ("k_w", 2.25e9),
        ("k_h", 0.1e9),
        ("mu_q", 44e9),
        ("mu_c", 9e9),
        ("rho_q", 2650.0),
        ("rho_c", 2550.0),
        ("rho_w", 1000.0),
        ("rho_h", 100.0),
        ("cs", 15.0),
    ]
    .iter()
    .map(|&(k, v)| (k.to_string(), v))
    .collect()
}

fn assert_rel(got: f64, expect: f64, tol: f64, what: &str) {
    let rel = (got - expect).abs() / expect.abs();
    assert!(
        rel < tol,
        "{}: got {:.12e}, expect {:.12e} (rel={:.2e})",
        what,
        got,
        expect,
        rel
    );
}

#[test]
fn gassmann_scenario_pinned() {
    let param = PcsParameterization::from_name("gassmann", &rock_properties()).unwrap();
    let state = PcsState::uniform(DIM, 0.2, 0.3, 0.6);
    let grad = ElasticGradient::uniform(DIM, 1.0, 0.0, 0.0);

    // 引擎内部重算的正演弹性场
    let fwd = param.pcs_to_elastic(&state).unwrap();
    assert_rel(fwd.vp[[0, 0]], 2754.573_089_725_85, 1e-10, "gassmann vp");
    assert_rel(fwd.vs[[1, 2]], 1480.194_072_793_418, 1e-10, "gassmann vs");
    assert_rel(fwd.rho[[0, 1]], 2224.0, 1e-12, "gassmann rho");

    let out = param.grad_elastic_to_pcs(&grad, &state).unwrap();
    assert_rel(out.phi[[0, 0]], -4.853_244_338_489e3, 1e-9, "g_phi");
    assert_rel(out.cc[[1, 1]], -7.839_497_023_205e2, 1e-9, "g_cc");
    assert_rel(out.sw[[0, 2]], 3.286_726_774_056e2, 1e-9, "g_sw");
}

#[test]
fn vrh_scenario_pinned() {
    let param = PcsParameterization::from_name("vrh", &rock_properties()).unwrap();
    let state = PcsState::uniform(DIM, 0.2, 0.3, 0.6);
    let grad = ElasticGradient::uniform(DIM, 1.0, 0.0, 0.0);

    let out = param.grad_elastic_to_pcs(&grad, &state).unwrap();
    assert_rel(out.phi[[0, 0]], -7.454_319_492_084e2, 1e-9, "g_phi");
    assert_rel(out.cc[[0, 0]], -1.431_514_905_364e3, 1e-9, "g_cc");
    assert_rel(out.sw[[0, 0]], -6.555_086_997_662e1, 1e-9, "g_sw");
}

#[test]
fn adapter_at_prescribed_elastic_point() {
    // 场景给定的弹性点 vp=2500, vs=1200, ρ=2200 处的模量域适配
    let grad = ElasticGradient::uniform(DIM, 1.0, 0.0, 0.0);
    let model = ElasticModel::uniform(DIM, 2500.0, 1200.0, 2200.0);
    let kmr = to_bulk_shear_density_grad(&grad, &model).unwrap();

    assert_rel(kmr.k[[0, 0]], 9.090_909_090_909_091e-8, 1e-12, "gK");
    assert_rel(kmr.mu[[1, 1]], 1.212_121_212_121_212e-7, 1e-12, "gμ");
    assert_rel(kmr.rho[[0, 2]], -0.568_181_818_181_818_2, 1e-12, "gρ");
}

#[test]
fn switcher_at_prescribed_elastic_point() {
    let grad = ElasticGradient::uniform(DIM, 0.7, -1.3, 0.25);
    let model = ElasticModel::uniform(DIM, 2500.0, 1200.0, 2200.0);
    let out = to_elastic_moduli(&grad, &model).unwrap();

    // 单精度输出，按 f32 精度比较
    assert_rel(out.lam[[0, 0]] as f64, 6.363_636_4e-8, 1e-6, "gλ");
    assert_rel(out.mu[[1, 2]] as f64, -1.189_394e-7, 1e-6, "gμ");
    assert_rel(out.rho[[0, 1]] as f64, 0.206_818_18, 1e-6, "gρ");
}
