// crates/sp_physics/src/rock_physics/mixing.rs

//! 混合律标量公式
//!
//! 端元混合与 Gassmann 中间量的闭式公式，全部为逐点标量函数：
//!
//! - 线性（Voigt）加权平均
//! - 骨架排水模量 Kd、μd
//! - Biot delta 修正项
//!
//! 这些公式同时被正演映射和梯度引擎使用，是混合权重一致性不变量的
//! 单一实现点。

/// 线性加权平均
///
/// `w·a + (1−w)·b`，权重乘在第一个参数上（调用约定，勿交换）。
#[inline]
pub fn weighted_average(a: f64, b: f64, w: f64) -> f64 {
    w * a + (1.0 - w) * b
}

/// 骨架排水模量
///
/// Kd = Ks(1−φ)/(1+cs·φ)，μd = μs(1−φ)/(1+1.5·cs·φ)。
///
/// # 参数
///
/// - `phi`: 孔隙度 φ
/// - `ks`, `mus`: 固相混合物体积/剪切模量 [Pa]
/// - `cs`: 骨架固结指数
#[inline]
pub fn drained_moduli(phi: f64, ks: f64, mus: f64, cs: f64) -> (f64, f64) {
    let kd = ks * (1.0 - phi) / (1.0 + cs * phi);
    let mud = mus * (1.0 - phi) / (1.0 + 1.5 * cs * phi);
    (kd, mud)
}

/// Biot delta 修正项
///
/// δ = ((1−φ)/φ)·(Kf/Ks)·(1 − Kd/(Ks(1−φ)))
///
/// Gassmann 方程中联系骨架与流体压缩性的中间量。φ、Ks 为零时未定义，
/// 由调用方保证（引擎在场级预先检查）。
#[inline]
pub fn biot_delta(phi: f64, kf: f64, ks: f64, kd: f64) -> f64 {
    ((1.0 - phi) / phi) * (kf / ks) * (1.0 - kd / (ks * (1.0 - phi)))
}

// ============================================================
// 测试
// ============================================================
