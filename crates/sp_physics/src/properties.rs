// crates/sp_physics/src/properties.rs

//! 岩石属性配置
//!
//! 按模型划分的岩石属性结构体，替代松散的键值映射：
//! - [`GassmannProperties`]: Gassmann 流体替换模型（含固结指数 cs）
//! - [`VrhProperties`]: Voigt-Reuss-Hill 混合模型
//! - [`HanProperties`]: Han 经验回归模型（仅密度端元 + 回归系数）
//!
//! 所有结构体在构造时快速失败：`from_map` 报告第一个缺失的键，
//! `validate` 检查模量与密度为正。字段默认值为常用的
//! 石英/黏土/水/烃端元参数。
//!
//! # 命名约定
//!
//! 下标 q/c/w/h 分别代表石英 (quartz)、黏土 (clay)、水 (water)、烃 (hydrocarbon)。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use sp_foundation::{ensure, SpError, SpResult};

// ============================================================
// 默认端元参数
// ============================================================

fn default_k_q() -> f64 {
    37e9
}
fn default_k_c() -> f64 {
    21e9
}
fn default_k_w() -> f64 {
    2.25e9
}
fn default_k_h() -> f64 {
    0.1e9
}
fn default_mu_q() -> f64 {
    44e9
}
fn default_mu_c() -> f64 {
    9e9
}
fn default_rho_q() -> f64 {
    2650.0
}
fn default_rho_c() -> f64 {
    2550.0
}
fn default_rho_w() -> f64 {
    1000.0
}
fn default_rho_h() -> f64 {
    100.0
}
fn default_cs() -> f64 {
    15.0
}

/// 从键值映射读取必需键，缺失时报告键名
fn required(map: &HashMap<String, f64>, key: &'static str) -> SpResult<f64> {
    map.get(key)
        .copied()
        .ok_or_else(|| SpError::missing_parameter(key))
}

/// 检查一组 (名称, 值) 均严格为正
fn check_all_positive(entries: &[(&'static str, f64)]) -> SpResult<()> {
    for &(name, value) in entries {
        SpError::check_positive(name, value)?;
    }
    Ok(())
}

// ============================================================
// Gassmann 模型属性
// ============================================================

/// Gassmann 模型岩石属性
///
/// 固相（石英/黏土）与流体相（水/烃）端元的体积模量、剪切模量与密度，
/// 以及骨架固结指数 cs。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GassmannProperties {
    /// 石英体积模量 [Pa]
    #[serde(default = "default_k_q")]
    pub k_q: f64,
    /// 黏土体积模量 [Pa]
    #[serde(default = "default_k_c")]
    pub k_c: f64,
    /// 水体积模量 [Pa]
    #[serde(default = "default_k_w")]
    pub k_w: f64,
    /// 烃体积模量 [Pa]
    #[serde(default = "default_k_h")]
    pub k_h: f64,
    /// 石英剪切模量 [Pa]
    #[serde(default = "default_mu_q")]
    pub mu_q: f64,
    /// 黏土剪切模量 [Pa]
    #[serde(default = "default_mu_c")]
    pub mu_c: f64,
    /// 石英密度 [kg/m³]
    #[serde(default = "default_rho_q")]
    pub rho_q: f64,
    /// 黏土密度 [kg/m³]
    #[serde(default = "default_rho_c")]
    pub rho_c: f64,
    /// 水密度 [kg/m³]
    #[serde(default = "default_rho_w")]
    pub rho_w: f64,
    /// 烃密度 [kg/m³]
    #[serde(default = "default_rho_h")]
    pub rho_h: f64,
    /// 骨架固结指数 cs [-]
    #[serde(default = "default_cs")]
    pub cs: f64,
}

impl Default for GassmannProperties {
    fn default() -> Self {
        Self {
            k_q: default_k_q(),
            k_c: default_k_c(),
            k_w: default_k_w(),
            k_h: default_k_h(),
            mu_q: default_mu_q(),
            mu_c: default_mu_c(),
            rho_q: default_rho_q(),
            rho_c: default_rho_c(),
            rho_w: default_rho_w(),
            rho_h: default_rho_h(),
            cs: default_cs(),
        }
    }
}

impl GassmannProperties {
    /// Gassmann 模型必需的属性键
    pub const REQUIRED_KEYS: &'static [&'static str] = &[
        "k_q", "k_c", "k_w", "k_h", "mu_q", "mu_c", "rho_q", "rho_c", "rho_w", "rho_h", "cs",
    ];

    /// 从键值映射构造，缺键与非法值在此报告
    pub fn from_map(map: &HashMap<String, f64>) -> SpResult<Self> {
        let props = Self {
            k_q: required(map, "k_q")?,
            k_c: required(map, "k_c")?,
            k_w: required(map, "k_w")?,
            k_h: required(map, "k_h")?,
            mu_q: required(map, "mu_q")?,
            mu_c: required(map, "mu_c")?,
            rho_q: required(map, "rho_q")?,
            rho_c: required(map, "rho_c")?,
            rho_w: required(map, "rho_w")?,
            rho_h: required(map, "rho_h")?,
            cs: required(map, "cs")?,
        };
        props.validate()?;
        Ok(props)
    }

    /// 验证属性有效性（模量与密度为正，cs 非负）
    pub fn validate(&self) -> SpResult<()> {
        check_all_positive(&[
            ("k_q", self.k_q),
            ("k_c", self.k_c),
            ("k_w", self.k_w),
            ("k_h", self.k_h),
            ("mu_q", self.mu_q),
            ("mu_c", self.mu_c),
            ("rho_q", self.rho_q),
            ("rho_c", self.rho_c),
            ("rho_w", self.rho_w),
            ("rho_h", self.rho_h),
        ])?;
        ensure!(
            self.cs >= 0.0 && self.cs.is_finite(),
            SpError::validation(format!("cs 必须非负: {}", self.cs))
        );
        Ok(())
    }
}

// ============================================================
// VRH 模型属性
// ============================================================

/// Voigt-Reuss-Hill 模型岩石属性
///
/// 与 Gassmann 相同的端元集合，但不使用固结指数。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VrhProperties {
    /// 石英体积模量 [Pa]
    #[serde(default = "default_k_q")]
    pub k_q: f64,
    /// 黏土体积模量 [Pa]
    #[serde(default = "default_k_c")]
    pub k_c: f64,
    /// 水体积模量 [Pa]
    #[serde(default = "default_k_w")]
    pub k_w: f64,
    /// 烃体积模量 [Pa]
    #[serde(default = "default_k_h")]
    pub k_h: f64,
    /// 石英剪切模量 [Pa]
    #[serde(default = "default_mu_q")]
    pub mu_q: f64,
    /// 黏土剪切模量 [Pa]
    #[serde(default = "default_mu_c")]
    pub mu_c: f64,
    /// 石英密度 [kg/m³]
    #[serde(default = "default_rho_q")]
    pub rho_q: f64,
    /// 黏土密度 [kg/m³]
    #[serde(default = "default_rho_c")]
    pub rho_c: f64,
    /// 水密度 [kg/m³]
    #[serde(default = "default_rho_w")]
    pub rho_w: f64,
    /// 烃密度 [kg/m³]
    #[serde(default = "default_rho_h")]
    pub rho_h: f64,
}

impl Default for VrhProperties {
    fn default() -> Self {
        Self {
            k_q: default_k_q(),
            k_c: default_k_c(),
            k_w: default_k_w(),
            k_h: default_k_h(),
            mu_q: default_mu_q(),
            mu_c: default_mu_c(),
            rho_q: default_rho_q(),
            rho_c: default_rho_c(),
            rho_w: default_rho_w(),
            rho_h: default_rho_h(),
        }
    }
}

impl VrhProperties {
    /// VRH 模型必需的属性键
    pub const REQUIRED_KEYS: &'static [&'static str] = &[
        "k_q", "k_c", "k_w", "k_h", "mu_q", "mu_c", "rho_q", "rho_c", "rho_w", "rho_h",
    ];

    /// 从键值映射构造，缺键与非法值在此报告
    pub fn from_map(map: &HashMap<String, f64>) -> SpResult<Self> {
        let props = Self {
            k_q: required(map, "k_q")?,
            k_c: required(map, "k_c")?,
            k_w: required(map, "k_w")?,
            k_h: required(map, "k_h")?,
            mu_q: required(map, "mu_q")?,
            mu_c: required(map, "mu_c")?,
            rho_q: required(map, "rho_q")?,
            rho_c: required(map, "rho_c")?,
            rho_w: required(map, "rho_w")?,
            rho_h: required(map, "rho_h")?,
        };
        props.validate()?;
        Ok(props)
    }

    /// 验证属性有效性（模量与密度为正）
    pub fn validate(&self) -> SpResult<()> {
        check_all_positive(&[
            ("k_q", self.k_q),
            ("k_c", self.k_c),
            ("k_w", self.k_w),
            ("k_h", self.k_h),
            ("mu_q", self.mu_q),
            ("mu_c", self.mu_c),
            ("rho_q", self.rho_q),
            ("rho_c", self.rho_c),
            ("rho_w", self.rho_w),
            ("rho_h", self.rho_h),
        ])
    }
}

// ============================================================
// Han 模型属性
// ============================================================

/// Han 经验回归系数
///
/// vp = a1 − a2·φ − a3·cc，vs = b1 − b2·φ − b3·cc（单位 km/s）。
/// 默认值取 Han (1986) 砂泥岩回归，可整体或逐项覆盖。
/// 梯度引擎使用的正是这组斜率，保证正演与梯度互相一致。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HanRegression {
    /// vp 截距 [km/s]
    pub a1: f64,
    /// vp 孔隙度斜率 [km/s]
    pub a2: f64,
    /// vp 黏土含量斜率 [km/s]
    pub a3: f64,
    /// vs 截距 [km/s]
    pub b1: f64,
    /// vs 孔隙度斜率 [km/s]
    pub b2: f64,
    /// vs 黏土含量斜率 [km/s]
    pub b3: f64,
}

impl Default for HanRegression {
    fn default() -> Self {
        Self {
            a1: 5.59,
            a2: 6.9,
            a3: 2.2,
            b1: 3.52,
            b2: 4.7,
            b3: 1.8,
        }
    }
}

impl HanRegression {
    /// 创建默认回归系数
    pub fn new() -> Self {
        Self::default()
    }

    /// 覆盖 vp 系数
    pub fn with_vp(mut self, a1: f64, a2: f64, a3: f64) -> Self {
        self.a1 = a1;
        self.a2 = a2;
        self.a3 = a3;
        self
    }

    /// 覆盖 vs 系数
    pub fn with_vs(mut self, b1: f64, b2: f64, b3: f64) -> Self {
        self.b1 = b1;
        self.b2 = b2;
        self.b3 = b3;
        self
    }
}

/// Han 模型岩石属性
///
/// 经验回归模型只需要四个密度端元（密度通道是唯一随空间变化的导数），
/// 速度通道由回归系数决定。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HanProperties {
    /// 石英密度 [kg/m³]
    #[serde(default = "default_rho_q")]
    pub rho_q: f64,
    /// 黏土密度 [kg/m³]
    #[serde(default = "default_rho_c")]
    pub rho_c: f64,
    /// 水密度 [kg/m³]
    #[serde(default = "default_rho_w")]
    pub rho_w: f64,
    /// 烃密度 [kg/m³]
    #[serde(default = "default_rho_h")]
    pub rho_h: f64,
    /// 回归系数
    #[serde(default)]
    pub regression: HanRegression,
}

impl Default for HanProperties {
    fn default() -> Self {
        Self {
            rho_q: default_rho_q(),
            rho_c: default_rho_c(),
            rho_w: default_rho_w(),
            rho_h: default_rho_h(),
            regression: HanRegression::default(),
        }
    }
}

impl HanProperties {
    /// Han 模型必需的属性键（回归系数有默认值，不在其中）
    pub const REQUIRED_KEYS: &'static [&'static str] = &["rho_q", "rho_c", "rho_w", "rho_h"];

    /// 从键值映射构造，缺键与非法值在此报告，回归系数取默认
    pub fn from_map(map: &HashMap<String, f64>) -> SpResult<Self> {
        let props = Self {
            rho_q: required(map, "rho_q")?,
            rho_c: required(map, "rho_c")?,
            rho_w: required(map, "rho_w")?,
            rho_h: required(map, "rho_h")?,
            regression: HanRegression::default(),
        };
        props.validate()?;
        Ok(props)
    }

    /// 验证属性有效性（密度为正）
    pub fn validate(&self) -> SpResult<()> {
        check_all_positive(&[
            ("rho_q", self.rho_q),
            ("rho_c", self.rho_c),
            ("rho_w", self.rho_w),
            ("rho_h", self.rho_h),
        ])
    }
}

// ============================================================
// 测试
// ============================================================
