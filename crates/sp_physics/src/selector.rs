// crates/sp_physics/src/selector.rs

//! 参数化选择器
//!
//! 按模型名分发正演与梯度切换函数对：
//! - [`RockPhysicsModel`]: 模型枚举，`FromStr` 精确匹配小写名
//! - [`PcsParameterization`]: 模型与已验证属性的带标签绑定
//!
//! 未知模型名在选择时即以 [`PhysicsError::UnknownModel`] 失败，
//! 属性缺键/非法值同样在构造时报告，不会留下未配置的半成品对象。

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, PhysicsResult};
use crate::gradient::{gassmann, han, vrh};
use crate::properties::{GassmannProperties, HanProperties, VrhProperties};
use crate::rock_physics::forward::{
    pcs_to_elastic_gassmann, pcs_to_elastic_han, pcs_to_elastic_vrh,
};
use crate::types::{ElasticGradient, ElasticModel, PcsGradient, PcsState};

/// 支持的模型名（与 [`RockPhysicsModel::name`] 一致）
pub const SUPPORTED_MODELS: &[&str] = &["gassmann", "han", "vrh"];

/// 岩石物理模型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RockPhysicsModel {
    /// Gassmann 流体替换模型
    Gassmann,
    /// Han 经验回归模型
    Han,
    /// Voigt-Reuss-Hill 混合模型
    Vrh,
}

impl RockPhysicsModel {
    /// 模型名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gassmann => "gassmann",
            Self::Han => "han",
            Self::Vrh => "vrh",
        }
    }
}

impl fmt::Display for RockPhysicsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RockPhysicsModel {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gassmann" => Ok(Self::Gassmann),
            "han" => Ok(Self::Han),
            "vrh" => Ok(Self::Vrh),
            _ => Err(PhysicsError::unknown_model(s, SUPPORTED_MODELS)),
        }
    }
}

/// PCS 参数化：模型与已验证属性的绑定
///
/// 构造即完成模型解析与属性验证；`pcs_to_elastic` 与
/// `grad_elastic_to_pcs` 通过穷尽匹配分发到对应引擎，
/// 不存在未绑定函数的状态。
#[derive(Debug, Clone)]
pub enum PcsParameterization {
    /// Gassmann 模型及其属性
    Gassmann(GassmannProperties),
    /// Han 模型及其属性
    Han(HanProperties),
    /// VRH 模型及其属性
    Vrh(VrhProperties),
}

impl PcsParameterization {
    /// 绑定 Gassmann 模型（构造时验证属性）
    pub fn gassmann(props: GassmannProperties) -> PhysicsResult<Self> {
        props.validate()?;
        Ok(Self::Gassmann(props))
    }

    /// 绑定 Han 模型（构造时验证属性）
    pub fn han(props: HanProperties) -> PhysicsResult<Self> {
        props.validate()?;
        Ok(Self::Han(props))
    }

    /// 绑定 VRH 模型（构造时验证属性）
    pub fn vrh(props: VrhProperties) -> PhysicsResult<Self> {
        props.validate()?;
        Ok(Self::Vrh(props))
    }

    /// 按名称与键值映射构造
    ///
    /// 未知名称、缺失键、非法值都在此处快速失败。
    pub fn from_name(name: &str, properties: &HashMap<String, f64>) -> PhysicsResult<Self> {
        match RockPhysicsModel::from_str(name)? {
            RockPhysicsModel::Gassmann => {
                Ok(Self::Gassmann(GassmannProperties::from_map(properties)?))
            }
            RockPhysicsModel::Han => Ok(Self::Han(HanProperties::from_map(properties)?)),
            RockPhysicsModel::Vrh => Ok(Self::Vrh(VrhProperties::from_map(properties)?)),
        }
    }

    /// 绑定的模型
    pub fn model(&self) -> RockPhysicsModel {
        match self {
            Self::Gassmann(_) => RockPhysicsModel::Gassmann,
            Self::Han(_) => RockPhysicsModel::Han,
            Self::Vrh(_) => RockPhysicsModel::Vrh,
        }
    }

    /// PCS → 弹性参数正演
    pub fn pcs_to_elastic(&self, state: &PcsState) -> PhysicsResult<ElasticModel> {
        match self {
            Self::Gassmann(p) => pcs_to_elastic_gassmann(state, p),
            Self::Han(p) => pcs_to_elastic_han(state, p),
            Self::Vrh(p) => pcs_to_elastic_vrh(state, p),
        }
    }

    /// 弹性域梯度 → PCS 域梯度
    pub fn grad_elastic_to_pcs(
        &self,
        grad: &ElasticGradient,
        state: &PcsState,
    ) -> PhysicsResult<PcsGradient> {
        match self {
            Self::Gassmann(p) => gassmann::grad_elastic_to_pcs(grad, p, state),
            Self::Han(p) => han::grad_elastic_to_pcs(grad, p, state),
            Self::Vrh(p) => vrh::grad_elastic_to_pcs(grad, p, state),
        }
    }
}

// ============================================================
// 测试
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn full_map() -> HashMap<String, f64> {
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

    #[test]
    fn test_model_from_str() {
        assert_eq!(
            "gassmann".parse::<RockPhysicsModel>().unwrap(),
            RockPhysicsModel::Gassmann
        );
        assert_eq!(
            "han".parse::<RockPhysicsModel>().unwrap(),
            RockPhysicsModel::Han
        );
        assert_eq!(
            "vrh".parse::<RockPhysicsModel>().unwrap(),
            RockPhysicsModel::Vrh
        );
    }

    #[test]
    fn test_unknown_model_fails_at_selection() {
        let err = PcsParameterization::from_name("bogus", &full_map()).unwrap_err();
        assert!(matches!(err, PhysicsError::UnknownModel { .. }));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_dispatch_binds_distinct_models() {
        let map = full_map();
        let state = PcsState::uniform((2, 2), 0.2, 0.3, 0.6);

        let g = PcsParameterization::from_name("gassmann", &map).unwrap();
        let h = PcsParameterization::from_name("han", &map).unwrap();
        let v = PcsParameterization::from_name("vrh", &map).unwrap();

        assert_eq!(g.model(), RockPhysicsModel::Gassmann);
        assert_eq!(h.model(), RockPhysicsModel::Han);
        assert_eq!(v.model(), RockPhysicsModel::Vrh);

        // 三个模型的正演结果互不相同（确实绑定了不同的函数对）
        let vp_g = g.pcs_to_elastic(&state).unwrap().vp[[0, 0]];
        let vp_h = h.pcs_to_elastic(&state).unwrap().vp[[0, 0]];
        let vp_v = v.pcs_to_elastic(&state).unwrap().vp[[0, 0]];
        assert!((vp_g - vp_v).abs() > 1.0);
        assert!((vp_g - vp_h).abs() > 1.0);
        assert!((vp_h - vp_v).abs() > 1.0);
    }

    #[test]
    fn test_forward_and_gradient_are_paired() {
        // 选择器的正演与梯度引擎来自同一模型
        let map = full_map();
        let state = PcsState::uniform((2, 2), 0.2, 0.3, 0.6);
        let grad = ElasticGradient::uniform((2, 2), 1.0, 0.0, 0.0);

        let v = PcsParameterization::from_name("vrh", &map).unwrap();
        let direct = crate::gradient::vrh::grad_elastic_to_pcs(
            &grad,
            &VrhProperties::from_map(&map).unwrap(),
            &state,
        )
        .unwrap();
        let via_selector = v.grad_elastic_to_pcs(&grad, &state).unwrap();
        assert_eq!(direct.phi[[0, 0]], via_selector.phi[[0, 0]]);
    }

    #[test]
    fn test_missing_key_fails_at_selection() {
        let mut map = full_map();
        map.remove("k_h");
        let err = PcsParameterization::from_name("gassmann", &map).unwrap_err();
        assert!(err.to_string().contains("k_h"));

        // Han 只需要密度端元，同一映射缺 k_h 不影响
        assert!(PcsParameterization::from_name("han", &map).is_ok());
    }

    #[test]
    fn test_model_serde_lowercase() {
        let json = serde_json::to_string(&RockPhysicsModel::Vrh).unwrap();
        assert_eq!(json, "\"vrh\"");
        let back: RockPhysicsModel = serde_json::from_str("\"gassmann\"").unwrap();
        assert_eq!(back, RockPhysicsModel::Gassmann);
    }
}
