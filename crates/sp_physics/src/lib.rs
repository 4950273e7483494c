// crates/sp_physics/src/lib.rs

//! SeisPetro 物理层
//!
//! 地震全波形反演 (FWI) 失配函数梯度的参数化切换：把波动方程求解器
//! 产出的弹性域梯度（速度/密度或 Lamé/密度）经链式法则转换为
//! 岩石物理 PCS (孔隙度 φ、黏土含量 cc、含水饱和度 sw) 域梯度。
//!
//! # 模块概览
//!
//! - [`types`]: 场类型与场束定义
//! - [`properties`]: 按模型划分的岩石属性配置
//! - [`rock_physics`]: PCS → 弹性参数正演（Gassmann / VRH / Han）
//! - [`gradient`]: 梯度切换器、模量域适配器与逐模型梯度引擎
//! - [`selector`]: 按模型名分发的参数化选择器
//! - [`error`]: 物理层错误类型
//!
//! # 设计要点
//!
//! 1. **一致性不变量**: 梯度引擎与正演映射共享同一份逐点中间量，
//!    混合权重不可能偏离被微分的模型
//! 2. **快速失败**: 未知模型名与属性缺键在选择/构造时报告
//! 3. **纯函数**: 所有入口对显式参数纯，输出新分配，无跨调用状态
//!
//! # 示例
//!
//! ```
//! use sp_physics::selector::PcsParameterization;
//! use sp_physics::properties::GassmannProperties;
//! use sp_physics::types::{ElasticGradient, PcsState};
//!
//! let param = PcsParameterization::gassmann(GassmannProperties::default()).unwrap();
//! let state = PcsState::uniform((4, 4), 0.2, 0.3, 0.6);
//! let grad = ElasticGradient::uniform((4, 4), 1.0, 0.0, 0.0);
//!
//! let pcs_grad = param.grad_elastic_to_pcs(&grad, &state).unwrap();
//! assert_eq!(pcs_grad.dim(), (4, 4));
//! ```

pub mod error;
pub mod gradient;
pub mod properties;
pub mod rock_physics;
pub mod selector;
pub mod types;

// 重导出常用类型
pub use error::{PhysicsError, PhysicsResult};
pub use gradient::{to_bulk_shear_density_grad, to_elastic_moduli, to_velocity_density};
pub use properties::{GassmannProperties, HanProperties, HanRegression, VrhProperties};
pub use rock_physics::{
    biot_delta, drained_moduli, pcs_to_elastic_gassmann, pcs_to_elastic_han, pcs_to_elastic_vrh,
    weighted_average,
};
pub use selector::{PcsParameterization, RockPhysicsModel, SUPPORTED_MODELS};
pub use types::{
    ElasticGradient, ElasticGradient32, ElasticModel, Field, Field32, LameGradient,
    LameGradient32, LameModel, ModulusGradient, PcsGradient, PcsState,
};
