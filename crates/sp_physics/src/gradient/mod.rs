// crates/sp_physics/src/gradient/mod.rs

//! 梯度参数化切换模块
//!
//! 将波动方程求解器产出的弹性域梯度切换到其他参数化：
//! - [`switcher`]: 速度/密度 ⇄ Lamé/密度（叶子组件，不依赖岩石物理）
//! - [`adapter`]: 弹性梯度 → (K, μ, ρ) 模量域梯度适配器
//! - [`gassmann`] / [`vrh`] / [`han`]: 逐模型的 PCS 梯度引擎
//!
//! 数据流：弹性域梯度 + 当前 PCS 状态 + 岩石属性
//! → 适配器 → (gK, gμ, gρ) → 逐参数导数块 → 加权重组 → PCS 域梯度。
//! Han 模型直接在速度空间工作，不经过适配器。

pub mod adapter;
pub mod gassmann;
pub mod han;
pub mod switcher;
pub mod vrh;

pub use adapter::to_bulk_shear_density_grad;
pub use switcher::{to_elastic_moduli, to_velocity_density};
