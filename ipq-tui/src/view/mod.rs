//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态。颜色方案 `Palette` 由 App 持有并逐层传递。

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
