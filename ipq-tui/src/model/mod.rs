//! Model 层：应用状态
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 结构体
//!
//!         pub use app::App;

mod app;

pub use app::App;
