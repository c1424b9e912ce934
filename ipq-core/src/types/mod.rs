//! 类型定义模块

mod address;
mod category;
mod detail;
mod target;

pub use address::{AddressSlot, Family, Unavailable, NOT_APPLICABLE, NOT_DETECTED};
pub use category::IpCategory;
pub use detail::{DetailState, GeoDetail};
pub use target::{Target, TargetKind};
