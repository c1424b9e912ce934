//! 应用消息

use ipq_core::types::Family;
use ipq_core::SessionEvent;

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 重新查询
    Refresh,

    /// 开启详情（地理位置 / ISP）
    EnableDetail,

    /// 复制某一地址族的地址
    Copy(Family),

    /// 后台任务完成，转交给会话
    Session(SessionEvent),

    /// 动画帧
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
