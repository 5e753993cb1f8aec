//! Predefined mini-app category constants.
//!
//! These are the display strings the service accepts for the
//! `appCategory` field when creating a mini-app.

pub const BUSINESS: &str = "Kinh doanh";
pub const ECOMMERCE: &str = "Thương mại điện tử";
pub const EDUCATION: &str = "Giáo dục";
pub const FINANCE: &str = "Tài chính";
pub const GAME: &str = "Trò chơi";
pub const GOVERNMENT: &str = "Nhà nước & Chính phủ";
pub const HEALTH: &str = "Sức khỏe";
pub const IMAGES: &str = "Hình ảnh & Video";
pub const NEWS: &str = "Thông tin & Báo chí";
pub const OFFLINE_SALE: &str = "Bán hàng Offline";
pub const SOUND: &str = "Âm thanh & Radio";
pub const TOOLS: &str = "Công cụ phát triển";
pub const TRAVELING: &str = "Du lịch";
pub const DEMO: &str = "Thử nghiệm";
pub const UTILITIES: &str = "Tiện ích";
pub const OTHERS: &str = "Khác";
