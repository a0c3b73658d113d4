/// 詳細表示のパス接頭辞
pub const COURT_PATH_PREFIX: &str = "/court/";

/// レビューの最大文字数
pub const REVIEW_MAX_CHARS: usize = 50;

/// このクライアントで作成したコートの作成者
pub const CURRENT_USER: &str = "current-user";

pub const MARKER_LAYER_ID: &str = "court-markers";
pub const MARKER_RADIUS: f64 = 6.0;
pub const MARKER_RADIUS_SELECTED: f64 = 8.0;
pub const MARKER_STROKE_COLOR: &str = "#ffffff";
pub const MARKER_STROKE_WIDTH: f64 = 2.0;
pub const MARKER_COLOR_APPROVED: &str = "#3b82f6";
pub const MARKER_COLOR_PENDING: &str = "#f59e0b";
pub const MARKER_COLOR_REJECTED: &str = "#ef4444";
