/// ブラウザ履歴（pushState / location.pathname）相当の操作
pub trait NavigationHistory: Send + Sync {
    fn current_path(&self) -> String;

    /// ページ遷移せずに履歴エントリを追加する
    fn push_path(&self, path: &str);
}
