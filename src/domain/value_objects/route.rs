use super::court_id::CourtId;
use crate::domain::constants::COURT_PATH_PREFIX;
use std::fmt;

/// クライアント側のルート。`/court/{id}` は詳細、それ以外は一覧
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    List,
    Court(CourtId),
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        // クエリやフラグメントはルーティングに使わない
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.strip_prefix(COURT_PATH_PREFIX) {
            Some(rest) => match CourtId::new(rest.trim_end_matches('/').to_string()) {
                Ok(id) => AppRoute::Court(id),
                Err(_) => AppRoute::List,
            },
            None => AppRoute::List,
        }
    }

    pub fn for_court(id: &CourtId) -> Self {
        AppRoute::Court(id.clone())
    }

    pub fn to_path(&self) -> String {
        match self {
            AppRoute::List => "/".to_string(),
            AppRoute::Court(id) => format!("{COURT_PATH_PREFIX}{id}"),
        }
    }

    pub fn court_id(&self) -> Option<&CourtId> {
        match self {
            AppRoute::Court(id) => Some(id),
            AppRoute::List => None,
        }
    }

    /// サーバー側で `/court/...` へのリクエストを SPA シェル（`/`）へ書き換える
    pub fn rewrite_for_shell(path: &str) -> &str {
        if path.starts_with(COURT_PATH_PREFIX) {
            "/"
        } else {
            path
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
