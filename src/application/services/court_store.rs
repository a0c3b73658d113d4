use crate::domain::entities::{Court, CourtPatch};
use crate::domain::value_objects::{CourtId, MapBounds};
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// 画面に表示する通知（エラーを含む）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub code: Option<&'static str>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            code: None,
        }
    }

    pub fn error(err: &crate::shared::AppError) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: err.user_message(),
            code: Some(err.code()),
        }
    }
}

/// 選択中のコート。読み出し時は常に一覧側の最新レコードを優先し、
/// 一覧に無い場合（ID 指定で個別取得した場合など）だけスナップショットを使う
#[derive(Debug, Clone, PartialEq)]
struct Selection {
    id: CourtId,
    snapshot: Court,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourtState {
    pub courts: Vec<Court>,
    selection: Option<Selection>,
    pub map_bounds: Option<MapBounds>,
    pub is_loading: bool,
    pub is_list_open: bool,
    pub query: String,
    pub notice: Option<Notice>,
}

impl Default for CourtState {
    fn default() -> Self {
        Self {
            courts: Vec::new(),
            selection: None,
            map_bounds: None,
            is_loading: false,
            is_list_open: true,
            query: String::new(),
            notice: None,
        }
    }
}

impl CourtState {
    pub fn selected(&self) -> Option<&Court> {
        let selection = self.selection.as_ref()?;
        Some(self.find(&selection.id).unwrap_or(&selection.snapshot))
    }

    pub fn selected_id(&self) -> Option<&CourtId> {
        self.selection.as_ref().map(|s| &s.id)
    }

    pub fn find(&self, id: &CourtId) -> Option<&Court> {
        self.courts.iter().find(|c| &c.id == id)
    }

    /// 名前・住所の部分一致検索。空文字ならすべて
    pub fn search(&self, query: &str) -> Vec<&Court> {
        self.courts.iter().filter(|c| c.matches_query(query)).collect()
    }

    /// 検索語で絞り込んだ一覧（リストパネルと地図マーカーの共通ソース）
    pub fn visible(&self) -> Vec<&Court> {
        self.search(&self.query)
    }

    pub fn courts_in(&self, bounds: &MapBounds) -> Vec<&Court> {
        self.courts
            .iter()
            .filter(|c| bounds.contains(c.coordinates()))
            .collect()
    }
}

/// コート一覧と選択状態を保持するストア。変更は購読者全員に通知される
#[derive(Debug)]
pub struct CourtStore {
    state: watch::Sender<CourtState>,
}

impl Default for CourtStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CourtStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(CourtState::default());
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<CourtState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CourtState {
        self.state.borrow().clone()
    }

    /// ロックを保持したまま状態を読む。クロージャ内で別の更新を呼ばないこと
    pub fn read<R>(&self, f: impl FnOnce(&CourtState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn selected(&self) -> Option<Court> {
        self.read(|s| s.selected().cloned())
    }

    /// 一覧を丸ごと差し替える。選択は ID で保持しているので自動的に新しい一覧へ解決される
    pub fn set_courts(&self, courts: Vec<Court>) {
        debug!(count = courts.len(), "replacing court list");
        self.state.send_modify(|s| s.courts = courts);
    }

    pub fn set_selected(&self, court: Option<Court>) {
        self.state.send_modify(|s| {
            s.selection = court.map(|court| Selection {
                id: court.id.clone(),
                snapshot: court,
            });
        });
    }

    pub fn add_court(&self, court: Court) {
        self.state.send_modify(|s| s.courts.push(court));
    }

    /// ID が一致するレコードを置き換え、無ければ末尾に追加する
    pub fn upsert_court(&self, court: Court) {
        self.state.send_modify(|s| {
            if let Some(sel) = s.selection.as_mut()
                && sel.id == court.id
            {
                sel.snapshot = court.clone();
            }
            match s.courts.iter_mut().find(|c| c.id == court.id) {
                Some(existing) => *existing = court,
                None => s.courts.push(court),
            }
        });
    }

    /// 一覧と選択中スナップショットの両方へ同じ変更をマージする。
    /// どちらにも該当しなければ false
    pub fn update_court(&self, id: &CourtId, patch: &CourtPatch) -> bool {
        let mut touched = false;
        self.state.send_modify(|s| {
            if let Some(court) = s.courts.iter_mut().find(|c| &c.id == id) {
                court.apply(patch);
                touched = true;
            }
            if let Some(sel) = s.selection.as_mut()
                && &sel.id == id
            {
                sel.snapshot.apply(patch);
                touched = true;
            }
        });
        touched
    }

    pub fn set_map_bounds(&self, bounds: Option<MapBounds>) {
        self.state.send_modify(|s| s.map_bounds = bounds);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.send_modify(|s| s.is_loading = loading);
    }

    pub fn set_list_open(&self, open: bool) {
        self.state.send_modify(|s| s.is_list_open = open);
    }

    pub fn toggle_list(&self) {
        self.state.send_modify(|s| s.is_list_open = !s.is_list_open);
    }

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|s| s.query = query);
    }

    pub fn set_notice(&self, notice: Option<Notice>) {
        self.state.send_modify(|s| s.notice = notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CourtDraft;
    use crate::domain::value_objects::CourtStatus;

    fn court(name: &str, lat: f64, lng: f64) -> Court {
        Court::create(CourtDraft {
            name: name.to_string(),
            address: format!("{name} 주소"),
            latitude: lat,
            longitude: lng,
            review: None,
            image_url: None,
            is_indoor: false,
        })
        .unwrap()
    }

    #[test]
    fn select_then_clear_keeps_list() {
        let store = CourtStore::new();
        let a = court("A", 37.5, 127.0);
        let b = court("B", 37.6, 127.1);
        store.set_courts(vec![a.clone(), b.clone()]);
        let before = store.snapshot().courts;

        store.set_selected(Some(b.clone()));
        assert_eq!(store.selected().map(|c| c.id), Some(b.id.clone()));
        store.set_selected(None);

        assert!(store.selected().is_none());
        assert_eq!(store.snapshot().courts, before);
    }

    #[test]
    fn selection_follows_list_replacement() {
        let store = CourtStore::new();
        let a = court("A", 37.5, 127.0);
        store.set_courts(vec![a.clone()]);
        store.set_selected(Some(a.clone()));

        let mut renamed = a.clone();
        renamed.name = "A (renamed)".to_string();
        store.set_courts(vec![renamed]);

        assert_eq!(store.selected().unwrap().name, "A (renamed)");
    }

    #[test]
    fn selection_outside_list_uses_snapshot() {
        let store = CourtStore::new();
        let fetched = court("Fetched", 37.5, 127.0);
        store.set_selected(Some(fetched.clone()));
        assert_eq!(store.selected(), Some(fetched));
    }

    #[test]
    fn update_court_patches_list_and_selection() {
        let store = CourtStore::new();
        let a = court("A", 37.5, 127.0);
        let detached = court("Detached", 37.4, 127.2);
        store.set_courts(vec![a.clone()]);
        store.set_selected(Some(detached.clone()));

        let patch = CourtPatch {
            status: Some(CourtStatus::Approved),
            ..Default::default()
        };
        assert!(store.update_court(&detached.id, &patch));
        assert_eq!(store.selected().unwrap().status, CourtStatus::Approved);
        assert_eq!(store.snapshot().courts[0].status, CourtStatus::Pending);

        assert!(store.update_court(&a.id, &patch));
        assert_eq!(store.snapshot().courts[0].status, CourtStatus::Approved);

        let missing = CourtId::new("missing".to_string()).unwrap();
        assert!(!store.update_court(&missing, &patch));
    }

    #[test]
    fn upsert_replaces_or_appends() {
        let store = CourtStore::new();
        let a = court("A", 37.5, 127.0);
        store.add_court(a.clone());

        let mut changed = a.clone();
        changed.review = Some("조명이 밝아요".to_string());
        store.upsert_court(changed);
        store.upsert_court(court("B", 37.6, 127.1));

        let state = store.snapshot();
        assert_eq!(state.courts.len(), 2);
        assert_eq!(state.courts[0].review.as_deref(), Some("조명이 밝아요"));
        assert_eq!(state.courts[1].name, "B");
    }

    #[test]
    fn bounding_box_filter_is_inclusive_subset() {
        let store = CourtStore::new();
        let inside = court("inside", 37.55, 127.0);
        let edge = court("edge", 37.6, 126.9);
        let outside = court("outside", 37.7, 127.0);
        store.set_courts(vec![inside.clone(), edge.clone(), outside]);

        let bounds = MapBounds::new(37.6, 37.5, 127.05, 126.9).unwrap();
        let names: Vec<String> = store.read(|s| {
            s.courts_in(&bounds)
                .into_iter()
                .map(|c| c.name.clone())
                .collect()
        });
        assert_eq!(names, vec!["inside", "edge"]);
    }

    #[test]
    fn query_narrows_visible_courts() {
        let store = CourtStore::new();
        store.set_courts(vec![court("한강공원", 37.5, 127.0), court("올림픽공원", 37.6, 127.1)]);

        store.set_query("한강");
        let visible: Vec<String> = store.read(|s| s.visible().iter().map(|c| c.name.clone()).collect());
        assert_eq!(visible, vec!["한강공원"]);

        store.set_query("");
        assert_eq!(store.read(|s| s.visible().len()), 2);
    }

    #[test]
    fn every_mutation_notifies_subscribers() {
        let store = CourtStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.set_loading(true);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_loading);

        store.toggle_list();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_list_open);
    }
}
