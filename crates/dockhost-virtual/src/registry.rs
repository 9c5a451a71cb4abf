//! The panel registry a host UI works with: a list of panel configs kept
//! in step with a coordinator.

use std::cell::RefCell;
use std::rc::Rc;

use dockhost_common::{new_id, Result};
use dockhost_layout::{DisplayPolicy, ElementConfig, PanelKind};
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use crate::coordinator::VirtualLayoutCoordinator;
use crate::element::{ElementItem, ElementRef};
use crate::engine::EngineFactory;
use crate::persist::LayoutPersistence;
use crate::platform::{FrameScheduler, ResizeSource};

/// A fresh panel config with a new refId. Title defaults to `""` and
/// props to `{}`.
pub fn create_element_config(
    kind: &str,
    title: Option<&str>,
    props: Option<JsonValue>,
) -> ElementConfig {
    ElementConfig {
        ref_id: new_id(),
        kind: kind.to_string(),
        title: Some(title.unwrap_or_default().to_string()),
        props: Some(props.unwrap_or_else(|| json!({}))),
    }
}

type ConfigList = Rc<RefCell<Vec<ElementConfig>>>;

fn remove_config(configs: &ConfigList, ref_id: &str) -> bool {
    let mut configs = configs.borrow_mut();
    match configs.iter().position(|c| c.ref_id == ref_id) {
        Some(index) => {
            configs.remove(index);
            true
        }
        None => false,
    }
}

/// The host's panel list plus the coordinator that lays it out.
///
/// The host renders one element per entry of [`PanelBoard::configs`] and
/// hands them back through [`PanelBoard::sync_elements`]. Panels the user
/// closes in the layout drop out of the list on their own.
pub struct PanelBoard<F: EngineFactory, P> {
    configs: ConfigList,
    coordinator: VirtualLayoutCoordinator<F, P>,
}

impl<F, P> PanelBoard<F, P>
where
    F: EngineFactory,
    F::Engine: 'static,
    P: LayoutPersistence,
{
    pub fn new(factory: F, persist: P, policy: DisplayPolicy) -> Self {
        let configs: ConfigList = Rc::new(RefCell::new(Vec::new()));
        let on_closed = {
            let configs = Rc::clone(&configs);
            move |ref_id: &str| {
                if remove_config(&configs, ref_id) {
                    debug!(ref_id, "closed panel removed");
                }
            }
        };
        Self {
            configs,
            coordinator: VirtualLayoutCoordinator::new(factory, persist, policy, on_closed),
        }
    }

    /// Append a panel of `kind`, titled with its display name. Returns
    /// the new refId.
    pub fn add(&self, kind: &PanelKind) -> String {
        let config = create_element_config(&kind.kind, Some(&kind.name), None);
        let ref_id = config.ref_id.clone();
        debug!(ref_id = %ref_id, kind = %kind.kind, "panel added");
        self.configs.borrow_mut().push(config);
        ref_id
    }

    /// Drop a panel from the list. Returns false if it was not there.
    pub fn remove(&self, ref_id: &str) -> bool {
        remove_config(&self.configs, ref_id)
    }

    pub fn configs(&self) -> Vec<ElementConfig> {
        self.configs.borrow().clone()
    }

    /// Mount the coordinator on `root`, then restore the stored layout.
    /// Returns whether a stored layout replaced the panel list.
    pub fn mount(
        &mut self,
        root: ElementRef,
        frames: Rc<dyn FrameScheduler>,
        resize: Rc<dyn ResizeSource>,
    ) -> Result<bool> {
        self.coordinator.mount(root, frames, resize)?;
        self.restore()
    }

    pub fn unmount(&mut self) {
        self.coordinator.unmount();
    }

    /// Load the stored layout and replace the panel list with its panels.
    /// Returns whether anything was restored.
    pub fn restore(&mut self) -> Result<bool> {
        match self.coordinator.load_layout()? {
            Some(configs) => {
                debug!(panels = configs.len(), "panel list restored");
                *self.configs.borrow_mut() = configs;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Hand the coordinator the elements rendered for the current list.
    pub fn sync_elements(&mut self, elements: Vec<ElementItem>) -> Result<()> {
        self.coordinator.set_elements(elements)
    }

    pub fn save_layout(&self) -> Result<()> {
        self.coordinator.save_layout()
    }

    pub fn reset(&mut self) -> Result<()> {
        self.coordinator.reset()
    }

    pub fn coordinator(&self) -> &VirtualLayoutCoordinator<F, P> {
        &self.coordinator
    }
}

#[cfg(test)]
mod tests {
    use dockhost_common::Rect;
    use dockhost_layout::tree::ResolvedStackItemConfig;
    use dockhost_layout::{ResolvedComponentItemConfig, ResolvedItemConfig, ResolvedLayoutConfig};

    use super::*;
    use crate::persist::MemoryPersistence;
    use crate::platform::{FrameQueue, ResizeNotifier};
    use crate::testing::{fake_factory, EngineLog, FakeElement, FakeFactory};

    type Board = PanelBoard<FakeFactory, MemoryPersistence>;

    fn board(store: &MemoryPersistence) -> (Board, Rc<RefCell<EngineLog>>) {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        let board = PanelBoard::new(
            fake_factory(Rc::clone(&log)),
            store.clone(),
            DisplayPolicy::default(),
        );
        (board, log)
    }

    fn mount(board: &mut Board) -> bool {
        let root: ElementRef = FakeElement::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        board
            .mount(root, Rc::new(FrameQueue::new()), Rc::new(ResizeNotifier::new()))
            .unwrap()
    }

    fn render(configs: &[ElementConfig]) -> Vec<ElementItem> {
        configs
            .iter()
            .map(|c| ElementItem::new(c.clone(), FakeElement::new(Rect::default())))
            .collect()
    }

    #[test]
    fn create_element_config_defaults() {
        let config = create_element_config("chart", None, None);
        assert_eq!(config.kind, "chart");
        assert_eq!(config.title.as_deref(), Some(""));
        assert_eq!(config.props, Some(json!({})));
        assert!(!config.ref_id.is_empty());
    }

    #[test]
    fn create_element_config_mints_unique_ids() {
        let a = create_element_config("chart", Some("A"), Some(json!({ "x": 1 })));
        let b = create_element_config("chart", Some("A"), Some(json!({ "x": 1 })));
        assert_ne!(a.ref_id, b.ref_id);
        assert_eq!(a.title.as_deref(), Some("A"));
    }

    #[test]
    fn add_and_remove() {
        let (board, _) = board(&MemoryPersistence::new());
        let id = board.add(&PanelKind::new("chart", "Chart"));
        assert_eq!(board.configs().len(), 1);
        assert_eq!(board.configs()[0].title.as_deref(), Some("Chart"));

        assert!(board.remove(&id));
        assert!(board.configs().is_empty());
    }

    #[test]
    fn remove_unknown_leaves_list_alone() {
        let (board, _) = board(&MemoryPersistence::new());
        board.add(&PanelKind::new("chart", "Chart"));
        board.add(&PanelKind::new("table", "Table"));
        assert!(!board.remove("missing"));
        assert_eq!(board.configs().len(), 2);
    }

    #[test]
    fn added_panels_reach_the_engine() {
        let (mut board, log) = board(&MemoryPersistence::new());
        mount(&mut board);
        board.add(&PanelKind::new("chart", "Chart"));
        board.add(&PanelKind::new("table", "Table"));
        board.sync_elements(render(&board.configs())).unwrap();

        assert_eq!(log.borrow().adds, 2);
        assert_eq!(board.coordinator().bound_ref_ids().len(), 2);
    }

    #[test]
    fn closing_a_panel_drops_its_config() {
        let (mut board, _) = board(&MemoryPersistence::new());
        mount(&mut board);
        let keep = board.add(&PanelKind::new("chart", "Chart"));
        let closed = board.add(&PanelKind::new("table", "Table"));
        board.sync_elements(render(&board.configs())).unwrap();

        if let Some(mut engine) = board.coordinator().engine_mut() {
            engine.close(&closed).unwrap();
        }
        let ids: Vec<String> = board.configs().into_iter().map(|c| c.ref_id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test]
    fn restore_without_stored_layout_keeps_list() {
        let (mut board, _) = board(&MemoryPersistence::new());
        board.add(&PanelKind::new("chart", "Chart"));
        assert!(!board.restore().unwrap());
        assert_eq!(board.configs().len(), 1);
    }

    #[test]
    fn save_restore_and_rerender() {
        let store = MemoryPersistence::new();
        let saved_ids = {
            let (mut board, _) = board(&store);
            mount(&mut board);
            board.add(&PanelKind::new("chart", "Chart"));
            board.add(&PanelKind::new("table", "Table"));
            board.sync_elements(render(&board.configs())).unwrap();
            board.save_layout().unwrap();
            board.coordinator().bound_ref_ids()
        };

        let (mut board, log) = board(&store);
        assert!(mount(&mut board));
        assert!(board.coordinator().has_pending_layout());

        let mut restored: Vec<String> = board.configs().into_iter().map(|c| c.ref_id).collect();
        restored.sort();
        assert_eq!(restored, saved_ids);

        board.sync_elements(render(&board.configs())).unwrap();
        assert!(!board.coordinator().has_pending_layout());
        assert_eq!(log.borrow().adds, 0);
        assert_eq!(board.coordinator().bound_ref_ids(), saved_ids);
    }

    #[test]
    fn mount_restores_saved_panels() {
        let store = MemoryPersistence::new();
        {
            let (mut board, _) = board(&store);
            assert!(!mount(&mut board));
            board.add(&PanelKind::new("chart", "Chart"));
            board.sync_elements(render(&board.configs())).unwrap();
            board.save_layout().unwrap();
        }

        let (mut board, _) = board(&store);
        assert!(mount(&mut board));
        assert_eq!(board.configs().len(), 1);
        assert_eq!(board.configs()[0].kind, "chart");
        assert!(board.coordinator().has_pending_layout());
    }

    #[test]
    fn mount_without_saved_layout_keeps_list() {
        let (mut board, _) = board(&MemoryPersistence::new());
        board.add(&PanelKind::new("chart", "Chart"));
        assert!(!mount(&mut board));
        assert_eq!(board.configs().len(), 1);
        assert!(!board.coordinator().has_pending_layout());
    }

    #[test]
    fn restore_ignores_empty_stored_tree() {
        let store = MemoryPersistence::new();
        store.patch(&ResolvedLayoutConfig::default()).unwrap();
        let (mut board, _) = board(&store);
        assert!(!board.restore().unwrap());
        assert!(!board.coordinator().has_pending_layout());
    }

    #[test]
    fn restored_titles_come_from_the_tree() {
        let store = MemoryPersistence::new();
        let leaf = ResolvedComponentItemConfig {
            component_type: "chart".into(),
            component_state: Some(json!({ "refId": "p1", "props": {} })),
            title: "Prices".into(),
            size: 100.0,
        };
        store
            .patch(&ResolvedLayoutConfig {
                root: Some(ResolvedItemConfig::Stack(ResolvedStackItemConfig {
                    content: vec![ResolvedItemConfig::Component(leaf)],
                    size: 100.0,
                    active_item_index: 0,
                })),
                ..Default::default()
            })
            .unwrap();
        let (mut board, _) = board(&store);
        assert!(board.restore().unwrap());
        assert_eq!(board.configs()[0].title.as_deref(), Some("Prices"));
    }
}
