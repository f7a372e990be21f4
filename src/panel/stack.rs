//! Panel registry and z-order stack

use crate::geometry::{Point, Size};

use super::panel::{Panel, PanelId, PanelPosition};

/// All registered panels, in registration order
#[derive(Debug, Clone, Default)]
pub struct PanelStack {
    panels: Vec<Panel>,
    next_seq: u64,
}

impl PanelStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel. Returns false if the id is already known.
    pub fn register(&mut self, mut panel: Panel) -> bool {
        if self.contains(&panel.id) {
            return false;
        }
        panel.seq = self.next_seq;
        self.next_seq += 1;
        self.panels.push(panel);
        true
    }

    /// Wire up the drag handle. Returns false if it was already attached.
    pub fn attach_handle(&mut self, id: &PanelId) -> bool {
        match self.get_mut(id) {
            Some(panel) if !panel.handle_attached => {
                panel.handle_attached = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: &PanelId) -> Option<Panel> {
        let index = self.panels.iter().position(|p| &p.id == id)?;
        Some(self.panels.remove(index))
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| &p.id == id)
    }

    pub fn get_mut(&mut self, id: &PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| &p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Panel> {
        self.panels.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Show a panel, centering it if it has never been placed.
    ///
    /// Returns true if the panel transitioned from inactive to active.
    pub fn activate(&mut self, id: &PanelId, viewport: Size) -> bool {
        let Some(panel) = self.get_mut(id) else {
            return false;
        };
        if panel.active {
            return false;
        }
        panel.active = true;
        if panel.position.is_unset() {
            panel.position = PanelPosition::At(panel.position.resolve(panel.size, viewport));
        }
        self.bring_to_front(id);
        true
    }

    /// Hide a panel. Returns true if it was active.
    pub fn deactivate(&mut self, id: &PanelId) -> bool {
        match self.get_mut(id) {
            Some(panel) if panel.active => {
                panel.active = false;
                true
            }
            _ => false,
        }
    }

    /// Raise a panel above every other active, non-dragging panel
    pub fn bring_to_front(&mut self, id: &PanelId) {
        let top = self
            .panels
            .iter()
            .filter(|p| &p.id != id && p.active && !p.dragging)
            .map(|p| p.z_index)
            .max();
        if let (Some(top), Some(panel)) = (top, self.get_mut(id)) {
            if panel.z_index <= top {
                panel.z_index = top + 1;
            }
        }
    }

    /// z-index that puts `id` on top of everything observed so far
    pub fn front_z_index(&self, id: &PanelId, sentinel: i32) -> i32 {
        self.panels
            .iter()
            .filter(|p| &p.id != id)
            .map(|p| p.z_index + 1)
            .fold(sentinel, i32::max)
    }

    /// Active panel drawn on top
    pub fn topmost_active(&self) -> Option<&Panel> {
        self.render_order().into_iter().next_back()
    }

    /// Active panels bottom-to-top
    pub fn render_order(&self) -> Vec<&Panel> {
        let mut active: Vec<&Panel> = self.panels.iter().filter(|p| p.active).collect();
        active.sort_by_key(|p| (p.z_index, p.seq));
        active
    }

    /// Topmost active panel under `point`
    pub fn hit_test(&self, point: Point, viewport: Size) -> Option<&Panel> {
        self.render_order()
            .into_iter()
            .rev()
            .find(|p| p.rect(viewport).contains(point.x, point.y))
    }

    /// The modal overlay is shown while any panel is active
    pub fn overlay_visible(&self) -> bool {
        self.panels.iter().any(|p| p.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Size {
        Size::new(1200.0, 800.0)
    }

    fn stack_with(ids: &[&str]) -> PanelStack {
        let mut stack = PanelStack::new();
        for id in ids {
            stack.register(Panel::new(*id, Size::new(400.0, 300.0), 100));
        }
        stack
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut stack = stack_with(&["playlist"]);
        assert!(!stack.register(Panel::new("playlist", Size::new(10.0, 10.0), 5)));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.get(&"playlist".into()).unwrap().size.width, 400.0);
    }

    #[test]
    fn test_attach_handle_is_idempotent() {
        let mut stack = stack_with(&["playlist"]);
        let id = PanelId::new("playlist");
        assert!(stack.attach_handle(&id));
        assert!(!stack.attach_handle(&id));
        assert!(!stack.attach_handle(&PanelId::new("missing")));
    }

    #[test]
    fn test_activate_centers_unset_panel_once() {
        let mut stack = stack_with(&["playlist"]);
        let id = PanelId::new("playlist");
        assert!(stack.activate(&id, viewport()));
        assert_eq!(
            stack.get(&id).unwrap().position,
            PanelPosition::At(Point::new(400.0, 250.0))
        );

        // Moved, closed, reopened: keeps its spot
        stack.get_mut(&id).unwrap().position = PanelPosition::At(Point::new(10.0, 20.0));
        assert!(stack.deactivate(&id));
        assert!(stack.activate(&id, viewport()));
        assert_eq!(
            stack.get(&id).unwrap().position,
            PanelPosition::At(Point::new(10.0, 20.0))
        );
        assert!(!stack.activate(&id, viewport()));
    }

    #[test]
    fn test_activation_brings_to_front() {
        let mut stack = stack_with(&["a", "b"]);
        stack.activate(&"a".into(), viewport());
        stack.activate(&"b".into(), viewport());
        assert_eq!(stack.topmost_active().unwrap().id.as_str(), "b");
        assert_eq!(stack.get(&"b".into()).unwrap().z_index, 101);

        stack.bring_to_front(&"a".into());
        assert_eq!(stack.topmost_active().unwrap().id.as_str(), "a");
        assert_eq!(stack.get(&"a".into()).unwrap().z_index, 102);
    }

    #[test]
    fn test_front_z_index() {
        let mut stack = stack_with(&["a", "b"]);
        assert_eq!(stack.front_z_index(&"a".into(), 1000), 1000);
        stack.get_mut(&"b".into()).unwrap().z_index = 1000;
        assert_eq!(stack.front_z_index(&"a".into(), 1000), 1001);
    }

    #[test]
    fn test_render_order_ties_break_by_registration() {
        let mut stack = stack_with(&["a", "b", "c"]);
        for panel in stack.iter_mut() {
            panel.active = true;
        }
        let order: Vec<&str> = stack.render_order().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut stack = stack_with(&["a", "b"]);
        stack.activate(&"a".into(), viewport());
        stack.activate(&"b".into(), viewport());
        let hit = stack.hit_test(Point::new(600.0, 400.0), viewport()).unwrap();
        assert_eq!(hit.id.as_str(), "b");
        assert!(stack.hit_test(Point::new(5.0, 5.0), viewport()).is_none());
    }

    #[test]
    fn test_overlay_follows_active_panels() {
        let mut stack = stack_with(&["a"]);
        assert!(!stack.overlay_visible());
        stack.activate(&"a".into(), viewport());
        assert!(stack.overlay_visible());
        stack.deactivate(&"a".into());
        assert!(!stack.overlay_visible());
        assert!(stack.remove(&"a".into()).is_some());
        assert!(stack.is_empty());
    }
}
