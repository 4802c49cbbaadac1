//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
//! Widget container that owns focus and routes input.
//!
//! A dialog keeps its children in insertion order, which is also the tab order and the
//! hit-test order. At most one child is focused at a time; keyboard, wheel, release and text
//! events only ever reach that child.

use crate::widget::implement_widget_base;
use crate::{Key, Layer, Notification, ParentRequest, RenderBatch, Signal, TextureCache, UiCtx, UiEvent, UiEventKind, Vec2f, Widget, WidgetBase, WidgetId};
use log::{debug, trace};

/// Ordered collection of widgets with a single focus.
pub struct Dialog {
    base: WidgetBase,
    widgets: Vec<Box<dyn Widget>>,
    focused: Option<WidgetId>,
    saved_enabled: Vec<WidgetId>,
}

impl Dialog {
    /// Creates an empty, shown and enabled dialog.
    pub fn new(position: Vec2f, size: Vec2f, layer: Layer) -> Self {
        Self {
            base: WidgetBase::new(position, size, layer),
            widgets: Vec::new(),
            focused: None,
            saved_enabled: Vec::new(),
        }
    }

    /// Appends a boxed widget and returns its identity.
    pub fn add_widget(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = widget.id();
        self.widgets.push(widget);
        id
    }

    /// Appends a widget and returns its identity.
    pub fn add<W: Widget>(&mut self, widget: W) -> WidgetId { self.add_widget(Box::new(widget)) }

    /// Removes the widgets with the given identities, dropping focus if it was on one of them.
    pub fn remove_widgets(&mut self, ids: &[WidgetId]) {
        self.widgets.retain(|w| !ids.contains(&w.id()));
        self.saved_enabled.retain(|id| !ids.contains(id));
        if self.focused.map(|id| ids.contains(&id)).unwrap_or(false) {
            self.set_focus(None);
        }
    }

    /// Removes every widget.
    pub fn clear_widgets(&mut self) {
        self.widgets.clear();
        self.saved_enabled.clear();
        self.set_focus(None);
    }

    /// Number of children.
    pub fn num_widgets(&self) -> usize { self.widgets.len() }

    /// Child at `index` in insertion order.
    pub fn widget(&self, index: usize) -> Option<&dyn Widget> { self.widgets.get(index).map(|w| w.as_ref()) }

    /// Mutable child at `index` in insertion order.
    pub fn widget_mut(&mut self, index: usize) -> Option<&mut dyn Widget> { self.widgets.get_mut(index).map(|w| w.as_mut()) }

    /// Iterates over the children in insertion order.
    pub fn widgets(&self) -> impl Iterator<Item = &dyn Widget> { self.widgets.iter().map(|w| w.as_ref()) }

    /// Child with identity `id`.
    pub fn find(&self, id: WidgetId) -> Option<&dyn Widget> { self.widgets.iter().find(|w| w.id() == id).map(|w| w.as_ref()) }

    /// Mutable child with identity `id`.
    pub fn find_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> { self.widgets.iter_mut().find(|w| w.id() == id).map(|w| w.as_mut()) }

    /// Child with identity `id`, downcast to its concrete type.
    pub fn get<T: Widget>(&self, id: WidgetId) -> Option<&T> { self.find(id)?.as_any().downcast_ref::<T>() }

    /// Mutable child with identity `id`, downcast to its concrete type.
    pub fn get_mut<T: Widget>(&mut self, id: WidgetId) -> Option<&mut T> { self.find_mut(id)?.as_any_mut().downcast_mut::<T>() }

    /// Identity of the focused child.
    pub fn focused_widget(&self) -> Option<WidgetId> { self.focused }

    /// Returns `true` if `id` is the focused child.
    pub fn is_widget_focused(&self, id: WidgetId) -> bool { self.focused == Some(id) }

    /// Moves focus to `id`, unfocusing the previous child. Unknown identities are ignored.
    pub fn focus_widget(&mut self, id: WidgetId) {
        if self.find(id).is_none() || self.focused == Some(id) {
            return;
        }
        if let Some(previous) = self.focused {
            if let Some(widget) = self.find_mut(previous) {
                widget.set_focused(false);
            }
        }
        if let Some(widget) = self.find_mut(id) {
            widget.set_focused(true);
        }
        self.set_focus(Some(id));
        self.collect_child_output();
    }

    /// Disables every child.
    pub fn disable_widgets(&mut self) { self.widgets.iter_mut().for_each(|w| w.disable()); }

    /// Enables every child and forgets any saved suppression.
    pub fn enable_widgets(&mut self) {
        self.widgets.iter_mut().for_each(|w| w.enable());
        self.saved_enabled.clear();
    }

    /// Disables every child except `keep`.
    pub fn disable_other_widgets(&mut self, keep: WidgetId) { self.widgets.iter_mut().filter(|w| w.id() != keep).for_each(|w| w.disable()); }

    /// Disables every child, remembering which ones were enabled.
    pub fn disable_widgets_and_save(&mut self) {
        self.saved_enabled = self.widgets.iter().filter(|w| w.is_enabled()).map(|w| w.id()).collect();
        self.disable_widgets();
    }

    /// Disables every child except `keep`, remembering which ones were enabled.
    pub fn disable_other_widgets_and_save(&mut self, keep: WidgetId) {
        self.saved_enabled = self.widgets.iter().filter(|w| w.id() != keep && w.is_enabled()).map(|w| w.id()).collect();
        self.disable_other_widgets(keep);
    }

    /// Re-enables the children remembered by the last save.
    pub fn re_enable_widgets(&mut self) {
        let saved = std::mem::take(&mut self.saved_enabled);
        for widget in self.widgets.iter_mut().filter(|w| saved.contains(&w.id())) {
            widget.enable();
        }
    }

    /// Takes the notifications raised by this dialog and its children.
    pub fn take_notifications(&mut self) -> Vec<Notification> { self.base.take_notifications() }

    /// Hook run when Escape reaches the dialog.
    pub fn on_escape_pressed(&mut self) { self.base.emit(Signal::EscapePressed); }

    fn set_focus(&mut self, focus: Option<WidgetId>) {
        if self.focused != focus {
            debug!("dialog {:?}: focus {:?} -> {:?}", self.base.id(), self.focused, focus);
            self.focused = focus;
        }
    }

    fn index_of(&self, id: WidgetId) -> Option<usize> { self.widgets.iter().position(|w| w.id() == id) }

    fn cycle_focus(&mut self) {
        let current = match self.focused {
            Some(id) => id,
            None => return,
        };
        if self.widgets.len() < 2 {
            return;
        }

        let index = self.index_of(current).unwrap_or(0);
        let next = (index + 1) % self.widgets.len();
        if let Some(widget) = self.find_mut(current) {
            widget.set_focused(false);
        }
        self.widgets[next].set_focused(true);
        let next_id = self.widgets[next].id();
        self.set_focus(Some(next_id));
    }

    fn route_mouse_press(&mut self, event: &UiEvent, pos: Vec2f, ctx: &mut UiCtx<'_>) {
        let mut winner: Option<usize> = None;
        for index in 0..self.widgets.len() {
            let widget = &mut self.widgets[index];
            if !widget.is_shown() {
                continue;
            }
            if widget.check_collision(pos) && widget.is_enabled() {
                widget.on_ui_event(event, ctx);
                widget.set_focused(true);
                if let Some(previous) = winner.replace(index) {
                    self.widgets[previous].set_focused(false);
                }
            } else {
                widget.set_focused(false);
            }
        }
        let focus = winner.map(|index| self.widgets[index].id());
        self.set_focus(focus);
    }

    fn forward_to_focused(&mut self, event: &UiEvent, ctx: &mut UiCtx<'_>) {
        let focused = match self.focused {
            Some(id) => id,
            None => {
                trace!("dialog {:?}: no focused widget, dropping {:?}", self.base.id(), event.kind());
                return;
            }
        };
        if let Some(widget) = self.find_mut(focused) {
            widget.on_ui_event(event, ctx);
        }
    }

    fn collect_child_output(&mut self) {
        let mut requests = Vec::new();
        for widget in self.widgets.iter_mut() {
            let id = widget.id();
            let base = widget.base_mut();
            let notifications = base.take_notifications();
            self.base.relay(notifications);
            requests.extend(base.take_requests().into_iter().map(|request| (id, request)));
        }

        for (id, request) in requests {
            match request {
                ParentRequest::SuppressSiblings => self.disable_other_widgets_and_save(id),
                ParentRequest::RestoreSiblings => self.re_enable_widgets(),
            }
        }
    }
}

impl Widget for Dialog {
    implement_widget_base!();

    fn on_ui_event(&mut self, event: &UiEvent, ctx: &mut UiCtx<'_>) {
        if !self.is_shown() || !self.is_enabled() {
            return;
        }

        if event.is_key_pressed(Key::Escape) {
            self.on_escape_pressed();
        }
        if event.is_key_pressed(Key::Tab) {
            self.cycle_focus();
        }

        match event.kind() {
            UiEventKind::MousePressed => {
                if let Some(pos) = event.position() {
                    self.route_mouse_press(event, pos, ctx);
                }
            }
            UiEventKind::KeyPressed | UiEventKind::MouseWheelScrolled | UiEventKind::MouseReleased | UiEventKind::TextInput => self.forward_to_focused(event, ctx),
            _ => {
                for widget in self.widgets.iter_mut() {
                    widget.on_ui_event(event, ctx);
                }
            }
        }

        self.collect_child_output();
    }

    fn update(&mut self, ctx: &mut UiCtx<'_>) {
        if !self.is_shown() {
            return;
        }
        for widget in self.widgets.iter_mut() {
            widget.update(ctx);
        }
        self.collect_child_output();
    }

    fn render(&self, batch: &mut dyn RenderBatch) {
        if !self.is_shown() {
            return;
        }
        self.base.render_borders(batch);
        for widget in self.widgets.iter().filter(|w| w.is_shown()) {
            widget.render(batch);
        }
    }

    fn create(&mut self, textures: &mut TextureCache) { self.widgets.iter_mut().for_each(|w| w.create(textures)); }

    fn release(&mut self) { self.widgets.iter_mut().for_each(|w| w.release()); }

    fn enable(&mut self) {
        self.base.set_enabled(true);
        self.enable_widgets();
    }

    fn disable(&mut self) {
        self.base.set_enabled(false);
        self.disable_widgets();
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.set_focused(focused);
        if !focused {
            self.set_focus(None);
            self.widgets.iter_mut().for_each(|w| w.set_focused(false));
            self.collect_child_output();
        }
    }

    fn check_collision(&self, point: Vec2f) -> bool { self.widgets.iter().any(|w| w.is_shown() && w.check_collision(point)) }
}
