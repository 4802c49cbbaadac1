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
use crate::{Alignment, Color, Dialog, FontHandle, Key, Layer, ListView, ParentRequest, RenderBatch, Signal, Sprite, TextLabel, TextureCache, UiCtx, UiEvent, Vec2f, Widget, WidgetBase, WidgetId};
use log::debug;
use std::any::Any;

/// Row height of the option list.
pub const DEFAULT_LIST_ENTRY_HEIGHT: f32 = 20.0;

/// Texture shown in both arrow frames unless another one is supplied.
pub const DEFAULT_ARROW_ASSET: &str = "Assets/dropdown_arrow.dds";

/// Collapsible option picker made of a label, an arrow and a list.
///
/// Opening the list asks the owning dialog to disable every other widget so the click that
/// opened it cannot fall through. The siblings come back on the [`Widget::update`] after the
/// list closes.
pub struct DropDownList {
    dialog: Dialog,
    label: WidgetId,
    arrow: WidgetId,
    list: WidgetId,
    options: Vec<String>,
    selection_prefix: String,
    selected: Option<usize>,
    expanded_size: Vec2f,
    expanded: bool,
    restore_pending: bool,
}

impl DropDownList {
    /// Creates a collapsed drop-down.
    ///
    /// When `initial_text` names one of the options that option starts selected. Otherwise the
    /// text is kept as a prefix shown in front of every later selection.
    pub fn new(position: Vec2f, size: Vec2f, expanded_size: Vec2f, layer: Layer, initial_text: &str, options: Vec<String>) -> Self {
        Self::with_arrow_frames(position, size, expanded_size, layer, initial_text, options, vec![DEFAULT_ARROW_ASSET.to_string(); 2])
    }

    /// Same as [`DropDownList::new`] with custom closed and open arrow frames.
    pub fn with_arrow_frames(position: Vec2f, size: Vec2f, expanded_size: Vec2f, layer: Layer, initial_text: &str, options: Vec<String>, arrow_frames: Vec<String>) -> Self {
        let arrow_size = Vec2f::new(size.y, size.y);
        let label_size = Vec2f::new(size.x - arrow_size.x, size.y);

        let mut dialog = Dialog::new(position, size, layer);
        let label = dialog.add(TextLabel::new(position, label_size, layer, initial_text).with_alignment(Alignment::Left));
        let arrow = dialog.add(Sprite::animated(Vec2f::new(position.x + label_size.x, position.y), arrow_size, layer, arrow_frames));
        let mut list = ListView::new(
            Vec2f::new(position.x, position.y + label_size.y),
            Vec2f::new(expanded_size.x, expanded_size.y - label_size.y),
            layer + 1,
            DEFAULT_LIST_ENTRY_HEIGHT,
        );
        list.refresh_data(options.clone());
        list.hide();
        let list = dialog.add(list);

        let (selection_prefix, selected) = match options.iter().position(|o| o == initial_text) {
            Some(index) => (String::new(), Some(index)),
            None => (initial_text.to_string(), if options.is_empty() { None } else { Some(0) }),
        };

        Self {
            dialog,
            label,
            arrow,
            list,
            options,
            selection_prefix,
            selected,
            expanded_size,
            expanded: false,
            restore_pending: false,
        }
    }

    /// Sets the font of the label and the list.
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.set_font(font);
        self
    }

    /// Sets the label and list tints.
    pub fn with_colors(mut self, background: Color, text: Color) -> Self {
        if let Some(label) = self.dialog.get_mut::<TextLabel>(self.label) {
            label.set_background_color(background);
            label.set_background_visible(true);
            label.set_text_color(text);
        }
        if let Some(list) = self.dialog.get_mut::<ListView>(self.list) {
            list.set_colors(background, text);
        }
        self
    }

    /// Changes the font of the label and the list.
    pub fn set_font(&mut self, font: FontHandle) {
        if let Some(label) = self.dialog.get_mut::<TextLabel>(self.label) {
            label.set_font(font.clone());
        }
        if let Some(list) = self.dialog.get_mut::<ListView>(self.list) {
            list.set_font(font);
        }
    }

    /// Text currently displayed by the label.
    pub fn text(&self) -> &str { self.dialog.get::<TextLabel>(self.label).map(|l| l.text()).unwrap_or("") }

    /// Available options.
    pub fn options(&self) -> &[String] { &self.options }

    /// Index of the selected option.
    pub fn selected_index(&self) -> Option<usize> { self.selected }

    /// Selected option, or an empty string when there are no options.
    pub fn selected_option(&self) -> &str { self.selected.and_then(|i| self.options.get(i)).map(|s| s.as_str()).unwrap_or("") }

    /// Returns `true` while the option list is open.
    pub fn is_expanded(&self) -> bool { self.expanded }

    /// Footprint of the open drop-down.
    pub fn expanded_size(&self) -> Vec2f { self.expanded_size }

    /// Option list part.
    pub fn list(&self) -> Option<&ListView> { self.dialog.get::<ListView>(self.list) }

    /// Arrow part.
    pub fn arrow(&self) -> Option<&Sprite> { self.dialog.get::<Sprite>(self.arrow) }

    /// Opens or closes the option list. Asking for the current state does nothing.
    pub fn expand_list(&mut self, expand: bool) {
        if expand == self.expanded {
            return;
        }
        self.expanded = expand;
        debug!("drop-down {:?}: {}", self.id(), if expand { "expanded" } else { "collapsed" });

        if expand {
            if let Some(list) = self.dialog.find_mut(self.list) {
                list.show();
            }
            self.dialog.base_mut().set_size(self.expanded_size);
            self.set_arrow_frame(1);
            self.dialog.base_mut().request(ParentRequest::SuppressSiblings);
            self.dialog.base_mut().emit(Signal::ListExpanded);
        } else {
            if let Some(list) = self.dialog.find_mut(self.list) {
                list.hide();
            }
            let collapsed = self.collapsed_size();
            self.dialog.base_mut().set_size(collapsed);
            self.set_arrow_frame(0);
            self.restore_pending = true;
            self.dialog.base_mut().emit(Signal::ListCollapsed);
        }
    }

    /// Selects `index`, raises [`Signal::OptionSelected`] and closes the list.
    /// Out-of-range indices are ignored.
    pub fn select_entry(&mut self, index: usize) {
        let option = match self.options.get(index) {
            Some(option) => option.clone(),
            None => return,
        };
        self.set_selected_entry(index);
        self.dialog.base_mut().emit(Signal::OptionSelected { index, option });
        self.expand_list(false);
    }

    /// Selects `index` without raising a signal or closing the list.
    pub fn set_selected_entry(&mut self, index: usize) {
        if index >= self.options.len() {
            return;
        }
        self.selected = Some(index);
        let text = format!("{}{}", self.selection_prefix, self.options[index]);
        if let Some(label) = self.dialog.get_mut::<TextLabel>(self.label) {
            label.set_text(&text);
        }
    }

    /// Replaces the options and selects `index` when the new list is not empty.
    pub fn update_options_list(&mut self, options: Vec<String>, index: usize) {
        if let Some(list) = self.dialog.get_mut::<ListView>(self.list) {
            list.refresh_data(options.clone());
        }
        self.options = options;
        self.selected = None;
        if !self.options.is_empty() {
            self.select_entry(index);
        }
    }

    fn collapsed_size(&self) -> Vec2f {
        let label = self.dialog.find(self.label).map(|w| w.size()).unwrap_or(Vec2f::new(0.0, 0.0));
        let arrow = self.dialog.find(self.arrow).map(|w| w.size()).unwrap_or(Vec2f::new(0.0, 0.0));
        Vec2f::new(label.x + arrow.x, label.y)
    }

    fn set_arrow_frame(&mut self, frame: usize) {
        if let Some(animation) = self.dialog.get_mut::<Sprite>(self.arrow).and_then(|s| s.animation_mut()) {
            animation.set_frame(frame);
        }
    }

    fn header_contains(&self, pos: Vec2f) -> bool { [self.label, self.arrow].iter().any(|id| self.dialog.find(*id).map(|w| w.check_collision(pos)).unwrap_or(false)) }

    fn confirms_highlight(&self) -> bool { self.expanded && self.list().and_then(|l| l.highlighted_entry()).is_some() }

    fn forward_to_list(&mut self, event: &UiEvent, ctx: &mut UiCtx<'_>) {
        if let UiEvent::MousePressed { pos } = event {
            if self.dialog.find(self.list).map(|w| w.check_collision(*pos)).unwrap_or(false) {
                self.dialog.focus_widget(self.list);
            }
        }

        let notifications = match self.dialog.get_mut::<ListView>(self.list) {
            Some(list) => {
                list.on_ui_event(event, ctx);
                list.base_mut().take_notifications()
            }
            None => return,
        };
        for notification in notifications {
            if let Signal::EntrySelected(index) = notification.signal {
                self.select_entry(index);
            }
        }
    }

    fn layout(&mut self, position: Vec2f, size: Vec2f) {
        let arrow_size = Vec2f::new(size.y, size.y);
        let label_size = Vec2f::new(size.x - arrow_size.x, size.y);
        let list_size = Vec2f::new(self.expanded_size.x, self.expanded_size.y - label_size.y);
        let parts = [
            (self.label, position, label_size),
            (self.arrow, Vec2f::new(position.x + label_size.x, position.y), arrow_size),
            (self.list, Vec2f::new(position.x, position.y + label_size.y), list_size),
        ];
        for (id, pos, part_size) in parts {
            if let Some(widget) = self.dialog.find_mut(id) {
                widget.set_position(pos);
                widget.set_size(part_size);
            }
        }
    }
}

impl Widget for DropDownList {
    fn base(&self) -> &WidgetBase { self.dialog.base() }
    fn base_mut(&mut self) -> &mut WidgetBase { self.dialog.base_mut() }
    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }

    fn on_ui_event(&mut self, event: &UiEvent, ctx: &mut UiCtx<'_>) {
        if !self.is_enabled() {
            return;
        }

        let header_pressed = match event {
            UiEvent::MousePressed { pos } => self.header_contains(*pos),
            _ => false,
        };
        let parts_focused = self.dialog.is_widget_focused(self.label) || self.dialog.is_widget_focused(self.list);
        let enter_toggles = parts_focused && event.is_key_pressed(Key::Enter) && !self.confirms_highlight();

        if header_pressed {
            self.dialog.focus_widget(self.label);
            self.expand_list(!self.expanded);
        } else if enter_toggles {
            self.expand_list(!self.expanded);
        } else if self.expanded {
            self.forward_to_list(event, ctx);
        }
    }

    fn update(&mut self, ctx: &mut UiCtx<'_>) {
        self.dialog.update(ctx);
        if self.restore_pending {
            self.restore_pending = false;
            self.dialog.base_mut().request(ParentRequest::RestoreSiblings);
        }
    }

    fn render(&self, batch: &mut dyn RenderBatch) { self.dialog.render(batch); }

    fn create(&mut self, textures: &mut TextureCache) { self.dialog.create(textures); }

    fn release(&mut self) { self.dialog.release(); }

    fn enable(&mut self) { self.dialog.enable(); }

    fn disable(&mut self) { self.dialog.disable(); }

    fn set_focused(&mut self, focused: bool) {
        self.dialog.set_focused(focused);
        if focused {
            if self.dialog.focused_widget().is_none() {
                self.dialog.focus_widget(self.label);
            }
        } else {
            self.expand_list(false);
        }
    }

    fn set_position(&mut self, position: Vec2f) {
        self.dialog.base_mut().set_position(position);
        let size = self.collapsed_size();
        self.layout(position, size);
    }

    fn set_size(&mut self, size: Vec2f) {
        self.dialog.base_mut().set_size(if self.expanded { self.expanded_size } else { size });
        let position = self.position();
        self.layout(position, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mono_font, v, Harness, Probe};
    use crate::{Notification, DEFAULT_LAYER};

    fn options() -> Vec<String> { vec!["A".to_string(), "B".to_string(), "C".to_string()] }

    fn drop_down(initial: &str) -> DropDownList { DropDownList::new(v(0.0, 0.0), v(200.0, 20.0), v(200.0, 100.0), DEFAULT_LAYER, initial, options()).with_font(mono_font()) }

    fn signals(notes: Vec<Notification>) -> Vec<Signal> { notes.into_iter().map(|n| n.signal).collect() }

    #[test]
    fn initial_text_naming_an_option_selects_it() {
        let dd = drop_down("B");
        assert_eq!(dd.selected_option(), "B");
        assert_eq!(dd.text(), "B");

        let prompt = drop_down("Region: ");
        assert_eq!(prompt.selected_option(), "A");
        assert_eq!(prompt.text(), "Region: ");
    }

    #[test]
    fn arrow_click_expands_to_the_configured_size() {
        let mut h = Harness::new();
        let mut dd = drop_down("B");
        dd.on_ui_event(&UiEvent::press(190.0, 10.0), &mut h.ctx(0.0));

        assert!(dd.is_expanded());
        assert_eq!((dd.size().x, dd.size().y), (200.0, 100.0));
        assert!(dd.list().map(|l| l.is_shown()).unwrap_or(false));
        assert_eq!(dd.arrow().and_then(|s| s.animation()).map(|a| a.current_frame()), Some(1));

        dd.on_ui_event(&UiEvent::press(10.0, 10.0), &mut h.ctx(0.0));
        assert!(!dd.is_expanded());
        assert_eq!((dd.size().x, dd.size().y), (200.0, 20.0));
        assert_eq!(dd.arrow().and_then(|s| s.animation()).map(|a| a.current_frame()), Some(0));
        assert_eq!(signals(dd.base_mut().take_notifications()), vec![Signal::ListExpanded, Signal::ListCollapsed]);
    }

    #[test]
    fn select_entry_ignores_out_of_range() {
        let mut dd = drop_down("Pick: ");
        dd.expand_list(true);
        dd.select_entry(7);
        assert!(dd.is_expanded());
        assert_eq!(dd.selected_option(), "A");

        dd.select_entry(2);
        assert!(!dd.is_expanded());
        assert_eq!(dd.text(), "Pick: C");
        let notes = signals(dd.base_mut().take_notifications());
        assert!(notes.contains(&Signal::OptionSelected { index: 2, option: "C".to_string() }));
    }

    #[test]
    fn expanding_suppresses_siblings_until_the_next_update() {
        let mut h = Harness::new();
        let mut parent = Dialog::new(v(0.0, 0.0), v(400.0, 200.0), DEFAULT_LAYER);
        let dd = parent.add(drop_down("Pick: "));
        let sibling = parent.add(Probe::new(300.0, 0.0, 50.0, 20.0, DEFAULT_LAYER));
        let sibling_enabled = |p: &Dialog| p.find(sibling).map(|w| w.is_enabled()).unwrap_or(false);

        parent.on_ui_event(&UiEvent::press(190.0, 10.0), &mut h.ctx(0.0));
        assert_eq!(parent.focused_widget(), Some(dd));
        assert!(!sibling_enabled(&parent));

        parent.on_ui_event(&UiEvent::press(10.0, 45.0), &mut h.ctx(0.0));
        let picked = parent.get::<DropDownList>(dd).map(|d| (d.is_expanded(), d.text().to_string()));
        assert_eq!(picked, Some((false, "Pick: B".to_string())));
        assert!(!sibling_enabled(&parent));

        parent.update(&mut h.ctx(0.016));
        assert!(sibling_enabled(&parent));

        let notes = parent.take_notifications();
        assert!(notes.iter().all(|n| n.source == dd));
        assert_eq!(
            signals(notes),
            vec![Signal::ListExpanded, Signal::OptionSelected { index: 1, option: "B".to_string() }, Signal::ListCollapsed]
        );
    }

    #[test]
    fn losing_focus_collapses() {
        let mut h = Harness::new();
        let mut parent = Dialog::new(v(0.0, 0.0), v(400.0, 200.0), DEFAULT_LAYER);
        let dd = parent.add(drop_down("B"));
        parent.on_ui_event(&UiEvent::press(190.0, 10.0), &mut h.ctx(0.0));
        assert_eq!(parent.get::<DropDownList>(dd).map(|d| d.is_expanded()), Some(true));

        parent.on_ui_event(&UiEvent::press(390.0, 190.0), &mut h.ctx(0.0));
        assert_eq!(parent.focused_widget(), None);
        assert_eq!(parent.get::<DropDownList>(dd).map(|d| d.is_expanded()), Some(false));
    }

    #[test]
    fn enter_toggles_and_confirms_the_highlight() {
        let mut h = Harness::new();
        let mut dd = drop_down("A");
        dd.set_focused(true);
        dd.on_ui_event(&UiEvent::key(Key::Enter), &mut h.ctx(0.0));
        assert!(dd.is_expanded());
        dd.on_ui_event(&UiEvent::key(Key::Enter), &mut h.ctx(0.0));
        assert!(!dd.is_expanded());

        dd.on_ui_event(&UiEvent::key(Key::Enter), &mut h.ctx(0.0));
        dd.on_ui_event(&UiEvent::key(Key::Down), &mut h.ctx(0.0));
        dd.on_ui_event(&UiEvent::key(Key::Down), &mut h.ctx(0.0));
        dd.on_ui_event(&UiEvent::key(Key::Enter), &mut h.ctx(0.0));
        assert!(!dd.is_expanded());
        assert_eq!(dd.selected_option(), "B");
    }

    #[test]
    fn disabled_drop_down_ignores_clicks() {
        let mut h = Harness::new();
        let mut dd = drop_down("A");
        dd.disable();
        dd.on_ui_event(&UiEvent::press(190.0, 10.0), &mut h.ctx(0.0));
        assert!(!dd.is_expanded());
    }

    #[test]
    fn update_options_list_selects_the_requested_index() {
        let mut dd = drop_down("Pick: ");
        dd.update_options_list(vec!["X".to_string(), "Y".to_string()], 1);
        assert_eq!(dd.selected_option(), "Y");
        assert_eq!(dd.text(), "Pick: Y");
        assert_eq!(dd.list().map(|l| l.num_entries()), Some(2));

        dd.update_options_list(Vec::new(), 0);
        assert_eq!(dd.selected_option(), "");
    }

    #[test]
    fn moving_relayouts_the_parts() {
        let mut dd = drop_down("A");
        dd.set_position(v(50.0, 60.0));
        let arrow = dd.arrow().map(|a| a.position());
        assert_eq!(arrow.map(|p| (p.x, p.y)), Some((230.0, 60.0)));
        let list = dd.list().map(|l| l.position());
        assert_eq!(list.map(|p| (p.x, p.y)), Some((50.0, 80.0)));
    }
}
