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
//! Shared widget state and the capability every widget implements.

use crate::{layer_to_depth, Color, InputSource, Layer, RenderBatch, Style, TextureCache, UiEvent, Vec2f, WidgetId};
use std::any::Any;

#[derive(Clone, Debug, PartialEq)]
/// Something a widget wants the application to know about.
pub enum Signal {
    /// A button was activated.
    ButtonPressed,
    /// A checkbox changed state.
    CheckboxToggled(bool),
    /// Enter was pressed inside a text field holding the given text.
    EnterPressed(String),
    /// A drop-down option was chosen.
    OptionSelected {
        /// Index into the options list.
        index: usize,
        /// The chosen option.
        option: String,
    },
    /// A drop-down opened its list.
    ListExpanded,
    /// A drop-down closed its list.
    ListCollapsed,
    /// A list view row was clicked or confirmed.
    EntrySelected(usize),
    /// Escape was pressed while a dialog was active.
    EscapePressed,
}

#[derive(Clone, Debug, PartialEq)]
/// A [`Signal`] tagged with the widget that raised it.
pub struct Notification {
    /// Widget that raised the signal.
    pub source: WidgetId,
    /// What happened.
    pub signal: Signal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Request a child makes of the dialog that owns it.
pub enum ParentRequest {
    /// Disable every other widget, remembering which ones were enabled.
    SuppressSiblings,
    /// Re-enable the widgets remembered by the last suppression.
    RestoreSiblings,
}

/// Context handed to widgets while they handle events and update.
pub struct UiCtx<'a> {
    input: &'a mut dyn InputSource,
    style: &'a Style,
    elapsed: f32,
}

impl<'a> UiCtx<'a> {
    /// Creates a context for one dispatch or update pass.
    pub fn new(input: &'a mut dyn InputSource, style: &'a Style, elapsed: f32) -> Self { Self { input, style, elapsed } }

    /// Seconds elapsed since the previous frame.
    pub fn elapsed_seconds(&self) -> f32 { self.elapsed }

    /// Active style.
    pub fn style(&self) -> &Style { self.style }

    /// Current pointer position.
    pub fn mouse_position(&self) -> Vec2f { self.input.mouse_position() }

    /// Current clipboard contents.
    pub fn clipboard_text(&self) -> String { self.input.clipboard_text() }

    /// Replaces the clipboard contents.
    pub fn set_clipboard_text(&mut self, text: &str) { self.input.set_clipboard_text(text) }
}

/// Line thickness of border overlays.
pub const DEFAULT_BORDER_THICKNESS: f32 = 3.0;

#[derive(Clone, Debug)]
/// State common to every widget.
pub struct WidgetBase {
    id: WidgetId,
    position: Vec2f,
    size: Vec2f,
    layer: Layer,
    shown: bool,
    enabled: bool,
    focused: bool,
    border_color: Option<Color>,
    border_thickness: f32,
    outbox: Vec<Notification>,
    requests: Vec<ParentRequest>,
}

impl WidgetBase {
    /// Creates a shown, enabled, unfocused widget state with a fresh identity.
    pub fn new(position: Vec2f, size: Vec2f, layer: Layer) -> Self {
        Self {
            id: WidgetId::next(),
            position,
            size,
            layer,
            shown: true,
            enabled: true,
            focused: false,
            border_color: None,
            border_thickness: DEFAULT_BORDER_THICKNESS,
            outbox: Vec::new(),
            requests: Vec::new(),
        }
    }

    /// Widget identity.
    pub fn id(&self) -> WidgetId { self.id }
    /// Top-left corner.
    pub fn position(&self) -> Vec2f { self.position }
    /// Width and height.
    pub fn size(&self) -> Vec2f { self.size }
    /// Paint layer.
    pub fn layer(&self) -> Layer { self.layer }
    /// Render depth derived from the layer.
    pub fn depth(&self) -> f32 { layer_to_depth(self.layer) }
    /// Visibility flag.
    pub fn is_shown(&self) -> bool { self.shown }
    /// Interactivity flag.
    pub fn is_enabled(&self) -> bool { self.enabled }
    /// Keyboard focus flag.
    pub fn is_focused(&self) -> bool { self.focused }
    /// Border overlay color, if any.
    pub fn border_color(&self) -> Option<Color> { self.border_color }

    /// Moves the widget.
    pub fn set_position(&mut self, position: Vec2f) { self.position = position; }
    /// Resizes the widget.
    pub fn set_size(&mut self, size: Vec2f) { self.size = size; }
    /// Changes the paint layer.
    pub fn set_layer(&mut self, layer: Layer) { self.layer = layer; }
    /// Sets the visibility flag.
    pub fn set_shown(&mut self, shown: bool) { self.shown = shown; }
    /// Sets the interactivity flag.
    pub fn set_enabled(&mut self, enabled: bool) { self.enabled = enabled; }
    /// Sets the keyboard focus flag.
    pub fn set_focused(&mut self, focused: bool) { self.focused = focused; }
    /// Sets or clears the border overlay color.
    pub fn set_border_color(&mut self, color: Option<Color>) { self.border_color = color; }
    /// Changes the border overlay line thickness.
    pub fn set_border_thickness(&mut self, thickness: f32) { self.border_thickness = thickness; }

    /// Inclusive box test against the widget bounds.
    pub fn contains(&self, point: Vec2f) -> bool {
        point.x >= self.position.x && point.x <= self.position.x + self.size.x && point.y >= self.position.y && point.y <= self.position.y + self.size.y
    }

    /// Queues a signal for the application.
    pub fn emit(&mut self, signal: Signal) { self.outbox.push(Notification { source: self.id, signal }); }

    /// Queues a request for the owning dialog.
    pub fn request(&mut self, request: ParentRequest) { self.requests.push(request); }

    /// Appends notifications raised by a child to this widget's queue.
    pub fn relay(&mut self, notifications: Vec<Notification>) { self.outbox.extend(notifications); }

    /// Takes every queued notification.
    pub fn take_notifications(&mut self) -> Vec<Notification> { std::mem::take(&mut self.outbox) }

    /// Takes every queued parent request.
    pub fn take_requests(&mut self) -> Vec<ParentRequest> { std::mem::take(&mut self.requests) }

    /// Draws the border overlay as a closed outline at the widget's depth.
    pub fn render_borders(&self, batch: &mut dyn RenderBatch) {
        let color = match self.border_color {
            Some(color) if self.shown => color,
            _ => return,
        };
        let (x, y, w, h) = (self.position.x, self.position.y, self.size.x, self.size.y);
        let points = [Vec2f::new(x, y), Vec2f::new(x + w, y), Vec2f::new(x + w, y + h), Vec2f::new(x, y + h), Vec2f::new(x, y)];
        batch.draw_polyline(&points, color, self.border_thickness, self.depth());
    }
}

/// Capability shared by every element that lives inside a [`crate::Dialog`].
///
/// Implementors only provide access to their [`WidgetBase`] and event handling; the
/// positioning, visibility, enable and focus operations have defaults that composites override
/// when they need to cascade to their parts.
pub trait Widget: Any {
    /// Shared widget state.
    fn base(&self) -> &WidgetBase;
    /// Mutable shared widget state.
    fn base_mut(&mut self) -> &mut WidgetBase;
    /// Upcast used for typed lookup.
    fn as_any(&self) -> &dyn Any;
    /// Mutable upcast used for typed lookup.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Handles an input event routed to this widget.
    fn on_ui_event(&mut self, event: &UiEvent, ctx: &mut UiCtx<'_>);

    /// Advances per-frame state such as timers.
    fn update(&mut self, _ctx: &mut UiCtx<'_>) {}

    /// Records the widget's draw calls.
    fn render(&self, batch: &mut dyn RenderBatch) { self.base().render_borders(batch) }

    /// Binds textures and other lazily created resources.
    fn create(&mut self, _textures: &mut TextureCache) {}

    /// Drops resources bound by [`Widget::create`].
    fn release(&mut self) {}

    /// Widget identity.
    fn id(&self) -> WidgetId { self.base().id() }
    /// Top-left corner.
    fn position(&self) -> Vec2f { self.base().position() }
    /// Width and height.
    fn size(&self) -> Vec2f { self.base().size() }
    /// Paint layer.
    fn layer(&self) -> Layer { self.base().layer() }

    /// Moves the widget.
    fn set_position(&mut self, position: Vec2f) { self.base_mut().set_position(position) }
    /// Resizes the widget.
    fn set_size(&mut self, size: Vec2f) { self.base_mut().set_size(size) }

    /// Returns `true` if the widget is visible.
    fn is_shown(&self) -> bool { self.base().is_shown() }
    /// Makes the widget visible.
    fn show(&mut self) { self.base_mut().set_shown(true) }
    /// Hides the widget.
    fn hide(&mut self) { self.base_mut().set_shown(false) }
    /// Flips visibility.
    fn toggle(&mut self) {
        if self.is_shown() {
            self.hide()
        } else {
            self.show()
        }
    }

    /// Returns `true` if the widget reacts to input.
    fn is_enabled(&self) -> bool { self.base().is_enabled() }
    /// Makes the widget react to input.
    fn enable(&mut self) { self.base_mut().set_enabled(true) }
    /// Stops the widget from reacting to input.
    fn disable(&mut self) { self.base_mut().set_enabled(false) }

    /// Returns `true` if the widget holds keyboard focus.
    fn is_focused(&self) -> bool { self.base().is_focused() }
    /// Gives or takes keyboard focus.
    fn set_focused(&mut self, focused: bool) { self.base_mut().set_focused(focused) }

    /// Inclusive box test against the widget bounds.
    fn check_collision(&self, point: Vec2f) -> bool { self.base().contains(point) }

    /// Returns `true` when the pointer is over an enabled, visible widget.
    fn is_mouse_hovered(&self, mouse: Vec2f) -> bool { self.is_enabled() && self.is_shown() && self.check_collision(mouse) }

    /// Sets the border overlay color.
    fn set_border_color(&mut self, color: Color) { self.base_mut().set_border_color(Some(color)) }
    /// Removes the border overlay.
    fn clear_border_color(&mut self) { self.base_mut().set_border_color(None) }
}

macro_rules! implement_widget_base {
    () => {
        fn base(&self) -> &$crate::WidgetBase { &self.base }
        fn base_mut(&mut self) -> &mut $crate::WidgetBase { &mut self.base }
        fn as_any(&self) -> &dyn ::std::any::Any { self }
        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any { self }
    };
}

pub(crate) use implement_widget_base;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Harness, Probe};
    use crate::{CommandList, DrawCommand, UiEventKind, DEFAULT_LAYER};

    fn probe() -> Probe { Probe::new(10.0, 10.0, 20.0, 10.0, DEFAULT_LAYER) }

    #[test]
    fn collision_is_inclusive_on_edges() {
        let w = probe();
        assert!(w.check_collision(Vec2f::new(10.0, 10.0)));
        assert!(w.check_collision(Vec2f::new(30.0, 20.0)));
        assert!(!w.check_collision(Vec2f::new(30.1, 20.0)));
        assert!(!w.check_collision(Vec2f::new(9.9, 15.0)));
    }

    #[test]
    fn hover_requires_enabled_and_shown() {
        let mut w = probe();
        let inside = Vec2f::new(15.0, 15.0);
        assert!(w.is_mouse_hovered(inside));
        w.disable();
        assert!(!w.is_mouse_hovered(inside));
        w.enable();
        w.toggle();
        assert!(!w.is_mouse_hovered(inside));
    }

    #[test]
    fn borders_only_render_when_colored_and_shown() {
        let mut w = probe();
        let mut list = CommandList::new();
        w.render(&mut list);
        assert!(list.is_empty());

        w.set_border_color(Color::WHITE);
        w.render(&mut list);
        match &list.commands()[0] {
            DrawCommand::Polyline { points, thickness, .. } => {
                assert_eq!(points.len(), 5);
                assert_eq!(*thickness, DEFAULT_BORDER_THICKNESS);
            }
            other => panic!("unexpected command {:?}", other),
        }

        list.clear();
        w.hide();
        w.render(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn emitted_signals_carry_the_source() {
        let mut w = probe();
        let mut h = Harness::new();
        w.on_ui_event(&UiEvent::FocusGained, &mut h.ctx(0.0));
        assert_eq!(w.events, vec![UiEventKind::FocusGained]);

        w.base_mut().emit(Signal::ButtonPressed);
        let notes = w.base_mut().take_notifications();
        assert_eq!(notes, vec![Notification { source: w.id(), signal: Signal::ButtonPressed }]);
        assert!(w.base_mut().take_notifications().is_empty());
    }
}
