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
use crate::widget::implement_widget_base;
use crate::{color, Alignment, Color, FontHandle, Key, Layer, RenderBatch, Signal, TextLabel, TextureCache, UiCtx, UiEvent, Vec2f, Widget, WidgetBase};

/// Background tints for each visual state of a [`Button`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ButtonColors {
    /// Resting state.
    pub idle: Color,
    /// Between press and release.
    pub pressed: Color,
    /// Pointer over the button, or keyboard focus.
    pub hovered: Color,
    /// Disabled state.
    pub disabled: Color,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            idle: color(5, 122, 238, 255),
            pressed: color(5, 122, 238, 255),
            hovered: color(41, 142, 240, 255),
            disabled: color(38, 38, 38, 255),
        }
    }
}

/// Default button background.
pub const DEFAULT_BUTTON_ASSET: &str = "Assets/button.dds";

/// Clickable label. Raises [`Signal::ButtonPressed`] on release, or on Enter while focused.
pub struct Button {
    base: WidgetBase,
    label: TextLabel,
    colors: ButtonColors,
    animated: bool,
    pressed: bool,
    hovered: bool,
}

impl Button {
    /// Creates a button over `assets`. More than one asset makes a press animation.
    pub fn new(position: Vec2f, size: Vec2f, layer: Layer, text: &str, assets: &[&str]) -> Self {
        let colors = ButtonColors::default();
        let label = TextLabel::new(position, size, layer, text);
        let label = match assets {
            [] => label,
            [single] => label.with_background(single),
            frames => label.with_animated_background(frames.iter().map(|f| f.to_string()).collect()),
        };
        Self {
            base: WidgetBase::new(position, size, layer),
            label: label.with_colors(colors.idle, Color::WHITE),
            colors,
            animated: assets.len() > 1,
            pressed: false,
            hovered: false,
        }
    }

    /// Sets the caption font.
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.label.set_font(font);
        self
    }

    /// Replaces the per-state background tints.
    pub fn with_colors(mut self, colors: ButtonColors) -> Self {
        self.colors = colors;
        self.label.set_background_color(colors.idle);
        self
    }

    /// Sets the caption alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.label = self.label.with_alignment(alignment);
        self
    }

    /// Caption label.
    pub fn label(&self) -> &TextLabel { &self.label }

    /// Changes the caption.
    pub fn set_text(&mut self, text: &str) { self.label.set_text(text); }

    /// Changes the caption tint.
    pub fn set_text_color(&mut self, color: Color) { self.label.set_text_color(color); }

    /// Returns `true` between a press and the matching release.
    pub fn is_pressed(&self) -> bool { self.pressed }

    fn resting_color(&self) -> Color {
        if self.hovered {
            self.colors.hovered
        } else {
            self.colors.idle
        }
    }

    fn on_press(&mut self) {
        if self.animated {
            if let Some(animation) = self.label.background_mut().animation_mut() {
                animation.set_frame(1);
            }
        }
        self.label.set_background_color(self.colors.pressed);
        self.pressed = true;
    }

    fn on_activate(&mut self, fps: f32) {
        if self.animated {
            if let Some(animation) = self.label.background_mut().animation_mut() {
                if animation.current_frame() == 0 {
                    animation.play(fps, false);
                } else {
                    animation.set_frame(0);
                }
            }
        }
        let resting = self.resting_color();
        self.label.set_background_color(resting);
        self.base.emit(Signal::ButtonPressed);
    }
}

impl Widget for Button {
    implement_widget_base!();

    fn on_ui_event(&mut self, event: &UiEvent, ctx: &mut UiCtx<'_>) {
        if !self.is_shown() {
            return;
        }

        if matches!(event, UiEvent::MousePressed { .. }) && self.is_enabled() {
            self.on_press();
        }

        let released = matches!(event, UiEvent::MouseReleased { .. }) && self.pressed;
        if released || (self.is_focused() && event.is_key_pressed(Key::Enter)) {
            if self.is_enabled() {
                self.on_activate(ctx.style().button_animation_fps);
            }
            self.pressed = false;
        }
    }

    fn update(&mut self, ctx: &mut UiCtx<'_>) {
        self.label.update(ctx);
        if self.pressed {
            return;
        }
        let was_hovered = self.hovered;
        self.hovered = self.is_mouse_hovered(ctx.mouse_position());
        if self.hovered != was_hovered && self.is_enabled() {
            let resting = self.resting_color();
            self.label.set_background_color(resting);
        }
    }

    fn render(&self, batch: &mut dyn RenderBatch) {
        if !self.is_shown() {
            return;
        }
        self.base.render_borders(batch);
        self.label.render(batch);
    }

    fn create(&mut self, textures: &mut TextureCache) { self.label.create(textures); }

    fn release(&mut self) { self.label.release(); }

    fn set_position(&mut self, position: Vec2f) {
        self.base.set_position(position);
        self.label.set_position(position);
    }

    fn set_size(&mut self, size: Vec2f) {
        self.base.set_size(size);
        self.label.set_size(size);
    }

    fn enable(&mut self) {
        self.base.set_enabled(true);
        self.label.set_background_color(self.colors.idle);
    }

    fn disable(&mut self) {
        self.base.set_enabled(false);
        self.label.set_background_color(self.colors.disabled);
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.set_focused(focused);
        let tint = if !self.is_enabled() {
            self.colors.disabled
        } else if self.pressed {
            self.colors.pressed
        } else if focused {
            self.colors.hovered
        } else {
            self.colors.idle
        };
        self.label.set_background_color(tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mono_font, v, Harness};
    use crate::DEFAULT_LAYER;

    fn button(assets: &[&str]) -> Button { Button::new(v(10.0, 10.0), v(100.0, 30.0), DEFAULT_LAYER, "OK", assets).with_font(mono_font()) }

    fn pressed_count(b: &mut Button) -> usize { b.base_mut().take_notifications().iter().filter(|n| n.signal == Signal::ButtonPressed).count() }

    #[test]
    fn press_then_release_activates_once() {
        let mut h = Harness::new();
        let mut b = button(&[DEFAULT_BUTTON_ASSET]);
        b.on_ui_event(&UiEvent::release(20.0, 20.0), &mut h.ctx(0.0));
        assert_eq!(pressed_count(&mut b), 0);

        b.on_ui_event(&UiEvent::press(20.0, 20.0), &mut h.ctx(0.0));
        assert!(b.is_pressed());
        assert_eq!(b.label().background_color(), ButtonColors::default().pressed);
        b.on_ui_event(&UiEvent::release(20.0, 20.0), &mut h.ctx(0.0));
        assert!(!b.is_pressed());
        assert_eq!(pressed_count(&mut b), 1);
    }

    #[test]
    fn enter_activates_only_when_focused() {
        let mut h = Harness::new();
        let mut b = button(&[]);
        b.on_ui_event(&UiEvent::key(Key::Enter), &mut h.ctx(0.0));
        assert_eq!(pressed_count(&mut b), 0);
        b.set_focused(true);
        b.on_ui_event(&UiEvent::key(Key::Enter), &mut h.ctx(0.0));
        assert_eq!(pressed_count(&mut b), 1);
    }

    #[test]
    fn disabled_button_is_inert_and_grey() {
        let mut h = Harness::new();
        let mut b = button(&[]);
        b.disable();
        assert_eq!(b.label().background_color(), ButtonColors::default().disabled);
        b.on_ui_event(&UiEvent::press(20.0, 20.0), &mut h.ctx(0.0));
        b.on_ui_event(&UiEvent::release(20.0, 20.0), &mut h.ctx(0.0));
        assert_eq!(pressed_count(&mut b), 0);
        b.enable();
        assert_eq!(b.label().background_color(), ButtonColors::default().idle);
    }

    #[test]
    fn hover_follows_the_pointer() {
        let mut h = Harness::new();
        let mut b = button(&[]);
        h.input.mousemove(50.0, 20.0);
        b.update(&mut h.ctx(0.016));
        assert_eq!(b.label().background_color(), ButtonColors::default().hovered);

        h.input.mousemove(500.0, 20.0);
        b.update(&mut h.ctx(0.016));
        assert_eq!(b.label().background_color(), ButtonColors::default().idle);
    }

    #[test]
    fn animated_button_plays_on_activation() {
        let mut h = Harness::new();
        let mut b = button(&["up.dds", "down.dds"]);
        b.on_ui_event(&UiEvent::press(20.0, 20.0), &mut h.ctx(0.0));
        assert_eq!(b.label().background().animation().map(|a| a.current_frame()), Some(1));

        b.on_ui_event(&UiEvent::release(20.0, 20.0), &mut h.ctx(0.0));
        let animation = b.label().background().animation().map(|a| (a.current_frame(), a.is_playing()));
        assert_eq!(animation, Some((0, false)));
    }
}
