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
use crate::{FontHandle, Input, Layer, MonoFont, Style, UiCtx, UiEvent, UiEventKind, Vec2f, Widget, WidgetBase};

/// Fixed 8x16 font used across the widget tests.
pub(crate) fn mono_font() -> FontHandle { MonoFont::new("mono", 8.0, 16.0).into_handle() }

pub(crate) fn v(x: f32, y: f32) -> Vec2f { Vec2f::new(x, y) }

/// Owned pieces a test needs to build a [`UiCtx`].
pub(crate) struct Harness {
    pub input: Input,
    pub style: Style,
}

impl Harness {
    pub fn new() -> Self { Self { input: Input::default(), style: Style::default() } }

    pub fn ctx(&mut self, elapsed: f32) -> UiCtx<'_> { UiCtx::new(&mut self.input, &self.style, elapsed) }
}

/// Widget that records the kinds of events it receives.
pub(crate) struct Probe {
    base: WidgetBase,
    pub events: Vec<UiEventKind>,
    pub updates: usize,
}

impl Probe {
    pub fn new(x: f32, y: f32, w: f32, h: f32, layer: Layer) -> Self {
        Self { base: WidgetBase::new(v(x, y), v(w, h), layer), events: Vec::new(), updates: 0 }
    }
}

impl Widget for Probe {
    implement_widget_base!();

    fn on_ui_event(&mut self, event: &UiEvent, _ctx: &mut UiCtx<'_>) { self.events.push(event.kind()); }

    fn update(&mut self, _ctx: &mut UiCtx<'_>) { self.updates += 1; }
}
