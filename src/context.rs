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
use crate::{Dialog, Input, Notification, RenderBatch, Style, TextureCache, TextureLoader, UiCtx, UiEvent, Widget, WidgetId};
use log::trace;

/// Frame driver that owns the input accumulator, the textures and the top-level dialogs.
pub struct Context {
    input: Input,
    style: Style,
    textures: TextureCache,
    dialogs: Vec<Dialog>,
    notifications: Vec<Notification>,
    frame: usize,
}

impl Default for Context {
    fn default() -> Self { Self::new() }
}

impl Context {
    /// Creates a context with the default style and a loader-less texture cache.
    pub fn new() -> Self { Self::with_style(Style::default()) }

    /// Creates a context with a custom style.
    pub fn with_style(style: Style) -> Self {
        let mut input = Input::default();
        input.set_wheel_delta(style.wheel_delta);
        Self {
            input,
            style,
            textures: TextureCache::new(),
            dialogs: Vec::new(),
            notifications: Vec::new(),
            frame: 0,
        }
    }

    /// Resolves textures through `loader` from now on.
    pub fn with_texture_loader(mut self, loader: Box<dyn TextureLoader>) -> Self {
        self.textures = TextureCache::with_loader(loader);
        self
    }

    /// Input accumulator fed by the platform layer.
    pub fn input(&self) -> &Input { &self.input }

    /// Mutable input accumulator fed by the platform layer.
    pub fn input_mut(&mut self) -> &mut Input { &mut self.input }

    /// Active style.
    pub fn style(&self) -> &Style { &self.style }

    /// Texture cache shared by every dialog.
    pub fn textures_mut(&mut self) -> &mut TextureCache { &mut self.textures }

    /// Number of completed frames.
    pub fn frame_count(&self) -> usize { self.frame }

    /// Binds the dialog's resources and starts driving it.
    pub fn add_dialog(&mut self, mut dialog: Dialog) -> WidgetId {
        dialog.create(&mut self.textures);
        let id = dialog.id();
        self.dialogs.push(dialog);
        id
    }

    /// Stops driving the dialog `id` and hands it back.
    pub fn remove_dialog(&mut self, id: WidgetId) -> Option<Dialog> {
        let index = self.dialogs.iter().position(|d| d.id() == id)?;
        let mut dialog = self.dialogs.remove(index);
        dialog.release();
        Some(dialog)
    }

    /// Dialog with identity `id`.
    pub fn dialog(&self, id: WidgetId) -> Option<&Dialog> { self.dialogs.iter().find(|d| d.id() == id) }

    /// Mutable dialog with identity `id`.
    pub fn dialog_mut(&mut self, id: WidgetId) -> Option<&mut Dialog> { self.dialogs.iter_mut().find(|d| d.id() == id) }

    /// Routes one event to every dialog.
    pub fn dispatch(&mut self, event: &UiEvent) {
        trace!("dispatch {:?}", event.kind());
        let mut ctx = UiCtx::new(&mut self.input, &self.style, 0.0);
        for dialog in self.dialogs.iter_mut() {
            dialog.on_ui_event(event, &mut ctx);
        }
        self.collect_notifications();
    }

    /// Runs one frame: drains decoded input, updates every dialog and renders them from the
    /// lowest layer to the highest.
    pub fn frame(&mut self, elapsed: f32, batch: &mut dyn RenderBatch) {
        for event in self.input.drain_events() {
            self.dispatch(&event);
        }

        let mut ctx = UiCtx::new(&mut self.input, &self.style, elapsed);
        for dialog in self.dialogs.iter_mut() {
            dialog.update(&mut ctx);
        }

        let mut order: Vec<&Dialog> = self.dialogs.iter().collect();
        order.sort_by_key(|d| d.layer());
        for dialog in order {
            dialog.render(batch);
        }

        self.collect_notifications();
        self.frame += 1;
    }

    /// Takes every notification raised since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> { std::mem::take(&mut self.notifications) }

    /// Releases every dialog and drops the cached textures.
    pub fn release(&mut self) {
        self.dialogs.iter_mut().for_each(|d| d.release());
        self.textures.release();
    }

    fn collect_notifications(&mut self) {
        for dialog in self.dialogs.iter_mut() {
            self.notifications.extend(dialog.take_notifications());
        }
    }
}
