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
use crate::{TextureCache, TextureHandle};

/// Frame rate used until [`AnimatedTexture::play`] picks another one.
pub const DEFAULT_ANIMATION_FPS: f32 = 30.0;

#[derive(Clone, Debug)]
/// Flip-book animation over a list of textures.
pub struct AnimatedTexture {
    frame_names: Vec<String>,
    frames: Vec<TextureHandle>,
    fps: f32,
    progress: f32,
    current: usize,
    playing: bool,
    looped: bool,
}

impl AnimatedTexture {
    /// Creates a stopped animation over the named frames.
    pub fn new(frame_names: Vec<String>) -> Self {
        Self {
            frame_names,
            frames: Vec::new(),
            fps: DEFAULT_ANIMATION_FPS,
            progress: 0.0,
            current: 0,
            playing: false,
            looped: false,
        }
    }

    /// Resolves every frame through the texture cache.
    pub fn create(&mut self, textures: &mut TextureCache) { self.frames = self.frame_names.iter().map(|name| textures.get_texture(name)).collect(); }

    /// Drops the resolved frame handles.
    pub fn release(&mut self) { self.frames.clear(); }

    /// Restarts the animation at `fps` frames per second.
    pub fn play(&mut self, fps: f32, looped: bool) {
        self.fps = if fps > 0.0 { fps } else { DEFAULT_ANIMATION_FPS };
        self.looped = looped;
        self.progress = 0.0;
        self.current = 0;
        self.playing = true;
    }

    /// Stops and rewinds to the first frame.
    pub fn stop(&mut self) {
        self.playing = false;
        self.progress = 0.0;
        self.current = 0;
    }

    /// Freezes the animation on its current frame.
    pub fn pause(&mut self) { self.playing = false; }

    /// Returns `true` while the animation advances on [`AnimatedTexture::tick`].
    pub fn is_playing(&self) -> bool { self.playing }

    /// Jumps to `frame`, clamped to the last frame.
    pub fn set_frame(&mut self, frame: usize) {
        let count = self.num_frames();
        if count == 0 {
            return;
        }
        self.current = frame.min(count - 1);
        self.progress = self.current as f32 / self.fps;
    }

    /// Index of the frame currently shown.
    pub fn current_frame(&self) -> usize { self.current }

    /// Number of frames.
    pub fn num_frames(&self) -> usize { self.frame_names.len() }

    /// Length of one full pass in seconds.
    pub fn duration(&self) -> f32 { self.num_frames() as f32 / self.fps }

    /// Texture for the current frame, once resolved.
    pub fn current_texture(&self) -> Option<&TextureHandle> { self.frames.get(self.current) }

    /// Advances the animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let count = self.num_frames();
        if !self.playing || count == 0 {
            return;
        }

        let duration = self.duration();
        self.progress += dt;
        if self.progress > duration {
            if self.looped {
                self.progress -= duration;
            } else {
                self.progress = 0.0;
                self.playing = false;
            }
        }
        self.progress = self.progress.clamp(0.0, duration);
        self.current = ((count as f32 * self.progress / duration) as usize).min(count - 1);
    }
}
