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
#[derive(Copy, Clone, Debug)]
/// Tunables read by widgets while they handle events and advance their timers.
pub struct Style {
    /// Seconds between two caret visibility toggles.
    pub caret_blink_time: f32,
    /// Glyph appended to a focused text field while the caret is visible.
    pub caret: char,
    /// Glyph occupying the caret slot while it is hidden.
    pub caret_blank: char,
    /// Horizontal space, in pixels, kept free before a text field starts truncating.
    pub overflow_margin: f32,
    /// Slack applied to the width ratio when estimating how many characters fit.
    pub overflow_ratio_slack: f32,
    /// Characters of context kept to the left of the cursor in a truncated field.
    pub overflow_lookback: usize,
    /// Marker prefixed to truncated text.
    pub ellipsis: &'static str,
    /// Replacement for every character of a password field.
    pub password_mask: char,
    /// Frame rate of the button press animation.
    pub button_animation_fps: f32,
    /// Raw mouse-wheel units that make up one scrolled line.
    pub wheel_delta: i32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            caret_blink_time: 0.5,
            caret: '|',
            caret_blank: ' ',
            overflow_margin: 10.0,
            overflow_ratio_slack: 1.15,
            overflow_lookback: 5,
            ellipsis: "...",
            password_mask: '*',
            button_animation_fps: 15.0,
            wheel_delta: 120,
        }
    }
}
