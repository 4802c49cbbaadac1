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
//! Errors raised at the resource edges of the crate.
//!
//! Event dispatch, update and render never fail; only fonts and textures coming from outside
//! the process can.

use thiserror::Error;

/// Result alias used by the fallible resource APIs.
pub type UiResult<T> = Result<T, UiError>;

#[derive(Debug, Error)]
/// Failure while binding an external resource.
pub enum UiError {
    /// Font data could not be parsed.
    #[error("failed to load font: {0}")]
    FontLoad(String),
    /// A texture loader reported a failure.
    #[error("failed to load texture `{name}`: {reason}")]
    TextureLoad {
        /// Asset identifier that was requested.
        name: String,
        /// Loader supplied description.
        reason: String,
    },
    /// A texture with zero width or height was registered.
    #[error("texture `{name}` has an empty extent")]
    InvalidTexture {
        /// Asset identifier that was rejected.
        name: String,
    },
    /// Reading a resource from disk failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
