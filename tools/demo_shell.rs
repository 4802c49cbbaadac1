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
//! Headless walk through a login-style dialog.
//!
//! Replays a scripted sequence of platform input through a [`Context`], logs every
//! notification the widgets raise and prints the draw commands of the last frame.
//! Run with `RUST_LOG=debug` to see focus and drop-down transitions.

use log::info;
use shell_ui::*;
use std::{env, error::Error};

const FRAME_TIME: f32 = 1.0 / 60.0;

fn load_font() -> Result<FontHandle, Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--font" {
            let path = args.next().ok_or("--font requires a path")?;
            return load_ttf(&path);
        }
    }
    Ok(MonoFont::new("mono", 8.0, 16.0).into_handle())
}

#[cfg(feature = "ttf")]
fn load_ttf(path: &str) -> Result<FontHandle, Box<dyn Error>> { Ok(std::rc::Rc::new(TtfFont::from_file("demo", path, 16.0)?)) }

#[cfg(not(feature = "ttf"))]
fn load_ttf(_path: &str) -> Result<FontHandle, Box<dyn Error>> { Err("built without the `ttf` feature".into()) }

struct Ids {
    name: WidgetId,
    region: WidgetId,
    upload: WidgetId,
}

fn build_dialog(font: &FontHandle) -> (Dialog, Ids) {
    let mut dialog = Dialog::new(vec2f(0.0, 0.0), vec2f(400.0, 300.0), DEFAULT_LAYER);
    let name = dialog.add(TextField::new(vec2f(20.0, 20.0), vec2f(240.0, 30.0), DEFAULT_LAYER, "Display name", InputType::Normal).with_font(font.clone()));
    let region = dialog.add(
        DropDownList::new(
            vec2f(20.0, 70.0),
            vec2f(240.0, 30.0),
            vec2f(240.0, 130.0),
            DEFAULT_LAYER,
            "Region: ",
            vec!["Europe".to_string(), "Americas".to_string(), "Asia".to_string()],
        )
        .with_font(font.clone()),
    );
    let upload = dialog.add(ProgressBar::new(vec2f(20.0, 220.0), vec2f(240.0, 20.0), DEFAULT_LAYER, "Upload", "Assets/bar_done.dds", "Assets/bar_todo.dds").with_font(font.clone()));
    dialog.add(Button::new(vec2f(280.0, 250.0), vec2f(100.0, 30.0), DEFAULT_LAYER, "Sign in", &[DEFAULT_BUTTON_ASSET]).with_font(font.clone()));
    (dialog, Ids { name, region, upload })
}

fn click(input: &mut Input, x: f32, y: f32) {
    input.mousemove(x, y);
    input.mousedown(x, y, MouseButton::LEFT);
    input.mouseup(x, y, MouseButton::LEFT);
}

fn step(ctx: &mut Context, batch: &mut CommandList, script: impl FnOnce(&mut Input)) {
    script(ctx.input_mut());
    batch.clear();
    ctx.frame(FRAME_TIME, batch);
    for note in ctx.take_notifications() {
        info!("{:?} -> {:?}", note.source, note.signal);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let font = load_font()?;
    let mut ctx = Context::new();
    for asset in ["Assets/bar_done.dds", "Assets/bar_todo.dds"] {
        ctx.textures_mut().set_texture(asset, TextureInfo { width: 64, height: 8 })?;
    }
    let (dialog, ids) = build_dialog(&font);
    let dialog_id = ctx.add_dialog(dialog);

    let mut batch = CommandList::new();
    step(&mut ctx, &mut batch, |input| click(input, 30.0, 30.0));
    step(&mut ctx, &mut batch, |input| input.text("Ada"));
    step(&mut ctx, &mut batch, |input| input.keydown(Key::Enter, KeyMods::NONE));
    step(&mut ctx, &mut batch, |input| click(input, 250.0, 85.0));
    step(&mut ctx, &mut batch, |input| click(input, 30.0, 125.0));
    step(&mut ctx, &mut batch, |_| {});

    for progress in [0.25, 0.5, 1.0] {
        if let Some(bar) = ctx.dialog_mut(dialog_id).and_then(|d| d.get_mut::<ProgressBar>(ids.upload)) {
            bar.set_progress(progress);
        }
        step(&mut ctx, &mut batch, |_| {});
    }
    step(&mut ctx, &mut batch, |input| click(input, 300.0, 260.0));

    if let Some(dialog) = ctx.dialog(dialog_id) {
        if let Some(field) = dialog.get::<TextField>(ids.name) {
            println!("name: {:?}", field.text());
        }
        if let Some(region) = dialog.get::<DropDownList>(ids.region) {
            println!("region: {:?}", region.selected_option());
        }
    }

    batch.sort_back_to_front();
    for command in batch.commands() {
        println!("{:?}", command);
    }
    ctx.release();
    Ok(())
}
