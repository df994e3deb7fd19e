// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=projmap_svg --heading-base-level=0

//! SVG export for projection mapping frames.
//!
//! [`render_frame`] turns a [`Frame`] from `projmap_control` into a standalone
//! SVG document: the projector marker, the light cone, the target statue, and
//! the projected content with its clips. It is meant for inspection and
//! snapshots, and for hosts that can display SVG directly.
//!
//! - Raw content is drawn as a dashed rectangle over the beam, labelled as
//!   spilling past the target.
//! - Mapped content is drawn inside two nested clip groups, the beam first and
//!   the statue outline second, with the outline highlighted.
//! - Nothing of the beam or content is emitted while the projector is off.
//!
//! ```rust
//! use projmap_compositor::Silhouette;
//! use projmap_control::{ProjectorSession, SceneConfig};
//! use projmap_svg::render_frame;
//!
//! let session = ProjectorSession::new(SceneConfig::default(), Silhouette::statue()).unwrap();
//! let svg = render_frame(&session.frame());
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("Unmapped: Image Spills Over"));
//! ```

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::Write as _;

use kurbo::{BezPath, PathEl, Point, Rect};
use peniko::Color;
use projmap_compositor::{Composition, MappingMode};
use projmap_control::{Frame, LitScene, MODEL_BOUNDS};

/// Colours used for one rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Stripe colours of raw content.
    pub raw: [Color; 2],
    /// Stripe colours of mapped content.
    pub mapped: [Color; 2],
    /// Statue fill.
    pub statue_fill: Color,
    /// Statue outline.
    pub statue_stroke: Color,
    /// Projector body.
    pub projector_body: Color,
    /// Lens, drag highlight, and mapped outline highlight.
    pub accent: Color,
    /// Projector stand.
    pub stand: Color,
    /// Secondary text.
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            raw: [
                Color::from_rgba8(0xf4, 0x72, 0xb6, 0xff),
                Color::from_rgba8(0xdb, 0x27, 0x77, 0xff),
            ],
            mapped: [
                Color::from_rgba8(0x22, 0xd3, 0xee, 0xff),
                Color::from_rgba8(0x08, 0x91, 0xb2, 0xff),
            ],
            statue_fill: Color::from_rgba8(0x33, 0x41, 0x55, 0xff),
            statue_stroke: Color::from_rgba8(0x94, 0xa3, 0xb8, 0xff),
            projector_body: Color::from_rgba8(0xcb, 0xd5, 0xe1, 0xff),
            accent: Color::from_rgba8(0x22, 0xd3, 0xee, 0xff),
            stand: Color::from_rgba8(0x47, 0x55, 0x69, 0xff),
            muted: Color::from_rgba8(0x64, 0x74, 0x8b, 0xff),
        }
    }
}

impl Palette {
    /// Stripe colours for `mode`.
    #[must_use]
    pub fn stripes(&self, mode: MappingMode) -> [Color; 2] {
        match mode {
            MappingMode::Raw => self.raw,
            MappingMode::Mapped => self.mapped,
        }
    }
}

/// Renders `frame` with the default [`Palette`].
#[must_use]
pub fn render_frame(frame: &Frame<'_>) -> String {
    render_frame_with(frame, &Palette::default())
}

/// Renders `frame` as an SVG document sized to the scene's model bounds.
#[must_use]
pub fn render_frame_with(frame: &Frame<'_>, palette: &Palette) -> String {
    let mut defs = String::new();
    let mut body = String::new();

    let mode = frame.status.mode;
    write_pattern_def(&mut defs, palette.stripes(mode), frame.pattern_offset);
    let statue_d = bez_path_to_svg_d(frame.silhouette.path());
    let _ = write!(
        defs,
        "<clipPath id=\"statueClip\"><path d=\"{statue_d}\"/></clipPath>"
    );

    write_projector(&mut body, frame, palette);

    if let Some(scene) = &frame.scene {
        let _ = write!(defs, "<clipPath id=\"beamClip\">");
        write_rect(&mut defs, scene.composition.beam_clip, "");
        defs.push_str("</clipPath>");
        write_beam_gradient_def(&mut defs, palette, mode);
        write_cone(&mut body, scene);
    }

    let fill = color_to_svg(palette.statue_fill);
    let stroke = color_to_svg(palette.statue_stroke);
    let _ = write!(
        body,
        "<path d=\"{statue_d}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"2\"/>"
    );
    let label_pos = Point::new(
        frame.target_rect.center().x,
        frame.silhouette.bounding_box().y1 + 40.0,
    );
    write_text(&mut body, label_pos, 14.0, palette.statue_stroke, "Target");

    if let Some(scene) = &frame.scene {
        match mode {
            MappingMode::Mapped => {
                write_mapped_content(&mut body, &scene.composition, &statue_d, palette);
            }
            MappingMode::Raw => write_raw_content(&mut body, &scene.composition, palette),
        }
    }

    write_text(
        &mut body,
        Point::new(160.0, 24.0),
        12.0,
        palette.statue_stroke,
        &frame.status.to_string(),
    );

    let width = fmt_num(MODEL_BOUNDS.width());
    let height = fmt_num(MODEL_BOUNDS.height());
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    svg.push_str("<defs>");
    svg.push_str(&defs);
    svg.push_str("</defs>");
    svg.push_str(&body);
    svg.push_str("</svg>");
    svg
}

fn write_pattern_def(defs: &mut String, stripes: [Color; 2], offset: f64) {
    let _ = write!(
        defs,
        "<pattern id=\"projectionPattern\" x=\"{}\" y=\"{}\" width=\"40\" height=\"40\" patternUnits=\"userSpaceOnUse\" patternTransform=\"rotate(45)\">",
        fmt_num(-offset),
        fmt_num(offset)
    );
    let a = color_to_svg(stripes[0]);
    let b = color_to_svg(stripes[1]);
    let _ = write!(
        defs,
        "<rect width=\"20\" height=\"40\" fill=\"{a}\" fill-opacity=\"0.8\"/><rect x=\"20\" width=\"20\" height=\"40\" fill=\"{b}\" fill-opacity=\"0.8\"/></pattern>"
    );
}

fn write_beam_gradient_def(defs: &mut String, palette: &Palette, mode: MappingMode) {
    let start = color_to_svg(palette.accent);
    let end = color_to_svg(palette.stripes(mode)[0]);
    let _ = write!(
        defs,
        "<linearGradient id=\"beamGradient\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\"><stop offset=\"0%\" stop-color=\"{start}\" stop-opacity=\"0.8\"/><stop offset=\"100%\" stop-color=\"{end}\" stop-opacity=\"0.05\"/></linearGradient>"
    );
}

fn write_projector(body: &mut String, frame: &Frame<'_>, palette: &Palette) {
    let p = frame.projector;
    let _ = write!(
        body,
        "<g transform=\"translate({} {})\">",
        fmt_num(p.x),
        fmt_num(p.y)
    );
    let stand = color_to_svg(palette.stand);
    let body_fill = color_to_svg(palette.projector_body);
    let accent = color_to_svg(palette.accent);
    body.push_str("<rect x=\"-50\" y=\"-40\" width=\"100\" height=\"140\" fill=\"transparent\"/>");
    let _ = write!(
        body,
        "<rect x=\"-10\" y=\"30\" width=\"20\" height=\"60\" fill=\"{stand}\"/><rect x=\"-20\" y=\"90\" width=\"40\" height=\"10\" fill=\"{stand}\"/>"
    );
    let stroke = if frame.dragging {
        format!(" stroke=\"{accent}\" stroke-width=\"2\"")
    } else {
        String::new()
    };
    let _ = write!(
        body,
        "<rect x=\"-40\" y=\"-30\" width=\"80\" height=\"60\" rx=\"4\" fill=\"{body_fill}\"{stroke}/>"
    );
    let lens_opacity = if frame.status.projecting { "1" } else { "0.5" };
    let _ = write!(
        body,
        "<circle cx=\"40\" cy=\"0\" r=\"10\" fill=\"{accent}\" opacity=\"{lens_opacity}\"/>"
    );
    write_text(body, Point::new(0.0, 5.0), 10.0, palette.statue_fill, "PROJECTOR");
    write_text(body, Point::new(0.0, 120.0), 10.0, palette.muted, "(Drag me)");
    body.push_str("</g>");
}

fn write_cone(body: &mut String, scene: &LitScene<'_>) {
    let d = bez_path_to_svg_d(&scene.cone.to_path());
    let _ = write!(
        body,
        "<path d=\"{d}\" fill=\"url(#beamGradient)\" opacity=\"0.2\"/>"
    );
}

fn write_mapped_content(
    body: &mut String,
    composition: &Composition<'_>,
    statue_d: &str,
    palette: &Palette,
) {
    body.push_str("<g clip-path=\"url(#beamClip)\">");
    body.push_str(
        "<g clip-path=\"url(#statueClip)\" opacity=\"0.9\" style=\"mix-blend-mode:overlay\">",
    );
    write_rect(body, composition.content_rect, " fill=\"url(#projectionPattern)\"");
    let accent = color_to_svg(palette.accent);
    let _ = write!(
        body,
        "<path d=\"{statue_d}\" fill=\"none\" stroke=\"{accent}\" stroke-width=\"4\" stroke-opacity=\"0.6\"/>"
    );
    body.push_str("</g></g>");
}

fn write_raw_content(body: &mut String, composition: &Composition<'_>, palette: &Palette) {
    let rect = composition.content_rect;
    let pink = color_to_svg(palette.raw[0]);
    body.push_str("<g opacity=\"0.6\">");
    write_rect(body, rect, " fill=\"url(#projectionPattern)\"");
    write_text(
        body,
        Point::new(rect.center().x, rect.y0 - 10.0),
        12.0,
        palette.raw[0],
        "Unmapped: Image Spills Over",
    );
    write_rect(
        body,
        rect,
        &format!(" fill=\"none\" stroke=\"{pink}\" stroke-width=\"2\" stroke-dasharray=\"5,5\""),
    );
    body.push_str("</g>");
}

fn write_rect(out: &mut String, rect: Rect, attrs: &str) {
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{attrs}/>",
        fmt_num(rect.x0),
        fmt_num(rect.y0),
        fmt_num(rect.width()),
        fmt_num(rect.height()),
    );
}

fn write_text(out: &mut String, at: Point, size: f64, color: Color, text: &str) {
    let fill = color_to_svg(color);
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"{}\" fill=\"{fill}\">{}</text>",
        fmt_num(at.x),
        fmt_num(at.y),
        fmt_num(size),
        escape_text(text),
    );
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y),
                    fmt_num(p3.x),
                    fmt_num(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn color_to_svg(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn fmt_num(v: f64) -> String {
    // Up to three decimals, trailing zeros dropped; stable enough for snapshots.
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.clear();
        s.push('0');
    }
    s
}
