// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use log::{debug, trace};
use projmap_compositor::{Composition, MappingMode, Silhouette, compose};
use projmap_optics::{BeamCone, ConfigError, Optics, OpticsConfig};

use crate::drag::{ProjectorDrag, WorkArea};
use crate::status::Status;
use crate::ticker::{AnimationTicker, DEFAULT_PATTERN_PERIOD, DEFAULT_TICK_INTERVAL_MS};

/// Everything needed to set up a [`ProjectorSession`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfig {
    /// Projector/target rig.
    pub optics: OpticsConfig,
    /// Region the projector can be dragged within.
    pub work_area: WorkArea,
    /// Starting projector position; clamped into the work area.
    pub initial_position: Point,
    /// Whether the projector starts switched on.
    pub initial_power: bool,
    /// Whether mapping starts enabled.
    pub initial_mapping: bool,
    /// Milliseconds between animation ticks.
    pub tick_interval_ms: u64,
    /// Animation ticks per pattern cycle.
    pub pattern_period: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let optics = OpticsConfig::default();
        Self {
            initial_position: optics.reference_pos,
            optics,
            work_area: WorkArea::default(),
            initial_power: true,
            initial_mapping: false,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            pattern_period: DEFAULT_PATTERN_PERIOD,
        }
    }
}

/// Reasons a scene cannot be set up.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// The optics configuration is invalid.
    #[error(transparent)]
    Optics(#[from] ConfigError),
    /// The work area is empty, inverted, or not finite.
    #[error("work area {0:?} is degenerate")]
    DegenerateWorkArea(Rect),
    /// The animation would never advance.
    #[error("tick interval and pattern period must be non-zero")]
    ZeroAnimationTiming,
}

/// Geometry drawn while the projector is on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LitScene<'a> {
    /// Light cone from the lens to the beam footprint.
    pub cone: BeamCone,
    /// Content footprint and clips.
    pub composition: Composition<'a>,
}

/// Everything the presentation layer needs for one redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<'a> {
    /// Projector marker position.
    pub projector: Point,
    /// Whether the marker is being dragged.
    pub dragging: bool,
    /// Power and mapping readout.
    pub status: Status,
    /// Scroll offset of the content pattern.
    pub pattern_offset: f64,
    /// Target outline, always drawn.
    pub silhouette: &'a Silhouette,
    /// Reference projection area on the target.
    pub target_rect: Rect,
    /// Beam and content; `None` while the projector is off.
    pub scene: Option<LitScene<'a>>,
    /// Session revision this frame was built at.
    pub revision: u64,
}

/// State of the interactive projection demo.
///
/// The session owns the three mutable inputs of the model: the projector
/// position, the power switch, and the mapping switch. Every geometric output
/// is recomputed from them in [`ProjectorSession::frame`]; nothing derived is
/// cached. Each effective change bumps [`ProjectorSession::revision`], so a
/// host can redraw only when it moved. Animation ticks do not bump it: the
/// pattern scroll carries no geometry.
#[derive(Clone, Debug)]
pub struct ProjectorSession {
    optics: Optics,
    silhouette: Silhouette,
    work_area: WorkArea,
    projector: Point,
    projector_on: bool,
    mapping: MappingMode,
    drag: ProjectorDrag,
    ticker: AnimationTicker,
    revision: u64,
}

impl ProjectorSession {
    /// Validates `config` and creates a session projecting onto `silhouette`.
    pub fn new(config: SceneConfig, silhouette: Silhouette) -> Result<Self, SceneError> {
        let optics = Optics::new(config.optics)?;

        let area = config.work_area.bounds;
        let finite = [area.x0, area.y0, area.x1, area.y1]
            .iter()
            .all(|v| v.is_finite());
        if !finite || area.x1 < area.x0 || area.y1 < area.y0 {
            return Err(SceneError::DegenerateWorkArea(area));
        }
        if config.tick_interval_ms == 0 || config.pattern_period == 0 {
            return Err(SceneError::ZeroAnimationTiming);
        }

        Ok(Self {
            optics,
            silhouette,
            work_area: config.work_area,
            projector: config.work_area.clamp(config.initial_position),
            projector_on: config.initial_power,
            mapping: MappingMode::from(config.initial_mapping),
            drag: ProjectorDrag::default(),
            ticker: AnimationTicker::new(config.tick_interval_ms, config.pattern_period),
            revision: 0,
        })
    }

    /// The validated optics.
    #[must_use]
    pub fn optics(&self) -> &Optics {
        &self.optics
    }

    /// The target outline.
    #[must_use]
    pub fn silhouette(&self) -> &Silhouette {
        &self.silhouette
    }

    /// The drag bounds.
    #[must_use]
    pub fn work_area(&self) -> &WorkArea {
        &self.work_area
    }

    /// Current projector position.
    #[must_use]
    pub fn projector(&self) -> Point {
        self.projector
    }

    /// Whether the projector is on.
    #[must_use]
    pub fn is_projector_on(&self) -> bool {
        self.projector_on
    }

    /// Current mapping mode.
    #[must_use]
    pub fn mapping_mode(&self) -> MappingMode {
        self.mapping
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Counter bumped on every effective state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The animation clock.
    #[must_use]
    pub fn ticker(&self) -> &AnimationTicker {
        &self.ticker
    }

    /// Power and mapping readout.
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            projecting: self.projector_on,
            mode: self.mapping,
        }
    }

    /// Moves the projector, clamped to the work area.
    ///
    /// Returns `true` if the position changed.
    pub fn set_projector(&mut self, pos: Point) -> bool {
        let pos = self.work_area.clamp(pos);
        if pos == self.projector {
            return false;
        }
        trace!("projector moved to ({:.1}, {:.1})", pos.x, pos.y);
        self.projector = pos;
        self.bump();
        true
    }

    /// Switches the projector on or off.
    ///
    /// Turning it off stops the animation clock; it restarts on the next
    /// [`tick`](Self::tick) after the projector is back on.
    pub fn set_power(&mut self, on: bool) -> bool {
        if on == self.projector_on {
            return false;
        }
        debug!("projector power {}", if on { "on" } else { "off" });
        self.projector_on = on;
        if !on {
            self.ticker.stop();
        }
        self.bump();
        true
    }

    /// Flips the power switch, returning the new state.
    pub fn toggle_power(&mut self) -> bool {
        self.set_power(!self.projector_on);
        self.projector_on
    }

    /// Flips the mapping switch.
    ///
    /// The switch is disabled while the projector is off: the call is ignored
    /// and returns `false`. Returns `true` when the mode changed.
    pub fn toggle_mapping(&mut self) -> bool {
        if !self.projector_on {
            debug!("mapping toggle ignored while projector is off");
            return false;
        }
        self.mapping = self.mapping.toggled();
        debug!("mapping mode now {:?}", self.mapping);
        self.bump();
        true
    }

    /// Pointer pressed at `pointer` (model coordinates).
    ///
    /// Starts a drag if it hits the projector marker; returns whether it did.
    pub fn pointer_down(&mut self, pointer: Point) -> bool {
        let was_dragging = self.drag.is_dragging();
        if !self.drag.press(pointer, self.projector) {
            return false;
        }
        if !was_dragging {
            debug!("drag started at ({:.1}, {:.1})", pointer.x, pointer.y);
            self.bump();
        }
        true
    }

    /// Pointer moved to `pointer` (model coordinates).
    ///
    /// While dragging, the projector follows the pointer within the work area.
    /// Returns `true` if the projector moved.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        match self.drag.update(pointer, &self.work_area) {
            Some(pos) => self.set_projector(pos),
            None => false,
        }
    }

    /// Pointer released. Ends any drag.
    pub fn pointer_up(&mut self) {
        if self.drag.is_dragging() {
            debug!("drag ended at ({:.1}, {:.1})", self.projector.x, self.projector.y);
            self.drag.end();
            self.bump();
        }
    }

    /// Pointer left the scene. Treated like a release.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Advances the animation clock to `now_ms`.
    ///
    /// Returns `true` if the pattern phase moved. While the projector is off
    /// the clock is stopped and nothing advances.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.projector_on {
            return false;
        }
        if !self.ticker.is_running() {
            trace!("animation clock started at {now_ms} ms");
            self.ticker.start(now_ms);
            return false;
        }
        let ticks = self.ticker.poll(now_ms);
        if ticks > 0 {
            trace!(
                "animation advanced {ticks} tick(s) at {now_ms} ms, phase {}",
                self.ticker.phase()
            );
        }
        ticks > 0
    }

    /// Physical beam footprint for the current projector position.
    ///
    /// Defined whether or not the projector is on.
    #[must_use]
    pub fn beam_rect(&self) -> Rect {
        self.optics.beam_rect(self.projector)
    }

    /// Builds the geometry for a redraw.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        let scene = self.projector_on.then(|| {
            let cone = self.optics.beam(self.projector);
            LitScene {
                cone,
                composition: compose(
                    cone.rect,
                    self.optics.target_rect(),
                    &self.silhouette,
                    self.mapping,
                ),
            }
        });
        Frame {
            projector: self.projector,
            dragging: self.drag.is_dragging(),
            status: self.status(),
            pattern_offset: self.ticker.pattern_offset(),
            silhouette: &self.silhouette,
            target_rect: self.optics.target_rect(),
            scene,
            revision: self.revision,
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
