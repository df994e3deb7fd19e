// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use projmap_compositor::MappingMode;

/// Read-only snapshot of the two user-facing switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Status {
    /// Whether the projector is on.
    pub projecting: bool,
    /// Current mapping mode; kept even while the projector is off.
    pub mode: MappingMode,
}

impl Status {
    /// `"PROJECTING"` or `"OFF"`.
    #[must_use]
    pub fn power_label(&self) -> &'static str {
        if self.projecting { "PROJECTING" } else { "OFF" }
    }

    /// `"MAPPED (WARPED)"` or `"RAW PROJECTION"`.
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            MappingMode::Mapped => "MAPPED (WARPED)",
            MappingMode::Raw => "RAW PROJECTION",
        }
    }

    /// Caption for the mapping toggle.
    #[must_use]
    pub fn mapping_button_label(&self) -> &'static str {
        match self.mode {
            MappingMode::Mapped => "Mapping Active",
            MappingMode::Raw => "Enable Mapping",
        }
    }

    /// Whether the mapping toggle accepts input. It is disabled while off.
    #[must_use]
    pub fn mapping_control_enabled(&self) -> bool {
        self.projecting
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "STATUS: {} | MODE: {}",
            self.power_label(),
            self.mode_label()
        )
    }
}
