// Copyright 2025 the Projmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checks the diagnostics `ProjectorSession` emits through `log`.
//!
//! Installs a process-wide recorder, so this file keeps to a single test.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use projmap_compositor::Silhouette;
use projmap_control::{ProjectorSession, SceneConfig};

struct Recorder(Mutex<Vec<(Level, String)>>);

impl Log for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.0
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder(Mutex::new(Vec::new()));

fn traces() -> Vec<String> {
    RECORDER
        .0
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Trace)
        .map(|(_, msg)| msg.clone())
        .collect()
}

#[test]
fn advancing_ticks_are_traced() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut s = ProjectorSession::new(SceneConfig::default(), Silhouette::statue()).unwrap();
    assert!(!s.tick(0));
    assert!(traces().iter().any(|m| m.contains("animation clock started")));

    assert!(s.tick(16));
    assert!(s.tick(32));
    assert_eq!(
        traces()
            .iter()
            .filter(|m| m.starts_with("animation advanced"))
            .count(),
        2
    );

    // A poll before the next interval is due advances nothing and stays quiet.
    assert!(!s.tick(40));
    assert_eq!(
        traces()
            .iter()
            .filter(|m| m.starts_with("animation advanced"))
            .count(),
        2
    );
}
