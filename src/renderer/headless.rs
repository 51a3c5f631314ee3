//! Windowless render sink
//!
//! Counts frames, logs HUD changes and can dump every frame as one JSON
//! object per line for offline inspection.

use std::io::Write;

use super::{Frame, RenderSink};

#[derive(Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last_hud: Vec<String>,
    dump: Option<Box<dyn Write>>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also write each frame as a JSON line to `out`
    pub fn with_dump(out: impl Write + 'static) -> Self {
        Self {
            frames: 0,
            last_hud: Vec::new(),
            dump: Some(Box::new(out)),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// HUD text of the last presented frame
    pub fn hud(&self) -> &[String] {
        &self.last_hud
    }

    /// Flush the dump writer, if any
    pub fn flush(&mut self) {
        if let Some(out) = self.dump.as_mut() {
            if let Err(err) = out.flush() {
                log::warn!("Failed to flush frame dump: {}", err);
            }
        }
    }

    fn write_frame(&mut self, frame: &Frame) {
        let Some(out) = self.dump.as_mut() else {
            return;
        };
        let result = serde_json::to_writer(&mut *out, frame)
            .map_err(std::io::Error::from)
            .and_then(|()| out.write_all(b"\n"));
        if let Err(err) = result {
            log::warn!("Frame dump disabled after write error: {}", err);
            self.dump = None;
        }
    }
}

impl RenderSink for HeadlessRenderer {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;

        let hud = frame.texts.iter().map(|t| &t.text);
        if !hud.clone().eq(self.last_hud.iter()) {
            self.last_hud = hud.cloned().collect();
            log::debug!("Frame {}: {}", self.frames, self.last_hud.join(" | "));
        }

        self.write_frame(frame);
    }
}

impl Drop for HeadlessRenderer {
    fn drop(&mut self) {
        self.flush();
    }
}
