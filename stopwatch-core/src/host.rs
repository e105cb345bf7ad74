//! Collaborators the controller is driven by and renders into.

/// Millisecond time source. Readings must not go backwards in normal operation.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Opaque handle for one pending frame callback.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FrameHandle(pub i32);

/// One-shot frame callback registration.
///
/// The host calls [`StopwatchController::tick`](crate::StopwatchController::tick)
/// with the handle of the frame that fired; the controller re-requests the
/// next frame itself. Every request gets a distinct handle. Cancelling a
/// handle that already fired must be a no-op.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonId {
    /// Start/stop toggle.
    Primary,
    /// Lap while running, reset while stopped.
    Secondary,
}

/// Everything a button shows for one controller mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonFace {
    Start,
    Stop,
    Lap,
    Reset,
}

impl ButtonFace {
    pub fn label(self) -> &'static str {
        match self {
            ButtonFace::Start => "Start",
            ButtonFace::Stop => "Stop",
            ButtonFace::Lap => "Lap",
            ButtonFace::Reset => "Reset",
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            ButtonFace::Start => "Start stopwatch",
            ButtonFace::Stop => "Stop stopwatch",
            ButtonFace::Lap => "Record lap time",
            ButtonFace::Reset => "Reset stopwatch",
        }
    }
}

/// Passive rendering surface. Implementations do not validate anything.
pub trait View {
    fn set_display_text(&mut self, text: &str);
    fn set_button_label(&mut self, button: ButtonId, face: ButtonFace);
    fn set_button_enabled(&mut self, button: ButtonId, enabled: bool);
    fn prepend_lap_row(&mut self, label: &str, time: &str);
    fn clear_lap_rows(&mut self);
}
