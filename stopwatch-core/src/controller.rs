use crate::host::{ButtonFace, ButtonId, Clock, FrameHandle, FrameScheduler, View};
use crate::laps::{Lap, LapBook};
use crate::{format_time, TimerCore};

pub struct StopwatchState {
    pub timer: TimerCore,
    pub laps: LapBook,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self {
            timer: TimerCore::new(),
            laps: LapBook::new(),
        }
    }

    /// Closes a lap at the last computed elapsed value. None while stopped.
    pub fn record_lap(&mut self) -> Option<Lap> {
        if !self.timer.is_running() {
            return None;
        }
        Some(self.laps.record(self.timer.elapsed_ms()))
    }

    pub fn reset(&mut self) -> bool {
        if !self.timer.reset() {
            return false;
        }
        self.laps.clear();
        true
    }
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start/stop/lap/reset state machine over injected collaborators.
///
/// Every transition is a silent no-op when its precondition does not hold.
/// While running exactly one frame is pending; `stop` cancels it. Only the
/// pending frame may tick: any other handle that still fires does nothing.
pub struct StopwatchController<C, S, V> {
    state: StopwatchState,
    clock: C,
    scheduler: S,
    view: V,
    pending_frame: Option<FrameHandle>,
}

impl<C: Clock, S: FrameScheduler, V: View> StopwatchController<C, S, V> {
    /// Builds a stopped controller and renders the initial view.
    pub fn new(clock: C, scheduler: S, view: V) -> Self {
        let mut controller = Self {
            state: StopwatchState::new(),
            clock,
            scheduler,
            view,
            pending_frame: None,
        };
        controller.view.set_display_text(&format_time(0));
        controller.view.set_button_label(ButtonId::Primary, ButtonFace::Start);
        controller.view.set_button_label(ButtonId::Secondary, ButtonFace::Lap);
        controller.view.set_button_enabled(ButtonId::Secondary, false);
        controller.view.clear_lap_rows();
        controller
    }

    pub fn start(&mut self) {
        let now = self.clock.now_ms();
        if !self.state.timer.start(now) {
            return;
        }
        log::debug!("stopwatch started at {} ms elapsed", self.state.timer.elapsed_ms());
        self.pending_frame = Some(self.scheduler.request_frame());

        self.view.set_button_label(ButtonId::Primary, ButtonFace::Stop);
        self.view.set_button_label(ButtonId::Secondary, ButtonFace::Lap);
        self.view.set_button_enabled(ButtonId::Secondary, true);
    }

    /// Freezes elapsed at the last tick's value.
    pub fn stop(&mut self) {
        if !self.state.timer.pause() {
            return;
        }
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        log::debug!("stopwatch stopped at {} ms", self.state.timer.elapsed_ms());

        self.view.set_button_label(ButtonId::Primary, ButtonFace::Start);
        self.view.set_button_label(ButtonId::Secondary, ButtonFace::Reset);
    }

    /// Frame callback for `fired`: refreshes elapsed and the display, then
    /// re-arms. Ignored unless `fired` is the frame currently pending.
    pub fn tick(&mut self, fired: FrameHandle) {
        if self.pending_frame != Some(fired) {
            log::trace!("ignoring stale frame {:?}", fired);
            return;
        }
        self.pending_frame = None;
        if !self.state.timer.is_running() {
            return;
        }
        let elapsed = self.state.timer.sample(self.clock.now_ms());
        self.view.set_display_text(&format_time(elapsed));
        self.pending_frame = Some(self.scheduler.request_frame());
    }

    pub fn lap(&mut self) {
        let Some(lap) = self.state.record_lap() else {
            return;
        };
        log::debug!("lap {} recorded: {} ms", lap.index, lap.duration_ms);
        self.view.prepend_lap_row(&lap.label(), &lap.time_text());
    }

    pub fn reset(&mut self) {
        if !self.state.reset() {
            return;
        }
        log::debug!("stopwatch reset");
        self.view.clear_lap_rows();
        self.view.set_display_text(&format_time(0));
        self.view.set_button_enabled(ButtonId::Secondary, false);
    }

    /// Primary button click.
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Secondary button click.
    pub fn lap_or_reset(&mut self) {
        if self.is_running() {
            self.lap();
        } else {
            self.reset();
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.timer.is_running()
    }

    /// Elapsed as of the last tick; frozen while stopped.
    pub fn elapsed_ms(&self) -> u64 {
        self.state.timer.elapsed_ms()
    }

    pub fn state(&self) -> &StopwatchState {
        &self.state
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
