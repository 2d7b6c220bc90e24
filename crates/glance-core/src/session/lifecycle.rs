impl<S, O, C> ReaderSession<S, O, C>
where
    S: Scheduler,
    O: SessionObserver,
    C: SettingsSource,
{
    /// Builds a session over `text`. The clean-words setting is read once,
    /// here; the token sequence is immutable afterwards.
    pub fn new(text: &str, auto_start: bool, settings: C, scheduler: S, observer: O) -> Self {
        let tokens = tokenize(text, settings.clean_words());

        Self {
            tokens,
            cursor: 0,
            mode: Mode::Countdown,
            is_playing: false,
            countdown_ticks_left: COUNTDOWN_TICKS,
            overlay_open: false,
            ended: false,
            auto_start,
            next_timer: 0,
            pending_countdown: None,
            pending_word: None,
            pending_dismiss: None,
            scheduler,
            observer,
            settings,
        }
    }

    /// Builds a session by pulling text and the start trigger from an
    /// [`InputSource`].
    pub fn from_input<I>(
        input: &mut I,
        settings: C,
        scheduler: S,
        observer: O,
    ) -> core::result::Result<Self, I::Error>
    where
        I: InputSource,
    {
        let text = input.session_text()?;
        let auto_start = input.auto_start();
        Ok(Self::new(&text, auto_start, settings, scheduler, observer))
    }

    /// Performs the initial transition: straight to finished when there is
    /// no content, straight to reading when auto-start was requested,
    /// otherwise into the countdown.
    pub fn start(&mut self) -> Result<()> {
        debug!(
            "session: start tokens={} auto_start={}",
            self.tokens.len(),
            self.auto_start
        );

        if self.tokens.is_empty() {
            self.enter_finished();
            Ok(())
        } else if self.auto_start {
            self.enter_reading()
        } else {
            self.observer.mode_changed(Mode::Countdown);
            self.enter_countdown();
            Ok(())
        }
    }

    /// Ends the session from the host side: cancels every pending timer and
    /// emits the end notification. Safe to call in any state; the
    /// notification is emitted at most once per session.
    pub fn close(&mut self) {
        debug!("session: close mode={:?} cursor={}", self.mode, self.cursor);
        self.cancel_all_timers();
        self.is_playing = false;
        self.finish_session();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the end notification has been emitted.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn current_token(&self) -> &str {
        self.tokens.get(self.cursor).map_or("", String::as_str)
    }

    /// ORP layout of the token under the cursor.
    pub fn current_layout(&self) -> WordLayout<'_> {
        orp::split(self.current_token())
    }

    /// Countdown progress fraction, descending from 1.0 to 0.0.
    pub fn countdown_progress(&self) -> f64 {
        f64::from(self.countdown_ticks_left) / f64::from(COUNTDOWN_TICKS)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("session: mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
            self.observer.mode_changed(mode);
        }
    }

    fn enter_countdown(&mut self) {
        self.set_mode(Mode::Countdown);
        self.is_playing = false;
        self.countdown_ticks_left = COUNTDOWN_TICKS;
        self.observer.countdown_progress(1.0);
        self.schedule_countdown_tick();
    }

    fn enter_reading(&mut self) -> Result<()> {
        self.cancel_countdown_timer();
        self.cancel_auto_dismiss();
        self.set_mode(Mode::Reading);
        self.emit_word();
        self.start_playing()
    }

    fn enter_finished(&mut self) {
        self.is_playing = false;
        self.set_mode(Mode::Finished);
        self.arm_auto_dismiss();
    }

    /// Marks playback live and schedules the current token's delay. On a
    /// configuration error the session drops back to paused so the caller
    /// can correct the pace and resume.
    fn start_playing(&mut self) -> Result<()> {
        self.is_playing = true;
        if let Err(err) = self.schedule_word_advance() {
            self.is_playing = false;
            return Err(err);
        }
        Ok(())
    }

    fn emit_word(&mut self) {
        let total = self.tokens.len();
        let layout = orp::split(self.tokens.get(self.cursor).map_or("", String::as_str));
        self.observer.word_changed(layout, self.cursor, total);
    }

    fn finish_session(&mut self) {
        if !self.ended {
            self.ended = true;
            self.observer.session_ended();
        }
    }
}
