impl<S, O, C> ReaderSession<S, O, C>
where
    S: Scheduler,
    O: SessionObserver,
    C: SettingsSource,
{
    /// Reports a due timer back into the session.
    ///
    /// Only ids that still occupy a live slot are honored; anything else is
    /// a callback that lost the race with its own cancellation and is
    /// dropped without touching state.
    pub fn timer_fired(&mut self, timer: TimerId) -> Result<()> {
        if self.pending_countdown == Some(timer) {
            self.pending_countdown = None;
            return self.countdown_tick();
        }
        if self.pending_word == Some(timer) {
            self.pending_word = None;
            return self.advance_word();
        }
        if self.pending_dismiss == Some(timer) {
            self.pending_dismiss = None;
            debug!("session: auto-dismiss fired");
            self.finish_session();
            return Ok(());
        }

        debug!("session: stale timer ignored id={}", timer.value());
        Ok(())
    }

    fn countdown_tick(&mut self) -> Result<()> {
        if self.mode != Mode::Countdown {
            return Ok(());
        }

        self.countdown_ticks_left = self.countdown_ticks_left.saturating_sub(1);
        let fraction = self.countdown_progress();
        self.observer.countdown_progress(fraction);

        if self.countdown_ticks_left == 0 {
            self.enter_reading()
        } else {
            self.schedule_countdown_tick();
            Ok(())
        }
    }

    fn advance_word(&mut self) -> Result<()> {
        if self.mode != Mode::Reading || !self.is_playing {
            return Ok(());
        }

        let last_index = self.tokens.len().saturating_sub(1);
        if self.cursor < last_index {
            self.cursor += 1;
            self.emit_word();
            self.schedule_word_advance()
        } else {
            debug!("session: end of text cursor={}", self.cursor);
            self.enter_finished();
            Ok(())
        }
    }

    fn alloc_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }

    fn schedule_countdown_tick(&mut self) {
        let timer = self.alloc_timer();
        self.scheduler.schedule_once(COUNTDOWN_TICK, timer);
        self.pending_countdown = Some(timer);
    }

    /// Schedules the current token's full delay. The pace is read from the
    /// settings source here, so a live WPM change applies from the next
    /// scheduled word onward.
    fn schedule_word_advance(&mut self) -> Result<()> {
        let wpm = self.settings.words_per_minute();
        let delay = pace::delay_for_token(self.current_token(), wpm)?;
        let timer = self.alloc_timer();
        self.scheduler.schedule_once(delay, timer);
        self.pending_word = Some(timer);
        Ok(())
    }

    fn arm_auto_dismiss(&mut self) {
        self.cancel_auto_dismiss();
        let timer = self.alloc_timer();
        self.scheduler.schedule_once(AUTO_DISMISS_DELAY, timer);
        self.pending_dismiss = Some(timer);
    }

    fn cancel_countdown_timer(&mut self) {
        if let Some(timer) = self.pending_countdown.take() {
            self.scheduler.cancel(timer);
        }
    }

    fn cancel_word_timer(&mut self) {
        if let Some(timer) = self.pending_word.take() {
            self.scheduler.cancel(timer);
        }
    }

    fn cancel_auto_dismiss(&mut self) {
        if let Some(timer) = self.pending_dismiss.take() {
            self.scheduler.cancel(timer);
        }
    }

    fn cancel_all_timers(&mut self) {
        self.cancel_countdown_timer();
        self.cancel_word_timer();
        self.cancel_auto_dismiss();
    }
}
