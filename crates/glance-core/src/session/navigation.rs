impl<S, O, C> ReaderSession<S, O, C>
where
    S: Scheduler,
    O: SessionObserver,
    C: SettingsSource,
{
    /// Stops playback immediately. The pending word timer is cancelled, not
    /// left to fire as a no-op, so the cursor cannot move after this
    /// returns. Rejected outside reading or when already paused.
    pub fn pause(&mut self) -> bool {
        if self.mode != Mode::Reading || !self.is_playing {
            return false;
        }

        debug!("session: pause cursor={}", self.cursor);
        self.is_playing = false;
        self.cancel_word_timer();
        true
    }

    /// Resumes playback with a fresh full delay for the current token. A
    /// partial interval is never resumed; that simplification is part of
    /// the contract. Rejected outside reading or when already playing.
    pub fn resume(&mut self) -> Result<bool> {
        if self.mode != Mode::Reading || self.is_playing {
            return Ok(false);
        }

        debug!("session: resume cursor={}", self.cursor);
        self.start_playing()?;
        Ok(true)
    }

    pub fn toggle_play_pause(&mut self) -> Result<bool> {
        if self.is_playing {
            Ok(self.pause())
        } else {
            self.resume()
        }
    }

    /// Moves one word back. No-op at the first word and outside reading.
    pub fn step_back(&mut self) -> Result<bool> {
        if self.mode != Mode::Reading || self.cursor == 0 {
            return Ok(false);
        }

        self.cursor -= 1;
        self.emit_word();
        self.reschedule_if_playing()?;
        Ok(true)
    }

    /// Moves one word forward. Stepping past the last word is a no-op; only
    /// natural playback completion reaches the finished state.
    pub fn step_forward(&mut self) -> Result<bool> {
        if self.mode != Mode::Reading || self.tokens.is_empty() {
            return Ok(false);
        }
        if self.cursor + 1 >= self.tokens.len() {
            return Ok(false);
        }

        self.cursor += 1;
        self.emit_word();
        self.reschedule_if_playing()?;
        Ok(true)
    }

    /// Rewinds to the first word and re-enters reading fresh. Accepted in
    /// reading and finished (where it also disarms the auto-dismiss);
    /// rejected during the countdown and on empty sessions.
    pub fn restart(&mut self) -> Result<bool> {
        if self.tokens.is_empty() || self.mode == Mode::Countdown {
            return Ok(false);
        }

        debug!("session: restart from mode={:?} cursor={}", self.mode, self.cursor);
        self.cancel_all_timers();
        self.cursor = 0;
        self.is_playing = false;
        self.enter_reading()?;
        Ok(true)
    }

    /// Suspends or resumes the session around a host settings overlay.
    ///
    /// Opening cancels every pending callback and stops playback. Closing
    /// resumes: reading reschedules from the current cursor, the countdown
    /// restarts its decay from full progress, discarding what had elapsed.
    pub fn set_overlay_visible(&mut self, visible: bool) -> Result<()> {
        if self.overlay_open == visible {
            return Ok(());
        }
        self.overlay_open = visible;
        debug!("session: overlay {} mode={:?}", if visible { "open" } else { "closed" }, self.mode);

        if visible {
            self.cancel_countdown_timer();
            self.cancel_word_timer();
            self.is_playing = false;
            return Ok(());
        }

        match self.mode {
            Mode::Countdown => {
                self.enter_countdown();
                Ok(())
            }
            Mode::Reading => self.start_playing(),
            Mode::Finished => Ok(()),
        }
    }

    fn reschedule_if_playing(&mut self) -> Result<()> {
        if self.is_playing {
            self.cancel_word_timer();
            self.schedule_word_advance()?;
        }
        Ok(())
    }
}
