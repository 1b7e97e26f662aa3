/// Bookkeeping for the pointer settle timer.
///
/// Holds at most one pending timeout. Every restart hands back the handle of
/// the previous timeout so the caller can clear it, and tags the new one with
/// a fresh token. A timeout only settles the cursor when its token is still
/// the pending one, so a stale callback can never undo a newer move.
#[derive(Clone, Debug, Default)]
pub struct SettleDebounce {
    pending: Option<Pending>,
    next_token: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    token: u32,
    handle: i32,
}

/// What to do for a pointer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Restart {
    /// Timer handle to clear before scheduling the next one.
    pub cancel: Option<i32>,
    /// Token to pass to the new timeout.
    pub token: u32,
}

impl SettleDebounce {
    /// A pointer move arrived: drop the pending timeout and issue a new token.
    pub fn restart(&mut self) -> Restart {
        let cancel = self.pending.take().map(|p| p.handle);
        self.next_token = self.next_token.wrapping_add(1);
        Restart {
            cancel,
            token: self.next_token,
        }
    }

    /// The timeout for `token` was scheduled as `handle`.
    pub fn armed(&mut self, token: u32, handle: i32) {
        if token == self.next_token {
            self.pending = Some(Pending { token, handle });
        }
    }

    /// The timeout for `token` fired. Returns whether the cursor should settle.
    pub fn fire(&mut self, token: u32) -> bool {
        match self.pending {
            Some(p) if p.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Forget the pending timeout, returning its handle for clearing.
    pub fn cancel(&mut self) -> Option<i32> {
        self.pending.take().map(|p| p.handle)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
