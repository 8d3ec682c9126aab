use url::Url;

/// A navigation the shell itself asked the webview to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMove {
    Back,
    Stay,
    Forward,
}

/// Mirror of the webview's session history.
///
/// Tauri's cross-platform webview API has no back/forward query, so the
/// shell tracks the stacks from the URLs reported on each completed page load.
#[derive(Debug, Default)]
pub struct NavigationHistory {
    entries: Vec<Url>,
    cursor: usize,
    pending: Option<NavigationIntent>,
}

impl NavigationHistory {
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&Url> {
        self.entries.get(self.cursor)
    }

    /// Records an intent. Returns false when history cannot honor it.
    pub fn begin(&mut self, intent: NavigationIntent) -> bool {
        let allowed = match intent {
            NavigationIntent::Back => self.can_go_back(),
            NavigationIntent::Forward => self.can_go_forward(),
            NavigationIntent::Reload => true,
        };
        if allowed {
            self.pending = Some(intent);
        }
        allowed
    }

    /// Applies a completed page load.
    ///
    /// A pending intent only counts when the loaded URL is the entry it
    /// targets; otherwise it is dropped (the engine settled on a
    /// same-document entry) and the load is classified by URL alone. Loads the
    /// shell did not start (mouse buttons, keyboard shortcuts, in-page
    /// `history.back()`) that land on a neighbouring entry are treated as
    /// moves through history.
    pub fn finish_load(&mut self, url: &Url) {
        let intended = match self.pending.take() {
            Some(NavigationIntent::Back) if self.previous() == Some(url) => {
                Some(HistoryMove::Back)
            }
            Some(NavigationIntent::Forward) if self.next() == Some(url) => {
                Some(HistoryMove::Forward)
            }
            Some(NavigationIntent::Reload) if self.current() == Some(url) => {
                Some(HistoryMove::Stay)
            }
            _ => None,
        };

        match intended.or_else(|| self.classify(url)) {
            Some(HistoryMove::Back) => self.cursor -= 1,
            Some(HistoryMove::Forward) => self.cursor += 1,
            Some(HistoryMove::Stay) => {}
            None => self.push(url),
        }
    }

    fn previous(&self) -> Option<&Url> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
    }

    fn next(&self) -> Option<&Url> {
        self.entries.get(self.cursor + 1)
    }

    fn classify(&self, url: &Url) -> Option<HistoryMove> {
        if self.current() == Some(url) {
            Some(HistoryMove::Stay)
        } else if self.previous() == Some(url) {
            Some(HistoryMove::Back)
        } else if self.next() == Some(url) {
            Some(HistoryMove::Forward)
        } else {
            None
        }
    }

    fn push(&mut self, url: &Url) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(url.clone());
        self.cursor = self.entries.len() - 1;
    }
}
