// src/table/paginator.rs
//
// Walks every page of a view and accumulates the rows, in visit order.
//
// A sweep ends in exactly one way:
// - next control disabled            -> Exhausted(NextDisabled)
// - indicator did not change in time -> Exhausted(LabelUnchanged)
// - safety cap reached               -> Aborted (returned as an error)

use std::thread;
use std::time::Instant;

use crate::config::PaginationOptions;
use crate::error::{PaginationError, TableError};
use crate::progress::{NullProgress, Progress};
use super::{extractor, RowRecord, TableSurface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    NextDisabled,
    LabelUnchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    /// 1-based index of the page currently rendered.
    OnPage(usize),
    Exhausted(Termination),
    Aborted,
}

/// Per-sweep state. Never outlives the sweep that owns it.
#[derive(Debug, Default)]
struct PageState {
    accumulator: Vec<RowRecord>,
    last_label: String,
    visited: usize,
}

/// Result of a complete sweep.
#[derive(Clone, Debug)]
pub struct Sweep {
    pub records: Vec<RowRecord>,
    /// Rows contributed by each page, in visit order.
    pub page_rows: Vec<usize>,
    pub termination: Termination,
}

impl Sweep {
    pub fn pages(&self) -> usize { self.page_rows.len() }
}

pub struct Navigator<'s, S: TableSurface + ?Sized> {
    surface: &'s mut S,
    opts: PaginationOptions,
    state: NavState,
    page: PageState,
}

impl<'s, S: TableSurface + ?Sized> Navigator<'s, S> {
    pub fn new(surface: &'s mut S, opts: PaginationOptions) -> Self {
        Self {
            surface,
            opts,
            state: NavState::OnPage(1),
            page: PageState { visited: 1, ..PageState::default() },
        }
    }

    pub fn state(&self) -> NavState { self.state }

    /// Move to the next page, or settle in a terminal state.
    ///
    /// Reaching the safety cap moves to `Aborted` and returns the error; the
    /// navigator never reports a capped sweep as exhausted.
    pub fn advance(&mut self) -> Result<NavState, PaginationError> {
        let NavState::OnPage(n) = self.state else { return Ok(self.state) };

        let label = self.surface.active_page_label()?;
        self.page.last_label = label.clone();

        if self.surface.is_next_disabled()? {
            logd!("page {n} ('{label}'): next control disabled");
            self.state = NavState::Exhausted(Termination::NextDisabled);
            return Ok(self.state);
        }

        if self.page.visited >= self.opts.safety_cap {
            self.state = NavState::Aborted;
            loge!("pagination aborted after {} pages, indicator still at '{label}'", self.page.visited);
            return Err(self.cap_error());
        }

        self.surface.click_next()?;
        if !self.wait_for_label_change(&label)? {
            logd!("page {n} ('{label}'): indicator unchanged after next");
            self.state = NavState::Exhausted(Termination::LabelUnchanged);
            return Ok(self.state);
        }

        self.page.visited += 1;
        self.state = NavState::OnPage(n + 1);
        Ok(self.state)
    }

    fn cap_error(&self) -> PaginationError {
        PaginationError::SafetyCapExceeded {
            cap: self.opts.safety_cap,
            last_label: self.page.last_label.clone(),
            rows: self.page.accumulator.len(),
        }
    }

    /// Poll the indicator until it differs from `prior` or the wait elapses.
    fn wait_for_label_change(&self, prior: &str) -> Result<bool, TableError> {
        let deadline = Instant::now() + self.opts.label_wait;
        loop {
            if self.surface.active_page_label()? != prior {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            thread::sleep(self.opts.poll_interval);
        }
    }

    /// Extract, append, advance; until exhausted or aborted.
    ///
    /// `progress` hears `begin(cap)` once, `item_done` per page, one `log`
    /// line with the outcome, then `finish`.
    pub fn sweep_with<F>(
        self,
        progress: Option<&mut dyn Progress>,
        mut extract: F,
    ) -> Result<Sweep, PaginationError>
    where
        F: FnMut(&S) -> Result<Vec<RowRecord>, TableError>,
    {
        let mut null = NullProgress;
        let progress: &mut dyn Progress = match progress {
            Some(p) => p,
            None => &mut null,
        };
        progress.begin(self.opts.safety_cap);

        let result = self.run_pages(progress, &mut extract);
        match &result {
            Ok(sweep) => progress.log(&format!(
                "{} page(s), {} row(s), stopped: {:?}",
                sweep.pages(),
                sweep.records.len(),
                sweep.termination
            )),
            Err(e) => progress.log(&e.to_string()),
        }
        progress.finish();
        result
    }

    fn run_pages<F>(mut self, progress: &mut dyn Progress, extract: &mut F) -> Result<Sweep, PaginationError>
    where
        F: FnMut(&S) -> Result<Vec<RowRecord>, TableError>,
    {
        let mut page_rows = Vec::new();
        let mut columns: Option<Vec<String>> = None;

        let termination = loop {
            let n = match self.state {
                NavState::OnPage(n) => n,
                NavState::Exhausted(t) => break t,
                NavState::Aborted => return Err(self.cap_error()),
            };

            let mut rows = extract(&*self.surface)?;
            if let Some(first) = rows.first() {
                let expected = columns.get_or_insert_with(|| first.headers().to_vec());
                if expected.as_slice() != first.headers() {
                    return Err(TableError::ColumnsChanged {
                        page: n,
                        expected: expected.clone(),
                        found: first.headers().to_vec(),
                    }.into());
                }
            }

            logd!("page {n}: {} row(s)", rows.len());
            progress.item_done(n, rows.len());
            page_rows.push(rows.len());
            self.page.accumulator.append(&mut rows);

            self.advance()?;
        };

        logf!(
            "sweep finished after {} page(s), {} row(s), {:?} at '{}'",
            page_rows.len(),
            self.page.accumulator.len(),
            termination,
            self.page.last_label
        );
        Ok(Sweep { records: self.page.accumulator, page_rows, termination })
    }
}

/// Sweep every page, keeping all rendered columns.
pub fn sweep<S: TableSurface + ?Sized>(
    surface: &mut S,
    opts: &PaginationOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Sweep, PaginationError> {
    Navigator::new(surface, opts.clone()).sweep_with(progress, |s| extractor::read_page(s))
}

/// Sweep every page, keeping only `columns` (resolved by header prefix).
pub fn sweep_columns<S: TableSurface + ?Sized>(
    surface: &mut S,
    columns: &[&str],
    opts: &PaginationOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Sweep, PaginationError> {
    Navigator::new(surface, opts.clone()).sweep_with(progress, |s| extractor::read_columns(s, columns))
}
