//! The site's deferred work and the host clock.

use std::time::Duration;

use sawaed_dom::Dom;
use sawaed_forms::OverlayTask;
use sawaed_widgets::{FadeTask, NoticeTask, RevealTask};
use tracing::trace;

use super::core::Site;

/// Any task a behavior can leave on the scheduler.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteTask<N> {
    Overlay(OverlayTask<N>),
    Fade(FadeTask<N>),
    Notice(NoticeTask<N>),
    Reveal(RevealTask),
}

impl<N> From<OverlayTask<N>> for SiteTask<N> {
    fn from(task: OverlayTask<N>) -> Self {
        Self::Overlay(task)
    }
}

impl<N> From<FadeTask<N>> for SiteTask<N> {
    fn from(task: FadeTask<N>) -> Self {
        Self::Fade(task)
    }
}

impl<N> From<NoticeTask<N>> for SiteTask<N> {
    fn from(task: NoticeTask<N>) -> Self {
        Self::Notice(task)
    }
}

impl<N> From<RevealTask> for SiteTask<N> {
    fn from(task: RevealTask) -> Self {
        Self::Reveal(task)
    }
}

impl<D: Dom> Site<D> {
    /// Advances the clock to `now` (time since page load), running every
    /// task due by then in deadline order, then finishes clipboard copies
    /// that settled since the last tick. Returns how many steps ran.
    ///
    /// Tasks scheduled by a running task are timed from its deadline, so a
    /// single late tick still plays a whole timeline in order.
    pub fn tick(&mut self, now: Duration) -> usize {
        let mut ran = 0;
        while let Some(task) = self.scheduler.pop_due(now) {
            self.run_task(task);
            ran += 1;
        }
        self.scheduler.advance_to(now);
        ran += self.clipboard.poll(&mut self.dom, &mut self.scheduler);
        if ran > 0 {
            trace!(ran, pending = self.scheduler.pending(), "tick");
        }
        ran
    }

    fn run_task(&mut self, task: SiteTask<D::Node>) {
        match task {
            SiteTask::Overlay(task) => self.overlay.run(&mut self.dom, &mut self.scheduler, task),
            SiteTask::Fade(task) => self.filters.run(&mut self.dom, task),
            SiteTask::Notice(task) => self.clipboard.run(&mut self.dom, &mut self.scheduler, task),
            SiteTask::Reveal(task) => self.animations.run(&mut self.dom, task),
        }
    }
}
