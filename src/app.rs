//! One scheduled run: log in, pick a date, find photos, mail them, log out.
//!
//! Every stage degrades to a neutral value on failure, so the run always
//! reaches `LoggingOut`.

use chrono::NaiveDate;
use rand::Rng;

use crate::api::{PhotoApi, SessionToken, Transport};
use crate::config::Config;
use crate::dates::{DateSelector, DateStore, TimeWindow};
use crate::mail::{DispatchOutcome, Dispatcher, Mailer};
use crate::report::BatchReport;
use crate::utils::ScratchDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    LoggingIn,
    SelectingWindow,
    QueryingTags,
    QueryingPhotos,
    FetchingAndMailing,
    NotifyingAdmins,
    LoggingOut,
    Done,
}

#[derive(Debug)]
pub(crate) struct RunReport {
    pub(crate) stages: Vec<Stage>,
    pub(crate) authenticated: bool,
    pub(crate) window: TimeWindow,
    pub(crate) tag_ids: Vec<String>,
    pub(crate) photos_found: usize,
    /// Files already in scratch when the run started.
    pub(crate) residual: usize,
    pub(crate) fetch: Option<BatchReport>,
    pub(crate) dispatch: Option<DispatchOutcome>,
    pub(crate) admin_report: Option<BatchReport>,
    /// Files removed from scratch after mailing.
    pub(crate) purged: usize,
    pub(crate) logged_out: bool,
}

struct Tracker(Vec<Stage>);

impl Tracker {
    fn enter(&mut self, stage: Stage) {
        tracing::info!(?stage, "Entering stage");
        self.0.push(stage);
    }
}

pub(crate) fn run<T, M, R>(
    config: &Config,
    transport: &T,
    mailer: &M,
    today: NaiveDate,
    rng: &mut R,
) -> RunReport
where
    T: Transport,
    M: Mailer,
    R: Rng + ?Sized,
{
    let mut stages = Tracker(Vec::new());
    let api = PhotoApi::new(&config.api, transport);
    let store = DateStore::new(&config.state_file);
    let scratch = ScratchDir::new(&config.scratch_dir);
    tracing::debug!(
        "Used dates in {}, scratch in {}",
        store.path().display(),
        scratch.path().display()
    );
    let residual = scratch.warn_if_residual();

    stages.enter(Stage::LoggingIn);
    let token = api.login();
    if !token.is_authenticated() {
        tracing::warn!("Continuing without a session");
    }

    stages.enter(Stage::SelectingWindow);
    let window = DateSelector::new(&config.selection, &store).time_window(today, rng);

    stages.enter(Stage::QueryingTags);
    let tag_ids = api.list_tag_ids(&token, &config.tags);

    stages.enter(Stage::QueryingPhotos);
    let photos = api.query_photos(&token, &window, &tag_ids, config.timezone);

    let dispatcher = Dispatcher::new(&config.mail, mailer, &scratch);
    let mut report = RunReport {
        stages: Vec::new(),
        authenticated: token.is_authenticated(),
        window,
        tag_ids,
        photos_found: photos.len(),
        residual,
        fetch: None,
        dispatch: None,
        admin_report: None,
        purged: 0,
        logged_out: false,
    };

    if photos.is_empty() {
        stages.enter(Stage::NotifyingAdmins);
        report.admin_report = Some(dispatcher.notify_admins_no_photos(&window));
    } else {
        stages.enter(Stage::FetchingAndMailing);
        let fetch = api.fetch_all(&token, &photos, &scratch);
        if !fetch.failed.is_empty() {
            tracing::warn!(
                "{} of {} download(s) failed",
                fetch.failed.len(),
                fetch.attempted()
            );
        }
        report.fetch = Some(fetch);
        report.dispatch = Some(dispatcher.compose_and_send(&window.label(), &window));
        report.purged = scratch.purge();
        tracing::info!("Removed {} file(s) from scratch", report.purged);
    }

    stages.enter(Stage::LoggingOut);
    report.logged_out = logout(&api, &token);

    stages.enter(Stage::Done);
    report.stages = stages.0;
    report
}

fn logout<T: Transport>(api: &PhotoApi<'_, T>, token: &SessionToken) -> bool {
    let ok = api.logout(token);
    if ok {
        tracing::info!("Logged out");
    } else {
        tracing::warn!("Logout was not acknowledged");
    }
    ok
}
