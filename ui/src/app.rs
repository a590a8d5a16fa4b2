use std::time::Duration;

use chrono::Utc;
use useradmin_business::UserAdminSession;
use useradmin_business::prefs::UiPreferences;

use crate::storage::PrefsStore;
use crate::widgets;

/// Repaint cadence while requests are in flight, so results show without input.
const BUSY_REPAINT: Duration = Duration::from_millis(50);
/// Repaint cadence while toasts are visible, so they expire on time.
const TOAST_REPAINT: Duration = Duration::from_millis(250);

pub struct UserAdminApp {
    session: UserAdminSession,
    prefs: UiPreferences,
    store: PrefsStore,
    started: bool,
}

impl UserAdminApp {
    /// Called once before the first frame. The session starts loading on the first frame.
    pub fn new(session: UserAdminSession, mut store: PrefsStore) -> Self {
        let prefs = UiPreferences::load(&mut store);
        Self {
            session,
            prefs,
            store,
            started: false,
        }
    }

    pub fn session(&self) -> &UserAdminSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut UserAdminSession {
        &mut self.session
    }

    pub fn prefs(&self) -> &UiPreferences {
        &self.prefs
    }

    pub fn store(&self) -> &PrefsStore {
        &self.store
    }
}

impl eframe::App for UserAdminApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if !self.started {
            self.started = true;
            self.session.start();
        }
        self.session.poll_events();
        self.session.prune_toasts(Utc::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_panel(ui, &mut self.session, &mut self.prefs, &mut self.store);
        });

        if self.store.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.store.write_to(storage);
        }

        if self.session.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        } else if !self.session.toasts().is_empty() {
            ctx.request_repaint_after(TOAST_REPAINT);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.store.write_to(storage);
    }
}
