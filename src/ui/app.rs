//! Tweaks Application - GTK4 Application Setup
//!
//! Initializes the GTK4/Libadwaita application, runs the desktop session
//! guard and presents the main window.

use crate::ui::window::MainWindow;
use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::gio;
use std::cell::{Cell, RefCell};
use tracing::{info, warn};
use tweaks_extra::config::AppConfig;
use tweaks_extra::session::{unsupported_message, SessionCheck, UNSUPPORTED_TITLE};

/// Application ID for Tweaks Extra
const APP_ID: &str = "io.github.TweaksExtra";

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct TweaksApplication {
        pub config: RefCell<AppConfig>,
        pub session_rejected: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for TweaksApplication {
        const NAME: &'static str = "TweaksApplication";
        type Type = super::TweaksApplication;
        type ParentType = adw::Application;
    }

    impl ObjectImpl for TweaksApplication {}

    impl ApplicationImpl for TweaksApplication {
        fn activate(&self) {
            let app = self.obj();

            if let Some(window) = app.active_window() {
                window.present();
                return;
            }

            let config = self.config.borrow().clone();

            // The guard runs before any window is shown
            if config.session.check {
                match SessionCheck::from_env() {
                    SessionCheck::Continue => info!("Desktop session check passed"),
                    SessionCheck::Unsupported { detected } => {
                        warn!("Unsupported desktop session: {:?}", detected);
                        app.show_unsupported_session(detected.as_deref());
                        return;
                    }
                }
            }

            let window = MainWindow::new(&app, &config);
            window.present();
        }

        fn startup(&self) {
            self.parent_startup();

            let theme = self.config.borrow().variant.theme();
            let css_provider = gtk::CssProvider::new();
            css_provider.load_from_data(&format!(
                "{}\n{}",
                include_str!("styles.css"),
                theme.stylesheet()
            ));

            match gtk::gdk::Display::default() {
                Some(display) => {
                    gtk::style_context_add_provider_for_display(
                        &display,
                        &css_provider,
                        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
                    );
                }
                None => {
                    tracing::warn!("No display available. CSS styling will not be applied.");
                }
            }

            let app = self.obj();
            app.setup_actions();
        }
    }

    impl GtkApplicationImpl for TweaksApplication {}
    impl AdwApplicationImpl for TweaksApplication {}
}

glib::wrapper! {
    pub struct TweaksApplication(ObjectSubclass<imp::TweaksApplication>)
        @extends adw::Application, gtk::Application, gio::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl TweaksApplication {
    pub fn new(config: AppConfig) -> Self {
        let app: Self = glib::Object::builder()
            .property("application-id", APP_ID)
            .property("flags", gio::ApplicationFlags::NON_UNIQUE)
            .build();

        *app.imp().config.borrow_mut() = config;

        app
    }

    fn setup_actions(&self) {
        let quit_action = gio::SimpleAction::new("quit", None);
        quit_action.connect_activate(glib::clone!(
            @weak self as app =>
            move |_, _| {
                app.quit();
            }
        ));
        self.add_action(&quit_action);

        self.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    /// Warn about an unsupported desktop session, then quit once answered
    fn show_unsupported_session(&self, detected: Option<&str>) {
        self.imp().session_rejected.set(true);

        let dialog = adw::MessageDialog::builder()
            .heading(UNSUPPORTED_TITLE)
            .body(unsupported_message(detected))
            .modal(true)
            .build();
        dialog.set_application(Some(self));

        dialog.add_response("quit", "_Quit");
        dialog.set_default_response(Some("quit"));
        dialog.set_close_response("quit");

        dialog.connect_response(
            None,
            glib::clone!(@weak self as app => move |dialog, _| {
                dialog.close();
                app.quit();
            }),
        );

        dialog.present();
    }

    /// Run the main loop and return the process exit code
    pub fn run(&self) -> glib::ExitCode {
        let code = ApplicationExtManual::run_with_args::<&str>(self, &[]);

        if self.imp().session_rejected.get() {
            glib::ExitCode::FAILURE
        } else {
            code
        }
    }
}
