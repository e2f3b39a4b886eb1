//! Main Window - Frameless Translucent Shell
//!
//! An undecorated window with a transparent background. The rounded
//! container inside it stacks the custom title bar, the workspace (or the
//! sidebar/content splitter) and the optional status bar.

use crate::ui::app::TweaksApplication;
use crate::ui::sidebar::Sidebar;
use crate::ui::title_bar::TitleBar;
use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::{gdk, glib};
use std::cell::{Cell, RefCell};
use tracing::{debug, info, warn};
use tweaks_extra::config::AppConfig;
use tweaks_extra::geometry::Size;
use tweaks_extra::theme::Theme;
use tweaks_extra::window_state::WindowDisplayState;

mod imp {
    use super::*;

    #[derive(gtk::CompositeTemplate, Default)]
    #[template(string = r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <interface>
            <template class="TweaksMainWindow" parent="AdwApplicationWindow">
                <property name="decorated">false</property>
                <style>
                    <class name="tweaks-window"/>
                </style>
                <property name="content">
                    <object class="GtkBox" id="container">
                        <property name="orientation">vertical</property>
                        <style>
                            <class name="tweaks-container"/>
                        </style>

                        <!-- Title bar -->
                        <child>
                            <object class="GtkBox" id="title_bar_box">
                                <property name="orientation">horizontal</property>
                            </object>
                        </child>

                        <!-- Workspace, or sidebar + content -->
                        <child>
                            <object class="GtkBox" id="body_box">
                                <property name="orientation">vertical</property>
                                <property name="vexpand">true</property>
                                <property name="valign">fill</property>
                            </object>
                        </child>

                        <!-- Status bar -->
                        <child>
                            <object class="GtkLabel" id="status_label">
                                <property name="visible">false</property>
                                <property name="xalign">0</property>
                                <style>
                                    <class name="tweaks-status-bar"/>
                                </style>
                            </object>
                        </child>
                    </object>
                </property>
            </template>
        </interface>
    "#)]
    pub struct MainWindow {
        #[template_child]
        pub title_bar_box: TemplateChild<gtk::Box>,

        #[template_child]
        pub body_box: TemplateChild<gtk::Box>,

        #[template_child]
        pub status_label: TemplateChild<gtk::Label>,

        pub title_bar: RefCell<Option<TitleBar>>,
        pub display_state: Cell<WindowDisplayState>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for MainWindow {
        const NAME: &'static str = "TweaksMainWindow";
        type Type = super::MainWindow;
        type ParentType = adw::ApplicationWindow;

        fn class_init(klass: &mut Self::Class) {
            klass.bind_template();
        }

        fn instance_init(obj: &glib::subclass::InitializingObject<Self>) {
            obj.init_template();
        }
    }

    impl ObjectImpl for MainWindow {}

    impl WidgetImpl for MainWindow {
        fn realize(&self) {
            self.parent_realize();
            self.obj().watch_toplevel_state();
        }
    }

    impl WindowImpl for MainWindow {}
    impl ApplicationWindowImpl for MainWindow {}
    impl AdwApplicationWindowImpl for MainWindow {}
}

glib::wrapper! {
    pub struct MainWindow(ObjectSubclass<imp::MainWindow>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager;
}

impl MainWindow {
    pub fn new(app: &TweaksApplication, config: &AppConfig) -> Self {
        let theme = config.variant.theme();

        let window: Self = glib::Object::builder()
            .property("application", app)
            .property("title", theme.title)
            .build();

        let size = config.initial_window_size(primary_monitor_size());
        window.set_default_size(size.width, size.height);
        info!(
            "Main window: {:?} variant, {}x{}",
            theme.variant, size.width, size.height
        );

        window.setup_ui(&theme, config);

        window
    }

    fn setup_ui(&self, theme: &Theme, config: &AppConfig) {
        let imp = self.imp();

        let title_bar = TitleBar::new(theme, &config.icons_dir);
        imp.title_bar_box.append(&title_bar);
        *imp.title_bar.borrow_mut() = Some(title_bar);

        if let Some(text) = theme.workspace_placeholder {
            let workspace = gtk::Box::builder()
                .orientation(gtk::Orientation::Vertical)
                .valign(gtk::Align::Start)
                .css_classes(["tweaks-workspace"])
                .build();
            workspace.append(&gtk::Label::builder().label(text).halign(gtk::Align::Start).build());
            imp.body_box.append(&workspace);
        }

        if theme.sidebar {
            let sidebar = Sidebar::new();
            let content = gtk::Box::builder()
                .orientation(gtk::Orientation::Vertical)
                .valign(gtk::Align::Start)
                .hexpand(true)
                .build();

            let splitter = gtk::Paned::builder()
                .orientation(gtk::Orientation::Horizontal)
                .start_child(&sidebar)
                .end_child(&content)
                .position(config.window.sidebar_width)
                .shrink_start_child(false)
                .vexpand(true)
                .css_classes(["tweaks-splitter"])
                .build();

            sidebar.connect_local(
                "section-selected",
                false,
                glib::clone!(@weak self as window => @default-return None, move |values: &[glib::Value]| {
                    let label = values[1].get::<String>().unwrap_or_default();
                    window.imp().status_label.set_label(&label);
                    None
                }),
            );

            imp.body_box.append(&splitter);
        }

        if theme.status_bar {
            imp.status_label.set_height_request(theme.status_bar_height);
            imp.status_label.set_visible(true);
        }
    }

    /// Forward compositor state changes of the realized surface
    fn watch_toplevel_state(&self) {
        let Some(toplevel) = self.surface().and_downcast::<gdk::Toplevel>() else {
            warn!("Main window surface is not a toplevel; window state will not be mirrored");
            return;
        };

        toplevel.connect_state_notify(glib::clone!(
            @weak self as window =>
            move |toplevel| {
                let flags = toplevel.state();
                window.on_window_state_changed(WindowDisplayState::from_flags(
                    flags.contains(gdk::ToplevelState::MINIMIZED),
                    flags.contains(gdk::ToplevelState::MAXIMIZED),
                    flags.contains(gdk::ToplevelState::FULLSCREEN),
                ));
            }
        ));
    }

    fn on_window_state_changed(&self, state: WindowDisplayState) {
        let imp = self.imp();

        if imp.display_state.replace(state) != state {
            debug!("Window state changed: {:?}", state);
        }

        if let Some(title_bar) = imp.title_bar.borrow().as_ref() {
            title_bar.on_window_state_changed(state);
        }
    }
}

/// Size of the primary monitor, or a 1280x720 stand-in without one
fn primary_monitor_size() -> Size {
    let monitor = gdk::Display::default()
        .and_then(|display| display.monitors().item(0))
        .and_downcast::<gdk::Monitor>();

    match monitor {
        Some(monitor) => {
            let geometry = monitor.geometry();
            Size::new(geometry.width(), geometry.height())
        }
        None => {
            warn!("No monitor found; sizing the window for 1280x720");
            Size::new(1280, 720)
        }
    }
}
