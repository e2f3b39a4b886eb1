//! Sidebar - mutually exclusive section toggles for the Extra variant

use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::glib;
use tweaks_extra::theme::Section;

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct Sidebar {}

    #[glib::object_subclass]
    impl ObjectSubclass for Sidebar {
        const NAME: &'static str = "TweaksSidebar";
        type Type = super::Sidebar;
        type ParentType = gtk::Box;
    }

    impl ObjectImpl for Sidebar {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_ui();
        }

        fn signals() -> &'static [glib::subclass::Signal] {
            use std::sync::OnceLock;
            static SIGNALS: OnceLock<Vec<glib::subclass::Signal>> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                vec![glib::subclass::Signal::builder("section-selected")
                    .param_types([String::static_type()])
                    .build()]
            })
        }
    }

    impl WidgetImpl for Sidebar {}
    impl BoxImpl for Sidebar {}
}

glib::wrapper! {
    pub struct Sidebar(ObjectSubclass<imp::Sidebar>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl Sidebar {
    pub fn new() -> Self {
        let obj: Self = glib::Object::builder()
            .property("orientation", gtk::Orientation::Vertical)
            .property("valign", gtk::Align::Fill)
            .build();
        obj.add_css_class("tweaks-sidebar");
        obj
    }

    fn setup_ui(&self) {
        let mut group: Option<gtk::ToggleButton> = None;

        for section in Section::ALL {
            let label = gtk::Label::builder()
                .label(section.label())
                .xalign(0.0)
                .build();

            let button = gtk::ToggleButton::builder()
                .child(&label)
                .focus_on_click(false)
                .build();
            button.set_group(group.as_ref());

            button.connect_toggled(glib::clone!(
                @weak self as sidebar =>
                move |button| {
                    if button.is_active() {
                        sidebar.emit_by_name::<()>("section-selected", &[&section.label().to_string()]);
                    }
                }
            ));

            self.append(&button);
            group.get_or_insert(button);
        }
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}
