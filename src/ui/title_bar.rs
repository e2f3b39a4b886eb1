//! Custom Title Bar
//!
//! Replaces the native frame of the undecorated main window: a centered
//! title and minimize / restore / maximize / close buttons. Dragging the bar
//! moves the window; double-clicking it toggles maximize. The owning window
//! forwards its display state through [`TitleBar::on_window_state_changed`].

use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::{gdk, glib};
use resvg::tiny_skia::Pixmap;
use std::cell::RefCell;
use std::path::Path;
use tracing::{debug, warn};
use tweaks_extra::drag::{DragController, PointerButton, WindowPosition};
use tweaks_extra::geometry::Point;
use tweaks_extra::icons::{render_icon, IconKind};
use tweaks_extra::theme::Theme;
use tweaks_extra::window_state::{
    TitleBarCommand, WindowControls, WindowDisplayState, WindowStateMirror,
};

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct TitleBar {
        pub restore_button: RefCell<Option<gtk::Button>>,
        pub maximize_button: RefCell<Option<gtk::Button>>,
        pub drag: RefCell<DragController>,
        pub mirror: RefCell<WindowStateMirror>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for TitleBar {
        const NAME: &'static str = "TweaksTitleBar";
        type Type = super::TitleBar;
        type ParentType = gtk::Box;
    }

    impl ObjectImpl for TitleBar {}
    impl WidgetImpl for TitleBar {}
    impl BoxImpl for TitleBar {}
}

glib::wrapper! {
    pub struct TitleBar(ObjectSubclass<imp::TitleBar>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl TitleBar {
    pub fn new(theme: &Theme, icons_dir: &Path) -> Self {
        let obj: Self = glib::Object::builder()
            .property("orientation", gtk::Orientation::Horizontal)
            .property("spacing", 0)
            .property("hexpand", true)
            .build();
        obj.add_css_class("tweaks-title-bar");

        obj.setup_ui(theme, icons_dir);
        obj.setup_gestures();

        obj
    }

    fn setup_ui(&self, theme: &Theme, icons_dir: &Path) {
        let imp = self.imp();

        let title = gtk::Label::builder()
            .label(theme.display_title())
            .halign(gtk::Align::Center)
            .hexpand(true)
            .css_classes(["tweaks-title"])
            .build();
        self.append(&title);

        for command in TitleBarCommand::ALL {
            let button = self.create_button(command, theme, icons_dir);
            self.append(&button);

            match command {
                TitleBarCommand::Restore => *imp.restore_button.borrow_mut() = Some(button),
                TitleBarCommand::Maximize => *imp.maximize_button.borrow_mut() = Some(button),
                _ => {}
            }
        }

        self.apply_visibility();
    }

    fn create_button(&self, command: TitleBarCommand, theme: &Theme, icons_dir: &Path) -> gtk::Button {
        let kind = IconKind::from(command);
        let path = kind.path_in(icons_dir);

        let image = match render_icon(&path, theme.icon_size, theme.icon_tint) {
            Ok(pixmap) => gtk::Image::from_paintable(Some(&texture_from_pixmap(&pixmap))),
            Err(e) => {
                warn!("{}; using the {} theme icon", e, kind.fallback_icon_name());
                gtk::Image::from_icon_name(kind.fallback_icon_name())
            }
        };
        image.set_pixel_size(theme.icon_size as i32);

        let button = gtk::Button::builder()
            .child(&image)
            .width_request(theme.button_size)
            .height_request(theme.button_size)
            .valign(gtk::Align::Center)
            .focusable(false)
            .focus_on_click(false)
            .tooltip_text(command.tooltip())
            .css_classes(["tweaks-title-button"])
            .build();

        button.connect_clicked(glib::clone!(
            @weak self as bar =>
            move |_| {
                bar.run_command(command);
            }
        ));

        button
    }

    fn setup_gestures(&self) {
        let drag = gtk::GestureDrag::builder()
            .button(gdk::BUTTON_PRIMARY)
            .build();

        drag.connect_drag_begin(glib::clone!(
            @weak self as bar =>
            move |gesture, x, y| {
                bar.on_drag_begin(gesture, x, y);
            }
        ));
        drag.connect_drag_update(glib::clone!(
            @weak self as bar =>
            move |gesture, dx, dy| {
                bar.on_drag_update(gesture, dx, dy);
            }
        ));
        drag.connect_drag_end(glib::clone!(
            @weak self as bar =>
            move |_, _, _| {
                bar.imp().drag.borrow_mut().release();
            }
        ));
        self.add_controller(drag);

        let click = gtk::GestureClick::builder()
            .button(gdk::BUTTON_PRIMARY)
            .build();
        click.connect_pressed(glib::clone!(
            @weak self as bar =>
            move |gesture, n_press, _, _| {
                if n_press == 2 {
                    gesture.set_state(gtk::EventSequenceState::Claimed);
                    let command = bar.imp().mirror.borrow().toggle_command();
                    bar.run_command(command);
                }
            }
        ));
        self.add_controller(click);
    }

    fn on_drag_begin(&self, gesture: &gtk::GestureDrag, x: f64, y: f64) {
        let button = PointerButton::from_number(gesture.current_button());
        let mover = CompositorMove::new(self, gesture, x, y);
        self.imp()
            .drag
            .borrow_mut()
            .press(button, Point::from_f64(x, y), &mover);
    }

    fn on_drag_update(&self, gesture: &gtk::GestureDrag, dx: f64, dy: f64) {
        let Some((x, y)) = gesture.start_point() else {
            return;
        };

        if !self.imp().drag.borrow().is_dragging() {
            return;
        }

        let start = Point::from_f64(x, y);
        let pointer = Point::from_f64(x + dx, y + dy);

        // Clicks on the buttons stay clicks until the pointer really moves
        if !self.drag_check_threshold(start.x, start.y, pointer.x, pointer.y) {
            return;
        }

        gesture.set_state(gtk::EventSequenceState::Claimed);

        let mover = CompositorMove::new(self, gesture, x, y);
        let moved = self
            .imp()
            .drag
            .borrow_mut()
            .motion(pointer, &mover)
            .is_some();

        // The compositor owns the pointer from here on
        if moved {
            gesture.reset();
        }
    }

    fn run_command(&self, command: TitleBarCommand) {
        let Some(window) = self.root().and_downcast::<gtk::Window>() else {
            warn!("Title bar is not inside a window; ignoring {:?}", command);
            return;
        };

        debug!("Title bar command: {:?}", command);
        command.apply(&GtkWindowControls(&window));
    }

    /// Mirror a new window display state into the restore/maximize buttons
    pub fn on_window_state_changed(&self, state: WindowDisplayState) {
        self.imp().mirror.borrow_mut().on_window_state_changed(state);
        self.apply_visibility();
    }

    fn apply_visibility(&self) {
        let imp = self.imp();
        let visibility = imp.mirror.borrow().visibility();

        if let Some(button) = imp.restore_button.borrow().as_ref() {
            button.set_visible(visibility.restore);
        }
        if let Some(button) = imp.maximize_button.borrow().as_ref() {
            button.set_visible(visibility.maximize);
        }
    }
}

/// Upload a premultiplied RGBA pixmap as a GDK texture
fn texture_from_pixmap(pixmap: &Pixmap) -> gdk::MemoryTexture {
    let bytes = glib::Bytes::from(pixmap.data());
    gdk::MemoryTexture::new(
        pixmap.width() as i32,
        pixmap.height() as i32,
        gdk::MemoryFormat::R8g8b8a8Premultiplied,
        &bytes,
        pixmap.width() as usize * 4,
    )
}

/// Window commands on a GTK toplevel
struct GtkWindowControls<'a>(&'a gtk::Window);

impl WindowControls for GtkWindowControls<'_> {
    fn minimize(&self) {
        self.0.minimize();
    }

    fn maximize(&self) {
        self.0.maximize();
    }

    fn restore(&self) {
        if self.0.is_fullscreened() {
            self.0.unfullscreen();
        }
        self.0.unmaximize();
    }

    fn close(&self) {
        self.0.close();
    }
}

/// Window positioning through the compositor.
///
/// GTK4 toplevels have no absolute position (Wayland), so the reported
/// position is the origin and a move hands the rest of the drag to the
/// compositor, anchored at the press point.
struct CompositorMove<'a> {
    widget: &'a TitleBar,
    gesture: &'a gtk::GestureDrag,
    start: (f64, f64),
}

impl<'a> CompositorMove<'a> {
    fn new(widget: &'a TitleBar, gesture: &'a gtk::GestureDrag, x: f64, y: f64) -> Self {
        Self {
            widget,
            gesture,
            start: (x, y),
        }
    }
}

impl WindowPosition for CompositorMove<'_> {
    fn position(&self) -> Point {
        Point::ORIGIN
    }

    fn move_to(&self, _target: Point) {
        let Some(native) = self.widget.native() else {
            return;
        };
        let Some(toplevel) = native.surface().and_downcast::<gdk::Toplevel>() else {
            warn!("Window surface is not a toplevel; cannot move it");
            return;
        };
        let Some(device) = self.gesture.device() else {
            return;
        };

        let (x, y) = self
            .widget
            .translate_coordinates(&native, self.start.0, self.start.1)
            .unwrap_or(self.start);
        let (offset_x, offset_y) = native.surface_transform();

        toplevel.begin_move(
            &device,
            self.gesture.current_button() as i32,
            x + offset_x,
            y + offset_y,
            self.gesture.current_event_time(),
        );
    }
}
