// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the carousel and the resolved theme, loads the
//! configuration at startup and forwards window and keyboard events to the
//! carousel.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::media::{ImageLoader, ImageProvider, PicsumProvider};
use crate::ui::carousel;
use crate::ui::theming::{self, ColorScheme, ThemeMode};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_TITLE: &str = "Iced Slider";
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

/// Root Iced application state.
pub struct App {
    carousel: carousel::State,
    theme_mode: ThemeMode,
    /// Effective darkness of `theme_mode`, resolved at startup.
    is_dark: bool,
    colors: ColorScheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("carousel", &self.carousel)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let (width, height) = config.carousel.image_size();
        Self::with_provider(
            &config,
            ThemeMode::default(),
            Box::new(PicsumProvider::new(width, height)),
        )
    }
}

impl App {
    /// Loads the configuration, applies CLI overrides and starts loading the
    /// first images.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        let (width, height) = config.carousel.image_size();
        log::info!(
            "starting with theme {:?}, {}x{} images, snap delay {:?}",
            theme_mode,
            width,
            height,
            config.carousel.snap_delay()
        );

        let mut app = Self::with_provider(
            &config,
            theme_mode,
            Box::new(PicsumProvider::new(width, height)),
        );
        let task = app.start();
        (app, task)
    }

    /// Builds the application around a custom image provider.
    ///
    /// No image is requested until [`App::start`] is called.
    #[must_use]
    pub fn with_provider(
        config: &Config,
        theme_mode: ThemeMode,
        provider: Box<dyn ImageProvider>,
    ) -> Self {
        let loader = ImageLoader::new(config.network.request_timeout());
        let is_dark = theme_mode.is_dark();
        Self {
            carousel: carousel::State::new(provider, loader, config.carousel.snap_delay()),
            theme_mode,
            is_dark,
            colors: ColorScheme::for_darkness(is_dark),
        }
    }

    /// Materializes the initially visible cards and fetches their images.
    pub fn start(&mut self) -> Task<Message> {
        self.carousel.start().map(Message::Carousel)
    }

    #[must_use]
    pub fn carousel(&self) -> &carousel::State {
        &self.carousel
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{} - {}",
            carousel::card_label(self.carousel.current_page()),
            WINDOW_TITLE
        )
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        theming::iced_theme(self.is_dark)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.carousel.is_settling());

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(carousel_message) => self
                .carousel
                .update(carousel_message)
                .map(Message::Carousel),
            Message::WindowResized(width) => self
                .carousel
                .update(carousel::Message::ViewportResized(carousel::strip_width(
                    width,
                )))
                .map(Message::Carousel),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            carousel: &self.carousel,
            colors: &self.colors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::SequenceProvider;
    use crate::ui::carousel::pager::PAGE_STRIDE;
    use crate::test_utils::env_lock;
    use tempfile::tempdir;

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = env_lock();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn light_app(refs: &[&str]) -> App {
        App::with_provider(
            &Config::default(),
            ThemeMode::Light,
            Box::new(SequenceProvider::new(refs.iter().copied())),
        )
    }

    #[test]
    fn new_loads_defaults_when_config_missing() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.theme_mode(), ThemeMode::System);
            assert_eq!(app.carousel().current_page(), 0);
            assert_eq!(app.carousel().cards().len(), 2);
        });
    }

    #[test]
    fn theme_flag_overrides_config() {
        with_temp_config_dir(|dir| {
            std::fs::write(
                dir.join("settings.toml"),
                "[general]\ntheme_mode = \"dark\"\n",
            )
            .expect("write config");

            let (app, _task) = App::new(Flags {
                theme: Some(ThemeMode::Light),
                ..Flags::default()
            });
            assert_eq!(app.theme_mode(), ThemeMode::Light);
            assert_eq!(app.theme(), Theme::Light);
        });
    }

    #[test]
    fn configured_theme_is_used_without_flag() {
        with_temp_config_dir(|dir| {
            std::fs::write(
                dir.join("settings.toml"),
                "[general]\ntheme_mode = \"dark\"\n",
            )
            .expect("write config");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.theme_mode(), ThemeMode::Dark);
            assert_eq!(app.theme(), Theme::Dark);
        });
    }

    #[test]
    fn title_names_the_focused_card() {
        let mut app = light_app(&[]);
        assert_eq!(app.title(), "Image 1 - Iced Slider");

        let _ = app.update(Message::Carousel(carousel::Message::LastPage));
        assert_eq!(app.title(), "Image 10 - Iced Slider");
    }

    #[test]
    fn window_resize_reaches_the_pager() {
        let mut app = light_app(&[]);
        let _ = app.update(Message::WindowResized(900.0));
        assert_eq!(app.carousel().pager().viewport_width(), 868.0);
        assert!(app.carousel().cards().len() > 2);
    }

    #[test]
    fn pager_width_matches_what_the_strip_reports() {
        use iced::mouse::{self, ScrollDelta};
        use iced::{Event, Point};
        use iced_test::Simulator;

        let mut app = light_app(&[]);
        let _ = app.update(Message::WindowResized(420.0));
        assert_eq!(app.carousel().pager().viewport_width(), 388.0);

        let mut ui = Simulator::with_size(iced::Settings::default(), (420.0, 640.0), app.view());
        ui.point_at(Point::new(210.0, 200.0));
        let _ = ui.simulate([Event::Mouse(mouse::Event::WheelScrolled {
            delta: ScrollDelta::Pixels { x: -5.0, y: 0.0 },
        })]);
        let reported = ui.into_messages().find_map(|message| match message {
            Message::Carousel(carousel::Message::Scrolled { viewport_width, .. }) => {
                Some(viewport_width)
            }
            _ => None,
        });

        assert_eq!(reported, Some(388.0));
    }

    #[test]
    fn scroll_messages_are_forwarded() {
        let mut app = light_app(&[]);
        let _ = app.update(Message::Carousel(carousel::Message::Scrolled {
            offset_x: PAGE_STRIDE * 3.0,
            viewport_width: 420.0,
        }));
        assert_eq!(app.carousel().current_page(), 3);
    }

    #[test]
    fn start_requests_images_for_visible_cards_only() {
        let mut app = light_app(&["a", "b", "c"]);
        assert!(app.carousel().cards().is_empty());

        let _ = app.start();
        assert_eq!(app.carousel().cards().len(), 2);
        assert_eq!(
            app.carousel().cards().get(1).map(|c| c.image_ref()),
            Some("b")
        );
    }
}
