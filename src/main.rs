use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Subscription, Task, Theme};
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod assets;
mod state;
mod ui;

use assets::AssetStore;
use state::catalog::{Catalog, CATEGORIES};
use state::filter::GalleryState;
use state::focus::{self, ModalControl, PageFocus, TablistMove};
use state::modal::{ModalController, ModalEffect, ANNOUNCEMENT_TTL, HIDE_DELAY};

/// Header entrance reveal (the original staggers header and footer in)
const HEADER_REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Footer entrance reveal, the second stage
const FOOTER_REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Main application state
struct Fotogram {
    /// The static photo catalog, loaded once at startup
    catalog: Catalog,
    /// Active filter and its derived view
    gallery: GalleryState,
    /// The detail modal state machine
    modal: ModalController,
    /// Logical page focus (filter controls and grid items)
    focus: Option<PageFocus>,
    /// Preloaded image handles
    assets: AssetStore,
    header_revealed: bool,
    footer_revealed: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A filter control was activated (position in the category set)
    FilterSelected(usize),
    /// A grid item was activated (position in the filtered view)
    PhotoActivated(usize),
    CloseModal,
    PreviousPhoto,
    NextPhoto,
    /// The close-transition timer fired; stale generations are ignored
    ModalHideElapsed(u64),
    /// An announcement's removal timer fired
    AnnouncementExpired(u64),
    KeyPressed(Key, Modifiers),
    HeaderRevealElapsed,
    FooterRevealElapsed,
}

impl Fotogram {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let catalog = Catalog::load().unwrap_or_else(|err| {
            // A broken embedded catalog degrades to an empty gallery
            // rather than taking the page down.
            error!(%err, "failed to load catalog, starting empty");
            Catalog::default()
        });
        info!(photos = catalog.len(), "catalog loaded");

        let gallery = GalleryState::new(&catalog);
        let assets = AssetStore::preload(&catalog);

        (
            Fotogram {
                catalog,
                gallery,
                modal: ModalController::new(),
                focus: None,
                assets,
                header_revealed: false,
                footer_revealed: false,
            },
            Task::batch([
                delayed(HEADER_REVEAL_DELAY, Message::HeaderRevealElapsed),
                delayed(FOOTER_REVEAL_DELAY, Message::FooterRevealElapsed),
            ]),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilterSelected(position) => {
                let Some((key, _)) = CATEGORIES.get(position) else {
                    return Task::none();
                };
                // Selecting a filter moves focus to it and recomputes the
                // view in the same transition, so the visual filter state
                // and the data view can never diverge.
                self.focus = Some(PageFocus::Filter(position));
                self.gallery.set_filter(&self.catalog, key);
                let effects = self.modal.sync_with_view(self.gallery.filtered());
                self.run_effects(effects)
            }
            Message::PhotoActivated(index) => {
                if index >= self.gallery.len() {
                    return Task::none();
                }
                self.focus = Some(PageFocus::Photo(index));
                let effects = self.modal.open(self.gallery.filtered(), index, self.focus);
                self.run_effects(effects)
            }
            Message::CloseModal => {
                let effects = self.modal.close();
                self.run_effects(effects)
            }
            Message::PreviousPhoto => {
                let effects = self.modal.previous(self.gallery.filtered());
                self.run_effects(effects)
            }
            Message::NextPhoto => {
                let effects = self.modal.next(self.gallery.filtered());
                self.run_effects(effects)
            }
            Message::ModalHideElapsed(generation) => {
                if let Some(target) = self.modal.finish_hide(generation) {
                    self.restore_focus(target);
                }
                Task::none()
            }
            Message::AnnouncementExpired(id) => {
                self.modal.expire_announcement(id);
                Task::none()
            }
            Message::KeyPressed(key, modifiers) => self.handle_key(key, modifiers),
            Message::HeaderRevealElapsed => {
                self.header_revealed = true;
                Task::none()
            }
            Message::FooterRevealElapsed => {
                self.footer_revealed = true;
                Task::none()
            }
        }
    }

    /// Route a key press to the modal or the page, depending on which is
    /// the primary interaction surface
    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Task<Message> {
        if self.modal.is_open() {
            return self.handle_modal_key(key, modifiers);
        }
        self.handle_page_key(key, modifiers)
    }

    fn handle_modal_key(&mut self, key: Key, modifiers: Modifiers) -> Task<Message> {
        match key {
            Key::Named(Named::Escape) => self.update(Message::CloseModal),
            Key::Named(Named::ArrowLeft) => self.update(Message::PreviousPhoto),
            Key::Named(Named::ArrowRight) => self.update(Message::NextPhoto),
            Key::Named(Named::Tab) => {
                self.modal.handle_tab(self.gallery.len(), modifiers.shift());
                Task::none()
            }
            Key::Named(Named::Enter) | Key::Named(Named::Space) => {
                match self.modal.focused_control() {
                    Some(ModalControl::Close) => self.update(Message::CloseModal),
                    Some(ModalControl::Previous) => self.update(Message::PreviousPhoto),
                    Some(ModalControl::Next) => self.update(Message::NextPhoto),
                    None => Task::none(),
                }
            }
            _ => Task::none(),
        }
    }

    fn handle_page_key(&mut self, key: Key, modifiers: Modifiers) -> Task<Message> {
        match key {
            Key::Named(Named::Tab) => {
                self.focus = focus::cycle_page_focus(
                    self.focus,
                    CATEGORIES.len(),
                    self.gallery.len(),
                    modifiers.shift(),
                );
                Task::none()
            }
            Key::Named(Named::Enter) | Key::Named(Named::Space) => match self.focus {
                Some(PageFocus::Filter(position)) => {
                    self.update(Message::FilterSelected(position))
                }
                Some(PageFocus::Photo(index)) => self.update(Message::PhotoActivated(index)),
                None => Task::none(),
            },
            // Roving focus inside the filter tablist; moving never
            // activates a filter.
            Key::Named(named) => {
                let movement = match named {
                    Named::ArrowLeft | Named::ArrowUp => Some(TablistMove::Previous),
                    Named::ArrowRight | Named::ArrowDown => Some(TablistMove::Next),
                    Named::Home => Some(TablistMove::First),
                    Named::End => Some(TablistMove::Last),
                    _ => None,
                };
                if let (Some(movement), Some(PageFocus::Filter(position))) =
                    (movement, self.focus)
                {
                    if let Some(target) =
                        focus::tablist_target(movement, position, CATEGORIES.len())
                    {
                        self.focus = Some(PageFocus::Filter(target));
                    }
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }

    /// Map the controller's deferred-work descriptors onto timer tasks
    fn run_effects(&mut self, effects: Vec<ModalEffect>) -> Task<Message> {
        Task::batch(effects.into_iter().map(|effect| match effect {
            ModalEffect::ScheduleHide { generation } => {
                delayed(HIDE_DELAY, Message::ModalHideElapsed(generation))
            }
            ModalEffect::ScheduleExpiry { id } => {
                delayed(ANNOUNCEMENT_TTL, Message::AnnouncementExpired(id))
            }
        }))
    }

    /// Give focus back to the pre-open target, if it still exists
    fn restore_focus(&mut self, target: PageFocus) {
        let exists = match target {
            PageFocus::Filter(position) => position < CATEGORIES.len(),
            PageFocus::Photo(index) => index < self.gallery.len(),
        };
        self.focus = exists.then_some(target);
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = column![
            ui::header::header(self.header_revealed),
            ui::header::gallery_header(self.gallery.current_filter(), self.focus),
            ui::grid::photo_grid(self.gallery.filtered(), &self.assets, self.focus),
            ui::header::footer(self.footer_revealed),
            ui::status_line(self.modal.announcements()),
        ]
        .spacing(24)
        .padding(24);

        // Background scroll is disabled while the modal is open and comes
        // back the moment a close begins.
        let page: Element<Message> = if self.modal.scroll_locked() {
            container(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            scrollable(page).width(Length::Fill).into()
        };

        if self.modal.is_visible() {
            ui::detail::modal_overlay(page, &self.modal, &self.assets, self.gallery.len())
        } else {
            page
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(filter_key_press)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Forward only the keys the gallery reacts to
fn filter_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    match key {
        Key::Named(
            Named::Escape
            | Named::ArrowLeft
            | Named::ArrowRight
            | Named::ArrowUp
            | Named::ArrowDown
            | Named::Tab
            | Named::Enter
            | Named::Space
            | Named::Home
            | Named::End,
        ) => Some(Message::KeyPressed(key, modifiers)),
        _ => None,
    }
}

/// A message delivered after a fixed delay
fn delayed(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |_| message.clone(),
    )
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application("Fotogram", Fotogram::update, Fotogram::view)
        .subscription(Fotogram::subscription)
        .theme(Fotogram::theme)
        .centered()
        .run_with(Fotogram::new)
}
