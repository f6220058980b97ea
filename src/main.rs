use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{container, scrollable, Stack};
use iced::{time, window, Element, Length, Subscription, Task, Theme};
use std::collections::HashMap;
use std::time::Instant;

mod config;
mod media;
mod state;
mod ui;

use config::AppConfig;
use media::{load_artwork, Artwork, ImageLoadError};
use state::artwork::ArtworkStore;
use state::carousel::{ActiveChanged, Carousel};
use state::data::{wrap_next, Gallery};
use state::lightbox::{Lightbox, LightboxEvent};
use state::reveal::{RevealSet, Section};

/// In-page navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Gallery,
    About,
    Contact,
}

/// Main application state
pub struct Portfolio {
    config: AppConfig,
    /// The fixed artwork catalogue
    gallery: Gallery,
    /// Decoded images (or failures) per gallery item
    artworks: ArtworkStore,
    carousel: Carousel,
    lightbox: Lightbox,
    reveals: RevealSet,
    /// Laid-out vertical offset of each anchored section
    anchors: HashMap<Anchor, f32>,
    /// Mail-to link last handed to the desktop by the contact action
    contact_uri: Option<String>,
    /// Clock used for animations, refreshed on every update
    now: Instant,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Background decode of a primary image finished
    ArtworkLoaded(usize, Result<Artwork, ImageLoadError>),
    /// Carousel timer fired
    CarouselTick,
    CarouselNext,
    CarouselPrev,
    CarouselGoTo(usize),
    Lightbox(LightboxEvent),
    /// Key press delivered while the lightbox listener is active
    KeyPressed(Key),
    /// A block crossed the visibility threshold
    Revealed(Section),
    /// A section reported where it was laid out
    AnchorMoved(Anchor, f32),
    ScrollTo(Anchor),
    ContactPressed,
    /// The desktop handler for the contact link returned
    ContactOpened(Result<(), String>),
    /// Animation frame
    Frame(Instant),
}

/// Scrollable id of the page
fn page_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

/// Static contact action target
pub fn mailto_uri(email: &str) -> String {
    format!("mailto:{}", email)
}

/// Hand a link to the desktop's default handler without blocking the UI thread
async fn open_link(uri: String) -> Result<(), String> {
    tokio::task::spawn_blocking(move || open::that(&uri))
        .await
        .map_err(|err| err.to_string())?
        .map_err(|err| err.to_string())
}

impl Portfolio {
    /// Create the application and start decoding the first carousel slides
    fn new(config: AppConfig, gallery: Gallery) -> (Self, Task<Message>) {
        let now = Instant::now();

        tracing::info!(
            items = gallery.len(),
            art_dir = %config.site.art_dir.display(),
            "sketchbook initialized"
        );

        let mut portfolio = Portfolio {
            artworks: ArtworkStore::new(gallery.len()),
            carousel: Carousel::new(
                gallery.len(),
                config.carousel.delay(),
                config.carousel.speed(),
            ),
            lightbox: Lightbox::default(),
            reveals: RevealSet::new(
                config.reveal.threshold,
                config.reveal.duration(),
                config.reveal.offset,
            ),
            anchors: HashMap::new(),
            contact_uri: None,
            now,
            config,
            gallery,
        };

        let task = if portfolio.carousel_mounted() {
            let slides = portfolio.carousel_slides();
            portfolio.request_artwork(slides)
        } else {
            Task::none()
        };

        (portfolio, task)
    }

    /// Start decoding any of `indices` that nobody has asked for yet
    fn request_artwork(&mut self, indices: impl IntoIterator<Item = usize>) -> Task<Message> {
        let loads: Vec<Task<Message>> = indices
            .into_iter()
            .filter(|&index| self.artworks.request(index))
            .map(|index| {
                let source = self.gallery.get(index).source.clone();
                Task::perform(load_artwork(source), move |result| {
                    Message::ArtworkLoaded(index, result)
                })
            })
            .collect();

        Task::batch(loads)
    }

    /// The active slide and the one the timer shows next
    fn carousel_slides(&self) -> [usize; 2] {
        let active = self.carousel.active_index();
        [active, wrap_next(active, self.gallery.len())]
    }

    fn title(&self) -> String {
        self.config.site.name.clone()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();
        let len = self.gallery.len();

        match message {
            Message::ArtworkLoaded(index, Ok(artwork)) => {
                tracing::debug!(
                    title = %self.gallery.get(index).title,
                    width = artwork.width,
                    height = artwork.height,
                    "artwork ready"
                );
                self.artworks.mark_loaded(index, artwork);
                self.log_load_progress();
                Task::none()
            }
            Message::ArtworkLoaded(index, Err(err)) => {
                // One-shot: the placeholder is drawn from now on
                if self.artworks.mark_failed(index) {
                    tracing::warn!(
                        title = %self.gallery.get(index).title,
                        error = %err,
                        "showing placeholder"
                    );
                }
                self.log_load_progress();
                Task::none()
            }
            Message::CarouselTick
            | Message::CarouselNext
            | Message::CarouselPrev
            | Message::CarouselGoTo(_) => {
                let ActiveChanged(active) = match message {
                    Message::CarouselNext => self.carousel.next(self.now),
                    Message::CarouselPrev => self.carousel.prev(self.now),
                    Message::CarouselGoTo(index) => self.carousel.go_to(index, self.now),
                    _ => self.carousel.tick(self.now),
                };
                tracing::trace!(active, "carousel");
                let slides = self.carousel_slides();
                self.request_artwork(slides)
            }
            Message::Lightbox(event) => {
                let state = self.lightbox.handle(event, len);
                tracing::debug!(?event, ?state, "lightbox");
                self.request_artwork(state.open_index())
            }
            Message::KeyPressed(key) => {
                let state = self.lightbox.handle_key(&key, len);
                self.request_artwork(state.open_index())
            }
            Message::Revealed(section) => {
                self.reveals.enter(section, self.now);
                // Thumbnails load once the grid scrolls into view
                if section == Section::GalleryGrid {
                    self.request_artwork(0..len)
                } else {
                    Task::none()
                }
            }
            Message::AnchorMoved(anchor, offset) => {
                self.anchors.insert(anchor, offset);
                Task::none()
            }
            Message::ScrollTo(anchor) => match self.anchors.get(&anchor) {
                Some(&y) => {
                    tracing::debug!(?anchor, y, "scrolling to section");
                    scrollable::scroll_to(page_id(), scrollable::AbsoluteOffset { x: 0.0, y })
                }
                None => Task::none(),
            },
            Message::ContactPressed => {
                let uri = mailto_uri(&self.config.site.contact_email);
                tracing::info!(%uri, "opening contact link");
                self.contact_uri = Some(uri.clone());

                // The clipboard copy stays useful when no mail client is set up
                Task::batch([
                    iced::clipboard::write(self.config.site.contact_email.clone()),
                    Task::perform(open_link(uri), Message::ContactOpened),
                ])
            }
            Message::ContactOpened(result) => {
                if let Err(err) = result {
                    tracing::warn!(
                        error = %err,
                        "could not open mail client, address is on the clipboard"
                    );
                }
                Task::none()
            }
            Message::Frame(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    fn log_load_progress(&self) {
        let loaded = self.artworks.loaded_count();
        let failed = self.artworks.failed_count();
        if loaded + failed == self.gallery.len() {
            tracing::info!(loaded, failed, "all artwork settled");
        }
    }

    fn carousel_mounted(&self) -> bool {
        self.config.carousel.enabled
    }

    /// The lightbox key listener exists exactly while the lightbox is open
    fn keyboard_listener_active(&self) -> bool {
        self.lightbox.keyboard_listeners() == 1
    }

    fn is_animating(&self) -> bool {
        self.carousel.is_transitioning(self.now) || self.reveals.is_animating(self.now)
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self.carousel_mounted() {
            subscriptions.push(time::every(self.carousel.delay()).map(|_| Message::CarouselTick));
        }

        if self.keyboard_listener_active() {
            subscriptions.push(keyboard::on_key_press(lightbox_key));
        }

        if self.is_animating() {
            subscriptions.push(window::frames().map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let page = scrollable(ui::page::view(self))
            .id(page_id())
            .width(Length::Fill)
            .height(Length::Fill);

        let base = container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(ui::style::paper);

        let mut layers: Vec<Element<Message>> = vec![base.into()];
        if let Some(index) = self.lightbox.open_index() {
            layers.push(ui::lightbox::view(self, index));
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Only the three lightbox keys are forwarded
fn lightbox_key(key: Key, _modifiers: Modifiers) -> Option<Message> {
    state::lightbox::key_to_event(&key).map(|_| Message::KeyPressed(key))
}

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = config::load_or_default();
    let gallery = state::catalog::builtin(&config.site.art_dir)?;

    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .theme(Portfolio::theme)
        .subscription(Portfolio::subscription)
        .centered()
        .run_with(move || Portfolio::new(config, gallery))?;

    Ok(())
}
