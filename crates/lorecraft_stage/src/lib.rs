//! LoreCraft Stage
//!
//! The landing page's choreography, built on `lorecraft_animation`: a
//! two-sided card flip, the playful card entrance, the image slideshow, the
//! typewriter, the showcase buttons, and the screens and menus that compose
//! them.
//!
//! Every component follows the same shape. It owns ids into a shared
//! [`AnimationScheduler`](lorecraft_animation::AnimationScheduler), starts
//! runs on it, and reacts to completed runs when handed a [`Frame`]. Events
//! collect in an outbox drained by the host.
//!
//! ```rust
//! use lorecraft_animation::AnimationScheduler;
//! use lorecraft_stage::{run_for, CardFlip, CardFlipConfig, FlipCommand, FlipEvent, Side};
//!
//! let mut scheduler = AnimationScheduler::new();
//! let mut card = CardFlip::new(&mut scheduler, CardFlipConfig::new(600.0)).unwrap();
//!
//! card.flip(&mut scheduler);
//! run_for(&mut scheduler, &mut card, 16.0, 800.0);
//!
//! assert_eq!(card.side(), Side::B);
//! assert_eq!(card.drain_events().last(), Some(FlipEvent::End(Side::B)));
//! ```

pub mod card_flip;
pub mod fade_in_image;
pub mod frame;
pub mod home;
pub mod navigation;
pub mod playful_card;
pub mod screen;
pub mod showcase;
pub mod side_menu;
pub mod slideshow;
pub mod storage;
pub mod theme_buttons;
pub mod typewriter;

pub use card_flip::{CardFlip, CardFlipConfig, FaceTransform, FlipAxis, FlipCommand, FlipEvent, Side};
pub use fade_in_image::FadeInImage;
pub use frame::{run_for, Frame, Sequencer};
pub use home::{HomeEvent, HomeFlags, HomeScreen};
pub use navigation::{Navigator, StackNavigator};
pub use playful_card::{PlayfulCard, PlayfulEvent};
pub use screen::AnimatedScreen;
pub use showcase::{ShowcaseButton, ShowcaseEvent, ShowcaseKind, ShowcaseLink, ShowcasePose};
pub use side_menu::{MenuCommand, SideMenu};
pub use slideshow::{Slideshow, SlideshowEvent, SlotView};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme_buttons::{NavButton, ThemeButtons, ThemeButtonsEvent};
pub use typewriter::{Glyph, Span, TextKind, Typewriter, TypewriterConfig, TypewriterEvent};
