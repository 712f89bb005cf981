//! Core types for the folio terminal portfolio.
//!
//! Everything in this crate is free of terminal and host I/O: host signals,
//! the reduced-motion preference and the clock are passed in explicitly so
//! the behaviour can be exercised from tests.

pub mod contact;
pub mod content;
pub mod device;
pub mod motion;
pub mod nav;
pub mod notice;
pub mod theme;
pub mod timer;
pub mod typing;

pub use contact::{ContactForm, ContactMessage, Delivery, DeliveryError, Field, FormError, FormState};
pub use device::{DeviceTier, HostSignals, estimate, particle_budget};
pub use motion::MotionGate;
pub use nav::{Section, SectionSpan, SeenSections, active_section};
pub use notice::{Notice, NoticeKind, Notices};
pub use theme::ColorTheme;
pub use timer::Interval;
pub use typing::{TextRevealer, TypingEffect};
