// SPDX-License-Identifier: MPL-2.0
//! Layered toast notification system.
//!
//! Toasts are transient, non-blocking banners shown over whatever
//! surface is currently on top: the main screen, a modally-presented
//! screen, or a bottom sheet. Each surface mounts its own [`Host`] (a
//! single-slot state machine with entrance/exit animation and an
//! auto-hide timer) and the [`Hub`] routes `show`/`hide` commands to the
//! most-recently-mounted surface *at delivery time*, which is what lets
//! a delayed `show` land on a modal that had not finished opening when
//! the command was issued.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` builder and the request vocabulary
//! - [`host`] - per-surface state machine and animation progress
//! - [`router`] - surface registration table ("which host is on top?")
//! - [`hub`] - public `show`/`hide` command API and delayed delivery
//! - [`widget`] - pure render projection of a host's state
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::toast::{Hub, HostDefaults, SurfaceId, ToastRequest};
//!
//! let mut hub = Hub::new(HostDefaults::default());
//! hub.mount(SurfaceId::new("main"));
//!
//! hub.show(
//!     ToastRequest::new("Saved.").with_secondary_text("Tap to open the file."),
//!     std::time::Instant::now(),
//! );
//!
//! // In the application view, render each surface's layer:
//! // Toast::view_layer(hub.host(surface)?, surface, offset)
//! ```

mod host;
mod hub;
mod request;
mod router;
mod widget;

pub use host::{ActiveToast, Host, HostDefaults, Phase, ENTER_EXIT_ANIMATION};
pub use hub::Hub;
pub use request::{PressHandler, ToastKind, ToastPosition, ToastRequest};
pub use router::{Router, SurfaceId};
pub use widget::{Event, Toast};
