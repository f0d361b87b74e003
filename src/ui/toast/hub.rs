// SPDX-License-Identifier: MPL-2.0
//! The toast command API.
//!
//! The hub owns the router, one host per mounted surface, and the
//! pending delayed deliveries. `show` and `hide` resolve their target
//! host at *delivery* time: a delayed request issued while a modal is
//! still opening lands on the modal's host once the modal has mounted.

use super::host::{Host, HostDefaults};
use super::request::ToastRequest;
use super::router::{Router, SurfaceId};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug)]
struct PendingShow {
    deliver_at: Instant,
    request: ToastRequest,
}

#[derive(Debug)]
pub struct Hub {
    router: Router,
    hosts: HashMap<SurfaceId, Host>,
    pending: Vec<PendingShow>,
    defaults: HostDefaults,
}

impl Hub {
    #[must_use]
    pub fn new(defaults: HostDefaults) -> Self {
        Self {
            router: Router::new(),
            hosts: HashMap::new(),
            pending: Vec::new(),
            defaults,
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &HostDefaults {
        &self.defaults
    }

    /// Mounts a host for `surface` and makes it the current delivery
    /// target.
    pub fn mount(&mut self, surface: SurfaceId) {
        self.hosts.insert(surface, Host::new());
        self.router.register(surface);
    }

    /// Unregisters `surface` and drops its host. Must be called in the
    /// same update that dismisses the surface, so no pending delivery
    /// can target a torn-down host.
    pub fn unmount(&mut self, surface: SurfaceId) {
        self.router.unregister(surface);
        self.hosts.remove(&surface);
    }

    /// Shows `request` on the current host, or parks it until its delay
    /// elapses. A request with no registered host at delivery time is
    /// dropped silently.
    ///
    /// A later `show` does not cancel an earlier delayed one; each
    /// delivery replaces the host's single slot, so the last delivered
    /// request wins.
    pub fn show(&mut self, request: ToastRequest, now: Instant) {
        match request.delay() {
            Some(delay) if !delay.is_zero() => {
                self.pending.push(PendingShow {
                    deliver_at: now + delay,
                    request,
                });
            }
            _ => self.deliver(request, now),
        }
    }

    /// Hides whatever the current host is showing. No-op when nothing is
    /// visible.
    pub fn hide(&mut self, now: Instant) {
        if let Some(host) = self.current_host_mut() {
            host.hide(now);
        }
    }

    /// Dismisses the toast on a specific surface (the close affordance
    /// on a rendered toast).
    pub fn dismiss(&mut self, surface: SurfaceId, now: Instant) {
        if let Some(host) = self.hosts.get_mut(&surface) {
            host.hide(now);
        }
    }

    /// Invokes the press action of the toast visible on `surface`.
    pub fn press(&self, surface: SurfaceId) {
        if let Some(host) = self.hosts.get(&surface) {
            host.press();
        }
    }

    /// Delivers due pending requests, then advances every host's
    /// time-driven transitions.
    pub fn tick(&mut self, now: Instant) {
        if !self.pending.is_empty() {
            let mut still_pending = Vec::with_capacity(self.pending.len());
            let mut due = Vec::new();
            for show in self.pending.drain(..) {
                if show.deliver_at <= now {
                    due.push(show);
                } else {
                    still_pending.push(show);
                }
            }
            self.pending = still_pending;
            for show in due {
                self.deliver(show.request, now);
            }
        }

        for host in self.hosts.values_mut() {
            host.tick(now);
        }
    }

    fn deliver(&mut self, request: ToastRequest, now: Instant) {
        let Some(surface) = self.router.current() else {
            return;
        };
        // A registration without a live host never targets a torn-down
        // surface; the request is dropped instead.
        let Some(host) = self.hosts.get_mut(&surface) else {
            return;
        };
        host.show(request, &self.defaults, now);
    }

    fn current_host_mut(&mut self) -> Option<&mut Host> {
        let surface = self.router.current()?;
        self.hosts.get_mut(&surface)
    }

    #[must_use]
    pub fn host(&self, surface: SurfaceId) -> Option<&Host> {
        self.hosts.get(&surface)
    }

    #[must_use]
    pub fn current_surface(&self) -> Option<SurfaceId> {
        self.router.current()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// True while any host is running its entrance or exit animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.hosts.values().any(Host::is_animating)
    }

    /// True while any host shows a toast or a delayed request is parked.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        !self.pending.is_empty() || self.hosts.values().any(|host| !host.is_idle())
    }
}
