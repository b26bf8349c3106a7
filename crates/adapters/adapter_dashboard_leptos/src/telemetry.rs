//! Page-scoped wiring of the live dashboard controller.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use sensordash_app::telemetry_controller::{DashboardVariant, TelemetryController};
use sensordash_domain::unit::TemperatureUnit;

use crate::sse::{self, SseConnection};
use crate::storage::LocalStoragePreferences;
use crate::view::SignalView;

type Controller = TelemetryController<LocalStoragePreferences, SignalView>;

/// Handle on the controller of the current page.
///
/// The controller and its stream live as long as the component that called
/// [`use_telemetry`]; unmounting it closes the stream.
#[derive(Clone, Copy)]
pub struct Telemetry {
    pub view: SignalView,
    controller: StoredValue<Rc<RefCell<Controller>>, LocalStorage>,
    connection: StoredValue<Option<SseConnection>, LocalStorage>,
}

impl Telemetry {
    /// Forward a unit selector change to the controller.
    pub fn set_unit(&self, unit: TemperatureUnit) {
        self.controller
            .with_value(|controller| controller.borrow_mut().on_unit_changed(unit));
    }

    /// Whether the browser accepted the stream subscription.
    pub fn is_live(&self) -> bool {
        self.connection.with_value(Option::is_some)
    }
}

/// Build the controller for `variant`, initialize it and subscribe it to the
/// reading stream.
pub fn use_telemetry(variant: DashboardVariant) -> Telemetry {
    let view = SignalView::new();
    let host = window().location().hostname().unwrap_or_default();

    let controller = Rc::new(RefCell::new(TelemetryController::new(
        LocalStoragePreferences,
        view,
        host,
        variant,
    )));
    controller.borrow_mut().initialize();

    let connection = sse::subscribe(Rc::clone(&controller));

    Telemetry {
        view,
        controller: StoredValue::new_local(controller),
        connection: StoredValue::new_local(connection),
    }
}
