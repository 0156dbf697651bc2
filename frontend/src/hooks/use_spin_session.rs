use std::cell::{Ref, RefCell};
use std::rc::Rc;

use shared::spin_api::SpinResponse;
use shared::spin_upgrade::Multiplier;
use shared::{
    DismissOutcome, PrizeItem, SessionTick, SpinError, SpinGeometry, SpinOutcome, SpinSession, StartedSpin,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns one spin surface: the session plus the animation-frame loop that ticks it.
#[derive(Clone)]
pub struct SpinController {
    session: Rc<RefCell<SpinSession>>,
    frame: FrameSlot,
    redraw: UseForceUpdateHandle,
    on_reveal: Callback<PrizeItem>,
}

impl SpinController {
    pub fn session(&self) -> Ref<'_, SpinSession> {
        self.session.borrow()
    }

    pub fn can_spin(&self) -> bool {
        self.session.borrow().can_spin()
    }

    pub fn set_candidates(&self, items: Vec<PrizeItem>) {
        self.session.borrow_mut().set_candidates(items);
        self.redraw.force_update();
    }

    pub fn set_geometry(&self, geometry: SpinGeometry) {
        if self.session.borrow_mut().set_geometry(geometry).is_ok() {
            self.redraw.force_update();
        }
    }

    /// Starts a strip or wheel spin from the backend reply.
    pub fn begin_from_response(&self, reply: Result<SpinResponse, SpinError>) -> Result<StartedSpin, SpinError> {
        let mut rng = rand::thread_rng();
        let started = self
            .session
            .borrow_mut()
            .begin_from_response(reply, &mut rng, js_sys::Date::now());
        self.after_begin(started)
    }

    /// Starts an upgrade spin; the wheel follows the multiplier that was sent.
    pub fn begin_upgrade(
        &self,
        multiplier: Multiplier,
        reply: Result<SpinOutcome, SpinError>,
    ) -> Result<StartedSpin, SpinError> {
        let mut rng = rand::thread_rng();
        let started = self
            .session
            .borrow_mut()
            .begin_upgrade(multiplier, reply, &mut rng, js_sys::Date::now());
        self.after_begin(started)
    }

    fn after_begin(&self, started: Result<StartedSpin, SpinError>) -> Result<StartedSpin, SpinError> {
        if started.is_ok() {
            self.run_frames();
            self.redraw.force_update();
        }
        started
    }

    pub fn dismiss(&self) -> DismissOutcome {
        let outcome = self.session.borrow_mut().dismiss();
        self.redraw.force_update();
        outcome
    }

    fn run_frames(&self) {
        // Two handles to the same slot: one moves into the closure so it can
        // schedule itself again, the other kicks off the first frame.
        let f = self.frame.clone();
        let g = self.frame.clone();
        let session = self.session.clone();
        let redraw = self.redraw.clone();
        let on_reveal = self.on_reveal.clone();

        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // Wall clock, so a throttled tab still finishes on time.
            let tick = session.borrow_mut().tick(js_sys::Date::now());
            redraw.force_update();
            match tick {
                SessionTick::Animating(_) => request_frame(&f),
                // Loop stops here; the closure stays in the slot until the next spin replaces it.
                SessionTick::Revealed(item) => on_reveal.emit(item),
                SessionTick::Idle => {}
            }
        }) as Box<dyn FnMut()>));

        request_frame(&g);
    }
}

fn request_frame(slot: &FrameSlot) {
    if let (Some(window), Some(callback)) = (web_sys::window(), slot.borrow().as_ref()) {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

#[hook]
pub fn use_spin_session(geometry: SpinGeometry, on_reveal: Callback<PrizeItem>) -> SpinController {
    let session = use_mut_ref(|| SpinSession::new(geometry));
    let frame: FrameSlot = use_mut_ref(|| None);
    let redraw = use_force_update();

    SpinController {
        session,
        frame,
        redraw,
        on_reveal,
    }
}
