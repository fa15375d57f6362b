use std::{
    cell::RefCell,
    rc::Rc,
    sync::atomic::{AtomicUsize, Ordering},
};

use lazy_static::lazy_static;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::{
    toggle::{self, ClickOutcome},
    util::ElementEvent,
    LikeConfig, LikeError, Result,
};

/// Called with the like button and its new liked state after every toggle.
pub type ToggleCallback = Rc<dyn Fn(&Element, Option<bool>)>;

lazy_static! {
    static ref INCREMENT: AtomicUsize = AtomicUsize::new(1);
}

thread_local! {
    static LISTENERS: RefCell<Registry<HtmlElement, ElementEvent>> =
        RefCell::new(Registry::default());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

impl ListenerId {
    fn unset() -> Self {
        Self(0)
    }

    pub fn is_registered(&self) -> bool {
        LISTENERS.with(|listeners| listeners.borrow().contains(*self))
    }
}

struct Entry<R, S> {
    listener_id: ListenerId,
    root: R,

    _subscription: S,
}

/// Roots we're listening on, along with whatever keeps their subscription alive.
pub(crate) struct Registry<R, S> {
    entries: Vec<Entry<R, S>>,
}

impl<R, S> Default for Registry<R, S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<R: PartialEq, S> Registry<R, S> {
    /// `subscribe` is only called once we know the root isn't already registered.
    pub fn insert(
        &mut self,
        root: R,
        subscribe: impl FnOnce() -> Result<S, LikeError>,
    ) -> Result<ListenerId, LikeError> {
        if self.entries.iter().any(|v| v.root == root) {
            return Err(LikeError::AlreadyRegistered);
        }

        let listener_id = ListenerId(INCREMENT.fetch_add(1, Ordering::Relaxed));

        self.entries.push(Entry {
            listener_id,
            root,
            _subscription: subscribe()?,
        });

        Ok(listener_id)
    }

    /// Drops the subscription. Returns false if the id wasn't registered.
    pub fn remove(&mut self, listener_id: ListenerId) -> bool {
        if let Some(index) = self.entries.iter().position(|v| v.listener_id == listener_id) {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, listener_id: ListenerId) -> bool {
        self.entries.iter().any(|v| v.listener_id == listener_id)
    }
}

pub(crate) fn resolve_root<R>(
    root: Option<R>,
    body: impl FnOnce() -> Option<R>,
) -> Result<R, LikeError> {
    match root {
        Some(v) => Ok(v),
        None => body().ok_or(LikeError::MissingRoot),
    }
}

/// What the click closure does with a handled click.
pub(crate) fn deliver<N>(
    outcome: Result<ClickOutcome<N>>,
    on_toggle: Option<&dyn Fn(&N, Option<bool>)>,
) {
    match outcome {
        Ok(outcome) => {
            if let (ClickOutcome::Toggled { button, .. }, Some(on_toggle)) = (&outcome, on_toggle) {
                on_toggle(button, outcome.liked());
            }
        }

        // Best effort. Never throw into the page.
        Err(e) => log::error!("Unable to toggle like: {e:?}"),
    }
}

/// Keeps the like listener active until we're dropped.
#[must_use = "the listener is removed when the handle is dropped"]
pub struct ListenerHandle(ListenerId);

impl ListenerHandle {
    /// A handle that isn't attached to anything. Useful as a placeholder until `register` runs.
    pub fn unset() -> Self {
        Self(ListenerId::unset())
    }

    pub fn id(&self) -> ListenerId {
        self.0
    }

    /// Leaves the listener registered for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Default for ListenerHandle {
    fn default() -> Self {
        Self::unset()
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        // Removing the entry drops its ElementEvent which detaches the click callback.
        let removed = LISTENERS.with(|listeners| listeners.borrow_mut().remove(self.0));

        if removed {
            log::debug!("Dropping Like Handle {:?}", self.0);
        }
    }
}

/// Listens for clicks on like buttons anywhere inside `root` (the document body if `None`).
///
/// Should be called AFTER the root element exists. Buttons added later are handled as well.
pub fn register(
    root: Option<HtmlElement>,
    config: LikeConfig,
    on_toggle: Option<ToggleCallback>,
) -> Result<ListenerHandle, LikeError> {
    config.validate()?;

    let root = resolve_root(root, || gloo_utils::document().body())?;

    let listener_id = LISTENERS.with(|listeners| {
        listeners.borrow_mut().insert(root.clone(), || {
            let root_element: Element = root.clone().unchecked_into();

            let function: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |event: MouseEvent| {
                deliver(
                    toggle::handle_click(&event, Some(&root_element), &config),
                    on_toggle.as_deref(),
                );
            });

            Ok(ElementEvent::link(root.clone().unchecked_into(), "click", function)?)
        })
    })?;

    log::debug!("Registered Like Listener {listener_id:?}");

    Ok(ListenerHandle(listener_id))
}

pub fn register_on_body(config: LikeConfig) -> Result<ListenerHandle, LikeError> {
    register(None, config, None)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::node::test_tree::TestNode;

    /// Stands in for an attached event listener.
    struct Subscription(Rc<Cell<bool>>);

    impl Drop for Subscription {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    fn subscribe(attached: &Rc<Cell<bool>>) -> impl FnOnce() -> Result<Subscription, LikeError> {
        let attached = attached.clone();

        move || {
            attached.set(true);
            Ok(Subscription(attached))
        }
    }

    #[test]
    fn unset_handle_is_inert() {
        let handle = ListenerHandle::default();

        assert_eq!(handle.id(), ListenerId::unset());
        assert!(!handle.id().is_registered());

        drop(handle);
    }

    #[test]
    fn same_root_twice_is_rejected() {
        let mut registry = Registry::default();
        let body = TestNode::new("");
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));

        let id = registry.insert(body.clone(), subscribe(&first)).unwrap();

        assert!(matches!(
            registry.insert(body, subscribe(&second)),
            Err(LikeError::AlreadyRegistered)
        ));
        // Never subscribed the duplicate.
        assert!(!second.get());
        assert!(first.get());
        assert!(registry.contains(id));
    }

    #[test]
    fn different_roots_get_different_ids() {
        let mut registry = Registry::default();
        let attached = Rc::new(Cell::new(false));

        let a = registry.insert(TestNode::new(""), subscribe(&attached)).unwrap();
        let b = registry.insert(TestNode::new(""), subscribe(&attached)).unwrap();

        assert_ne!(a, b);
        assert_ne!(a, ListenerId::unset());
    }

    #[test]
    fn removing_detaches_the_subscription() {
        let mut registry = Registry::default();
        let body = TestNode::new("");
        let attached = Rc::new(Cell::new(false));

        let id = registry.insert(body.clone(), subscribe(&attached)).unwrap();

        assert!(attached.get());
        assert!(registry.remove(id));
        assert!(!attached.get());
        assert!(!registry.contains(id));
        assert!(!registry.remove(id));

        // The root can be listened on again afterwards.
        assert!(registry.insert(body, subscribe(&attached)).is_ok());
        assert!(attached.get());
    }

    #[test]
    fn failed_subscription_is_not_registered() {
        let mut registry: Registry<TestNode, Subscription> = Registry::default();
        let body = TestNode::new("");

        let result = registry.insert(body.clone(), || Err(LikeError::Dom("no listener".into())));

        assert!(matches!(result, Err(LikeError::Dom(_))));
        assert!(registry.insert(body, subscribe(&Rc::new(Cell::new(false)))).is_ok());
    }

    #[test]
    fn missing_body_is_an_error() {
        assert!(matches!(
            resolve_root::<TestNode>(None, || None),
            Err(LikeError::MissingRoot)
        ));

        let body = TestNode::new("");
        let given = TestNode::new("");

        assert_eq!(resolve_root(None, || Some(body.clone())).unwrap(), body);
        assert_eq!(resolve_root(Some(given.clone()), || Some(body)).unwrap(), given);
    }

    #[test]
    fn toggle_callback_gets_button_and_liked_state() {
        let body = TestNode::new("");
        let button = body.append("btn like-btn");
        button.append("fa-star far");

        let calls = RefCell::new(Vec::new());
        let on_toggle: &dyn Fn(&TestNode, Option<bool>) =
            &|button, liked| calls.borrow_mut().push((button.clone(), liked));

        let config = LikeConfig::default();
        let click = |target: &TestNode| {
            deliver(
                toggle::dispatch_click(target.clone(), Some(&body), &config, || {}),
                Some(on_toggle),
            )
        };

        click(&button);
        click(&button);
        // Ignored clicks never reach the callback.
        click(&body);

        assert_eq!(
            calls.into_inner(),
            vec![(button.clone(), Some(true)), (button, Some(false))]
        );
    }
}
