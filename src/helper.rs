use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::node::LikeNode;

/// Walks from `node` up through its parents looking for `class`, stopping before `root`.
///
/// Mirrors delegated dispatch: the element we're listening on never matches itself.
pub fn closest_with_class<N: LikeNode>(node: N, class: &str, root: Option<&N>) -> Option<N> {
    let mut current = Some(node);

    while let Some(element) = current {
        if root == Some(&element) {
            return None;
        }

        if element.has_class(class) {
            return Some(element);
        }

        current = element.parent();
    }

    None
}

pub trait TargetCast
where
    Self: AsRef<Event>,
{
    #[inline]
    fn target_dyn_into<T>(&self) -> Option<T>
    where
        T: AsRef<EventTarget> + JsCast,
    {
        self.as_ref()
            .target()
            .and_then(|target| target.dyn_into().ok())
    }
}

impl<E: AsRef<Event>> TargetCast for E {}
